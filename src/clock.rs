// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Wall-clock source used for generated timestamps and time-bucketed reports.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub type SharedClock = Arc<dyn Clock>;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always answers the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// RFC 3339, whole seconds, `Z` suffix.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_drop_subseconds() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 10, 20, 30).unwrap()
            + chrono::Duration::milliseconds(789);
        assert_eq!(format_timestamp(instant), "2024-03-01T10:20:30Z");
    }

    #[test]
    fn fixed_clock_never_moves() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 10, 20, 30).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn mock_clock_can_stand_in_for_the_trait() {
        let instant = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let mut clock = MockClock::new();
        clock.expect_now().times(1).return_const(instant);

        let shared: SharedClock = Arc::new(clock);
        assert_eq!(format_timestamp(shared.now()), "2030-01-01T00:00:00Z");
    }
}
