// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Deterministic mock of the cluster-analysis results aggregator REST API.
//!
//! Serves canned reports, rule hits, acknowledgements, DVO namespaces and
//! upgrade risk predictions so clients of the real aggregator can be tested
//! without a backend.

pub mod acks;
pub mod api;
pub mod clock;
pub mod config;
pub mod content;
pub mod data;
pub mod error;
pub mod groups;
pub mod metrics;
pub mod model;
pub mod response;
pub mod server;
pub mod storage;
pub mod validation;
