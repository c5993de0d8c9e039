// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Prometheus metrics for the REST API.
//!
//! Same metric names as the aggregator proper, so dashboards built against it
//! work with the mock too.

use std::sync::Arc;

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use tokio::time::Instant;

use crate::api::AppState;
use crate::error::AppError;

#[derive(Clone)]
pub struct Metrics {
    pub registry: Arc<Registry>,
    pub endpoint_requests: IntCounterVec,
    pub endpoint_response_time: HistogramVec,
    pub status_codes: IntCounterVec,
}

fn metric_error(error: prometheus::Error) -> AppError {
    AppError::Internal(anyhow::Error::new(error).context("unable to register metric"))
}

impl Metrics {
    pub fn new() -> Result<Self, AppError> {
        let registry = Registry::new();

        let endpoint_requests = IntCounterVec::new(
            Opts::new(
                "api_endpoints_requests",
                "The total number of requests per endpoint",
            ),
            &["endpoint"],
        )
        .map_err(metric_error)?;

        let endpoint_response_time = HistogramVec::new(
            HistogramOpts::new(
                "api_endpoints_response_time",
                "API endpoints response time in seconds",
            )
            .buckets(vec![
                0.001, 0.005, 0.010, 0.025, 0.050, 0.100, 0.250, 0.500, 1.0,
            ]),
            &["endpoint"],
        )
        .map_err(metric_error)?;

        let status_codes = IntCounterVec::new(
            Opts::new(
                "api_endpoints_status_codes",
                "Number of responses for each status code",
            ),
            &["status_code"],
        )
        .map_err(metric_error)?;

        registry
            .register(Box::new(endpoint_requests.clone()))
            .map_err(metric_error)?;
        registry
            .register(Box::new(endpoint_response_time.clone()))
            .map_err(metric_error)?;
        registry
            .register(Box::new(status_codes.clone()))
            .map_err(metric_error)?;

        Ok(Self {
            registry: Arc::new(registry),
            endpoint_requests,
            endpoint_response_time,
            status_codes,
        })
    }

    pub fn record(&self, endpoint: &str, status: u16, seconds: f64) {
        self.endpoint_requests.with_label_values(&[endpoint]).inc();
        self.endpoint_response_time
            .with_label_values(&[endpoint])
            .observe(seconds);
        self.status_codes
            .with_label_values(&[&status.to_string()])
            .inc();
    }

    /// Prometheus text exposition of everything recorded so far.
    pub fn export(&self) -> Result<String, AppError> {
        let mut text = String::new();
        TextEncoder::new()
            .encode_utf8(&self.registry.gather(), &mut text)
            .map_err(|error| AppError::Internal(anyhow::Error::new(error).context("unable to encode metrics")))?;
        Ok(text)
    }
}

/// Middleware recording one sample per request, labelled by route template.
pub async fn track_metrics(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let start = Instant::now();
    let response = next.run(request).await;

    state.metrics.record(
        &endpoint,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
