// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! REST API: application state, route table and handlers.

mod acks;
mod common;
mod dvo;
mod general;
mod reports;
mod requests;
mod rules;
mod upgrade_risks;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post, put};
use axum::{middleware, Router};
use serde_json::Value;
use tokio::sync::Notify;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use crate::acks::AckStore;
use crate::clock::SharedClock;
use crate::config::ServerConfig;
use crate::data::Tables;
use crate::error::AppError;
use crate::metrics::{track_metrics, Metrics};
use crate::model::Group;
use crate::storage::{FeedbackStore, MemoryStorage, OrgDirectory, PredictionStore, ReportStore, RuleToggleStore};

pub use self::general::build_info;

/// Everything a handler can reach. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub reports: Arc<dyn ReportStore>,
    pub orgs: Arc<dyn OrgDirectory>,
    pub predictions: Arc<dyn PredictionStore>,
    pub feedback: Arc<dyn FeedbackStore>,
    pub toggles: Arc<dyn RuleToggleStore>,
    pub tables: Arc<Tables>,
    pub acks: AckStore,
    pub groups: Arc<Vec<Group>>,
    pub content: Arc<Vec<Value>>,
    pub metrics: Metrics,
    pub clock: SharedClock,
    /// Fired by `PUT /exit`.
    pub shutdown: Arc<Notify>,
}

impl AppState {
    /// Wires every storage capability to the same in-memory backend and seeds
    /// the lookup tables and acknowledgements.
    pub fn new(
        storage: Arc<MemoryStorage>,
        groups: Vec<Group>,
        content: Vec<Value>,
        clock: SharedClock,
    ) -> Result<Self, AppError> {
        Ok(Self {
            reports: storage.clone(),
            orgs: storage.clone(),
            predictions: storage.clone(),
            feedback: storage.clone(),
            toggles: storage,
            tables: Arc::new(Tables::seeded()),
            acks: AckStore::seeded(clock.clone()),
            groups: Arc::new(groups),
            content: Arc::new(content),
            metrics: Metrics::new()?,
            clock,
            shutdown: Arc::new(Notify::new()),
        })
    }
}

fn api_routes(server: &ServerConfig) -> Router<AppState> {
    let mut routes = Router::new()
        .route("/", get(general::main_endpoint))
        .route("/info", get(general::info))
        .route("/groups", get(general::groups))
        .route("/content", get(general::content))
        .route("/metrics", get(general::metrics))
        .route("/organizations", get(reports::organizations))
        .route(
            "/organizations/:organization/clusters",
            get(reports::clusters_for_organization),
        )
        .route("/report/:id", get(reports::report_for_cluster))
        .route("/report/:id/:cluster", get(reports::report_for_org_and_cluster))
        .route(
            "/clusters",
            get(reports::reports_for_clusters).post(reports::reports_for_clusters),
        )
        .route("/clusters/:id", get(reports::reports_for_organization))
        .route("/clusters/:id/report", get(reports::report_for_cluster))
        .route("/cluster/:cluster/report", get(reports::report_for_cluster))
        .route("/clusters/:id/rules/:rule_id/like", put(rules::like))
        .route("/clusters/:id/rules/:rule_id/dislike", put(rules::dislike))
        .route("/clusters/:id/rules/:rule_id/reset_vote", put(rules::reset_vote))
        .route("/clusters/:id/rules/:rule_id/get_vote", get(rules::get_vote))
        .route("/clusters/:id/rules/:rule_id/disable", put(rules::disable))
        .route("/clusters/:id/rules/:rule_id/enable", put(rules::enable))
        .route("/rule/:selector/clusters_detail", get(rules::clusters_detail))
        .route("/rule/:selector/clusters_detail/", get(rules::clusters_detail))
        .route("/ack", get(acks::list).post(acks::acknowledge))
        .route(
            "/ack/:selector",
            get(acks::get).put(acks::update).delete(acks::delete),
        )
        .route(
            "/cluster/:cluster/requests",
            get(requests::list).post(requests::filter),
        )
        .route(
            "/cluster/:cluster/requests/",
            get(requests::list).post(requests::filter),
        )
        .route(
            "/cluster/:cluster/request/:request_id/status",
            get(requests::status),
        )
        .route(
            "/cluster/:cluster/request/:request_id/report",
            get(requests::report),
        )
        .route("/namespaces/dvo", get(dvo::all_namespaces))
        .route(
            "/cluster/:cluster/namespaces/dvo/:namespace",
            get(dvo::namespace_for_cluster),
        )
        .route(
            "/namespaces/dvo/:namespace/cluster/:cluster",
            get(dvo::cluster_for_namespace),
        )
        .route(
            "/cluster/:cluster/upgrade-risks-prediction",
            get(upgrade_risks::for_cluster),
        )
        .route("/upgrade-risks-prediction", post(upgrade_risks::for_clusters));

    if let Some(name) = server.api_spec_file.file_name().and_then(|name| name.to_str()) {
        routes = routes.route_service(&format!("/{name}"), ServeFile::new(&server.api_spec_file));
    }

    if server.debug {
        tracing::warn!("debug mode enabled, PUT /exit shuts the service down");
        routes = routes.route("/exit", put(general::exit));
    }

    routes
}

/// Full router: API routes under the configured prefix plus the
/// tracing, metrics and optional CORS layers.
pub fn router(state: AppState, server: &ServerConfig) -> Router {
    let api = api_routes(server).with_state(state.clone());

    let prefix = server.api_prefix.trim_end_matches('/');
    let mut app = if prefix.is_empty() {
        Router::new().merge(api)
    } else if prefix.starts_with('/') {
        Router::new().nest(prefix, api)
    } else {
        Router::new().nest(&format!("/{prefix}"), api)
    };
    tracing::info!(prefix = %server.api_prefix, "API routes mounted");

    app = app
        .layer(middleware::from_fn_with_state(state, track_metrics))
        .layer(TraceLayer::new_for_http());

    if server.enable_cors {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers(Any),
        );
    }

    app
}
