// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use aggregator_mock::api::{router, AppState};
use aggregator_mock::clock::{Clock, FixedClock, SharedClock};
use aggregator_mock::config::ServerConfig;
use aggregator_mock::content::load_content;
use aggregator_mock::groups::load_groups;
use aggregator_mock::storage::MemoryStorage;
use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};
use tokio_test::assert_ok;
use tower::ServiceExt;

const PREFIX: &str = "/api/insights-results-aggregator/v2";
const CLUSTER: &str = "34c3ecc5-624a-49a5-bab8-4fdc5e51a266";
const SECOND_CLUSTER: &str = "74ae54aa-6577-4e80-85e7-697cb646ff37";
const UNKNOWN_CLUSTER: &str = "abcdef00-0000-4000-8000-000000000000";
const ALLOWED_ORG: &str = "11789772";
const FORBIDDEN_ORG: &str = "11940171";
const FORBIDDEN_MESSAGE: &str = "You have no permissions to get or change info about this organization";
const NODES_RULE: &str =
    "ccx_rules_ocp.external.rules.nodes_requirements_check.report%7CNODES_MINIMUM_REQUIREMENTS_NOT_MET";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(name)
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 7, 0).unwrap()
}

/// Moves one minute forward on every read.
struct SteppingClock {
    minutes: AtomicI64,
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now() + chrono::Duration::minutes(self.minutes.fetch_add(1, Ordering::SeqCst))
    }
}

fn server_config(debug: bool) -> ServerConfig {
    ServerConfig {
        api_spec_file: fixture("openapi.json"),
        debug,
        ..ServerConfig::default()
    }
}

fn state_with(clock: SharedClock) -> AppState {
    let storage = MemoryStorage::load(&fixture("mock_data"), clock.clone()).unwrap();
    let groups = load_groups(&fixture("groups_config.yaml")).unwrap();
    let content = load_content(&fixture("content.json")).unwrap();
    AppState::new(Arc::new(storage), groups, content, clock).unwrap()
}

fn app() -> Router {
    router(state_with(Arc::new(FixedClock(fixed_now()))), &server_config(false))
}

async fn send(app: &Router, method: Method, path: &str, body: Option<Value>) -> (StatusCode, String, Bytes) {
    send_raw(app, method, path, body.map(|value| value.to_string())).await
}

async fn send_raw(app: &Router, method: Method, path: &str, body: Option<String>) -> (StatusCode, String, Bytes) {
    let mut builder = Request::builder().method(method).uri(format!("{PREFIX}{path}"));
    let body = match body {
        Some(raw) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(raw)
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string())
        .unwrap_or_default();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, bytes)
}

async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(app, Method::GET, path, None).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn main_endpoint_answers_ok_with_charset() {
    let (status, content_type, body) = send(&app(), Method::GET, "", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/json; charset=utf-8");
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!({"status": "ok"}));
}

#[tokio::test]
async fn info_groups_and_content_are_served() {
    let app = app();

    let (status, info) = get_json(&app, "/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["info"]["BuildVersion"], env!("CARGO_PKG_VERSION"));

    let (_, groups) = get_json(&app, "/groups").await;
    assert_eq!(groups["status"], "ok");
    assert_eq!(groups["groups"][0]["title"], "Fault Tolerance");

    let (_, content) = get_json(&app, "/content").await;
    assert_eq!(content["content"].as_array().unwrap().len(), 5);
    assert_eq!(content["groups"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn organizations_and_their_clusters() {
    let app = app();

    let (status, body) = get_json(&app, "/organizations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["organizations"], json!([11789772, 11940171]));

    let (status, body) = get_json(&app, &format!("/organizations/{ALLOWED_ORG}/clusters")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["clusters"].as_array().unwrap().contains(&json!(CLUSTER)));
}

#[tokio::test]
async fn forbidden_organization_is_rejected_every_time() {
    let app = app();

    for _ in 0..2 {
        let (status, body) = get_json(&app, &format!("/organizations/{FORBIDDEN_ORG}/clusters")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({"status": FORBIDDEN_MESSAGE}));
    }
}

#[tokio::test]
async fn malformed_organization_is_bad_request() {
    let app = app();

    for org in ["abc", "0", "-1", "+11789772"] {
        let (status, _) = get_json(&app, &format!("/organizations/{org}/clusters")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "organization {org}");
    }
}

#[tokio::test]
async fn report_is_written_verbatim() {
    let app = app();
    let stored = std::fs::read(fixture(&format!("mock_data/report_{CLUSTER}.json"))).unwrap();

    for path in [
        format!("/report/{CLUSTER}"),
        format!("/clusters/{CLUSTER}/report"),
        format!("/cluster/{CLUSTER}/report"),
    ] {
        let (status, content_type, body) = send(&app, Method::GET, &path, None).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(content_type, "application/json; charset=utf-8");
        assert_eq!(body.as_ref(), stored.as_slice());
    }
}

#[tokio::test]
async fn report_without_rule_hits_is_still_found() {
    let app = app();
    let cluster = "eeeeeeee-eeee-eeee-eeee-000000000001";

    let (status, body) = get_json(&app, &format!("/report/{cluster}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["report"]["meta"]["count"], 0);
    assert_eq!(body["report"]["data"], json!([]));
}

#[tokio::test]
async fn report_lookup_failures() {
    let app = app();

    let (status, body) = get_json(&app, &format!("/report/{UNKNOWN_CLUSTER}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["status"].as_str().unwrap().contains(UNKNOWN_CLUSTER));

    let (status, body) = get_json(&app, "/report/not-a-cluster").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["status"].as_str().unwrap().contains("invalid UUID format"));
}

#[tokio::test]
async fn failure_injection_prefix_sets_status_without_body() {
    let app = app();

    let (status, _, body) = send(&app, Method::GET, "/cluster/ffffffff-ffff-ffff-ffff-000000000404/report", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, _, body) = send(&app, Method::GET, "/report/ffffffff-ffff-ffff-ffff-000000000503", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.is_empty());

    let (status, body) = get_json(&app, "/report/ffffffff-ffff-ffff-ffff-000000000100").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["status"].as_str().unwrap().contains("100"));
}

#[tokio::test]
async fn changing_cluster_resolves_within_bucket() {
    let app = app();
    let stored = std::fs::read(fixture(&format!("mock_data/report_{CLUSTER}.json"))).unwrap();

    // minute 7 falls into the first bucket
    for _ in 0..2 {
        let (status, _, body) = send(&app, Method::GET, "/report/cccccccc-cccc-cccc-cccc-000000000001", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_ref(), stored.as_slice());
    }
}

#[tokio::test]
async fn report_for_organization_and_cluster() {
    let app = app();

    let (status, _, _) = send(&app, Method::GET, &format!("/report/{ALLOWED_ORG}/{CLUSTER}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get_json(&app, &format!("/report/{FORBIDDEN_ORG}/{CLUSTER}")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["status"], FORBIDDEN_MESSAGE);

    let (status, _) = get_json(&app, &format!("/report/{ALLOWED_ORG}/{UNKNOWN_CLUSTER}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_json(&app, &format!("/report/xyz/{CLUSTER}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn batch_of_reports_collects_failures() {
    let app = app();
    let request = json!({"clusters": [CLUSTER, SECOND_CLUSTER, UNKNOWN_CLUSTER]});

    let (status, _, body) = send(&app, Method::POST, "/clusters", Some(request)).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["clusters"], json!([CLUSTER, SECOND_CLUSTER]));
    assert_eq!(body["errors"], json!([UNKNOWN_CLUSTER]));
    assert_eq!(body["reports"].as_object().unwrap().len(), 2);
    assert_eq!(body["reports"][CLUSTER]["status"], "ok");
    assert_eq!(body["generated_at"], "2024-05-01T12:07:00Z");
}

#[tokio::test]
async fn batch_of_reports_needs_a_body() {
    let (status, _, _) = send(&app(), Method::POST, "/clusters", Some(json!({"foo": 1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reports_for_organization() {
    let app = app();

    let (status, body) = get_json(&app, &format!("/clusters/{ALLOWED_ORG}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clusters"].as_array().unwrap().len(), 5);
    assert!(body["errors"].as_array().unwrap().is_empty());

    let (status, _) = get_json(&app, &format!("/clusters/{FORBIDDEN_ORG}")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn clusters_hitting_rule() {
    let app = app();

    for suffix in ["/", ""] {
        let (status, body) = get_json(&app, &format!("/rule/{NODES_RULE}/clusters_detail{suffix}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meta"]["count"], 24);
        assert_eq!(body["meta"]["error_key"], "NODES_MINIMUM_REQUIREMENTS_NOT_MET");
        assert!(body["data"]
            .as_array()
            .unwrap()
            .contains(&json!("00000001-624a-49a5-bab8-4fdc5e51a266")));
    }

    let (status, _) = get_json(&app, "/rule/no_pipe_here/clusters_detail/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn acknowledgement_lifecycle() {
    let clock: SharedClock = Arc::new(SteppingClock {
        minutes: AtomicI64::new(0),
    });
    let app = router(state_with(clock), &server_config(false));
    let selector = "ccx_rules_ocp.external.rules.image_registry_pv_not_bound%7CIMAGE_REGISTRY_PV_NOT_BOUND";
    let rule = "ccx_rules_ocp.external.rules.image_registry_pv_not_bound|IMAGE_REGISTRY_PV_NOT_BOUND";

    let (_, before) = get_json(&app, "/ack").await;
    assert_eq!(before["meta"]["count"], 5);

    let request = json!({"rule_id": rule, "justification": "known issue"});
    let (status, _, body) = send(&app, Method::POST, "/ack", Some(request.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(created["rule"], rule);
    assert!(created.get("acknowledged").is_none());

    let (status, _, _) = send(&app, Method::POST, "/ack", Some(request)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, fetched) = get_json(&app, &format!("/ack/{selector}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["justification"], "known issue");
    assert_eq!(fetched["rule"], rule);

    let update = json!({"justification": "fixed upstream"});
    let (status, _, body) = send(&app, Method::PUT, &format!("/ack/{selector}"), Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    let updated: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated["justification"], "fixed upstream");
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_ne!(updated["updated_at"], created["updated_at"]);

    let (status, _, body) = send(&app, Method::DELETE, &format!("/ack/{selector}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _, _) = send(&app, Method::DELETE, &format!("/ack/{selector}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // reading a deleted acknowledgement brings back a default one
    let (status, recreated) = get_json(&app, &format!("/ack/{selector}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recreated["justification"], "?");
    assert_ne!(recreated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn acknowledgement_input_errors() {
    let app = app();

    let (status, _, _) = send(&app, Method::POST, "/ack", Some(json!({"rule_id": "no-pipe"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(&app, "/ack/bad%7Cselector%7Cshape").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = send(&app, Method::PUT, "/ack/no-pipe", Some(json!({"justification": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = send(&app, Method::DELETE, "/ack/bad%7Cselector%7Cshape", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get_json(&app, "/ack/never.seen%7CKEY").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["justification"], "?");

    let (status, _, body) = send(&app, Method::PUT, "/ack/unknown.rule%7CKEY", Some(json!({"justification": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "rule not found -> justification can not be changed");
}

#[tokio::test]
async fn malformed_justification_leaves_acknowledgement_untouched() {
    let app = app();
    let selector = "some.rule.module%7CSOME_KEY";

    let (status, _, _) = send(
        &app,
        Method::POST,
        "/ack",
        Some(json!({"rule_id": "some.rule.module|SOME_KEY", "justification": "first"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _, body) = send_raw(&app, Method::PUT, &format!("/ack/{selector}"), Some("{\"justification\":".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert!(body["status"].is_string());

    let (status, stored) = get_json(&app, &format!("/ack/{selector}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["justification"], "first");
}

#[tokio::test]
async fn request_ids_of_cluster() {
    let app = app();

    let (status, body) = get_json(&app, &format!("/cluster/{CLUSTER}/requests/")).await;
    assert_eq!(status, StatusCode::OK);
    let requests = body["requests"].as_array().unwrap();
    assert_eq!(requests.len(), 12);
    assert_eq!(requests[0]["requestID"], "3nl2vda87ld6e3s25jlk7n2dna");
    assert_eq!(requests[0]["valid"], true);

    let (status, body) = get_json(&app, "/cluster/eeeeeeee-eeee-eeee-eeee-000000000001/requests").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["requests"].as_array().unwrap().is_empty());

    let (status, _) = get_json(&app, &format!("/cluster/{UNKNOWN_CLUSTER}/requests/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn selected_request_ids() {
    let app = app();
    let path = format!("/cluster/{CLUSTER}/requests/");

    let wanted = json!(["18njbjudvkc521w8buicx2clri", "1duzaoao0l1b230ipv0rb4sqe8"]);
    let (status, _, body) = send(&app, Method::POST, &path, Some(wanted)).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["requests"].as_array().unwrap().len(), 1);
    assert_eq!(body["requests"][0]["requestID"], "18njbjudvkc521w8buicx2clri");

    let (status, _, _) = send(&app, Method::POST, &path, Some(json!(["not-alphanumeric"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn request_status_and_report() {
    let app = app();

    let (status, body) = get_json(&app, &format!("/cluster/{CLUSTER}/request/3nl2vda87ld6e3s25jlk7n2dna/status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "processed");

    let (_, body) = get_json(&app, &format!("/cluster/{CLUSTER}/request/zzzzzzzz/status")).await;
    assert_eq!(body["status"], "unknown");

    let (status, _) = get_json(&app, &format!("/cluster/{UNKNOWN_CLUSTER}/request/zzzzzzzz/status")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_json(&app, &format!("/cluster/{CLUSTER}/request/bad-id/status")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get_json(
        &app,
        "/cluster/34c3ecc5-624a-49a5-bab8-4fdc5e51a267/request/3nl2vda87ld6e3s25jlk7n2dna/report",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["report"].as_array().unwrap().len(), 2);

    let (_, body) = get_json(&app, &format!("/cluster/{CLUSTER}/request/3nl2vda87ld6e3s25jlk7n2dna/report")).await;
    assert_eq!(body["report"], Value::Null);
}

#[tokio::test]
async fn dvo_namespaces() {
    let app = app();

    let (status, body) = get_json(&app, "/namespaces/dvo").await;
    assert_eq!(status, StatusCode::OK);
    let workloads = body["workloads"].as_array().unwrap();
    assert_eq!(workloads.len(), 5);
    assert_eq!(workloads[0]["cluster"]["uuid"], CLUSTER);
    assert_eq!(workloads[0]["namespace"]["uuid"], "fbcbe2d3-e398-4b40-9d5e-4eb46fe8286f");

    let namespace = "e6ed9bb3-efc3-46a6-b3ae-3f1a6e59546c";
    for path in [
        format!("/cluster/{CLUSTER}/namespaces/dvo/{namespace}"),
        format!("/namespaces/dvo/{namespace}/cluster/{CLUSTER}"),
    ] {
        let (status, body) = get_json(&app, &path).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metadata"]["recommendations"], 2);
        assert_eq!(body["metadata"]["objects"], 2);
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
    }

    let (status, body) = get_json(&app, &format!("/cluster/{UNKNOWN_CLUSTER}/namespaces/dvo/{namespace}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], format!("DVO namespaces for cluster {UNKNOWN_CLUSTER} not found"));

    let (status, _) = get_json(&app, &format!("/cluster/bad/namespaces/dvo/{namespace}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upgrade_risks_special_clusters() {
    let app = app();
    let path = |cluster: &str| format!("/cluster/{cluster}/upgrade-risks-prediction");

    let (status, _, body) = send(&app, Method::GET, &path("6cab9726-c2be-438e-af11-db846a678abb"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    for cluster in ["c60ba611-6af4-4d62-9b9e-36344da5e7bc", "f0e7c4b3-2fd6-4c4a-9d1a-c7bc6b8e5d21"] {
        let (status, _) = get_json(&app, &path(cluster)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    let (status, _) = get_json(&app, &path("234ec1a1-4679-4122-aacb-f0ae9f9e1a56")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get_json(&app, &path("00000003-eeee-eeee-eeee-000000000001")).await;
    assert_eq!(status, StatusCode::OK);
    let recommendation = &body["upgrade_recommendation"];
    assert_eq!(recommendation["upgrade_recommended"], false);
    assert_eq!(recommendation["upgrade_risks_predictors"]["alerts"].as_array().unwrap().len(), 3);
    assert_eq!(
        recommendation["upgrade_risks_predictors"]["operator_conditions"].as_array().unwrap().len(),
        4
    );

    let (status, body) = get_json(&app, &path(CLUSTER)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["upgrade_recommendation"]["upgrade_recommended"], true);
    assert_eq!(body["meta"]["last_checked_at"], "2024-05-01T12:07:00Z");
}

#[tokio::test]
async fn upgrade_risks_for_many_clusters() {
    let app = app();
    let request = json!({"clusters": [
        CLUSTER,
        "6cab9726-c2be-438e-af11-db846a678abb",
        "234ec1a1-4679-4122-aacb-f0ae9f9e1a56",
    ]});

    let (status, _, body) = send(&app, Method::POST, "/upgrade-risks-prediction", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    let predictions = body["predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 2);
    assert_eq!(predictions[0]["cluster_id"], CLUSTER);
    assert_eq!(predictions[0]["prediction_status"], "ok");
    assert_eq!(predictions[1]["prediction_status"], "No data for the cluster");

    let (status, _, _) = send(
        &app,
        Method::POST,
        "/upgrade-risks-prediction",
        Some(json!({"clusters": ["not-a-uuid"]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn votes_and_toggles_are_accepted() {
    let app = app();
    let rule = "ccx_rules_ocp.external.rules.nodes_kubelet_version_check.report";

    for action in ["like", "dislike", "reset_vote", "disable", "enable"] {
        let (status, _, body) = send(&app, Method::PUT, &format!("/clusters/{CLUSTER}/rules/{rule}/{action}"), None).await;
        assert_eq!(status, StatusCode::OK, "{action}");
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!({"status": "ok"}));
    }

    let (status, body) = get_json(&app, &format!("/clusters/{CLUSTER}/rules/{rule}/get_vote")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vote"], 0);

    let (status, _, _) = send(&app, Method::PUT, &format!("/clusters/{CLUSTER}/rules/bad%20rule/like"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn metrics_count_served_requests() {
    let app = app();
    get_json(&app, "/organizations").await;

    let (status, content_type, body) = send(&app, Method::GET, "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/plain"));
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains(&format!("api_endpoints_requests{{endpoint=\"{PREFIX}/organizations\"}} 1")));
}

#[tokio::test]
async fn openapi_file_is_served() {
    let (status, _, body) = send(&app(), Method::GET, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);

    let spec: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(spec["openapi"], "3.0.0");
}

#[tokio::test]
async fn exit_endpoint_only_in_debug_mode() {
    let (status, _, _) = send(&app(), Method::PUT, "/exit", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let state = state_with(Arc::new(FixedClock(fixed_now())));
    let shutdown = state.shutdown.clone();
    let app = router(state, &server_config(true));

    let (status, _, _) = send(&app, Method::PUT, "/exit", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_ok!(tokio::time::timeout(Duration::from_secs(1), shutdown.notified()).await);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _, _) = send(&app(), Method::GET, "/no/such/endpoint", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
