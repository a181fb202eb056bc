//! Integration tests — build the router over a provider, call the chart
//! endpoints, assert on the streamed JSON bodies.

use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use sankey_api::{AppState, config::ApiConfig};
use sankey_core::model::{Entity, Node, NodeType, SankeyFlow};
use sankey_core::palette::ColorRotation;
use sankey_core::services::{ServiceCatalog, StaticServices};
use tower::ServiceExt;

fn test_config() -> ApiConfig {
    ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        status_delay: Duration::ZERO,
        catalog_path: None,
    }
}

fn node(node_type: NodeType, name: &str, live: bool) -> Node {
    Node::with_liveness(node_type, name, live)
}

fn single_flow_catalog(to_live: bool) -> ServiceCatalog {
    let rotation = ColorRotation::new();
    let flow = SankeyFlow::new(
        node(NodeType::Daemon, "ingest", true),
        node(NodeType::Dataset, "orders", to_live),
        5,
        &rotation,
    );
    StaticServices::new(vec![(Entity::new("billing"), vec![flow])]).into()
}

async fn get(catalog: ServiceCatalog, config: ApiConfig, uri: &str) -> Response {
    let app = sankey_api::router(AppState::new(catalog, config));
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(req).await.expect("request")
}

async fn body_string(resp: Response) -> String {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn redacted_service_flow_is_empty_array() {
    let resp = get(ServiceCatalog::default(), test_config(), "/chart/serviceflow").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "application/json",
        "content type"
    );
    assert_eq!(body_string(resp).await, "[]");
}

#[tokio::test]
async fn redacted_service_status_is_empty_array() {
    let resp = get(ServiceCatalog::default(), test_config(), "/chart/servicestatus").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "[]");
}

#[tokio::test]
async fn single_live_flow_uses_first_palette_color() {
    let resp = get(single_flow_catalog(true), test_config(), "/chart/serviceflow").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_string(resp).await,
        r#"[["ingest daemon","[orders dataset]",5,"color: #a6cee3"]]"#
    );
}

#[tokio::test]
async fn offline_endpoint_paints_flow_red() {
    let resp = get(single_flow_catalog(false), test_config(), "/chart/serviceflow").await;

    let json: serde_json::Value =
        serde_json::from_str(&body_string(resp).await).expect("parse JSON");
    assert_eq!(json[0][1], "[orders dataset] (offline)");
    assert_eq!(json[0][3], "color: #ff0000");
}

#[tokio::test]
async fn service_status_lists_from_then_to() {
    let resp = get(single_flow_catalog(true), test_config(), "/chart/servicestatus").await;

    let json: serde_json::Value =
        serde_json::from_str(&body_string(resp).await).expect("parse JSON");
    assert_eq!(
        json,
        serde_json::json!([
            ["ingest daemon", "DAEMON", true],
            ["[orders dataset]", "DATASET", true]
        ])
    );
}

#[tokio::test]
async fn flow_rows_have_chart_shape() {
    let rotation = ColorRotation::new();
    let hub = node(NodeType::Grpc, "gateway", true);
    let flows: Vec<_> = ["a", "b", "c"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            SankeyFlow::new(
                hub.clone(),
                node(NodeType::EventSet, name, true),
                i as i32 + 1,
                &rotation,
            )
        })
        .collect();
    let catalog = StaticServices::new(vec![(Entity::new("edge"), flows)]).into();

    let resp = get(catalog, test_config(), "/chart/serviceflow").await;
    let json: serde_json::Value =
        serde_json::from_str(&body_string(resp).await).expect("parse JSON");

    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 3);
    for row in rows {
        let row = row.as_array().expect("row array");
        assert_eq!(row.len(), 4);
        assert!(row[2].is_number());
        assert!(row[3].as_str().expect("color").starts_with("color: #"));
    }
    assert_eq!(rows[1][3], "color: #b2df8a");
}

#[tokio::test]
async fn service_status_waits_for_delay() {
    let config = ApiConfig {
        status_delay: Duration::from_millis(50),
        ..test_config()
    };

    let started = Instant::now();
    let resp = get(ServiceCatalog::default(), config, "/chart/servicestatus").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
async fn entities_lists_provider_entities() {
    let resp = get(single_flow_catalog(true), test_config(), "/chart/entities").await;

    let json: serde_json::Value =
        serde_json::from_str(&body_string(resp).await).expect("parse JSON");
    assert_eq!(json, serde_json::json!(["billing"]));
}

#[tokio::test]
async fn service_group_streams_entity_flows() {
    let resp = get(
        single_flow_catalog(true),
        test_config(),
        "/chart/serviceflow/billing",
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value =
        serde_json::from_str(&body_string(resp).await).expect("parse JSON");
    assert_eq!(json.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn unknown_service_group_is_not_found() {
    let resp = get(
        single_flow_catalog(true),
        test_config(),
        "/chart/serviceflow/missing",
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json: serde_json::Value =
        serde_json::from_str(&body_string(resp).await).expect("parse JSON");
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn health_reports_version_and_provider() {
    let resp = get(ServiceCatalog::default(), test_config(), "/health").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value =
        serde_json::from_str(&body_string(resp).await).expect("parse JSON");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["provider"], "redacted");
    assert_eq!(json["version"], sankey_core::version());
    assert!(
        json["greeting"]
            .as_str()
            .expect("greeting is string")
            .starts_with("Hello from sankey_core v")
    );
}
