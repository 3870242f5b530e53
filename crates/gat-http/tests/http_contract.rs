//! Integration tests for the HTTP contract (C8), driven entirely through
//! `tower::ServiceExt::oneshot` against the `axum::Router` -- no live socket.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use gat_http::{router, AppState};
use tower::ServiceExt;

fn app() -> Router {
    router(AppState::with_builtins())
}

#[tokio::test]
async fn list_optimizers_returns_both_builtins() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/production/optimizers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let mut ids: Vec<&str> = json["optimizers"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
    ids.sort();
    assert_eq!(ids, vec!["basic", "demand-constrained"]);
}

#[tokio::test]
async fn scenario_one_via_optimize_route() {
    let payload = serde_json::json!({
        "objective": "maximize_profit",
        "products": [
            {"name": "A", "profit_per_unit": 3.0, "cost_per_unit": 1.0},
            {"name": "B", "profit_per_unit": 5.0, "cost_per_unit": 2.0}
        ],
        "resources": [{"name": "R", "available_capacity": 100.0}],
        "resource_usage": [
            {"product_name": "A", "resource_name": "R", "usage_per_unit": 1.0},
            {"product_name": "B", "resource_name": "R", "usage_per_unit": 2.0}
        ]
    });
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/production/optimize/basic")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "optimal");
    assert!((json["objective_value"].as_f64().unwrap() - 250.0).abs() < 1e-6);
}

#[tokio::test]
async fn unknown_optimizer_is_400() {
    let payload = serde_json::json!({
        "objective": "maximize_profit",
        "products": [{"name": "A", "profit_per_unit": 1.0, "cost_per_unit": 1.0}],
        "resources": [{"name": "R", "available_capacity": 10.0}],
        "resource_usage": [{"product_name": "A", "resource_name": "R", "usage_per_unit": 1.0}]
    });
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/production/optimize/nonexistent")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn legacy_alias_dispatches_to_demand_constrained() {
    let payload = serde_json::json!({
        "objective": "maximize_profit",
        "products": [
            {"name": "A", "profit_per_unit": 3.0, "cost_per_unit": 1.0},
            {"name": "B", "profit_per_unit": 5.0, "cost_per_unit": 2.0}
        ],
        "resources": [{"name": "R", "available_capacity": 100.0}],
        "resource_usage": [
            {"product_name": "A", "resource_name": "R", "usage_per_unit": 1.0},
            {"product_name": "B", "resource_name": "R", "usage_per_unit": 2.0}
        ],
        "demand_constraints": [{"product_name": "A", "min_demand": 10.0}]
    });
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/production/demand-constrained")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "optimal");
    assert!((json["objective_value"].as_f64().unwrap() - 255.0).abs() < 1e-6);
}

#[tokio::test]
async fn malformed_request_is_validation_error() {
    let payload = serde_json::json!({
        "objective": "bogus",
        "products": [],
        "resources": [],
        "resource_usage": []
    });
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/production/optimize/basic")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "validation_error");
}
