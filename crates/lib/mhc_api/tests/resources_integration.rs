//! Integration tests — build the router over the built-in catalog and call
//! each resource route.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use mhc_api::{AppState, config::ApiConfig};
use mhc_core::catalog::Catalog;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app_with_mount(mount_path: &str) -> Router {
    let state = AppState {
        catalog: Catalog::default(),
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            mount_path: mount_path.into(),
            catalog_path: None,
        },
    };
    mhc_api::router(state)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).expect("parse JSON");
    (status, json)
}

#[tokio::test]
async fn list_returns_all_six_resources() {
    let (status, json) = get_json(app_with_mount(""), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 6);
    let resources = json["resources"].as_array().expect("resources array");
    assert_eq!(resources.len(), 6);
    assert_eq!(resources[0]["id"], 1);
    assert_eq!(resources[0]["title"], "Understanding Anxiety Disorders");
    let ids: Vec<i64> = resources.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn category_filter_is_case_insensitive() {
    let (status, lower) = get_json(app_with_mount(""), "/category/wellness").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(lower["category"], "wellness");
    assert_eq!(lower["count"], 1);
    assert_eq!(lower["resources"][0]["id"], 2);

    let (status, upper) = get_json(app_with_mount(""), "/category/WELLNESS").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(upper["category"], "WELLNESS");
    assert_eq!(upper["count"], lower["count"]);
    assert_eq!(upper["resources"], lower["resources"]);
}

#[tokio::test]
async fn category_with_encoded_space_matches() {
    let (status, json) = get_json(app_with_mount(""), "/category/MENTAL%20HEALTH").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"], "MENTAL HEALTH");
    assert_eq!(json["count"], 1);
    assert_eq!(json["resources"][0]["id"], 1);
}

#[tokio::test]
async fn unknown_category_is_empty_success() {
    let (status, json) = get_json(app_with_mount(""), "/category/Astrology").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "category": "Astrology", "count": 0, "resources": [] })
    );
}

#[tokio::test]
async fn get_by_id_returns_flat_record() {
    let (status, json) = get_json(app_with_mount(""), "/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "id": 1,
            "title": "Understanding Anxiety Disorders",
            "description": "Learn about different types of anxiety disorders and evidence-based treatment options.",
            "category": "Mental Health",
            "link": "https://www.mind.org.uk/information-support/types-of-mental-health-problems/anxiety-and-panic-attacks/"
        })
    );
}

#[tokio::test]
async fn missing_id_is_404() {
    for uri in ["/7", "/0", "/-1", "/999999", "/abc"] {
        let (status, json) = get_json(app_with_mount(""), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri {uri}");
        assert_eq!(json, json!({ "error": "Resource not found" }), "uri {uri}");
    }
}

#[tokio::test]
async fn trailing_slash_is_accepted() {
    let (status, json) = get_json(app_with_mount(""), "/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 1);
    assert_eq!(json["title"], "Understanding Anxiety Disorders");

    let (status, json) = get_json(app_with_mount(""), "/category/sleep/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"], "sleep");
    assert_eq!(json["count"], 1);
    assert_eq!(json["resources"][0]["id"], 3);

    let (status, json) = get_json(app_with_mount(""), "/7/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "error": "Resource not found" }));
}

#[tokio::test]
async fn empty_category_is_looked_up_as_id() {
    let (status, json) = get_json(app_with_mount(""), "/category/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "error": "Resource not found" }));
}

#[tokio::test]
async fn hex_id_resolves() {
    let (status, json) = get_json(app_with_mount(""), "/0x3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 3);
    assert_eq!(json["title"], "Sleep Better Tonight");
}

#[tokio::test]
async fn unrouted_path_is_json_404() {
    let (status, json) = get_json(app_with_mount(""), "/category/Sleep/extra").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn routes_can_be_nested_under_a_prefix() {
    let (status, json) = get_json(app_with_mount("/api/resources"), "/api/resources").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 6);

    let (status, json) =
        get_json(app_with_mount("/api/resources"), "/api/resources/category/sleep").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["resources"][0]["id"], 3);

    let (status, json) = get_json(app_with_mount("/api/resources"), "/api/resources/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Building Healthy Habits");

    let (status, _) = get_json(app_with_mount("/api/resources"), "/4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_are_stable_across_requests() {
    let app = app_with_mount("");
    let (_, first) = get_json(app.clone(), "/").await;
    let (_, second) = get_json(app, "/").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn serves_over_tcp() {
    let app = app_with_mount("");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let server = tokio::spawn(async move { axum::serve(listener, app).await });

    let resp = reqwest::Client::new()
        .get(format!("http://{addr}/category/stress"))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .expect("GET");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    let json: Value = resp.json().await.expect("json");
    assert_eq!(json["count"], 1);
    assert_eq!(json["resources"][0]["title"], "Stress Management Techniques");

    let resp = reqwest::get(format!("http://{addr}/42")).await.expect("GET");
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    server.abort();
}

#[tokio::test]
async fn state_loads_catalog_from_seed_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[{"id": 12, "title": "Grounding", "description": "5-4-3-2-1.", "category": "Stress", "link": "https://example.org/grounding"}]"#,
    )
    .expect("write seed");

    let state = AppState::from_config(ApiConfig {
        catalog_path: Some(path),
        ..ApiConfig::default()
    })
    .expect("state");
    let app = mhc_api::router(state);

    let (_, json) = get_json(app.clone(), "/").await;
    assert_eq!(json["total"], 1);
    let (status, json) = get_json(app, "/12").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Grounding");
}

#[test]
fn invalid_seed_file_fails_state_construction() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[{"id": 0, "title": "", "description": "d", "category": "c", "link": "https://example.org"}]"#,
    )
    .expect("write seed");

    let result = AppState::from_config(ApiConfig {
        catalog_path: Some(path),
        ..ApiConfig::default()
    });
    assert!(result.is_err());
}
