//! End-to-end tests through the full router (in-process, no network)

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use list_server::{Config, ServerState, build_app};
use serde_json::{Value, json};
use shared::request::ReorderRequest;
use tower::ServiceExt;

fn test_app(total_items: u32) -> Router {
    let config = Config::with_overrides(total_items, 20, 17);
    build_app(ServerState::initialize(&config))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn reorder_body(old_page_order: &[u32], new_page_order: &[u32]) -> Value {
    serde_json::to_value(ReorderRequest::new(old_page_order, new_page_order)).unwrap()
}

fn ids(body: &Value) -> Vec<u64> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_u64().unwrap())
        .collect()
}

// ========================================================================
// GET /items
// ========================================================================

#[tokio::test]
async fn test_first_page_of_full_universe() {
    let app = test_app(1_000_000);
    let (status, body) = get(&app, "/items?page=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (1..=20).collect::<Vec<_>>());
    assert_eq!(body["total"], 1_000_000);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 20);
    assert_eq!(body["hasMore"], true);
    assert_eq!(body["selected"], json!([]));
    assert!(body.get("search").is_none());

    let first = &body["items"][0];
    assert_eq!(first["name"], "Мария 1");
    assert!(first["category"].is_string());
}

#[tokio::test]
async fn test_page_parameter_parsing() {
    let app = test_app(100);

    let (_, body) = get(&app, "/items?page=3").await;
    assert_eq!(ids(&body), (41..=60).collect::<Vec<_>>());

    let (_, body) = get(&app, "/items?page=abc").await;
    assert_eq!(body["page"], 1);
    assert_eq!(ids(&body)[0], 1);

    let (_, body) = get(&app, "/items?page=0").await;
    assert_eq!(body["page"], 1);

    let (_, body) = get(&app, "/items").await;
    assert_eq!(body["page"], 1);

    let (_, body) = get(&app, "/items?page=5").await;
    assert_eq!(ids(&body), (81..=100).collect::<Vec<_>>());
    assert_eq!(body["hasMore"], false);
}

#[tokio::test]
async fn test_items_are_stable_between_requests() {
    let app = test_app(1_000);
    let (_, a) = get(&app, "/items?page=2").await;
    let (_, b) = get(&app, "/items?page=2").await;
    assert_eq!(a["items"], b["items"]);
}

#[tokio::test]
async fn test_search_sticks_until_changed() {
    let app = test_app(1_000);

    let (_, body) = get(&app, "/items?search=42").await;
    assert_eq!(body["search"], "42");
    // 42, 142, 242, ..., 942 plus 420..=429
    assert_eq!(body["total"], 20);
    assert_eq!(ids(&body)[..3], [42, 142, 242]);

    // no search param: the active term keeps applying
    let (_, body) = get(&app, "/items?page=1").await;
    assert_eq!(body["search"], "42");
    assert_eq!(body["total"], 20);

    // explicit empty search clears it
    let (_, body) = get(&app, "/items?search=").await;
    assert!(body.get("search").is_none());
    assert_eq!(body["total"], 1_000);
}

#[tokio::test]
async fn test_search_then_narrower_search() {
    let app = test_app(20_000);

    let (_, body) = get(&app, "/items?search=123").await;
    let broad_total = body["total"].as_u64().unwrap();

    let (_, body) = get(&app, "/items?search=1234").await;
    let narrow_total = body["total"].as_u64().unwrap();
    let expected = (1..=20_000u32)
        .filter(|id| id.to_string().contains("1234"))
        .count() as u64;

    assert!(narrow_total < broad_total);
    assert_eq!(narrow_total, expected);
    assert!(ids(&body).iter().all(|id| id.to_string().contains("1234")));
}

// ========================================================================
// PATCH /state
// ========================================================================

#[tokio::test]
async fn test_reorder_applies_and_is_visible() {
    let app = test_app(1_000);

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/state",
        Some(reorder_body(&[3, 4, 5], &[5, 3, 4])),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["updatedRange"], json!({"start": 2, "end": 4}));

    let (_, page) = get(&app, "/items?page=1").await;
    assert_eq!(ids(&page)[..6], [1, 2, 5, 3, 4, 6]);
}

#[tokio::test]
async fn test_reorder_conflict_returns_current_state() {
    let app = test_app(50);

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/state",
        Some(reorder_body(&[4, 3], &[3, 4])),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
    assert_eq!(body["received"], json!([4, 3]));
    assert_eq!(body["currentState"].as_array().unwrap().len(), 50);

    let (_, page) = get(&app, "/items?page=1").await;
    assert_eq!(ids(&page), (1..=20).collect::<Vec<_>>());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_reorders_only_one_wins() {
    let app = test_app(100_000);
    let body = reorder_body(&[10, 11], &[11, 10]);

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let app = app.clone();
            let body = body.clone();
            tokio::spawn(async move { send(&app, Method::PATCH, "/state", Some(body)).await.0 })
        })
        .collect();

    let mut statuses = Vec::new();
    for task in tasks {
        statuses.push(task.await.unwrap().as_u16());
    }
    statuses.sort_unstable();
    assert_eq!(statuses, [200, 409, 409, 409, 409, 409, 409, 409]);

    let (_, page) = get(&app, "/items?page=1").await;
    assert_eq!(ids(&page)[9..12], [11, 10, 12]);
}

#[tokio::test]
async fn test_reorder_validation_errors() {
    let app = test_app(100);

    let cases = [
        json!({"oldPageOrder": "1,2", "newPageOrder": [2, 1]}),
        json!({"oldPageOrder": [1, 2]}),
        json!({"oldPageOrder": [], "newPageOrder": []}),
        json!({"oldPageOrder": [1, 2], "newPageOrder": [2]}),
        json!({"oldPageOrder": [1, 2], "newPageOrder": [2, 99]}),
        json!({"oldPageOrder": [1, "x"], "newPageOrder": [2, 1]}),
    ];

    for case in cases {
        let (status, body) = send(&app, Method::PATCH, "/state", Some(case.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{case}");
        assert!(body["error"].is_string(), "{case}");
    }

    let (_, page) = get(&app, "/items?page=1").await;
    assert_eq!(ids(&page), (1..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_malformed_query_is_json_bad_request() {
    let app = test_app(100);

    let (status, body) = get(&app, "/items?page=1&page=2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid query string"));

    let (_, page) = get(&app, "/items?page=1").await;
    assert_eq!(ids(&page), (1..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = test_app(100);
    let request = Request::builder()
        .method(Method::PATCH)
        .uri("/state")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========================================================================
// POST /selected
// ========================================================================

#[tokio::test]
async fn test_selection_filters_invalid_ids() {
    let app = test_app(1_000_000);

    let (status, body) = send(
        &app,
        Method::POST,
        "/selected",
        Some(json!({"selectedIds": [1, "2", 999999999, -5, "abc"]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);
    assert_eq!(body["selectedIds"], json!([1, 2]));

    let (_, page) = get(&app, "/items").await;
    assert_eq!(page["selected"], json!([1, 2]));
}

#[tokio::test]
async fn test_selection_requires_array() {
    let app = test_app(100);
    let (status, body) = send(
        &app,
        Method::POST,
        "/selected",
        Some(json!({"selectedIds": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

// ========================================================================
// POST /reset, health
// ========================================================================

#[tokio::test]
async fn test_reset_restores_initial_state() {
    let app = test_app(1_000);

    send(
        &app,
        Method::PATCH,
        "/state",
        Some(reorder_body(&[1, 2], &[2, 1])),
    )
    .await;
    send(&app, Method::POST, "/selected", Some(json!({"selectedIds": [5]}))).await;
    get(&app, "/items?search=9").await;

    let (status, body) = send(&app, Method::POST, "/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, page) = get(&app, "/items").await;
    assert_eq!(page["total"], 1_000);
    assert_eq!(ids(&page), (1..=20).collect::<Vec<_>>());
    assert_eq!(page["selected"], json!([]));
    assert!(page.get("search").is_none());
}

#[tokio::test]
async fn test_health_and_root() {
    let app = test_app(300);

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["totalItems"], 300);
    assert_eq!(body["pageSize"], 20);
    assert_eq!(body["seed"], 17);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Hello World!");
}

#[tokio::test]
async fn test_request_id_is_generated_or_echoed() {
    let app = test_app(10);

    let request = Request::builder().uri("/items").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let generated = response.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(generated.len(), 36);

    let request = Request::builder()
        .uri("/state")
        .method(Method::PATCH)
        .header("x-request-id", "client-42")
        .header("content-type", "application/json")
        .body(Body::from(reorder_body(&[9], &[9]).to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "client-42");
}
