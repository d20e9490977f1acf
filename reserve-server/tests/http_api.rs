//! HTTP contract tests for the reservation API

use std::sync::Arc;

use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::Service;

use reserve_server::core::{Config, ServerState, build_app};
use reserve_server::store::MemorySheetStore;

const HEADER: [&str; 9] = [
    "date",
    "time",
    "party_size",
    "name",
    "phone",
    "notes",
    "created_at",
    "status",
    "cancelled_at",
];

fn test_config() -> Config {
    Config {
        http_port: 0,
        environment: "test".to_string(),
        sheets_base_url: "http://localhost".to_string(),
        sheets_spreadsheet_id: "test".to_string(),
        sheets_api_token: String::new(),
        sheet_name: "reservations".to_string(),
        log_level: "info".to_string(),
        log_dir: None,
    }
}

fn seeded_store(data: &[[&str; 9]]) -> Arc<MemorySheetStore> {
    let mut table = vec![HEADER.iter().map(|s| s.to_string()).collect::<Vec<_>>()];
    table.extend(
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect()),
    );
    Arc::new(MemorySheetStore::new(table))
}

fn kim_row() -> [&'static str; 9] {
    [
        "2025-11-25",
        "19:00",
        "4",
        "Kim",
        "010-1111-2222",
        "",
        "2025-11-20 10:00",
        "CONFIRMED",
        "",
    ]
}

async fn send(
    store: Arc<MemorySheetStore>,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let state = ServerState::with_store(test_config(), store);
    let mut app = build_app().with_state(state);

    let request = match body {
        Some(v) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.call(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_is_alive() {
    let (status, body) = send(seeded_store(&[]), "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "restaurant api alive");
}

#[tokio::test]
async fn cancel_success_reports_timestamps() {
    let store = seeded_store(&[kim_row()]);
    let (status, body) = send(
        store.clone(),
        "POST",
        "/reservation/cancel",
        Some(json!({"date": "2025-11-25", "time": "19:00", "phone": "01011112222"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "reservation cancelled");
    assert_eq!(body["created_at"], "2025-11-20 10:00");
    assert!(body["cancelled_at"].as_str().is_some_and(|s| !s.is_empty()));

    assert_eq!(store.cell(2, 8).await, "CANCELLED");
}

#[tokio::test]
async fn cancel_not_found_is_200_with_error_payload() {
    let (status, body) = send(
        seeded_store(&[kim_row()]),
        "POST",
        "/reservation/cancel",
        Some(json!({"date": "2025-11-25", "time": "19:00", "phone": "010-9999-0000"})),
    )
    .await;

    // business outcome, not a transport error
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "no matching confirmed reservation");
    assert!(body.get("cancelled_at").is_none());
}

#[tokio::test]
async fn cancel_ambiguous_is_200_with_error_payload() {
    let mut lee = kim_row();
    lee[3] = "Lee";
    let (status, body) = send(
        seeded_store(&[kim_row(), lee]),
        "POST",
        "/reservation/cancel",
        Some(json!({"date": "2025-11-25", "time": "19:00", "phone": "01011112222"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "multiple matches; name required");
}

#[tokio::test]
async fn cancel_with_bad_date_is_400() {
    let (status, body) = send(
        seeded_store(&[kim_row()]),
        "POST",
        "/reservation/cancel",
        Some(json!({"date": "25/11/2025", "time": "19:00", "phone": "01011112222"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn cancel_with_broken_header_is_500() {
    let header: Vec<String> = ["date", "time", "name"].iter().map(|s| s.to_string()).collect();
    let store = Arc::new(MemorySheetStore::new(vec![header]));
    let (status, body) = send(
        store,
        "POST",
        "/reservation/cancel",
        Some(json!({"date": "2025-11-25", "time": "19:00", "phone": "01011112222"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn cancel_with_failing_store_is_502() {
    let store = seeded_store(&[kim_row()]);
    store.set_fail_writes(true);
    let (status, body) = send(
        store,
        "POST",
        "/reservation/cancel",
        Some(json!({"date": "2025-11-25", "time": "19:00", "phone": "01011112222"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn create_appends_and_responds_with_created_at() {
    let store = seeded_store(&[]);
    let (status, body) = send(
        store.clone(),
        "POST",
        "/reservation/create",
        Some(json!({
            "date": "2025-12-01",
            "time": "18:30",
            "party_size": 2,
            "name": "Park",
            "phone": "010-2222-3333",
            "notes": "window seat"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "reservation created");
    assert!(body["created_at"].as_str().is_some_and(|s| !s.is_empty()));

    let table = store.snapshot().await;
    assert_eq!(table.len(), 2);
    assert_eq!(table[1][7], "CONFIRMED");
    assert_eq!(table[1][8], "");
}

#[tokio::test]
async fn create_with_party_size_out_of_range_is_400() {
    let (status, body) = send(
        seeded_store(&[]),
        "POST",
        "/reservation/create",
        Some(json!({
            "date": "2025-12-01",
            "time": "18:30",
            "party_size": 51,
            "name": "Park",
            "phone": "010-2222-3333"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("party_size"));
}
