use httpmock::prelude::*;
use reservation_desk::utils::error::NETWORK_FALLBACK_MESSAGE;
use reservation_desk::{ApiClient, ReservationError};
use serde_json::json;

fn api_message(err: ReservationError) -> (Option<u16>, String) {
    match err {
        ReservationError::ApiError { status, message } => (status, message),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_returns_body_directly() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/menu");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"items": ["soup", "bread"]}));
        })
        .await;

    let client = ApiClient::new(&server.url("/api")).unwrap();
    let body = client.get("/menu").await.unwrap();

    mock.assert_async().await;
    assert_eq!(body, json!({"items": ["soup", "bread"]}));
}

#[tokio::test]
async fn test_post_put_delete_send_json() {
    let server = MockServer::start_async().await;
    let post = server
        .mock_async(|when, then| {
            when.method(POST).path("/items").json_body(json!({"name": "table 4"}));
            then.status(201).json_body(json!({"id": 4}));
        })
        .await;
    let put = server
        .mock_async(|when, then| {
            when.method(PUT).path("/items/4").json_body(json!({"name": "table 5"}));
            then.status(200).json_body(json!({"id": 4, "name": "table 5"}));
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/items/4");
            then.status(204);
        })
        .await;

    let client = ApiClient::new(&server.base_url()).unwrap();

    let created = client.post("/items", &json!({"name": "table 4"})).await.unwrap();
    assert_eq!(created["id"], 4);

    let updated = client.put("items/4", &json!({"name": "table 5"})).await.unwrap();
    assert_eq!(updated["name"], "table 5");

    let deleted = client.delete("/items/4").await.unwrap();
    assert!(deleted.is_null());

    post.assert_async().await;
    put.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_server_message_is_used_on_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/reservations");
            then.status(409)
                .json_body(json!({"success": false, "message": "That table is already booked."}));
        })
        .await;

    let client = ApiClient::new(&server.base_url()).unwrap();
    let err = client.post("/reservations", &json!({})).await.unwrap_err();

    assert_eq!(
        api_message(err),
        (Some(409), "That table is already booked.".to_string())
    );
}

#[tokio::test]
async fn test_status_text_is_used_without_server_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/broken");
            then.status(500).body("internal error");
        })
        .await;

    let client = ApiClient::new(&server.base_url()).unwrap();
    let err = client.get("/broken").await.unwrap_err();

    assert_eq!(
        api_message(err),
        (Some(500), "Request failed with status code 500".to_string())
    );
}

#[tokio::test]
async fn test_transport_error_is_normalized() {
    // 沒有人在聽的 port
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    let err = client.get("/reservations").await.unwrap_err();

    let (status, message) = api_message(err);
    assert_eq!(status, None);
    assert!(!message.is_empty());
    assert_ne!(message, NETWORK_FALLBACK_MESSAGE);
}
