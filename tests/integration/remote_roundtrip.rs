/// End-to-end tests of the reqwest client against a local stand-in for the Scanova API
use std::collections::HashMap;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Path, Query};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Url;
use scanova_mcp::*;
use serde_json::{json, Value};

#[cfg(test)]
mod remote_roundtrip_tests {
    use super::*;

    fn auth_of(headers: &HeaderMap) -> Value {
        json!({
            "authorization": headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
            "content_type": headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        })
    }

    async fn list(headers: HeaderMap, Query(query): Query<HashMap<String, String>>) -> Json<Value> {
        Json(json!({ "headers": auth_of(&headers), "query": query }))
    }

    async fn create(headers: HeaderMap, body: Bytes) -> impl IntoResponse {
        let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (
            StatusCode::CREATED,
            Json(json!({ "headers": auth_of(&headers), "created": body })),
        )
    }

    async fn patch_item(Path(id): Path<String>, body: Bytes) -> Json<Value> {
        let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        Json(json!({ "qrid": id, "patched": body }))
    }

    async fn get_item(Path(id): Path<String>) -> impl IntoResponse {
        if id == "broken" {
            return (StatusCode::BAD_GATEWAY, "<html>upstream down</html>").into_response();
        }
        Json(json!({ "qrid": id })).into_response()
    }

    async fn download(Path(id): Path<String>) -> impl IntoResponse {
        if id == "missing" {
            return (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))).into_response();
        }
        ([(header::CONTENT_TYPE, "image/png")], vec![0x89u8, b'P', b'N', b'G']).into_response()
    }

    /// Start the stand-in service and return its base URL
    async fn start_remote() -> Url {
        let app = Router::new()
            .route("/qrcode/", get(list).post(create))
            .route("/qrcode/:id/", get(get_item).patch(patch_item))
            .route("/qrcode/:id/download", get(download));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Url::parse(&format!("http://{}/", addr)).unwrap()
    }

    fn server_for(base_url: &Url) -> ScanovaServer {
        let config = ServerConfig::new("127.0.0.1", 0, base_url.as_str(), Duration::from_secs(5))
            .expect("valid config");
        ScanovaServer::new(config).expect("server starts")
    }

    async fn call(server: &ScanovaServer, tool: &str, arguments: Value) -> Value {
        let response = server
            .dispatcher()
            .handle_value(
                json!({"jsonrpc": "2.0", "id": 1, "method": "tools/call",
                    "params": {"name": tool, "arguments": arguments}}),
                Some("sk_remote".to_string()),
            )
            .await;
        assert!(response.error.is_none(), "unexpected error: {:?}", response.error);
        let text = response.result.unwrap()["content"][0]["text"]
            .as_str()
            .unwrap()
            .to_string();
        serde_json::from_str(&text).unwrap()
    }

    #[tokio::test]
    async fn test_list_sends_credential_and_filters() {
        let server = server_for(&start_remote().await);

        let result = call(&server, "list_qr_codes", json!({"page": 2, "search": "menu"})).await;

        assert_eq!(result["headers"]["authorization"], "sk_remote");
        assert_eq!(result["headers"]["content_type"], "application/json");
        assert_eq!(result["query"], json!({"page": "2", "search": "menu"}));
    }

    #[tokio::test]
    async fn test_create_posts_body() {
        let server = server_for(&start_remote().await);
        let definition = json!({"qr_type": "dy", "info": "https://example.com", "name": "site"});

        let result = call(&server, "create_qr_code", json!({ "params": definition })).await;

        assert_eq!(result["created"], definition);
    }

    #[tokio::test]
    async fn test_deactivate_patches_item() {
        let server = server_for(&start_remote().await);

        let result = call(&server, "deactivate_qr_code", json!({"qrid": 42})).await;

        assert_eq!(result, json!({"qrid": "42", "patched": {"is_active": false}}));
    }

    #[tokio::test]
    async fn test_download_success_and_not_found() {
        let server = server_for(&start_remote().await);

        let result = call(&server, "download_qr_code", json!({"qrid": "Q1"})).await;
        assert_eq!(
            result,
            json!({"success": true, "message": "QR code download successful", "content_type": "image/png"})
        );

        let result = call(&server, "download_qr_code", json!({"qrid": "missing"})).await;
        assert_eq!(result, json!({"detail": "Not found."}));
    }

    #[tokio::test]
    async fn test_non_json_response_is_operation_error() {
        let server = server_for(&start_remote().await);

        let result = call(&server, "retrieve_qr_code", json!({"qrid": "broken"})).await;

        let message = result["error"].as_str().unwrap();
        assert!(message.starts_with("API request failed: "), "got {}", message);
    }

    #[tokio::test]
    async fn test_unreachable_service_is_operation_error() {
        // Reserve a port, then close it so nothing is listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let base_url = Url::parse(&format!("http://{}/", addr)).unwrap();
        let server = server_for(&base_url);

        let result = call(&server, "retrieve_qr_code", json!({"qrid": "Q1"})).await;

        let message = result["error"].as_str().unwrap();
        assert!(message.starts_with("API request failed: "), "got {}", message);
    }
}
