/// Basic unit tests to verify core functionality
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use scanova_mcp::*;
use serde_json::{json, Value};

/// Service stub that must never be reached
struct UnreachableApi;

#[async_trait]
impl QrCodeApi for UnreachableApi {
    async fn send(&self, _api_key: &ApiKey, _request: ApiRequest) -> Result<ApiResponse, ApiError> {
        panic!("remote service should not be called");
    }
}

fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(
            HeaderName::from_bytes(name.as_bytes()).unwrap(),
            HeaderValue::from_str(value).unwrap(),
        );
    }
    map
}

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    #[test]
    fn test_bearer_tokens_are_unwrapped() {
        for token in ["abc", "sk_live_0123", "with space", "Bearer nested"] {
            let value = format!("Bearer {}", token);
            let map = headers(&[("Authorization", value.as_str())]);
            assert_eq!(extract_api_key(&map).as_deref(), Some(token));
        }
    }

    #[test]
    fn test_raw_authorization_values_are_verbatim() {
        for raw in ["abc", "Token abc", "BEARER abc", "Bearerabc"] {
            let map = headers(&[("Authorization", raw)]);
            assert_eq!(extract_api_key(&map).as_deref(), Some(raw));
        }
    }

    #[test]
    fn test_unrecognized_headers_yield_no_credential() {
        let map = headers(&[("X-Token", "abc"), ("Cookie", "k=v")]);
        assert_eq!(extract_api_key(&map), None);
    }

    #[tokio::test]
    async fn test_no_credential_means_invalid_params_on_tools_call() {
        let dispatcher = McpDispatcher::new(Arc::new(UnreachableApi));
        let credential = extract_api_key(&headers(&[("X-Token", "abc")]));

        let response = dispatcher
            .handle_value(
                json!({"jsonrpc": "2.0", "id": 1, "method": "tools/call",
                    "params": {"name": "list_qr_codes"}}),
                credential,
            )
            .await;

        assert_eq!(response.error_code(), Some(error_codes::INVALID_PARAMS));
    }

    #[tokio::test]
    async fn test_missing_qrid_never_reaches_service() {
        let dispatcher = McpDispatcher::new(Arc::new(UnreachableApi));

        let response = dispatcher
            .handle_value(
                json!({"jsonrpc": "2.0", "id": 2, "method": "tools/call",
                    "params": {"name": "retrieve_qr_code", "arguments": {}}}),
                Some("key".to_string()),
            )
            .await;

        assert!(response.error.is_none());
        let text = response.result.unwrap()["content"][0]["text"].clone();
        assert!(text
            .as_str()
            .unwrap()
            .contains("QR code ID is required for retrieve operation"));
    }

    #[tokio::test]
    async fn test_unknown_tool_is_execution_error() {
        let dispatcher = McpDispatcher::new(Arc::new(UnreachableApi));

        let response = dispatcher
            .handle_value(
                json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call",
                    "params": {"name": "unknown_tool", "arguments": {}}}),
                Some("key".to_string()),
            )
            .await;

        let error = response.error.unwrap();
        assert_eq!(error.code, error_codes::INTERNAL_ERROR);
        assert!(error.message.contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_every_response_has_exactly_one_outcome() {
        let dispatcher = McpDispatcher::new(Arc::new(UnreachableApi));
        let requests = [
            json!({"id": 1, "method": "initialize"}),
            json!({"id": 2, "method": "tools/list"}),
            json!({"id": 3, "method": "tools/call"}),
            json!({"id": 4, "method": "nope"}),
            json!({"id": 5}),
            json!("just a string"),
        ];

        for request in requests {
            let response = dispatcher.handle_value(request, None).await;
            assert!(response.result.is_some() != response.error.is_some());
        }
    }

    #[test]
    fn test_initialize_from_blocking_context() {
        let dispatcher = McpDispatcher::new(Arc::new(UnreachableApi));

        let response = tokio_test::block_on(dispatcher.handle_body(
            br#"{"jsonrpc":"2.0","id":"init","method":"initialize","params":{}}"#,
            None,
        ));

        assert_eq!(response.id, "init");
        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "scanova-mcp");
        assert_eq!(result["capabilities"], json!({"tools": {}}));
    }

    #[test]
    fn test_registry_matches_tool_names() {
        let dispatcher = McpDispatcher::new(Arc::new(UnreachableApi));
        let registry = dispatcher.registry();
        assert_eq!(registry.len(), QrTool::ALL.len());
        assert_eq!(registry.definitions(), ToolRegistry::new().definitions());
        for definition in registry.definitions() {
            assert!(QrTool::from_name(&definition.name).is_some());
            assert_eq!(definition.input_schema["type"], "object");
        }
    }

    #[test]
    fn test_operation_result_text() {
        let success = OperationResult::Success(json!({"b": 1, "a": [true, null]}));
        assert_eq!(success.to_text(), r#"{"a":[true,null],"b":1}"#);

        let failure = OperationResult::failure("boom");
        assert_eq!(failure.to_value(), json!({"error": "boom"}));
        assert_ne!(failure.to_value(), Value::Null);
    }
}
