//! AiClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, Message};

use super::client::GeminiClient;

#[async_trait]
impl AiClient for GeminiClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = messages.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::gemini::GeminiConfig;

    const KEY: &str = "secret-test-key";
    const ENDPOINT: &str = "/models/gemini-2.0-flash:generateContent";

    fn client_for(server: &MockServer) -> GeminiClient {
        let config = GeminiConfig::new(KEY).with_base_url(format!("{}/models", server.uri()));
        GeminiClient::new(config).unwrap()
    }

    fn turn() -> Vec<Message> {
        vec![Message::user("What does Jordan work on?")]
    }

    #[tokio::test]
    async fn successful_reply_is_parsed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("x-goog-api-key", KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": "Traffic models." }] },
                    "finishReason": "STOP"
                }],
                "usageMetadata": { "promptTokenCount": 40, "candidatesTokenCount": 3 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server).send_message(&turn()).await.unwrap();
        assert_eq!(response.content, "Traffic models.");
        assert_eq!(response.usage.total_tokens(), 43);
    }

    #[tokio::test]
    async fn key_travels_in_header_not_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
            })))
            .mount(&server)
            .await;

        client_for(&server).send_message(&turn()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.headers.get("x-goog-api-key").unwrap(), KEY);
        assert!(!request.url.as_str().contains(KEY));
        assert_eq!(request.url.path(), ENDPOINT);
    }

    #[tokio::test]
    async fn too_many_requests_is_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
            .mount(&server)
            .await;

        let err = client_for(&server).send_message(&turn()).await.unwrap_err();
        assert!(matches!(err, AiError::RateLimited));
    }

    #[tokio::test]
    async fn server_error_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend unavailable"))
            .mount(&server)
            .await;

        let err = client_for(&server).send_message(&turn()).await.unwrap_err();
        match err {
            AiError::ApiError(msg) => {
                assert!(msg.contains("500"), "{msg}");
                assert!(msg.contains("backend unavailable"), "{msg}");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).send_message(&turn()).await.unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        // Nothing listens on port 1.
        let config = GeminiConfig::new(KEY).with_base_url("http://127.0.0.1:1/models");
        let err = GeminiClient::new(config)
            .unwrap()
            .send_message(&turn())
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::NetworkError(_)), "{err:?}");
    }
}
