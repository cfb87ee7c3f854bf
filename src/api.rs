use crate::{
    constants::{CHAT_ENDPOINT, RESET_ENDPOINT},
    errors::{InterviewError, InterviewResult},
    logging::log_api_call,
    models::{ApiCallLog, ChatReply, ChatRequest, ResetAck},
};
use chrono::Utc;
use log::debug;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Instant;

/// HTTP client for the interview backend.
#[derive(Debug, Clone)]
pub struct ChatApi {
    client: Client,
    base_url: Url,
}

impl ChatApi {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Sends one chat turn and returns the assistant's reply.
    pub async fn post_chat(&self, request: &ChatRequest) -> InterviewResult<ChatReply> {
        let url = self.endpoint(CHAT_ENDPOINT)?;
        debug!(
            "POST {} scenario={:?} level={:?}",
            url, request.scenario, request.level
        );

        let start_time = Instant::now();
        let response = self
            .client
            .post(url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| InterviewError::api_error(format!("Request failed: {}", e)))?;

        log_api_call(&ApiCallLog {
            timestamp: Utc::now(),
            endpoint: url.to_string(),
            request_summary: "chat".to_string(),
            response_status: response.status().as_u16(),
            response_time_ms: start_time.elapsed().as_millis(),
        });

        parse_body(response, "chat").await
    }

    /// Asks the backend to drop its session state.
    pub async fn post_reset(&self) -> InterviewResult<ResetAck> {
        let url = self.endpoint(RESET_ENDPOINT)?;
        debug!("POST {}", url);

        let start_time = Instant::now();
        let response = self
            .client
            .post(url.clone())
            .send()
            .await
            .map_err(|e| InterviewError::api_error(format!("Request failed: {}", e)))?;

        log_api_call(&ApiCallLog {
            timestamp: Utc::now(),
            endpoint: url.to_string(),
            request_summary: "reset".to_string(),
            response_status: response.status().as_u16(),
            response_time_ms: start_time.elapsed().as_millis(),
        });

        parse_body(response, "reset").await
    }

    fn endpoint(&self, path: &str) -> InterviewResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| InterviewError::config_error(format!("Invalid endpoint {}: {}", path, e)))
    }
}

async fn parse_body<T: DeserializeOwned>(response: Response, what: &str) -> InterviewResult<T> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(InterviewError::api_error(format!(
            "Server returned error: {} - {}",
            status, error_text
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| InterviewError::api_error(format!("Failed to parse {} response: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionContext;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn api_for(server: &MockServer) -> ChatApi {
        ChatApi::new(Url::parse(&server.uri()).unwrap())
    }

    fn request(message: &str) -> ChatRequest {
        let context = SessionContext {
            scenario: "Java Interview".to_string(),
            level: "Beginner".to_string(),
        };
        ChatRequest::new(&context, message)
    }

    #[tokio::test]
    async fn test_post_chat_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(body_json(json!({
                "scenario": "Java Interview",
                "level": "Beginner",
                "message": "What is a class?"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "A blueprint for objects.",
                "audio": "/audio/7.mp3"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let reply = api_for(&mock_server)
            .post_chat(&request("What is a class?"))
            .await
            .unwrap();

        assert_eq!(reply.response, "A blueprint for objects.");
        assert_eq!(reply.audio.as_deref(), Some("/audio/7.mp3"));
    }

    #[tokio::test]
    async fn test_post_chat_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let err = api_for(&mock_server)
            .post_chat(&request("hi"))
            .await
            .unwrap_err();

        match err {
            InterviewError::Api(msg) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("boom"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_post_chat_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "wrong"})))
            .mount(&mock_server)
            .await;

        let err = api_for(&mock_server)
            .post_chat(&request("hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, InterviewError::Api(_)));
    }

    #[tokio::test]
    async fn test_post_reset() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/reset"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "reset"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let ack = api_for(&mock_server).post_reset().await.unwrap();
        assert_eq!(ack.status, "reset");
    }
}
