//! LLM Client: the single point of entry for all chat-completion calls.
//!
//! ARCHITECTURAL RULE: No other module may call the completion endpoint directly.
//! Everything goes through a `CompletionTransport`, injected via `AppState`.
//!
//! No retries are performed here. A failed call is returned to the caller as-is.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub mod prompts;

/// Sampling temperature used for every task.
pub const TEMPERATURE: f64 = 0.7;
/// Upper bound on generated tokens per completion.
pub const MAX_TOKENS: u32 = 1000;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("Completion client configuration error: {0}")]
    Config(String),
}

/// Generation parameters forwarded with every completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// The completion transport seam. Implement this to swap providers without
/// touching the prompt builder, the service, or the handlers.
///
/// Carried in `AppState` as `Arc<dyn CompletionTransport>`.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    /// Sends one system instruction and one user prompt, returning the text of
    /// the first generated choice.
    async fn complete(
        &self,
        system: &str,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Azure OpenAI wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AzureError {
    error: AzureErrorBody,
}

#[derive(Debug, Deserialize)]
struct AzureErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// AzureOpenAiClient
// ────────────────────────────────────────────────────────────────────────────

/// Chat-completion client for an Azure OpenAI deployment.
#[derive(Clone)]
pub struct AzureOpenAiClient {
    client: Client,
    completions_url: Url,
    api_key: String,
}

impl AzureOpenAiClient {
    /// Builds the client once at startup. Fails if the endpoint is not a valid
    /// URL or the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        let completions_url = completions_url(
            &config.openai_endpoint,
            &config.openai_deployment_name,
            &config.openai_api_version,
        )?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.completion_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            completions_url,
            api_key: config.openai_key.clone(),
        })
    }

    pub fn deployment_url(&self) -> &Url {
        &self.completions_url
    }
}

/// `{endpoint}/openai/deployments/{deployment}/chat/completions?api-version={version}`
fn completions_url(endpoint: &str, deployment: &str, api_version: &str) -> Result<Url, LlmError> {
    let mut base = Url::parse(endpoint)
        .map_err(|e| LlmError::Config(format!("invalid endpoint '{endpoint}': {e}")))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let mut url = base
        .join(&format!(
            "openai/deployments/{}/chat/completions",
            deployment.trim_matches('/')
        ))
        .map_err(|e| LlmError::Config(format!("invalid deployment '{deployment}': {e}")))?;

    url.query_pairs_mut().append_pair("api-version", api_version);
    Ok(url)
}

#[async_trait]
impl CompletionTransport for AzureOpenAiClient {
    async fn complete(
        &self,
        system: &str,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, LlmError> {
        let request_body = ChatCompletionRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let response = self
            .client
            .post(self.completions_url.clone())
            .header("api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AzureError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("Completion API returned {}: {}", status, message);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion
            .text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn test_config(endpoint: String) -> Config {
        Config {
            openai_endpoint: endpoint,
            openai_key: "test-key".to_string(),
            openai_deployment_name: "gpt-4o".to_string(),
            openai_api_version: "2024-02-01".to_string(),
            completion_timeout_secs: 5,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_completions_url_joins_deployment_path() {
        let url = completions_url("https://contoso.openai.azure.com/", "gpt-4o", "2024-02-01")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://contoso.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-02-01"
        );
    }

    #[test]
    fn test_completions_url_rejects_relative_endpoint() {
        let err = completions_url("not a url", "gpt-4o", "2024-02-01").unwrap_err();
        assert!(matches!(err, LlmError::Config(_)));
    }

    #[test]
    fn test_response_text_reads_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text(), Some("first"));
    }

    #[test]
    fn test_response_text_none_without_choices() {
        let response: ChatCompletionResponse =
            serde_json::from_value(json!({"choices": []})).unwrap();
        assert_eq!(response.text(), None);
    }

    #[tokio::test]
    async fn test_complete_sends_system_and_user_messages() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/openai/deployments/gpt-4o/chat/completions")
                    .query_param("api-version", "2024-02-01")
                    .header("api-key", "test-key")
                    .json_body(json!({
                        "messages": [
                            {"role": "system", "content": "be helpful"},
                            {"role": "user", "content": "hello"}
                        ],
                        "temperature": 0.5,
                        "max_tokens": 42
                    }));
                then.status(200).json_body(json!({
                    "choices": [{"message": {"role": "assistant", "content": "  hi there\n"}}],
                    "usage": {"prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13}
                }));
            })
            .await;

        let client = AzureOpenAiClient::new(&test_config(server.base_url())).unwrap();
        let params = GenerationParams {
            temperature: 0.5,
            max_tokens: 42,
        };
        let text = client.complete("be helpful", "hello", params).await.unwrap();

        mock.assert_async().await;
        assert_eq!(text, "  hi there\n");
    }

    #[tokio::test]
    async fn test_complete_maps_error_body_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(401).json_body(json!({
                    "error": {"code": "401", "message": "Access denied due to invalid subscription key."}
                }));
            })
            .await;

        let client = AzureOpenAiClient::new(&test_config(server.base_url())).unwrap();
        let err = client
            .complete("sys", "prompt", GenerationParams::default())
            .await
            .unwrap_err();

        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Access denied due to invalid subscription key.");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_does_not_retry_server_errors() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(503).body("upstream unavailable");
            })
            .await;

        let client = AzureOpenAiClient::new(&test_config(server.base_url())).unwrap();
        let err = client
            .complete("sys", "prompt", GenerationParams::default())
            .await
            .unwrap_err();

        mock.assert_hits_async(1).await;
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
        assert!(err.to_string().contains("upstream unavailable"));
    }

    #[tokio::test]
    async fn test_complete_null_content_is_empty_content_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200)
                    .json_body(json!({"choices": [{"message": {"content": null}}]}));
            })
            .await;

        let client = AzureOpenAiClient::new(&test_config(server.base_url())).unwrap();
        let err = client
            .complete("sys", "prompt", GenerationParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_complete_malformed_body_is_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).body("<html>gateway</html>");
            })
            .await;

        let client = AzureOpenAiClient::new(&test_config(server.base_url())).unwrap();
        let err = client
            .complete("sys", "prompt", GenerationParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[test]
    fn test_default_params_match_service_settings() {
        let params = GenerationParams::default();
        assert!((params.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(params.max_tokens, 1000);
    }
}
