pub mod types;

use async_trait::async_trait;

use crate::core::chat::ChatModel;
use crate::core::error::Result;
use crate::core::types::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat, Role, Usage};
use crate::providers::error::ProviderError;
use crate::providers::http::{AuthStrategy, HttpClient};
use crate::providers::types::{BaseUrl, ModelId};

use types::{ApiMessage, ApiOptions, ApiRequest, ApiResponse};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Client for a locally served model. Carries the generation options merged
/// at resolution time; a request-level response format overrides the
/// configured one.
#[derive(Clone)]
pub struct OllamaChatModel {
    http: HttpClient,
    model: ModelId,
    base_url: BaseUrl,
    options: ApiOptions,
    keep_alive: Option<String>,
    format: Option<serde_json::Value>,
    think: Option<bool>,
}

impl std::fmt::Debug for OllamaChatModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllamaChatModel")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl OllamaChatModel {
    pub fn new(base_url: impl Into<BaseUrl>) -> std::result::Result<Self, ProviderError> {
        Ok(Self {
            http: HttpClient::new()?,
            model: ModelId::new(""),
            base_url: base_url.into(),
            options: ApiOptions::default(),
            keep_alive: None,
            format: None,
            think: None,
        })
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<ModelId>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub const fn with_options(mut self, options: ApiOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_keep_alive(mut self, keep_alive: Option<String>) -> Self {
        self.keep_alive = keep_alive;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: Option<serde_json::Value>) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn with_think(mut self, think: Option<bool>) -> Self {
        self.think = think;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &ApiOptions {
        &self.options
    }

    fn build_request(&self, request: &ChatRequest) -> ApiRequest {
        let messages = request
            .messages
            .iter()
            .map(|m| ApiMessage {
                role: match m.role {
                    Role::System => "system".to_string(),
                    Role::User => "user".to_string(),
                    Role::Assistant => "assistant".to_string(),
                },
                content: m.content.clone(),
            })
            .collect();

        let format = request
            .response_format
            .as_ref()
            .map(format_value)
            .or_else(|| self.format.clone());

        ApiRequest {
            model: self.model.as_str().to_string(),
            messages,
            stream: false,
            format,
            keep_alive: self.keep_alive.clone(),
            think: self.think,
            options: (!self.options.is_empty()).then_some(self.options),
        }
    }

    fn parse_error(status: reqwest::StatusCode, body: &str) -> ProviderError {
        ProviderError::from_status(status.as_u16(), body, "OLLAMA_HOST")
    }
}

fn format_value(format: &ResponseFormat) -> serde_json::Value {
    match format {
        ResponseFormat::Json => serde_json::Value::String("json".to_string()),
        ResponseFormat::JsonSchema { schema, .. } => schema.clone(),
    }
}

#[async_trait]
impl ChatModel for OllamaChatModel {
    fn name(&self) -> &'static str {
        "ollama"
    }

    fn model(&self) -> &str {
        self.model.as_str()
    }

    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse> {
        let api_request = self.build_request(&request);
        let url = self.base_url.join("/api/chat");

        let response = self
            .http
            .post(&url, &AuthStrategy::None)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::parse_error(status, &error_body).into());
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        let usage = Usage::new(
            api_response.prompt_eval_count.unwrap_or_default(),
            api_response.eval_count.unwrap_or_default(),
        );

        Ok(ChatResponse::new(
            ChatMessage::assistant(api_response.message.content),
            usage,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> OllamaChatModel {
        OllamaChatModel::new(DEFAULT_BASE_URL).expect("create handle")
    }

    #[test]
    fn test_with_model() {
        let model = handle().with_model("llama3.1:8b");
        assert_eq!(model.model(), "llama3.1:8b");
    }

    #[test]
    fn test_build_request_merges_configured_fields() {
        let model = handle()
            .with_model("llama3.1:8b")
            .with_options(ApiOptions {
                num_predict: Some(512),
                temperature: Some(0.7),
                num_ctx: Some(8192),
                num_gpu: None,
            })
            .with_keep_alive(Some("10m".to_string()))
            .with_think(Some(false));

        let api = model.build_request(&ChatRequest::new(vec![ChatMessage::user("hi")]));
        assert_eq!(api.model, "llama3.1:8b");
        assert!(!api.stream);
        assert_eq!(api.keep_alive.as_deref(), Some("10m"));
        assert_eq!(api.think, Some(false));
        assert_eq!(api.options.unwrap().num_ctx, Some(8192));
    }

    #[test]
    fn test_build_request_omits_empty_options() {
        let model = handle().with_model("llama3.1:8b");
        let api = model.build_request(&ChatRequest::new(vec![ChatMessage::user("hi")]));
        assert!(api.options.is_none());
    }

    #[test]
    fn test_request_format_overrides_configured() {
        let model = handle()
            .with_model("llama3.1:8b")
            .with_format(Some(serde_json::Value::String("json".to_string())));

        let schema = serde_json::json!({"type": "object"});
        let request = ChatRequest::new(vec![ChatMessage::user("hi")]).with_response_format(
            ResponseFormat::JsonSchema {
                name: "reply".to_string(),
                schema: schema.clone(),
            },
        );

        let api = model.build_request(&request);
        assert_eq!(api.format, Some(schema));
    }

    #[test]
    fn test_configured_format_used_when_request_has_none() {
        let model = handle()
            .with_model("llama3.1:8b")
            .with_format(Some(serde_json::Value::String("json".to_string())));

        let api = model.build_request(&ChatRequest::new(vec![ChatMessage::user("hi")]));
        assert_eq!(api.format, Some(serde_json::Value::String("json".to_string())));
    }
}
