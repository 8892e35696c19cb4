pub mod convert;
pub mod types;

use async_trait::async_trait;

use crate::core::chat::ChatModel;
use crate::core::error::Result;
use crate::core::types::{ChatRequest, ChatResponse};
use crate::providers::error::ProviderError;
use crate::providers::http::{AuthStrategy, HttpClient};
use crate::providers::types::{ApiKey, BaseUrl, ModelId};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Clone)]
pub struct OpenAiChatModel {
    http: HttpClient,
    auth: AuthStrategy,
    model: ModelId,
    base_url: BaseUrl,
}

impl std::fmt::Debug for OpenAiChatModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiChatModel")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenAiChatModel {
    pub fn new(api_key: ApiKey) -> std::result::Result<Self, ProviderError> {
        Ok(Self {
            http: HttpClient::new()?,
            auth: AuthStrategy::bearer(api_key),
            model: ModelId::new(DEFAULT_MODEL),
            base_url: BaseUrl::new(DEFAULT_BASE_URL),
        })
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<ModelId>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<BaseUrl>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn parse_error(status: reqwest::StatusCode, body: &str) -> ProviderError {
        ProviderError::from_status(status.as_u16(), body, "OPENAI_API_KEY")
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    fn name(&self) -> &'static str {
        "open-ai"
    }

    fn model(&self) -> &str {
        self.model.as_str()
    }

    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse> {
        let api_request = convert::to_api_request(&self.model, &request);
        let url = self.base_url.join("/v1/chat/completions");

        let response = self
            .http
            .post(&url, &self.auth)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::parse_error(status, &error_body).into());
        }

        let api_response: types::ApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(convert::from_api_response(api_response)?)
    }
}
