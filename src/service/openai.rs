use async_trait::async_trait;
use std::sync::Arc;

use crate::config::Settings;
use crate::core::chat::ChatModel;
use crate::core::error::{Result, ServiceError};
use crate::providers::openai::OpenAiChatModel;

use super::params::{ModelServiceParams, OpenAiServiceParams};
use super::{ModelService, PARAMS_NOT_PROVIDED};

pub const SERVICE_TYPE: &str = "open-ai";

pub struct OpenAiModelService {
    settings: Arc<dyn Settings>,
}

impl OpenAiModelService {
    #[must_use]
    pub fn new(settings: Arc<dyn Settings>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl ModelService for OpenAiModelService {
    fn service_type(&self) -> &'static str {
        SERVICE_TYPE
    }

    fn validate_params(
        &self,
        params: Option<&serde_json::Value>,
    ) -> std::result::Result<(), Vec<String>> {
        let Some(value) = params else {
            return Err(vec![PARAMS_NOT_PROVIDED.to_string()]);
        };

        let mut errors = Vec::new();

        match value.get("model").and_then(serde_json::Value::as_str) {
            Some(model) if !model.trim().is_empty() => {}
            _ => errors.push("model not specified.".to_string()),
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    async fn chat_model(&self, params: &ModelServiceParams) -> Result<Arc<dyn ChatModel>> {
        self.validate_params(params.service_params.as_ref())
            .map_err(ServiceError::validation)?;

        let parsed: OpenAiServiceParams = params.typed()?;
        let api_key = self.settings.openai_api_key().await?;

        let model = OpenAiChatModel::new(api_key)?.with_model(parsed.model.trim());
        Ok(Arc::new(model))
    }
}
