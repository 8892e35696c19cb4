use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{OllamaCatalog, OllamaModelConfig, Settings};
use crate::core::chat::ChatModel;
use crate::core::error::{Result, ServiceError};
use crate::core::formatting::ChatFormatting;
use crate::providers::ollama::OllamaChatModel;
use crate::providers::ollama::types::ApiOptions;
use crate::providers::types::BaseUrl;

use super::params::{ModelServiceParams, OllamaServiceParams};
use super::{ModelService, PARAMS_NOT_PROVIDED};

pub const SERVICE_TYPE: &str = "ollama";

pub struct OllamaModelService {
    settings: Arc<dyn Settings>,
    catalog: Arc<dyn OllamaCatalog>,
}

impl OllamaModelService {
    #[must_use]
    pub fn new(settings: Arc<dyn Settings>, catalog: Arc<dyn OllamaCatalog>) -> Self {
        Self { settings, catalog }
    }

    /// Catalog rows are fetched on every call; `chat_model` and
    /// `model_formatting` each see their own independently consistent read.
    async fn lookup(&self, model_id: &str) -> Result<OllamaModelConfig> {
        self.catalog.get_by_id(model_id).await.ok_or_else(|| {
            ServiceError::NotFound(format!("Model data for ID `{model_id}` was not found."))
        })
    }

    /// Merge the validated payload with the catalog row into a configured
    /// handle. The row's `model_name` is the invocation target, the raw id
    /// never reaches the daemon.
    fn build_handle(
        parsed: OllamaServiceParams,
        row: OllamaModelConfig,
        base_url: BaseUrl,
    ) -> Result<OllamaChatModel> {
        let options = ApiOptions {
            num_predict: parsed.num_predict,
            temperature: parsed.temperature,
            num_ctx: row.max_context,
            num_gpu: row.cpu_only.then_some(0),
        };

        Ok(OllamaChatModel::new(base_url)?
            .with_model(row.model_name.as_str())
            .with_options(options)
            .with_keep_alive(parsed.keep_alive)
            .with_format(parsed.format.map(serde_json::Value::String))
            .with_think(row.disable_thinking.then_some(false)))
    }
}

#[async_trait]
impl ModelService for OllamaModelService {
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

        if value.get("modelId").is_none_or(serde_json::Value::is_null) {
            errors.push("model ID not specified.".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    async fn chat_model(&self, params: &ModelServiceParams) -> Result<Arc<dyn ChatModel>> {
        self.validate_params(params.service_params.as_ref())
            .map_err(ServiceError::validation)?;

        let parsed: OllamaServiceParams = params.typed()?;
        let row = self.lookup(&parsed.model_id).await?;
        let base_url = self.settings.ollama_base_url().await;

        let model = Self::build_handle(parsed, row, base_url)?;
        Ok(Arc::new(model))
    }

    async fn model_formatting(
        &self,
        params: &ModelServiceParams,
    ) -> Result<Option<ChatFormatting>> {
        self.validate_params(params.service_params.as_ref())
            .map_err(ServiceError::validation)?;

        let parsed: OllamaServiceParams = params.typed()?;
        let row = self.lookup(&parsed.model_id).await?;

        Ok(row.custom_formatting)
    }
}
