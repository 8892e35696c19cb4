use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, ServiceError};
use crate::core::formatting::ChatFormatting;

/// Generic persisted model configuration: a service discriminant plus a
/// payload only the matching service knows how to read. Field names follow
/// the stored agent-configuration documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelServiceParams {
    pub llm_service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_params: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_formatting: Option<ChatFormatting>,
}

impl ModelServiceParams {
    #[must_use]
    pub fn new(llm_service: impl Into<String>, service_params: serde_json::Value) -> Self {
        Self {
            llm_service: llm_service.into(),
            service_params: Some(service_params),
            chat_formatting: None,
        }
    }

    #[must_use]
    pub fn with_chat_formatting(mut self, formatting: ChatFormatting) -> Self {
        self.chat_formatting = Some(formatting);
        self
    }

    /// Interpret the opaque payload as a provider's typed parameters.
    /// Only meaningful after the owning service has validated the shape.
    pub fn typed<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self
            .service_params
            .clone()
            .unwrap_or(serde_json::Value::Null);

        serde_json::from_value(value).map_err(|e| {
            ServiceError::validation(vec![format!("invalid service parameters: {e}")])
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAiServiceParams {
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OllamaServiceParams {
    pub model_id: String,
    #[serde(default)]
    pub num_predict: Option<u32>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub keep_alive: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}
