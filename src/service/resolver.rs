use std::sync::Arc;

use crate::core::chat::ChatModel;
use crate::core::error::Result;
use crate::core::formatting::ChatFormatting;

use super::params::ModelServiceParams;
use super::registry::ServiceRegistry;

/// Maps a persisted configuration record to the matching service and
/// delegates. Adds no error translation of its own: whatever the registry
/// or service raises reaches the caller unchanged.
pub struct ModelResolver {
    registry: ServiceRegistry,
}

impl ModelResolver {
    #[must_use]
    pub const fn new(registry: ServiceRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    pub async fn resolve(&self, params: &ModelServiceParams) -> Result<Arc<dyn ChatModel>> {
        tracing::debug!(service = %params.llm_service, "resolving chat model");
        self.registry.get(&params.llm_service)?.chat_model(params).await
    }

    /// Marker pairs for the configured model. A caller-supplied override in
    /// the record wins over whatever the service would report.
    pub async fn formatting(&self, params: &ModelServiceParams) -> Result<Option<ChatFormatting>> {
        if let Some(formatting) = &params.chat_formatting {
            return Ok(Some(formatting.clone()));
        }

        self.registry
            .get(&params.llm_service)?
            .model_formatting(params)
            .await
    }
}
