pub mod ollama;
pub mod openai;
pub mod params;
pub mod registry;
pub mod resolver;

pub use ollama::OllamaModelService;
pub use openai::OpenAiModelService;
pub use params::{ModelServiceParams, OllamaServiceParams, OpenAiServiceParams};
pub use registry::ServiceRegistry;
pub use resolver::ModelResolver;

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::chat::ChatModel;
use crate::core::error::Result;
use crate::core::formatting::ChatFormatting;

pub(crate) const PARAMS_NOT_PROVIDED: &str = "Params not provided.";

/// One provider's validate-then-construct contract.
///
/// Implementations are stateless: every call validates and constructs from
/// scratch, nothing is carried between calls. Adding a provider means
/// implementing this trait and registering the value, call sites never
/// change.
#[async_trait]
pub trait ModelService: Send + Sync {
    /// Constant identifier the registry matches against, case-sensitively.
    fn service_type(&self) -> &'static str;

    /// Pure shape check of the opaque payload. `Err` carries one
    /// human-readable message per violated rule, in rule order.
    fn validate_params(
        &self,
        params: Option<&serde_json::Value>,
    ) -> std::result::Result<(), Vec<String>>;

    /// Validate, then construct a ready-to-use handle. Validation failures
    /// surface as a single `Validation` error joining every message;
    /// construction is never attempted on invalid input.
    async fn chat_model(&self, params: &ModelServiceParams) -> Result<Arc<dyn ChatModel>>;

    /// Marker pairs the resolved model needs for textual role framing.
    /// `None` means the provider accepts structured roles natively.
    async fn model_formatting(
        &self,
        _params: &ModelServiceParams,
    ) -> Result<Option<ChatFormatting>> {
        Ok(None)
    }
}
