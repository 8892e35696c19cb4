//! Turns persisted model configurations into ready-to-use chat model
//! clients.
//!
//! A stored agent configuration carries a [`ModelServiceParams`] record: a
//! service discriminant plus a payload only that service understands. The
//! [`ModelResolver`] looks the discriminant up in a [`ServiceRegistry`],
//! the matching [`service::ModelService`] validates the payload, and a
//! configured [`ChatModel`] handle comes back, or a descriptive error does.
//!
//! ```no_run
//! use std::sync::Arc;
//! use conduit::{
//!     AppSettings, ChatMessage, ChatRequest, ModelCatalog, ModelResolver,
//!     ModelServiceParams, ServiceRegistry,
//! };
//!
//! # async fn run() -> conduit::core::error::Result<()> {
//! let registry = ServiceRegistry::builtin(
//!     Arc::new(AppSettings::load()),
//!     Arc::new(ModelCatalog::load()),
//! );
//! let resolver = ModelResolver::new(registry);
//!
//! let params = ModelServiceParams::new("open-ai", serde_json::json!({"model": "gpt-4o"}));
//! let model = resolver.resolve(&params).await?;
//! let reply = model
//!     .complete(ChatRequest::new(vec![ChatMessage::user("hello")]))
//!     .await?;
//! println!("{}", reply.text());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod providers;
pub mod service;

pub use crate::config::{
    AppSettings, ModelCatalog, OllamaCatalog, OllamaModelConfig, Settings, StaticSettings,
};
pub use crate::core::{
    ChatFormatting, ChatMessage, ChatModel, ChatRequest, ChatResponse, MarkerPair, ResponseFormat,
    Role, ServiceError,
};
pub use crate::service::{ModelResolver, ModelService, ModelServiceParams, ServiceRegistry};
