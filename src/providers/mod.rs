pub mod error;
pub mod http;
pub mod mock;
pub mod ollama;
pub mod openai;
pub mod types;

pub use error::ProviderError;
pub use mock::MockChatModel;
pub use ollama::OllamaChatModel;
pub use openai::OpenAiChatModel;
pub use types::{ApiKey, BaseUrl, ModelId};
