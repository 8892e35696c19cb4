pub mod chat;
pub mod error;
pub mod formatting;
pub mod types;

pub use chat::ChatModel;
pub use error::{Result, ServiceError};
pub use formatting::{ChatFormatting, MarkerPair};
pub use types::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat, Role, Usage};
