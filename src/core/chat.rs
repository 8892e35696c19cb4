use async_trait::async_trait;

use super::error::Result;
use super::types::{ChatRequest, ChatResponse};

/// A ready-to-invoke chat model client.
///
/// Handles are request-scoped: resolution hands one to the caller and keeps
/// no reference. Two handles resolved from the same configuration are
/// configured identically but share no state.
#[async_trait]
pub trait ChatModel: Send + Sync {
    fn name(&self) -> &str;
    fn model(&self) -> &str;
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ChatMessage, Usage};

    struct EchoModel;

    #[async_trait]
    impl ChatModel for EchoModel {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn model(&self) -> &'static str {
            "echo-1"
        }

        async fn complete(&self, request: ChatRequest) -> Result<ChatResponse> {
            let content = request
                .messages
                .last()
                .map(|m| m.content.clone())
                .unwrap_or_default();
            Ok(ChatResponse::new(
                ChatMessage::assistant(content),
                Usage::new(1, 1),
            ))
        }
    }

    #[tokio::test]
    async fn test_chat_model_trait_object_safe() {
        let model: Box<dyn ChatModel> = Box::new(EchoModel);
        assert_eq!(model.name(), "echo");
        assert_eq!(model.model(), "echo-1");

        let request = ChatRequest::new(vec![ChatMessage::user("ping")]);
        let response = model.complete(request).await.unwrap();
        assert_eq!(response.text(), "ping");
    }
}
