use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::core::chat::ChatModel;
use crate::core::error::{Result, ServiceError};
use crate::core::types::{ChatMessage, ChatRequest, ChatResponse, Usage};

/// Scriptable handle for exercising code that consumes a `ChatModel`
/// without touching the network.
#[derive(Clone)]
pub struct MockChatModel {
    model: String,
    responses: Arc<Mutex<Vec<ChatResponse>>>,
    request_history: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockChatModel {
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            responses: Arc::new(Mutex::new(Vec::new())),
            request_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn with_text_response(self, text: impl Into<String>) -> Self {
        self.responses.lock().push(ChatResponse::new(
            ChatMessage::assistant(text),
            Usage::new(10, 5),
        ));
        self
    }

    #[must_use]
    pub fn request_history(&self) -> Vec<ChatRequest> {
        self.request_history.lock().clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.request_history.lock().len()
    }

    fn next_response(&self) -> Result<ChatResponse> {
        let mut responses = self.responses.lock();
        if responses.is_empty() {
            Err(ServiceError::Provider(
                "MockChatModel: no responses queued".to_string(),
            ))
        } else {
            Ok(responses.remove(0))
        }
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse> {
        self.request_history.lock().push(request);
        self.next_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_queued_responses_in_order() {
        let mock = MockChatModel::new("mock-model")
            .with_text_response("first")
            .with_text_response("second");

        let request = ChatRequest::new(vec![ChatMessage::user("hi")]);
        assert_eq!(mock.complete(request.clone()).await.unwrap().text(), "first");
        assert_eq!(mock.complete(request).await.unwrap().text(), "second");
    }

    #[tokio::test]
    async fn test_error_when_queue_empty() {
        let mock = MockChatModel::new("mock-model");
        let result = mock
            .complete(ChatRequest::new(vec![ChatMessage::user("hi")]))
            .await;
        assert!(matches!(result, Err(ServiceError::Provider(_))));
    }

    #[tokio::test]
    async fn test_records_request_history() {
        let mock = MockChatModel::new("mock-model").with_text_response("ok");
        assert_eq!(mock.request_count(), 0);

        mock.complete(ChatRequest::new(vec![ChatMessage::user("remember me")]))
            .await
            .unwrap();

        assert_eq!(mock.request_count(), 1);
        assert_eq!(mock.request_history()[0].messages[0].content, "remember me");
    }
}
