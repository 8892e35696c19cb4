use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single role-tagged entry in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Optional constraint on the shape of the model's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Provider-native JSON mode, no particular schema.
    Json,
    /// Output must conform to the named JSON schema.
    JsonSchema {
        name: String,
        schema: serde_json::Value,
    },
}

impl ResponseFormat {
    /// Derive a schema constraint from a `JsonSchema` type.
    #[must_use]
    pub fn for_type<T: schemars::JsonSchema>(name: impl Into<String>) -> Self {
        let schema = schemars::schema_for!(T);
        Self::JsonSchema {
            name: name.into(),
            schema: serde_json::to_value(schema).unwrap_or(serde_json::Value::Null),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub response_format: Option<ResponseFormat>,
}

impl ChatRequest {
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            response_format: None,
        }
    }

    #[must_use]
    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl Usage {
    #[must_use]
    pub const fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub message: ChatMessage,
    pub usage: Usage,
}

impl ChatResponse {
    #[must_use]
    pub const fn new(message: ChatMessage, usage: Usage) -> Self {
        Self { message, usage }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.message.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
    }

    #[test]
    fn test_message_constructors() {
        let msg = ChatMessage::user("hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "hello");

        let msg = ChatMessage::system("be brief");
        assert_eq!(msg.role, Role::System);
    }

    #[test]
    fn test_usage_total() {
        let usage = Usage::new(120, 30);
        assert_eq!(usage.total(), 150);
    }

    #[test]
    fn test_request_with_response_format() {
        let request = ChatRequest::new(vec![ChatMessage::user("hi")])
            .with_response_format(ResponseFormat::Json);
        assert_eq!(request.response_format, Some(ResponseFormat::Json));
    }

    #[test]
    fn test_response_format_for_type() {
        #[derive(schemars::JsonSchema)]
        #[allow(dead_code)]
        struct Reply {
            answer: String,
        }

        let format = ResponseFormat::for_type::<Reply>("reply");
        if let ResponseFormat::JsonSchema { name, schema } = format {
            assert_eq!(name, "reply");
            assert!(schema.to_string().contains("answer"));
        } else {
            panic!("Expected JsonSchema format");
        }
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let original = ChatMessage::assistant("done");
        let json = serde_json::to_string(&original).unwrap();
        let parsed: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(original, parsed);
    }
}
