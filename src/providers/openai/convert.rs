use crate::core::types::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat, Role, Usage};
use crate::providers::error::ProviderError;
use crate::providers::types::ModelId;

use super::types::{ApiJsonSchema, ApiMessage, ApiRequest, ApiResponse, ApiResponseFormat};

pub fn to_api_request(model: &ModelId, request: &ChatRequest) -> ApiRequest {
    ApiRequest {
        model: model.as_str().to_string(),
        messages: request.messages.iter().map(to_api_message).collect(),
        response_format: request.response_format.as_ref().map(to_api_format),
    }
}

fn to_api_message(message: &ChatMessage) -> ApiMessage {
    let role = match message.role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    };

    ApiMessage {
        role: role.to_string(),
        content: message.content.clone(),
    }
}

fn to_api_format(format: &ResponseFormat) -> ApiResponseFormat {
    match format {
        ResponseFormat::Json => ApiResponseFormat::JsonObject,
        ResponseFormat::JsonSchema { name, schema } => ApiResponseFormat::JsonSchema {
            json_schema: ApiJsonSchema {
                name: name.clone(),
                schema: schema.clone(),
                strict: true,
            },
        },
    }
}

pub fn from_api_response(response: ApiResponse) -> Result<ChatResponse, ProviderError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::ParseError("response contained no choices".to_string()))?;

    let usage = response
        .usage
        .map_or_else(Usage::default, |u| Usage::new(u.prompt_tokens, u.completion_tokens));

    Ok(ChatResponse::new(
        ChatMessage::assistant(choice.message.content),
        usage,
    ))
}
