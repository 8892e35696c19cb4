use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ApiRequest {
    pub model: String,
    pub messages: Vec<ApiMessage>,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub think: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ApiOptions>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ApiMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

/// Runtime knobs forwarded under the request's `options` object.
#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq)]
pub struct ApiOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_ctx: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_gpu: Option<u32>,
}

impl ApiOptions {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.num_predict.is_none()
            && self.temperature.is_none()
            && self.num_ctx.is_none()
            && self.num_gpu.is_none()
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub message: ApiMessage,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub done_reason: Option<String>,
    #[serde(default)]
    pub prompt_eval_count: Option<u32>,
    #[serde(default)]
    pub eval_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_omitted_fields() {
        let options = ApiOptions::default();
        assert!(options.is_empty());
        assert_eq!(serde_json::to_string(&options).unwrap(), "{}");
    }

    #[test]
    fn test_request_serialization() {
        let request = ApiRequest {
            model: "llama3.1:8b".to_string(),
            messages: vec![ApiMessage {
                role: "user".to_string(),
                content: "hi".to_string(),
            }],
            stream: false,
            format: Some(serde_json::Value::String("json".to_string())),
            keep_alive: Some("5m".to_string()),
            think: None,
            options: Some(ApiOptions {
                num_predict: Some(256),
                temperature: Some(0.2),
                num_ctx: None,
                num_gpu: None,
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["stream"], false);
        assert_eq!(json["format"], "json");
        assert_eq!(json["options"]["num_predict"], 256);
        assert!(json["options"].get("num_ctx").is_none());
        assert!(json.get("think").is_none());
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "message": {"role": "assistant", "content": "hello"},
            "done": true,
            "done_reason": "stop",
            "prompt_eval_count": 14,
            "eval_count": 3
        }"#;

        let response: ApiResponse = serde_json::from_str(body).unwrap();
        assert!(response.done);
        assert_eq!(response.message.content, "hello");
        assert_eq!(response.eval_count, Some(3));
    }
}
