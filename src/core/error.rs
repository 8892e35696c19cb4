use thiserror::Error;

use crate::providers::error::ProviderError;

/// Failure kinds surfaced by model service resolution.
///
/// `Validation`, `NotFound`, and `Configuration` are the contract with
/// callers: parameter shape was wrong, a referenced entity does not exist,
/// or a process-level setting is missing. Everything else is transport
/// noise from the handle layer, folded into `Provider`.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{}", .messages.join("\n"))]
    Validation { messages: Vec<String> },

    #[error("{0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    #[must_use]
    pub fn validation(messages: Vec<String>) -> Self {
        Self::Validation { messages }
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<ProviderError> for ServiceError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Configuration(message) => Self::Configuration(message),
            other => Self::Provider(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_joins_messages_one_per_line() {
        let err = ServiceError::validation(vec![
            "model not specified.".to_string(),
            "temperature out of range.".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "model not specified.\ntemperature out of range."
        );
    }

    #[test]
    fn test_not_found_display_is_verbatim() {
        let err = ServiceError::NotFound("Unknown model service type: anthropic".to_string());
        assert_eq!(err.to_string(), "Unknown model service type: anthropic");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(ServiceError::validation(vec!["x".into()]).is_validation());
        assert!(ServiceError::NotFound("x".into()).is_not_found());
        assert!(ServiceError::Configuration("x".into()).is_configuration());
        assert!(!ServiceError::Provider("x".into()).is_validation());
    }

    #[test]
    fn test_provider_configuration_maps_to_configuration() {
        let err: ServiceError = ProviderError::Configuration("no key".to_string()).into();
        assert!(err.is_configuration());

        let err: ServiceError = ProviderError::Connection("refused".to_string()).into();
        assert!(matches!(err, ServiceError::Provider(_)));
    }
}
