use std::sync::Arc;

use crate::config::{OllamaCatalog, Settings};
use crate::core::error::{Result, ServiceError};

use super::ModelService;
use super::ollama::OllamaModelService;
use super::openai::OpenAiModelService;

/// All known model services, fixed at construction. Iteration order is
/// insertion order, which keeps diagnostics deterministic; lookups are
/// exact, case-sensitive matches on the service type.
pub struct ServiceRegistry {
    services: Vec<Arc<dyn ModelService>>,
}

impl ServiceRegistry {
    #[must_use]
    pub fn new(services: Vec<Arc<dyn ModelService>>) -> Self {
        Self { services }
    }

    /// The built-in provider set, wired to the given collaborators.
    #[must_use]
    pub fn builtin(settings: Arc<dyn Settings>, catalog: Arc<dyn OllamaCatalog>) -> Self {
        Self::new(vec![
            Arc::new(OpenAiModelService::new(Arc::clone(&settings))),
            Arc::new(OllamaModelService::new(settings, catalog)),
        ])
    }

    #[must_use]
    pub fn service_types(&self) -> Vec<&'static str> {
        self.services.iter().map(|s| s.service_type()).collect()
    }

    pub fn get(&self, service_type: &str) -> Result<&Arc<dyn ModelService>> {
        self.services
            .iter()
            .find(|s| s.service_type() == service_type)
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Unknown model service type: {service_type}"))
            })
    }
}
