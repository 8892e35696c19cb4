use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, ServiceError};
use crate::core::formatting::ChatFormatting;

const DEFAULT_CATALOG_TOML: &str = include_str!("catalog.toml");

/// Keyed read-only lookup of locally served model configurations.
///
/// `None` means the id does not exist, it is never a transient failure.
#[async_trait]
pub trait OllamaCatalog: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Option<OllamaModelConfig>;
}

/// One catalog row. Field names follow the persisted wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OllamaModelConfig {
    pub id: String,
    pub model_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_context: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_formatting: Option<ChatFormatting>,
    #[serde(default)]
    pub disable_thinking: bool,
    #[serde(default)]
    pub cpu_only: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    models: Vec<OllamaModelConfig>,
}

/// TOML-backed catalog, loaded once at startup and immutable afterwards.
pub struct ModelCatalog {
    models: Vec<OllamaModelConfig>,
    by_id: HashMap<String, usize>,
}

impl ModelCatalog {
    /// User catalog when present, bundled defaults otherwise.
    #[must_use]
    pub fn load() -> Self {
        if let Some(user_catalog) = Self::load_user_catalog() {
            return user_catalog;
        }

        Self::load_default()
    }

    #[must_use]
    pub fn load_default() -> Self {
        let file: CatalogFile =
            toml::from_str(DEFAULT_CATALOG_TOML).expect("Bundled catalog.toml should be valid");

        Self::from_file(file)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: CatalogFile = toml::from_str(&content).map_err(|e| {
            ServiceError::Configuration(format!("Invalid catalog file {}: {e}", path.display()))
        })?;

        Ok(Self::from_file(file))
    }

    #[must_use]
    pub fn from_rows(models: Vec<OllamaModelConfig>) -> Self {
        Self::from_file(CatalogFile { models })
    }

    #[must_use]
    pub fn catalog_path() -> Option<PathBuf> {
        super::get_config_dir().map(|dir| dir.join("catalog.toml"))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&OllamaModelConfig> {
        self.by_id.get(id).map(|&idx| &self.models[idx])
    }

    #[must_use]
    pub fn all(&self) -> &[OllamaModelConfig] {
        &self.models
    }

    fn load_user_catalog() -> Option<Self> {
        let path = Self::catalog_path()?;
        if !path.exists() {
            return None;
        }

        match Self::load_from_path(&path) {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                tracing::warn!("Ignoring user catalog at {}: {e}", path.display());
                None
            }
        }
    }

    fn from_file(file: CatalogFile) -> Self {
        let mut by_id = HashMap::new();

        for (idx, model) in file.models.iter().enumerate() {
            by_id.insert(model.id.clone(), idx);
        }

        Self {
            models: file.models,
            by_id,
        }
    }
}

#[async_trait]
impl OllamaCatalog for ModelCatalog {
    async fn get_by_id(&self, id: &str) -> Option<OllamaModelConfig> {
        self.get(id).cloned()
    }
}
