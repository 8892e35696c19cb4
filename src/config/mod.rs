pub mod catalog;

pub use catalog::{ModelCatalog, OllamaCatalog, OllamaModelConfig};

use async_trait::async_trait;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, io};

use crate::core::error::{Result, ServiceError};
use crate::providers::ollama;
use crate::providers::types::{ApiKey, BaseUrl};

pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|h| h.join("Library/Application Support/conduit"))
    }

    #[cfg(target_os = "linux")]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
            .map(|c| c.join("conduit"))
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .map(|a| a.join("conduit"))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|h| h.join(".config/conduit"))
    }
}

/// Process-level settings consumed at handle construction time.
///
/// Passed explicitly into the services that need it; values are read once
/// by the implementation and reused for the process lifetime.
#[async_trait]
pub trait Settings: Send + Sync {
    /// The OpenAI credential. `Configuration` error when unavailable.
    async fn openai_api_key(&self) -> Result<ApiKey>;

    async fn ollama_base_url(&self) -> BaseUrl;
}

/// Settings loaded from the user config file with environment overrides
/// (`CONDUIT_OPENAI_API_KEY`, `CONDUIT_OLLAMA_BASE_URL`). The bare
/// `OPENAI_API_KEY` variable is honored as a fallback.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct AppSettings {
    pub openai_api_key: Option<String>,
    pub ollama_base_url: Option<String>,
}

impl AppSettings {
    #[must_use]
    pub fn load() -> Self {
        let mut builder = Config::builder();

        if let Some(path) = Self::config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("CONDUIT"));

        builder
            .build()
            .and_then(Config::try_deserialize)
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to load settings, using defaults: {e}");
                Self::default()
            })
    }

    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        get_config_dir().map(|dir| dir.join("config.toml"))
    }

    pub fn init_default() -> std::result::Result<PathBuf, io::Error> {
        let path = Self::config_path().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {}", path.display()),
            ));
        }

        fs::write(&path, include_str!("config.template.toml"))?;
        Ok(path)
    }
}

#[async_trait]
impl Settings for AppSettings {
    async fn openai_api_key(&self) -> Result<ApiKey> {
        match &self.openai_api_key {
            Some(key) if !key.is_empty() => Ok(ApiKey::new(key.clone())),
            _ => ApiKey::from_env("OPENAI_API_KEY").map_err(|_| {
                ServiceError::Configuration(
                    "API key not found. Set OPENAI_API_KEY or add openai_api_key to the \
                     config file."
                        .to_string(),
                )
            }),
        }
    }

    async fn ollama_base_url(&self) -> BaseUrl {
        self.ollama_base_url
            .as_deref()
            .map_or_else(|| BaseUrl::new(ollama::DEFAULT_BASE_URL), BaseUrl::from)
    }
}

/// Fixed in-memory settings, for tests and embedding callers that manage
/// configuration themselves.
#[derive(Debug, Clone, Default)]
pub struct StaticSettings {
    openai_api_key: Option<ApiKey>,
    ollama_base_url: Option<BaseUrl>,
}

impl StaticSettings {
    #[must_use]
    pub fn with_openai_api_key(key: impl Into<ApiKey>) -> Self {
        Self {
            openai_api_key: Some(key.into()),
            ollama_base_url: None,
        }
    }

    #[must_use]
    pub fn without_openai_api_key() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ollama_base_url(mut self, base_url: impl Into<BaseUrl>) -> Self {
        self.ollama_base_url = Some(base_url.into());
        self
    }
}

#[async_trait]
impl Settings for StaticSettings {
    async fn openai_api_key(&self) -> Result<ApiKey> {
        self.openai_api_key.clone().ok_or_else(|| {
            ServiceError::Configuration("API key not found.".to_string())
        })
    }

    async fn ollama_base_url(&self) -> BaseUrl {
        self.ollama_base_url
            .clone()
            .unwrap_or_else(|| BaseUrl::new(ollama::DEFAULT_BASE_URL))
    }
}
