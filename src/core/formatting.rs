use serde::{Deserialize, Serialize};

use super::types::Role;

/// Delimiter pair wrapped around one role's text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkerPair {
    pub open_delimiter: String,
    pub close_delimiter: String,
}

impl MarkerPair {
    #[must_use]
    pub fn new(open_delimiter: impl Into<String>, close_delimiter: impl Into<String>) -> Self {
        Self {
            open_delimiter: open_delimiter.into(),
            close_delimiter: close_delimiter.into(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open_delimiter.is_empty() && self.close_delimiter.is_empty()
    }

    #[must_use]
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.open_delimiter, text, self.close_delimiter)
    }
}

/// Textual role framing for models that have no native role fields.
///
/// The default value is empty delimiters for every role, which leaves text
/// untouched. Prompt assembly consults this only when a resolved model
/// declares markers; providers with structured role support never need it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatFormatting {
    pub system_markers: MarkerPair,
    pub user_markers: MarkerPair,
    pub ai_markers: MarkerPair,
}

impl ChatFormatting {
    #[must_use]
    pub const fn markers_for(&self, role: Role) -> &MarkerPair {
        match role {
            Role::System => &self.system_markers,
            Role::User => &self.user_markers,
            Role::Assistant => &self.ai_markers,
        }
    }

    #[must_use]
    pub fn frame(&self, role: Role, text: &str) -> String {
        self.markers_for(role).wrap(text)
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.system_markers.is_empty() && self.user_markers.is_empty() && self.ai_markers.is_empty()
    }
}
