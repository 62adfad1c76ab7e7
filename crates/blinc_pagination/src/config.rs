//! Pagination configuration file handling
//!
//! Applications can ship a `pagination.toml` with house defaults:
//!
//! ```toml
//! [defaults]
//! page_sizes = [10, 20, 30, 40, 50]
//! debounce_ms = 300
//!
//! [text]
//! items_per_page = "Items per page:"
//! backward = "Previous page"
//! forward = "Next page"
//! ```
//!
//! Every section and key is optional.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PaginationError, Result};
use crate::pagination::{pagination, PaginationBuilder};
use crate::text::PaginationText;

/// Contents of `pagination.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaginationConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub text: TextConfig,
}

/// Default props for new paginations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_page_sizes")]
    pub page_sizes: Vec<usize>,
    /// Page input quiescence window in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_page_sizes() -> Vec<usize> {
    vec![10, 20, 30, 40, 50]
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            page_sizes: default_page_sizes(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Static label overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextConfig {
    #[serde(default)]
    pub items_per_page: Option<String>,
    #[serde(default)]
    pub backward: Option<String>,
    #[serde(default)]
    pub forward: Option<String>,
}

impl PaginationConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PaginationError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded pagination config");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PaginationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.defaults.page_sizes.is_empty() {
            return Err(PaginationError::EmptyPageSizes);
        }
        if self.defaults.page_sizes.contains(&0) {
            return Err(PaginationError::ZeroPageSize);
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.defaults.debounce_ms)
    }

    /// Default texts with this file's overrides applied
    pub fn text(&self) -> PaginationText {
        let mut text = PaginationText::default();
        if let Some(label) = &self.text.items_per_page {
            text = text.items_per_page(label.clone());
        }
        if let Some(label) = &self.text.backward {
            text = text.backward(label.clone());
        }
        if let Some(label) = &self.text.forward {
            text = text.forward(label.clone());
        }
        text
    }

    /// A pagination builder seeded with these defaults
    pub fn builder(&self) -> PaginationBuilder {
        pagination(self.defaults.page_sizes.iter().copied())
            .debounce(self.debounce())
            .text(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = PaginationConfig::from_toml_str("").unwrap();
        assert_eq!(config, PaginationConfig::default());
        assert_eq!(config.defaults.page_sizes, vec![10, 20, 30, 40, 50]);
        assert_eq!(config.debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_overrides() {
        let config = PaginationConfig::from_toml_str(
            r#"
            [defaults]
            page_sizes = [25, 50]
            debounce_ms = 120

            [text]
            forward = "Next"
            "#,
        )
        .unwrap();

        let pager = config.builder().total_items(120).build();
        let view = pager.view();
        assert_eq!(view.page_size, 25);
        assert_eq!(view.forward.label, "Next");
        assert_eq!(view.backward.label, "Previous page");
        assert_eq!(view.page_range_label, "of 5 pages");
    }

    #[test]
    fn test_rejects_empty_page_sizes() {
        let err = PaginationConfig::from_toml_str("[defaults]\npage_sizes = []\n").unwrap_err();
        assert!(matches!(err, PaginationError::EmptyPageSizes));
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let err = PaginationConfig::from_toml_str("[defaults]\npage_sizes = [0, 10]\n").unwrap_err();
        assert!(matches!(err, PaginationError::ZeroPageSize));
    }

    #[test]
    fn test_parse_error() {
        let err = PaginationConfig::from_toml_str("[defaults\n").unwrap_err();
        assert!(matches!(err, PaginationError::ParseConfig(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PaginationConfig::load(Path::new("/definitely/not/here/pagination.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
