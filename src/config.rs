//! Service configuration.
//!
//! # Examples
//!
//! ```
//! use examlens::config::ServiceConfig;
//!
//! let config = ServiceConfig::new().context_chars(30);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.context_chars, 30);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::compare::render::RenderConfig;
use crate::error::{ExamLensError, Result};
use crate::keyword::matcher::DEFAULT_CONTEXT_CHARS;

/// Configuration of an [`ExamService`](crate::service::ExamService).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Characters of context kept on each side of a passage match.
    pub context_chars: usize,

    /// Markup for comparison output.
    pub render: RenderConfig,

    /// JSON thesaurus to use instead of the built-in one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thesaurus_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            context_chars: DEFAULT_CONTEXT_CHARS,
            render: RenderConfig::default(),
            thesaurus_path: None,
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the match context radius.
    pub fn context_chars(mut self, context_chars: usize) -> Self {
        self.context_chars = context_chars;
        self
    }

    /// Set the comparison markup.
    pub fn render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// Use a custom thesaurus file.
    pub fn thesaurus_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.thesaurus_path = Some(path.into());
        self
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: ServiceConfig = serde_json::from_str(&content).map_err(|e| {
            ExamLensError::config(format!(
                "failed to parse configuration '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.context_chars == 0 {
            return Err(ExamLensError::config("context_chars must be greater than 0"));
        }
        if self.render.element.trim().is_empty() {
            return Err(ExamLensError::config("render.element must not be empty"));
        }
        Ok(())
    }
}
