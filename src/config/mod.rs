//! Configuration for Newsroom.
//!
//! Newsroom can be configured via:
//! - `newsroom.toml` in the current directory (or an explicit path)
//! - Environment variables (`NEWSROOM_MODEL`, `NEWSROOM_API_BASE`)
//! - Command line arguments (applied by the CLI on top of this)
//!
//! The OpenAI API key is deliberately not part of the file config; it is
//! read from `OPENAI_API_KEY` (a `.env` file is honored) and its absence
//! is a precondition failure raised before any run starts.

use crate::types::{CrewError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for Newsroom.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsroomConfig {
    /// Model used by every agent in the roster.
    pub model: String,

    /// Base URL of the OpenAI-compatible API.
    pub api_base: String,

    /// Whether search-capable agents get web grounding.
    pub search_enabled: bool,

    /// Maximum number of search results per query.
    pub search_results: usize,
}

impl Default for NewsroomConfig {
    fn default() -> Self {
        Self {
            model: crate::DEFAULT_MODEL.to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            search_enabled: true,
            search_results: 5,
        }
    }
}

impl NewsroomConfig {
    /// Load configuration: an explicit file if given, else `newsroom.toml`
    /// if present, else defaults; environment variables override either.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new("newsroom.toml");
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        Ok(config.with_env_overrides(
            std::env::var("NEWSROOM_MODEL").ok(),
            std::env::var("NEWSROOM_API_BASE").ok(),
        ))
    }

    /// Apply environment overrides. `None` leaves the current value.
    fn with_env_overrides(mut self, model: Option<String>, api_base: Option<String>) -> Self {
        if let Some(model) = model {
            self.model = model;
        }
        if let Some(api_base) = api_base {
            self.api_base = api_base;
        }
        self
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CrewError::Configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&raw).map_err(|e| {
            CrewError::Configuration(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// The API key, required before any run starts.
    pub fn api_key() -> Result<String> {
        match std::env::var("OPENAI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(CrewError::Precondition(
                "OPENAI_API_KEY is not set; add it to the environment or a .env file"
                    .to_string(),
            )),
        }
    }
}
