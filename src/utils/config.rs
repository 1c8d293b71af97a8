//! Configuration for the support console
//!
//! Settings come from three places, later ones winning:
//! 1. Built-in defaults
//! 2. `acme-support.toml` in the working directory (or `--config PATH`)
//! 3. Command-line flags
//!
//! The API key itself is never stored in the file; `api_key_env` names the
//! environment variable that holds it (a `.env` file is honored).

use crate::agent::MAX_TOOL_ITERATIONS;
use crate::llm::anthropic::DEFAULT_BASE_URL;
use crate::memory::MAX_HISTORY_LENGTH;
use crate::prompt::DEFAULT_SYSTEM_PROMPT;
use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "acme-support.toml";

pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportConfig {
    /// Model identifier sent with every request
    pub model: String,

    pub max_tokens: u32,

    pub temperature: Option<f32>,

    /// Messages API base URL
    pub api_base_url: String,

    /// Environment variable holding the API key
    pub api_key_env: String,

    pub customers_path: PathBuf,

    pub orders_path: PathBuf,

    /// History window, in entries
    pub max_history: usize,

    /// Tool rounds allowed per user turn
    pub max_tool_iterations: usize,

    /// Replaces the built-in system prompt
    pub system_prompt: Option<String>,

    /// Filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 4096,
            temperature: None,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            customers_path: PathBuf::from("data/customers.json"),
            orders_path: PathBuf::from("data/orders.json"),
            max_history: MAX_HISTORY_LENGTH,
            max_tool_iterations: MAX_TOOL_ITERATIONS,
            system_prompt: None,
            log_level: "warn".to_string(),
        }
    }
}

impl SupportConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `acme-support.toml` is used
    /// if present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(|| {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.exists().then_some(default)
        });

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    AppError::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                Self::from_toml_str(&content)
                    .map_err(|e| AppError::Config(format!("{} ({})", e, path.display())))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Apply command-line overrides
    pub fn apply_overrides(&mut self, model: Option<String>, data_dir: Option<&Path>) {
        if let Some(model) = model {
            self.model = model;
        }
        if let Some(dir) = data_dir {
            self.customers_path = dir.join("customers.json");
            self.orders_path = dir.join("orders.json");
        }
    }

    /// Read the API key from the configured environment variable.
    ///
    /// # Errors
    ///
    /// `AppError::Config` when the variable is unset or blank.
    pub fn api_key(&self) -> Result<String> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(AppError::Config(format!(
                "{} is not set. Export it or add it to a .env file.",
                self.api_key_env
            ))),
        }
    }

    pub fn get_system_prompt(&self) -> String {
        self.system_prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string())
    }

    /// Filter directive for the log subscriber
    pub fn log_filter(&self, verbose: bool) -> String {
        if verbose {
            "acme_support=debug".to_string()
        } else {
            self.log_level.clone()
        }
    }
}
