//! keypad configuration
//!
//! Sources, lowest to highest priority: built-in defaults, the YAML file,
//! `KEYPAD_*` environment variables, then command-line flags (applied by
//! the caller).

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use keypad_calc::ErrorPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "keypad.yaml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "KEYPAD_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadConfig {
    /// Group integer digits in threes (`1,234,567`)
    #[serde(default = "default_true")]
    pub grouping: bool,
    /// Digit handling while the display shows `Error`
    #[serde(default)]
    pub error_policy: ErrorPolicy,
    /// REPL prompt
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    "keypad> ".to_string()
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            grouping: true,
            error_policy: ErrorPolicy::default(),
            prompt: default_prompt(),
        }
    }
}

impl KeypadConfig {
    /// Build the provider chain without extracting
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn figment(path: Option<&Path>) -> Result<Figment> {
        let file = match path {
            Some(path) => {
                if !path.is_file() {
                    bail!("Config file not found: {}", path.display());
                }
                Yaml::file(path)
            },
            None => Yaml::file(DEFAULT_CONFIG_FILE),
        };

        Ok(Figment::from(Serialized::defaults(KeypadConfig::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX)))
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)?
            .extract()
            .context("Failed to load keypad configuration")
    }
}
