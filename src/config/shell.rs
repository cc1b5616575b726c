//! Shell configuration module.
//!
//! This module defines how the interactive shell talks to its user: the
//! prompt, the prefix for error lines, and command echoing in script mode.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt written before each line is read
    pub prompt: String,

    /// Prefix written in front of every error message
    pub error_prefix: String,

    /// Whether to echo each command before running it (script mode only)
    pub echo_commands: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "trie> ".to_string(),
            error_prefix: "Error! ".to_string(),
            echo_commands: false,
        }
    }
}

impl Validate for ShellConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.error_prefix.contains('\n') {
            return Err(ConfigError::ValidationError(
                "error_prefix must not contain a newline".to_string(),
            ));
        }

        Ok(())
    }
}
