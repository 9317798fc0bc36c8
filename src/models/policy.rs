//! Policy configuration for secret generation and store writes.

use crate::constants;
use serde::{Deserialize, Serialize};

/// What to do when the store client fails to write the secret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteFailurePolicy {
    /// Warn, still print the secret, exit 0.
    #[default]
    Lenient,
    /// Print the secret, then exit non-zero.
    Strict,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicySection {
    /// Length used when `--length` is not given.
    #[serde(default = "default_length")]
    pub default_length: usize,

    /// Minimum accepted length. 0 allows empty secrets.
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    #[serde(default)]
    pub on_write_failure: WriteFailurePolicy,
}

impl Default for PolicySection {
    fn default() -> Self {
        Self {
            default_length: default_length(),
            min_length: default_min_length(),
            on_write_failure: WriteFailurePolicy::default(),
        }
    }
}

impl PolicySection {
    /// Reject lengths below the configured minimum or above `MAX_SECRET_LENGTH`.
    pub fn check_length(&self, length: usize) -> Result<(), String> {
        if length > constants::MAX_SECRET_LENGTH {
            return Err(format!(
                "length {} above maximum {}",
                length,
                constants::MAX_SECRET_LENGTH
            ));
        }
        if length < self.min_length {
            return Err(format!(
                "length {} below minimum {} (set min_length in [policy])",
                length, self.min_length
            ));
        }
        Ok(())
    }
}

fn default_length() -> usize {
    constants::DEFAULT_SECRET_LENGTH
}

fn default_min_length() -> usize {
    constants::DEFAULT_MIN_LENGTH
}
