//! Config file model.

use crate::constants;
use crate::models::policy::PolicySection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub policy: PolicySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    /// Store client executable.
    #[serde(default = "default_program")]
    pub program: String,
    /// KV mount passed as `-mount=<mount>`.
    #[serde(default)]
    pub mount: Option<String>,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            program: default_program(),
            mount: None,
        }
    }
}

fn default_program() -> String {
    constants::DEFAULT_STORE_PROGRAM.to_string()
}
