//! `vault kv put` invocation behind the `SecretStore` seam.

use std::io;
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} kv put exited with {}", describe_code(.code))]
    Exit { program: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

/// A store that can write one key/value entry at a path.
pub trait SecretStore {
    fn kv_put(&self, path: &str, field: &str, value: &str) -> Result<(), StoreError>;

    /// Human-readable form of the write, with the value redacted.
    fn describe_put(&self, path: &str, field: &str) -> String;
}

/// The HashiCorp Vault command-line client.
#[derive(Debug, Clone)]
pub struct VaultCli {
    program: String,
    mount: Option<String>,
}

impl VaultCli {
    pub fn new(program: impl Into<String>, mount: Option<String>) -> Self {
        Self {
            program: program.into(),
            mount,
        }
    }

    fn put_args(&self, path: &str, pair: String) -> Vec<String> {
        let mut args = vec!["kv".to_string(), "put".to_string()];
        if let Some(mount) = &self.mount {
            args.push(format!("-mount={}", mount));
        }
        args.push(path.to_string());
        args.push(pair);
        args
    }
}

impl SecretStore for VaultCli {
    fn kv_put(&self, path: &str, field: &str, value: &str) -> Result<(), StoreError> {
        // Passed as-is: vault reads `@file` values from a file and `-` from stdin,
        // so a secret starting with `@` (or equal to `-`) is not stored literally.
        let args = self.put_args(path, format!("{}={}", field, value));
        debug!(program = %self.program, path, "running kv put");

        // Client stdout goes to our stderr; stdout carries only the result.
        let status = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(io::stderr())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| StoreError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }
        Err(StoreError::Exit {
            program: self.program.clone(),
            code: status.code(),
        })
    }

    fn describe_put(&self, path: &str, field: &str) -> String {
        let args = self.put_args(path, format!("{}=<redacted>", field));
        format!("{} {}", self.program, args.join(" "))
    }
}
