//! CLI parsing and dispatch.

use crate::core::settings::Settings;
use crate::models::config::StoreSection;
use crate::models::policy::{PolicySection, WriteFailurePolicy};
use crate::util::logging;
use crate::util::vault::VaultCli;
use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

pub mod generate;

fn parse_vault_path(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("vault path cannot be empty".into());
    }
    Ok(s.to_string())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Effective settings after merging the config file with CLI overrides.
pub struct CliContext {
    pub store: StoreSection,
    pub policy: PolicySection,
    pub format: OutputFormat,
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "goamet-randpass",
    version,
    about = "Create a random password string and save it to vault"
)]
pub struct Cli {
    /// Destination path in vault, e.g. puppet/database/foo/prod/foo_pwd
    #[arg(value_name = "vault_path", value_parser = parse_vault_path)]
    pub vault_path: String,

    /// Length of the random string [default: 18]
    #[arg(long, value_name = "string_length")]
    pub length: Option<usize>,

    /// Config file (default: /etc/goamet/randpass.toml if present)
    #[arg(long, value_name = "PATH", env = "GOAMET_RANDPASS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Vault client executable
    #[arg(long, value_name = "PROGRAM", env = "GOAMET_RANDPASS_VAULT_BIN")]
    pub vault_bin: Option<String>,

    /// KV secrets engine mount, passed to `vault kv put -mount=`
    #[arg(long, value_name = "MOUNT")]
    pub mount: Option<String>,

    /// Exit non-zero if the vault write fails
    #[arg(long)]
    pub strict: bool,

    /// Generate and print only; do not call vault
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        logging::init(self.verbose);

        let settings = Settings::resolve(self.config.clone())?;
        if let Some(w) = &settings.load_warning {
            warn!("{}", w);
        }
        info!(source = ?settings.source, "config resolved");

        let ctx = self.context(settings);
        let length = self.length.unwrap_or(ctx.policy.default_length);
        let store = VaultCli::new(ctx.store.program.clone(), ctx.store.mount.clone());

        let mut stdout = io::stdout().lock();
        generate::run(&ctx, &store, &self.vault_path, length, &mut stdout)
    }

    fn context(&self, settings: Settings) -> CliContext {
        let mut store = settings.config.store;
        let mut policy = settings.config.policy;
        if let Some(program) = &self.vault_bin {
            store.program = program.clone();
        }
        if let Some(mount) = &self.mount {
            store.mount = Some(mount.clone());
        }
        if self.strict {
            policy.on_write_failure = WriteFailurePolicy::Strict;
        }
        CliContext {
            store,
            policy,
            format: self.format,
            dry_run: self.dry_run,
        }
    }
}
