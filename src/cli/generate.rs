//! Generate a secret, write it to the store, report it.

use crate::cli::{CliContext, OutputFormat};
use crate::constants;
use crate::core::generator;
use crate::models::policy::WriteFailurePolicy;
use crate::util::vault::{SecretStore, StoreError};
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::io::Write;
use tracing::{info, warn};
use zeroize::Zeroizing;

#[derive(Serialize)]
struct Report<'a> {
    path: &'a str,
    length: usize,
    stored: bool,
    dry_run: bool,
    secret: &'a str,
}

pub fn run<W: Write>(
    ctx: &CliContext,
    store: &dyn SecretStore,
    path: &str,
    length: usize,
    out: &mut W,
) -> Result<()> {
    ctx.policy.check_length(length).map_err(|e| anyhow!("policy: {}", e))?;

    let secret = generator::generate_secret(length);
    info!(path, length, "generated secret");

    let written = if ctx.dry_run {
        eprintln!(
            "dry run, would run: {}",
            store.describe_put(path, constants::CONTENT_FIELD)
        );
        None
    } else {
        Some(store.kv_put(path, constants::CONTENT_FIELD, &secret))
    };
    let stored = matches!(written, Some(Ok(())));

    // Printed whether or not the write went through.
    let report = Report {
        path,
        length,
        stored,
        dry_run: ctx.dry_run,
        secret: &secret,
    };
    print_report(ctx.format, &report, out)?;

    match written {
        Some(Err(e)) => write_failed(ctx.policy.on_write_failure, path, e),
        Some(Ok(())) => {
            info!(path, "secret stored");
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_report<W: Write>(format: OutputFormat, report: &Report<'_>, out: &mut W) -> Result<()> {
    let line = match format {
        OutputFormat::Text => Zeroizing::new(format!("the random password was {}", report.secret)),
        OutputFormat::Json => {
            Zeroizing::new(serde_json::to_string(report).context("serialize report")?)
        }
    };
    writeln!(out, "{}", line.as_str()).context("write report")?;
    out.flush().context("flush report")?;
    Ok(())
}

fn write_failed(policy: WriteFailurePolicy, path: &str, err: StoreError) -> Result<()> {
    match policy {
        WriteFailurePolicy::Lenient => {
            warn!(path, "secret was not stored: {}", err);
            Ok(())
        }
        WriteFailurePolicy::Strict => {
            Err(anyhow::Error::new(err).context(format!("secret was not stored at {}", path)))
        }
    }
}
