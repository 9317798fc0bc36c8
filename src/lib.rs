//! Random password generator for vault.
//!
//! Generates a random string and stores it with `vault kv put <path> content=<secret>`,
//! e.g. for database connection passwords.
//!
//! ## Modules
//! - `cli` — Argument parsing and the generate/store/report flow
//! - `core` — Secret generation and config resolution
//! - `models` — Config file structures
//! - `util` — Logging and the vault client

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod util;
