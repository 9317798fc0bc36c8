//! Utility modules for logging and the external store client.

pub mod logging;
pub mod vault;
