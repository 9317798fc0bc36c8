//! Core logic: secret generation and config resolution.

pub mod generator;
pub mod settings;
