//! Data structures.

pub mod config;
pub mod policy;
