//! Subcommand implementations

pub mod base58;
pub mod classify;
pub mod fetch;
pub mod files;
pub mod input;
