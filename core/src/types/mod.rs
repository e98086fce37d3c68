//! Shared types — host handles and user configuration.

pub mod config;
pub mod handles;
