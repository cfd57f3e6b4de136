//! Shared building blocks for the Kunai workspace: errors, configuration
//! and product constants.

pub mod config;
pub mod constants;
pub mod error;
