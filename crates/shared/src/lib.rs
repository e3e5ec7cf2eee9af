//! # assetdesk Shared
//!
//! Common types used across all assetdesk crates: the closed role set, the
//! user profile handed over by the auth backend, errors and configuration.

pub mod error;
pub mod role;
pub mod profile;
pub mod config;

// Re-exports
pub use error::*;
pub use role::*;
pub use profile::*;
pub use config::*;
