//! Stormworks Component Catalog
//!
//! Harvests component metadata from the game's on-disk definition files and
//! the Stormworks wiki's rendered category pages, reconciles the two by
//! identifier and display name, and emits a single JSON catalog on stdout.

pub mod aliases;
pub mod catalog;
pub mod config;
pub mod harvest;
pub mod models;

use thiserror::Error;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors that can occur while building the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
