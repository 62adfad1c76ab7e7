//! Error types for blinc_pagination
//!
//! The reconciler itself never fails: invalid page jumps are dropped and
//! lenient overrides are adopted. Errors only come from loading
//! configuration files.

use thiserror::Error;

/// Errors that can occur while loading pagination configuration
#[derive(Error, Debug)]
pub enum PaginationError {
    /// Failed to read a configuration file
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse configuration: {0}")]
    ParseConfig(#[from] toml::de::Error),

    /// A page size list was empty
    #[error("page_sizes must contain at least one entry")]
    EmptyPageSizes,

    /// A page size of zero was supplied
    #[error("page sizes must be positive")]
    ZeroPageSize,
}

/// Result type for blinc_pagination operations
pub type Result<T> = std::result::Result<T, PaginationError>;
