//! Configuration for the record decoder.
//!
//! [`DecodeConfig`] bounds how much input a load will accept. Both limits are
//! optional; exceeding either fails the load with
//! [`DecodeError::Schema`](crate::DecodeError::Schema).
//!
//! ```rust
//! use records::DecodeConfig;
//!
//! let config = DecodeConfig {
//!     max_document_bytes: Some(16 * 1024 * 1024),
//!     max_records: Some(100_000),
//! };
//! config.validate().expect("valid config");
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Runtime limits applied while decoding a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Maximum size of the raw document in bytes. `None` means unlimited.
    pub max_document_bytes: Option<usize>,

    /// Maximum number of elements in the top-level array. `None` means unlimited.
    pub max_records: Option<usize>,
}

/// Invalid [`DecodeConfig`] values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// A limit was set to zero, which would reject every document.
    #[error("{0} must be greater than zero when set")]
    ZeroLimit(&'static str),
}

impl DecodeConfig {
    /// Check the limits for obvious misconfiguration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_document_bytes == Some(0) {
            return Err(ConfigError::ZeroLimit("max_document_bytes"));
        }
        if self.max_records == Some(0) {
            return Err(ConfigError::ZeroLimit("max_records"));
        }
        Ok(())
    }
}
