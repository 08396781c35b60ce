//! Workspace umbrella crate for the userdir lookup service.
//!
//! This crate stitches together the record decoder, the criteria matcher and
//! the record store so callers can open a directory from a single
//! configuration and query it through one API entry point.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use userdir::{open_store, DirectoryConfig, SearchCriterion, TracingDiagnostics};
//!
//! let config = DirectoryConfig::from_file("userdir.yaml")?;
//! let store = open_store(&config, Arc::new(TracingDiagnostics))?;
//!
//! for id in userdir::parse_id_list("1, 2,3")? {
//!     if let Ok(user) = store.get_by_id(id) {
//!         println!("{} lives in {}", user.fname(), user.city());
//!     }
//! }
//!
//! let married = store.search(&[SearchCriterion::new("married", "true")])?;
//! println!("{} married users", married.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;

pub use config::{ConfigLoadError, DirectoryConfig, SourceConfig};
pub use matcher::{
    Criterion, FieldName, Matcher, SearchCriterion, ValidationError, matches, validate_criteria,
};
pub use records::{
    DecodeConfig, DecodeError, DecodeReport, DecodedRecords, Diagnostics, NoopDiagnostics,
    SkipReason, TracingDiagnostics, UserRecord, decode_document, load_file,
};
pub use store::{RecordStore, StoreError};

use std::sync::Arc;

use thiserror::Error;

/// Failures while opening a directory or parsing caller input for it.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An id in caller input was not a positive 32-bit integer.
    #[error("invalid user id: {0:?}")]
    InvalidId(String),
}

/// Validate `config` and load the store it describes.
///
/// Decoding failures are fatal; the returned error carries the decoder's
/// reason unchanged.
pub fn open_store(
    config: &DirectoryConfig,
    diagnostics: Arc<dyn Diagnostics>,
) -> Result<RecordStore, DirectoryError> {
    config.validate()?;
    let store = RecordStore::load(&config.source.path, &config.decode, diagnostics)?;
    Ok(store)
}

/// Parse a single user id. Surrounding whitespace is ignored; the value must
/// be an integer greater than zero.
pub fn parse_id(input: &str) -> Result<i32, DirectoryError> {
    let trimmed = input.trim();
    match trimmed.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(DirectoryError::InvalidId(trimmed.to_string())),
    }
}

/// Parse a comma-delimited id list such as `"1, 2,3"`.
///
/// Order and repeats are kept; the store decides how to treat them. The
/// first malformed element fails the whole list.
pub fn parse_id_list(input: &str) -> Result<Vec<i32>, DirectoryError> {
    input.split(',').map(parse_id).collect()
}
