//! Error types produced while loading the backing document.
//!
//! Both variants are fatal at startup: a process that fails to decode its
//! dataset must not start serving.
//!
//! | Error | When |
//! |-------|------|
//! | [`DataSource`](DecodeError::DataSource) | the document could not be read |
//! | [`Schema`](DecodeError::Schema) | the document is not a JSON array of field maps, an `id` is unusable, or a size limit was exceeded |
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a decode.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The backing document could not be read.
    #[error("failed to read data source {path}: {source}")]
    DataSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is structurally invalid.
    #[error("invalid document: {0}")]
    Schema(String),
}

impl DecodeError {
    pub(crate) fn schema(msg: impl Into<String>) -> Self {
        DecodeError::Schema(msg.into())
    }

    /// Returns true when the failure came from reading, not parsing.
    pub fn is_data_source(&self) -> bool {
        matches!(self, DecodeError::DataSource { .. })
    }
}

/// Why a single element was dropped from the load.
///
/// Only non-structural fields produce a skip; a bad `id` fails the whole
/// load instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The field is absent from the element.
    #[error("missing field `{field}`")]
    Missing { field: &'static str },
    /// The field is present with the wrong JSON type.
    #[error("field `{field}` must be a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    /// The field is numeric but does not fit the target type.
    #[error("field `{field}` is out of range")]
    OutOfRange { field: &'static str },
}
