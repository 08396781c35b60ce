//! Directory records
//!
//! This is where the dataset enters the system. A JSON document (an array of
//! field maps) is decoded once at startup into strongly-typed
//! [`UserRecord`]s keyed by identifier. Nothing untyped leaves this crate.
//!
//! ## What we do here
//!
//! - **Coerce** JSON numbers into the record's native types: `id` to `i32`,
//!   `phone` to `i64` (fractions truncated), `height` to `f32`.
//! - **Reject** documents that are not arrays of objects, or whose `id`
//!   fields are unusable. Those failures abort the whole load.
//! - **Skip** elements with any other bad field, reporting each one through
//!   the injected [`Diagnostics`].
//! - **Resolve duplicates** last-write-wins.
//!
//! ## Example
//!
//! ```
//! use records::{decode_document, DecodeConfig, TracingDiagnostics};
//!
//! let doc = br#"[
//!     {"id":1,"fname":"John","city":"NYC","phone":5551234567,"height":5.9,"married":true},
//!     {"id":2,"fname":"Jane","city":"LA","phone":5559876543,"height":5.5,"married":false}
//! ]"#;
//!
//! let decoded = decode_document(doc, &DecodeConfig::default(), &TracingDiagnostics).unwrap();
//! assert_eq!(decoded.report.loaded, 2);
//! assert_eq!(decoded.records[&2].fname(), "Jane");
//! ```

mod config;
mod decode;
mod diagnostics;
mod error;
mod types;

pub use crate::config::{ConfigError, DecodeConfig};
pub use crate::decode::{decode_document, load_file};
pub use crate::diagnostics::{Diagnostics, NoopDiagnostics, TracingDiagnostics};
pub use crate::error::{DecodeError, SkipReason};
pub use crate::types::{DecodeReport, DecodedRecords, UserRecord};
