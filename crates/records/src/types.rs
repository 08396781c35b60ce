//! Core data model for the directory.
//!
//! A [`UserRecord`] is built once by the decoder and never changes afterwards.
//! Fields are private and exposed through accessors so a record cannot be
//! edited in place once it has been handed to the store.

use std::collections::HashMap;

use serde::Serialize;

/// One user's attribute tuple.
///
/// # Examples
///
/// ```rust
/// use records::UserRecord;
///
/// let user = UserRecord::new(1, "John", "NYC", 5551234567, 5.9, true);
/// assert_eq!(user.id(), 1);
/// assert_eq!(user.fname(), "John");
/// assert!(user.married());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRecord {
    id: i32,
    fname: String,
    city: String,
    phone: i64,
    height: f32,
    married: bool,
}

impl UserRecord {
    /// Build a record from already-typed values.
    pub fn new(
        id: i32,
        fname: impl Into<String>,
        city: impl Into<String>,
        phone: i64,
        height: f32,
        married: bool,
    ) -> Self {
        Self {
            id,
            fname: fname.into(),
            city: city.into(),
            phone,
            height,
            married,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn fname(&self) -> &str {
        &self.fname
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn phone(&self) -> i64 {
        self.phone
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn married(&self) -> bool {
        self.married
    }
}

/// Counters describing what happened during a decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    /// Number of elements in the source array.
    pub elements: usize,
    /// Number of distinct records in the final mapping.
    pub loaded: usize,
    /// Elements dropped because a non-structural field was unusable.
    pub skipped: usize,
    /// Elements that replaced an earlier element with the same id.
    pub duplicates: usize,
}

/// Result of a successful decode: the id-keyed mapping plus its report.
#[derive(Debug, Clone, Default)]
pub struct DecodedRecords {
    pub records: HashMap<i32, UserRecord>,
    pub report: DecodeReport,
}

impl DecodedRecords {
    pub fn into_records(self) -> HashMap<i32, UserRecord> {
        self.records
    }
}
