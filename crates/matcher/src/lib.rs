//! # Directory criteria matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` decides whether a [`records::UserRecord`] satisfies a list of
//! field criteria. Criteria arrive as text pairs ([`SearchCriterion`]), are
//! validated into [`Criterion`] values with a resolved [`FieldName`], and are
//! then evaluated as a logical AND.
//!
//! ## Core Types
//!
//! - [`FieldName`]: the closed set `fname`, `city`, `phone`, `height`, `married`.
//! - [`SearchCriterion`]: wire shape, two strings.
//! - [`Criterion`]: validated field + textual value.
//! - [`Matcher`]: a conjunction coerced once and applied to many records.
//!
//! ## Comparison rules
//!
//! - `fname`, `city`: exact, case-sensitive equality.
//! - `phone`: base-10 `i64` equality.
//! - `height`: value parsed to `f32`, compared with the stored `f32`.
//! - `married`: boolean token (`true`, `T`, `1`, `false`, ...) equality.
//!
//! A value that cannot be coerced never matches; nothing here panics.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{validate_criteria, Matcher, SearchCriterion};
//! use records::UserRecord;
//!
//! let john = UserRecord::new(1, "John", "NYC", 5551234567, 5.9, true);
//! let criteria = validate_criteria(&[
//!     SearchCriterion::new("city", "NYC"),
//!     SearchCriterion::new("height", "5.9"),
//! ])
//! .unwrap();
//!
//! assert!(matcher::matches(&john, &criteria));
//! assert!(Matcher::new(&criteria).matches(&john));
//! ```

pub mod coerce;
pub mod engine;
pub mod types;
pub mod validation;

pub use crate::engine::{matches, matches_one, Matcher};
pub use crate::types::{Criterion, FieldName, SearchCriterion, ValidationError};
pub use crate::validation::validate_criteria;
