//! Surface validation for caller-supplied criteria.
//!
//! Runs before any record is touched. Field names and values are trimmed,
//! then checked for emptiness, membership in [`FieldName`], and a per-field
//! format:
//!
//! | Field | Accepted value |
//! |-------|----------------|
//! | `fname` | letters only |
//! | `city` | letters and whitespace |
//! | `phone` | base-10 integer |
//! | `height` | finite float |
//! | `married` | boolean token |
use crate::coerce::{parse_bool, parse_height, parse_phone};
use crate::types::{Criterion, FieldName, SearchCriterion, ValidationError};

impl SearchCriterion {
    /// Validate this criterion and resolve its field name.
    ///
    /// ```rust
    /// use matcher::{FieldName, SearchCriterion, ValidationError};
    ///
    /// let ok = SearchCriterion::new(" city ", " NYC ").validate().unwrap();
    /// assert_eq!(ok.field(), FieldName::City);
    /// assert_eq!(ok.value(), "NYC");
    ///
    /// let err = SearchCriterion::new("zipcode", "10001").validate().unwrap_err();
    /// assert_eq!(err, ValidationError::UnknownField("zipcode".into()));
    /// ```
    pub fn validate(&self) -> Result<Criterion, ValidationError> {
        let name = self.field_name.trim();
        let value = self.field_value.trim();

        if name.is_empty() {
            return Err(ValidationError::EmptyFieldName);
        }
        if value.is_empty() {
            return Err(ValidationError::EmptyFieldValue {
                field: name.to_string(),
            });
        }

        let field: FieldName = name.parse()?;
        let well_formed = match field {
            FieldName::Fname => value.chars().all(char::is_alphabetic),
            FieldName::City => value
                .chars()
                .all(|c| c.is_alphabetic() || c.is_whitespace()),
            FieldName::Phone => parse_phone(value).is_some(),
            FieldName::Height => parse_height(value).is_some_and(f32::is_finite),
            FieldName::Married => parse_bool(value).is_some(),
        };
        if !well_formed {
            return Err(ValidationError::InvalidValue {
                field,
                value: value.to_string(),
            });
        }

        Ok(Criterion::new(field, value))
    }
}

/// Validate every criterion, stopping at the first failure.
pub fn validate_criteria(criteria: &[SearchCriterion]) -> Result<Vec<Criterion>, ValidationError> {
    criteria.iter().map(SearchCriterion::validate).collect()
}
