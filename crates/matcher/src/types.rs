use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of record fields a criterion may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    /// First name; exact, case-sensitive text equality.
    Fname,
    /// City; exact, case-sensitive text equality.
    City,
    /// Phone number; base-10 integer equality.
    Phone,
    /// Height; equality at `f32` precision.
    Height,
    /// Marital status; boolean token equality.
    Married,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Fname,
        FieldName::City,
        FieldName::Phone,
        FieldName::Height,
        FieldName::Married,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Fname => "fname",
            FieldName::City => "city",
            FieldName::Phone => "phone",
            FieldName::Height => "height",
            FieldName::Married => "married",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

/// A criterion as supplied by a caller: two pieces of text.
///
/// Accepts both `field_name`/`field_value` and the camel-case
/// `fieldName`/`fieldValue` spellings on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriterion {
    #[serde(alias = "fieldName")]
    pub field_name: String,
    #[serde(alias = "fieldValue")]
    pub field_value: String,
}

impl SearchCriterion {
    pub fn new(field_name: impl Into<String>, field_value: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            field_value: field_value.into(),
        }
    }
}

/// A criterion whose field name has been resolved to a [`FieldName`].
///
/// The value stays textual; it is coerced to the field's native type at
/// match time. Criteria built through [`SearchCriterion::validate`] have
/// already passed the per-field format checks, but the matcher does not rely
/// on that and fails closed on anything it cannot parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    field: FieldName,
    value: String,
}

impl Criterion {
    pub fn new(field: FieldName, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    pub fn field(&self) -> FieldName {
        self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Errors produced while validating caller-supplied criteria.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("field name cannot be empty")]
    EmptyFieldName,

    #[error("field value cannot be empty for `{field}`")]
    EmptyFieldValue { field: String },

    #[error("unsupported field name: {0}")]
    UnknownField(String),

    #[error("invalid {field} format: {value}")]
    InvalidValue { field: FieldName, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
    }

    #[test]
    fn unknown_and_wrong_case_field_names_rejected() {
        assert_eq!(
            "zipcode".parse::<FieldName>(),
            Err(ValidationError::UnknownField("zipcode".into()))
        );
        assert!("FNAME".parse::<FieldName>().is_err());
    }

    #[test]
    fn search_criterion_accepts_both_spellings() {
        let snake: SearchCriterion =
            serde_json::from_str(r#"{"field_name":"city","field_value":"NYC"}"#).expect("snake");
        let camel: SearchCriterion =
            serde_json::from_str(r#"{"fieldName":"city","fieldValue":"NYC"}"#).expect("camel");
        assert_eq!(snake, camel);
        assert_eq!(snake, SearchCriterion::new("city", "NYC"));
    }
}
