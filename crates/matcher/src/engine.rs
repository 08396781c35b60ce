use records::UserRecord;

use crate::coerce::{parse_bool, parse_height, parse_phone};
use crate::types::{Criterion, FieldName};


/// True iff `record` satisfies every criterion.
///
/// An empty slice is vacuously true. Evaluation stops at the first failing
/// criterion.
pub fn matches(record: &UserRecord, criteria: &[Criterion]) -> bool {
    criteria.iter().all(|criterion| matches_one(record, criterion))
}

/// Evaluate a single criterion against a record.
///
/// Values that cannot be coerced to the field's type evaluate to false.
pub fn matches_one(record: &UserRecord, criterion: &Criterion) -> bool {
    Predicate::compile(criterion).test(record)
}

/// A field predicate with its value already coerced.
///
/// `None` payloads mark values that failed coercion; they never match.
#[derive(Debug, Clone, PartialEq)]
enum Predicate {
    Fname(String),
    City(String),
    Phone(Option<i64>),
    Height(Option<f32>),
    Married(Option<bool>),
}

impl Predicate {
    fn compile(criterion: &Criterion) -> Self {
        let value = criterion.value();
        match criterion.field() {
            FieldName::Fname => Predicate::Fname(value.to_string()),
            FieldName::City => Predicate::City(value.to_string()),
            FieldName::Phone => Predicate::Phone(parse_phone(value)),
            FieldName::Height => Predicate::Height(parse_height(value)),
            FieldName::Married => Predicate::Married(parse_bool(value)),
        }
    }

    fn test(&self, record: &UserRecord) -> bool {
        match self {
            Predicate::Fname(name) => record.fname() == name,
            Predicate::City(city) => record.city() == city,
            Predicate::Phone(phone) => *phone == Some(record.phone()),
            Predicate::Height(height) => *height == Some(record.height()),
            Predicate::Married(married) => *married == Some(record.married()),
        }
    }
}

/// A conjunction of criteria coerced once and reused across many records.
///
/// Produces exactly the same answers as [`matches`]; it only avoids
/// re-parsing criterion values for every record in a scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Matcher {
    predicates: Vec<Predicate>,
}

impl Matcher {
    pub fn new(criteria: &[Criterion]) -> Self {
        Self {
            predicates: criteria.iter().map(Predicate::compile).collect(),
        }
    }

    /// True iff `record` satisfies every compiled predicate.
    pub fn matches(&self, record: &UserRecord) -> bool {
        self.predicates.iter().all(|predicate| predicate.test(record))
    }

    /// Number of predicates in the conjunction.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}
