//! Document decoder: JSON array of field maps → id-keyed [`UserRecord`]s.
//!
//! Policy for malformed input:
//!
//! - `id` is structural. A missing, non-numeric, out-of-range or non-positive
//!   `id` fails the whole load with [`DecodeError::Schema`].
//! - Any other unusable field drops that one element; the drop is reported
//!   through [`Diagnostics::record_skipped`] and counted in the report.
//! - Repeated ids are last-write-wins. A skipped element never replaces an
//!   earlier valid one.
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use serde_json::{Map, Number, Value};

use crate::config::DecodeConfig;
use crate::diagnostics::Diagnostics;
use crate::error::{DecodeError, SkipReason};
use crate::types::{DecodeReport, DecodedRecords, UserRecord};

type Fields = Map<String, Value>;

/// Read `path` and decode it with [`decode_document`].
pub fn load_file(
    path: impl AsRef<Path>,
    cfg: &DecodeConfig,
    diagnostics: &dyn Diagnostics,
) -> Result<DecodedRecords, DecodeError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| DecodeError::DataSource {
        path: path.to_path_buf(),
        source,
    })?;
    decode_document(&bytes, cfg, diagnostics)
}

/// Decode a JSON document into typed records.
///
/// # Examples
///
/// ```rust
/// use records::{decode_document, DecodeConfig, NoopDiagnostics};
///
/// let doc = br#"[{"id":1,"fname":"John","city":"NYC","phone":5551234567,"height":5.9,"married":true}]"#;
/// let decoded = decode_document(doc, &DecodeConfig::default(), &NoopDiagnostics).unwrap();
/// assert_eq!(decoded.records[&1].city(), "NYC");
/// assert_eq!(decoded.report.loaded, 1);
/// ```
pub fn decode_document(
    input: &[u8],
    cfg: &DecodeConfig,
    diagnostics: &dyn Diagnostics,
) -> Result<DecodedRecords, DecodeError> {
    let start = Instant::now();

    if let Some(limit) = cfg.max_document_bytes {
        if input.len() > limit {
            return Err(DecodeError::schema(format!(
                "document size {} exceeds limit of {limit} bytes",
                input.len()
            )));
        }
    }

    let elements: Vec<Value> = serde_json::from_slice(input).map_err(|err| {
        DecodeError::schema(format!("expected a JSON array of user objects: {err}"))
    })?;

    if let Some(limit) = cfg.max_records {
        if elements.len() > limit {
            return Err(DecodeError::schema(format!(
                "document holds {} elements, limit is {limit}",
                elements.len()
            )));
        }
    }

    let mut report = DecodeReport {
        elements: elements.len(),
        ..DecodeReport::default()
    };
    let mut records = HashMap::with_capacity(elements.len());

    for (index, element) in elements.into_iter().enumerate() {
        let Value::Object(fields) = element else {
            return Err(DecodeError::schema(format!(
                "element {index} is not an object"
            )));
        };
        let id = decode_id(index, &fields)?;

        match decode_fields(id, &fields) {
            Ok(record) => {
                if records.insert(id, record).is_some() {
                    report.duplicates += 1;
                    diagnostics.duplicate_replaced(index, id);
                }
            }
            Err(reason) => {
                report.skipped += 1;
                diagnostics.record_skipped(index, id, &reason);
            }
        }
    }

    report.loaded = records.len();
    diagnostics.decode_finished(&report, start.elapsed());
    Ok(DecodedRecords { records, report })
}

fn decode_id(index: usize, fields: &Fields) -> Result<i32, DecodeError> {
    let value = fields
        .get("id")
        .ok_or_else(|| DecodeError::schema(format!("element {index}: missing field `id`")))?;
    let Value::Number(number) = value else {
        return Err(DecodeError::schema(format!(
            "element {index}: field `id` must be a number"
        )));
    };
    let id = truncate_to_i64(number)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| {
            DecodeError::schema(format!("element {index}: field `id` is out of range"))
        })?;
    if id <= 0 {
        return Err(DecodeError::schema(format!(
            "element {index}: field `id` must be positive, got {id}"
        )));
    }
    Ok(id)
}

fn decode_fields(id: i32, fields: &Fields) -> Result<UserRecord, SkipReason> {
    let fname = text_field(fields, "fname")?;
    let city = text_field(fields, "city")?;
    let phone = truncate_to_i64(number_field(fields, "phone")?)
        .ok_or(SkipReason::OutOfRange { field: "phone" })?;
    let height = number_field(fields, "height")?
        .as_f64()
        .map(|h| h as f32)
        .filter(|h| h.is_finite())
        .ok_or(SkipReason::OutOfRange { field: "height" })?;
    let married = match field(fields, "married")? {
        Value::Bool(b) => *b,
        _ => {
            return Err(SkipReason::WrongType {
                field: "married",
                expected: "boolean",
            })
        }
    };

    Ok(UserRecord::new(id, fname, city, phone, height, married))
}

fn field<'a>(fields: &'a Fields, name: &'static str) -> Result<&'a Value, SkipReason> {
    fields.get(name).ok_or(SkipReason::Missing { field: name })
}

fn text_field<'a>(fields: &'a Fields, name: &'static str) -> Result<&'a str, SkipReason> {
    field(fields, name)?.as_str().ok_or(SkipReason::WrongType {
        field: name,
        expected: "string",
    })
}

fn number_field<'a>(fields: &'a Fields, name: &'static str) -> Result<&'a Number, SkipReason> {
    match field(fields, name)? {
        Value::Number(n) => Ok(n),
        _ => Err(SkipReason::WrongType {
            field: name,
            expected: "number",
        }),
    }
}

/// Integer view of a JSON number, truncating any fractional part toward zero.
fn truncate_to_i64(number: &Number) -> Option<i64> {
    if let Some(n) = number.as_i64() {
        return Some(n);
    }
    if number.is_u64() {
        return None;
    }
    let truncated = number.as_f64()?.trunc();
    // 2^63 is not representable as i64; the upper bound is exclusive.
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    if (-BOUND..BOUND).contains(&truncated) {
        Some(truncated as i64)
    } else {
        None
    }
}
