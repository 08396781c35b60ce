//! # Directory record store
//!
//! [`RecordStore`] owns the id → [`UserRecord`] mapping produced by the
//! decoder. It is filled exactly once, at construction, and never mutated
//! afterwards, so a single instance can be shared as `Arc<RecordStore>`
//! across any number of threads or tasks without locking.
//!
//! ## Operations
//!
//! - [`get_by_id`](RecordStore::get_by_id): O(1) exact lookup, `NotFound`
//!   when absent.
//! - [`get_by_ids`](RecordStore::get_by_ids): records for the ids that
//!   exist, in input order, each id at most once. Missing ids are omitted.
//! - [`search`](RecordStore::search): validate criteria, then scan every
//!   record through the matcher. Results are sorted by id ascending. An
//!   empty result is reported as [`StoreError::NoMatch`].
//!
//! ## Example Usage
//!
//! ```
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use matcher::SearchCriterion;
//! use records::{NoopDiagnostics, UserRecord};
//! use store::{RecordStore, StoreError};
//!
//! let records = HashMap::from([
//!     (1, UserRecord::new(1, "John", "NYC", 5551234567, 5.9, true)),
//!     (2, UserRecord::new(2, "Jane", "LA", 5559876543, 5.5, false)),
//! ]);
//! let store = RecordStore::new(records, Arc::new(NoopDiagnostics));
//!
//! assert_eq!(store.get_by_id(2).unwrap().fname(), "Jane");
//! assert!(matches!(store.get_by_id(3), Err(StoreError::NotFound { id: 3 })));
//!
//! let married = store.search(&[SearchCriterion::new("married", "true")]).unwrap();
//! assert_eq!(married.len(), 1);
//! assert_eq!(married[0].id(), 1);
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use matcher::{validate_criteria, Criterion, Matcher, SearchCriterion, ValidationError};
use records::{load_file, DecodeConfig, DecodeError, DecodedRecords, Diagnostics, UserRecord};
use thiserror::Error;

/// Per-request failures from the store. None of these are fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record carries the requested id.
    #[error("user {id} not found")]
    NotFound { id: i32 },

    /// A criteria search matched no record.
    #[error("no users found")]
    NoMatch,

    /// A criterion failed validation; no record was examined.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Immutable, id-keyed collection of user records.
pub struct RecordStore {
    records: HashMap<i32, UserRecord>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.records.len())
            .finish_non_exhaustive()
    }
}

impl RecordStore {
    /// Build a store that takes ownership of `records`.
    pub fn new(records: HashMap<i32, UserRecord>, diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self {
            records,
            diagnostics,
        }
    }

    /// Build a store from the output of the decoder.
    pub fn from_decoded(decoded: DecodedRecords, diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self::new(decoded.into_records(), diagnostics)
    }

    /// Decode the document at `path` and build a store from it.
    ///
    /// The same diagnostics sink receives the decode signals and, later, the
    /// lookup signals.
    pub fn load(
        path: impl AsRef<Path>,
        cfg: &DecodeConfig,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Result<Self, DecodeError> {
        let decoded = load_file(path, cfg, diagnostics.as_ref())?;
        Ok(Self::from_decoded(decoded, diagnostics))
    }

    /// Exact lookup by id.
    pub fn get_by_id(&self, id: i32) -> Result<&UserRecord, StoreError> {
        match self.records.get(&id) {
            Some(record) => Ok(record),
            None => {
                self.diagnostics.lookup_missed(id);
                Err(StoreError::NotFound { id })
            }
        }
    }

    /// Records for every id that exists, in input order.
    ///
    /// Repeated ids produce a single entry at the position of their first
    /// occurrence. Unknown ids are left out and reported once each through
    /// [`Diagnostics::lookup_missed`].
    pub fn get_by_ids(&self, ids: &[i32]) -> Vec<&UserRecord> {
        let mut seen = HashSet::with_capacity(ids.len());
        ids.iter()
            .filter(|id| seen.insert(**id))
            .filter_map(|id| {
                let record = self.records.get(id);
                if record.is_none() {
                    self.diagnostics.lookup_missed(*id);
                }
                record
            })
            .collect()
    }

    /// Validate `criteria` and return every record satisfying all of them.
    ///
    /// Zero criteria select every record.
    pub fn search(&self, criteria: &[SearchCriterion]) -> Result<Vec<&UserRecord>, StoreError> {
        let criteria = validate_criteria(criteria)?;
        self.search_validated(&criteria)
    }

    /// Like [`search`](Self::search) for criteria that are already validated.
    pub fn search_validated(&self, criteria: &[Criterion]) -> Result<Vec<&UserRecord>, StoreError> {
        let start = Instant::now();
        let matcher = Matcher::new(criteria);

        let mut hits: Vec<&UserRecord> = self
            .records
            .values()
            .filter(|record| matcher.matches(record))
            .collect();
        hits.sort_unstable_by_key(|record| record.id());

        self.diagnostics
            .search_finished(criteria.len(), hits.len(), start.elapsed());

        if hits.is_empty() {
            return Err(StoreError::NoMatch);
        }
        Ok(hits)
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All ids, ascending.
    pub fn ids(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self.records.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use matcher::FieldName;
    use records::NoopDiagnostics;

    use super::*;

    fn john() -> UserRecord {
        UserRecord::new(1, "John", "NYC", 5551234567, 5.9, true)
    }

    fn jane() -> UserRecord {
        UserRecord::new(2, "Jane", "LA", 5559876543, 5.5, false)
    }

    fn sample_store() -> RecordStore {
        let records = [
            john(),
            jane(),
            UserRecord::new(3, "Jim", "NYC", 5550000003, 6.1, true),
            UserRecord::new(4, "Jill", "Boston", 5550000004, 5.4, false),
        ]
        .into_iter()
        .map(|r| (r.id(), r))
        .collect();
        RecordStore::new(records, Arc::new(NoopDiagnostics))
    }

    fn ids(records: &[&UserRecord]) -> Vec<i32> {
        records.iter().map(|r| r.id()).collect()
    }

    #[derive(Default)]
    struct Counting {
        misses: AtomicUsize,
        searches: AtomicUsize,
    }

    impl Diagnostics for Counting {
        fn lookup_missed(&self, _id: i32) {
            self.misses.fetch_add(1, Ordering::SeqCst);
        }

        fn search_finished(&self, _criteria: usize, _hits: usize, _elapsed: Duration) {
            self.searches.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn store_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RecordStore>();
    }

    #[test]
    fn get_by_id_returns_matching_record() {
        let store = sample_store();
        for id in store.ids() {
            assert_eq!(store.get_by_id(id).expect("present").id(), id);
        }
    }

    #[test]
    fn get_by_id_absent_is_not_found() {
        let store = sample_store();
        assert_eq!(store.get_by_id(99), Err(StoreError::NotFound { id: 99 }));
        assert_eq!(store.get_by_id(0), Err(StoreError::NotFound { id: 0 }));
    }

    #[test]
    fn get_by_ids_preserves_order_and_dedupes() {
        let store = sample_store();
        assert!(store.get_by_ids(&[]).is_empty());
        assert_eq!(ids(&store.get_by_ids(&[3, 1, 42, 3, 2, 1])), vec![3, 1, 2]);
        assert!(store.get_by_ids(&[100, -1]).is_empty());
    }

    #[test]
    fn search_returns_sorted_hits() {
        let store = sample_store();
        let hits = store
            .search(&[SearchCriterion::new("city", "NYC")])
            .expect("hits");
        assert_eq!(ids(&hits), vec![1, 3]);
    }

    #[test]
    fn search_with_no_criteria_returns_everything() {
        let store = sample_store();
        assert_eq!(ids(&store.search(&[]).expect("all")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_with_no_hits_is_no_match() {
        let store = sample_store();
        let result = store.search(&[
            SearchCriterion::new("city", "NYC"),
            SearchCriterion::new("married", "false"),
        ]);
        assert_eq!(result, Err(StoreError::NoMatch));
    }

    #[test]
    fn empty_store_search_is_no_match() {
        let store = RecordStore::new(HashMap::new(), Arc::new(NoopDiagnostics));
        assert!(store.is_empty());
        assert_eq!(store.search(&[]), Err(StoreError::NoMatch));
    }

    #[test]
    fn unknown_field_is_validation_error() {
        let store = sample_store();
        let result = store.search(&[SearchCriterion::new("zipcode", "10001")]);
        assert_eq!(
            result,
            Err(StoreError::Validation(ValidationError::UnknownField(
                "zipcode".into()
            )))
        );
    }

    #[test]
    fn search_validated_fails_closed_on_unparsable_value() {
        let store = sample_store();
        let criteria = [Criterion::new(FieldName::Phone, "not-a-number")];
        assert_eq!(store.search_validated(&criteria), Err(StoreError::NoMatch));
    }

    #[test]
    fn diagnostics_are_injected() {
        let counting = Arc::new(Counting::default());
        let records = [(1, john())].into_iter().collect();
        let store = RecordStore::new(records, counting.clone());

        let _ = store.get_by_id(7);
        let _ = store.search(&[]);
        let _ = store.search(&[SearchCriterion::new("fname", "Nobody")]);

        assert_eq!(counting.misses.load(Ordering::SeqCst), 1);
        assert_eq!(counting.searches.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn get_by_ids_reports_each_missing_id_once() {
        let counting = Arc::new(Counting::default());
        let records = [(1, john()), (2, jane())].into_iter().collect();
        let store = RecordStore::new(records, counting.clone());

        let found = store.get_by_ids(&[2, 40, 1, 40, 41]);

        assert_eq!(ids(&found), vec![2, 1]);
        assert_eq!(counting.misses.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn load_builds_store_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"[{{"id":1,"fname":"John","city":"NYC","phone":5551234567,"height":5.9,"married":true}}]"#
        )
        .expect("write");

        let store = RecordStore::load(file.path(), &DecodeConfig::default(), Arc::new(NoopDiagnostics))
            .expect("load");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_by_id(1).expect("present"), &john());
    }
}
