// Diagnostics hooks shared by the decoder and the record store.
//
// There is no process-wide recorder: callers hand an implementation to
// `decode_document`/`load_file` and to `RecordStore::new`, so tests and
// embedders can observe or silence output without touching global state.
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::SkipReason;
use crate::types::DecodeReport;

/// Observer for operator-facing signals from the core.
///
/// Every method has an empty default body so implementations only override
/// what they care about.
pub trait Diagnostics: Send + Sync {
    /// An element was dropped because one of its non-structural fields was
    /// unusable. `index` is the element's position in the source array.
    fn record_skipped(&self, index: usize, id: i32, reason: &SkipReason) {
        let _ = (index, id, reason);
    }

    /// An element replaced an earlier element carrying the same id.
    fn duplicate_replaced(&self, index: usize, id: i32) {
        let _ = (index, id);
    }

    /// A decode finished successfully.
    fn decode_finished(&self, report: &DecodeReport, elapsed: Duration) {
        let _ = (report, elapsed);
    }

    /// A single-id lookup found nothing.
    fn lookup_missed(&self, id: i32) {
        let _ = id;
    }

    /// A criteria search completed. `hits` is zero for searches that end in
    /// a no-match error.
    fn search_finished(&self, criteria: usize, hits: usize, elapsed: Duration) {
        let _ = (criteria, hits, elapsed);
    }
}

/// Discards every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {}

/// Forwards every signal as a structured `tracing` event.
///
/// Whether anything is printed depends on the subscriber the binary installs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn record_skipped(&self, index: usize, id: i32, reason: &SkipReason) {
        warn!(index, id, reason = %reason, "decode_record_skipped");
    }

    fn duplicate_replaced(&self, index: usize, id: i32) {
        warn!(index, id, "decode_duplicate_id");
    }

    fn decode_finished(&self, report: &DecodeReport, elapsed: Duration) {
        info!(
            elements = report.elements,
            loaded = report.loaded,
            skipped = report.skipped,
            duplicates = report.duplicates,
            elapsed_micros = elapsed.as_micros(),
            "decode_success"
        );
    }

    fn lookup_missed(&self, id: i32) {
        debug!(id, "store_lookup_miss");
    }

    fn search_finished(&self, criteria: usize, hits: usize, elapsed: Duration) {
        debug!(
            criteria,
            hits,
            elapsed_micros = elapsed.as_micros(),
            "store_search"
        );
    }
}
