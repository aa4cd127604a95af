//! Extraction statistics

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;

/// Counters shared by every extraction made through one extractor
#[derive(Debug)]
pub struct ExtractionStats {
    /// Documents that passed the sniff and were filtered
    pub documents_processed: AtomicU64,
    /// Documents rejected by the leading-character sniff
    pub documents_skipped: AtomicU64,
    /// Documents whose tokenization failed
    pub failures: AtomicU64,
    /// Input bytes of processed documents
    pub bytes_processed: AtomicU64,
    /// Creation time
    pub start_time: Instant,
}

/// Point-in-time copy of `ExtractionStats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub documents_processed: u64,
    pub documents_skipped: u64,
    pub failures: u64,
    pub bytes_processed: u64,
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStats {
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents_processed: AtomicU64::new(0),
            documents_skipped: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            bytes_processed: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_document(&self, bytes: usize) {
        self.documents_processed.fetch_add(1, Ordering::Relaxed);
        self.bytes_processed.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    pub fn record_skipped(&self) {
        self.documents_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            documents_processed: self.documents_processed.load(Ordering::Relaxed),
            documents_skipped: self.documents_skipped.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            bytes_processed: self.bytes_processed.load(Ordering::Relaxed),
        }
    }

    /// Time since the counters were created
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.start_time.elapsed()
    }
}
