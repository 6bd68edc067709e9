//! Seed loading metrics.
//!
//! `catalog_load_duration_seconds{collection}` and `catalog_records{collection}`.

use metrics::{gauge, histogram};
use std::time::Instant;

/// Started before a collection is parsed; [`LoadTimer::finish`] records
/// the elapsed time and the number of records kept.
pub struct LoadTimer {
    collection: &'static str,
    start: Instant,
}

impl LoadTimer {
    pub fn start(collection: &'static str) -> Self {
        Self {
            collection,
            start: Instant::now(),
        }
    }

    pub fn finish(self, records: usize) {
        histogram!("catalog_load_duration_seconds", "collection" => self.collection)
            .record(self.start.elapsed().as_secs_f64());
        gauge!("catalog_records", "collection" => self.collection).set(records as f64);
    }
}
