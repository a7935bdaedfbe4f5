use std::collections::{BTreeMap, HashMap};

use parking_lot::Mutex;

use crate::core::types::DocId;

/// Default stripe count.
pub const DEFAULT_BUCKET_COUNT: usize = 50;

/// Striped accumulator map for parallel relevance aggregation.
///
/// Key `k` lands in bucket `k mod bucket_count`; each bucket has its own
/// lock, so writers touching different buckets never block each other.
/// Reading the merged result is only meaningful once all contributors
/// finished.
pub struct ConcurrentMap {
    buckets: Vec<Mutex<HashMap<DocId, f64>>>,
}

impl ConcurrentMap {
    pub fn new(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        ConcurrentMap {
            buckets: (0..bucket_count).map(|_| Mutex::new(HashMap::new())).collect(),
        }
    }

    fn bucket(&self, key: DocId) -> &Mutex<HashMap<DocId, f64>> {
        let index = (key.value() as i64).rem_euclid(self.buckets.len() as i64) as usize;
        &self.buckets[index]
    }

    /// Adds `delta` to the entry for `key`, creating it at zero if absent.
    pub fn add(&self, key: DocId, delta: f64) {
        *self.bucket(key).lock().entry(key).or_insert(0.0) += delta;
    }

    /// Removes the entry for `key` if present.
    pub fn erase(&self, key: DocId) {
        self.bucket(key).lock().remove(&key);
    }

    /// Merges all buckets into one key-ordered map.
    pub fn build_ordered(&self) -> BTreeMap<DocId, f64> {
        let mut merged = BTreeMap::new();
        for bucket in &self.buckets {
            for (&key, &value) in bucket.lock().iter() {
                merged.insert(key, value);
            }
        }
        merged
    }
}

impl Default for ConcurrentMap {
    fn default() -> Self {
        ConcurrentMap::new(DEFAULT_BUCKET_COUNT)
    }
}
