//! Hash-backed sparse storage backend with amortized eviction
//!
//! Absent slots are logically zero. Mutable access cannot know whether the
//! caller is about to write a zero, so every mutable access records its index
//! as recently touched instead of comparing on each write. Once the number of
//! mutable accesses since the last sweep exceeds the eviction threshold, a
//! compaction sweep visits exactly the recently touched indices and evicts
//! those whose current value is zero.
//!
//! Sweep work is bounded by the touches since the previous sweep, and sweeps
//! happen at least every `threshold + 1` mutable accesses, so the overhead per
//! mutation is amortized O(1).

use dynmat_core::{MatrixElement, StorageBackend};
use hashbrown::HashMap;
use tracing::debug;

use crate::config::SparseConfig;

/// Sparse storage keyed by row-major linear index
#[derive(Debug, Clone)]
pub struct SparseBackend<T> {
    entries: HashMap<usize, T>,
    recently_touched: Vec<usize>,
    touch_count: usize,
    max_size: usize,
    eviction_threshold: usize,
    config: SparseConfig,
}

impl<T: MatrixElement> SparseBackend<T> {
    /// Create an empty backend for `rows * cols` slots with the given policy
    pub fn with_config(rows: usize, cols: usize, config: &SparseConfig) -> Self {
        let max_size = rows * cols;
        Self {
            entries: HashMap::new(),
            recently_touched: Vec::with_capacity(config.track_capacity_hint),
            touch_count: 0,
            max_size,
            eviction_threshold: config.eviction_threshold(max_size),
            config: config.clone(),
        }
    }

    /// The eviction policy this backend was created with
    pub fn config(&self) -> &SparseConfig {
        &self.config
    }

    /// Number of entries physically stored, including not-yet-evicted zeros
    pub fn stored_len(&self) -> usize {
        self.entries.len()
    }

    /// Whether `index` currently has a physical entry
    pub fn is_stored(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Mutable accesses since the last compaction sweep
    pub fn pending_touches(&self) -> usize {
        self.touch_count
    }

    /// Mutable accesses tolerated before a sweep runs
    pub fn eviction_threshold(&self) -> usize {
        self.eviction_threshold
    }

    /// Iterate over physically stored `(index, value)` pairs
    ///
    /// Iteration order is the hash map's and is not sorted.
    pub fn entries(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.entries.iter().map(|(&index, &value)| (index, value))
    }

    /// Evict every recently touched entry whose value is zero and reset the
    /// touch tracking
    pub fn compact(&mut self) {
        let zero = T::zero();
        let swept = self.recently_touched.len();
        let mut evicted = 0;

        for index in self.recently_touched.drain(..) {
            if self.entries.get(&index) == Some(&zero) {
                self.entries.remove(&index);
                evicted += 1;
            }
        }
        self.touch_count = 0;

        debug!(
            swept,
            evicted,
            stored = self.entries.len(),
            threshold = self.eviction_threshold,
            "sparse compaction sweep"
        );
    }

    /// Count one mutable access, sweeping once the threshold is exceeded
    fn tick(&mut self) {
        self.touch_count += 1;
        if self.touch_count > self.eviction_threshold {
            self.compact();
        }
    }
}

impl<T: MatrixElement> StorageBackend for SparseBackend<T> {
    type Elem = T;
    type Rebind<U: MatrixElement> = SparseBackend<U>;

    fn new(rows: usize, cols: usize) -> Self {
        Self::with_config(rows, cols, &SparseConfig::default())
    }

    fn empty_like(&self, rows: usize, cols: usize) -> Self {
        Self::with_config(rows, cols, &self.config)
    }

    fn len(&self) -> usize {
        self.max_size
    }

    fn get(&self, index: usize) -> T {
        self.entries.get(&index).copied().unwrap_or_else(T::zero)
    }

    fn get_mut(&mut self, index: usize) -> &mut T {
        self.tick();
        self.recently_touched.push(index);
        self.entries.entry(index).or_insert_with(T::zero)
    }

    fn set(&mut self, index: usize, value: T) {
        *self.get_mut(index) = value;
    }

    fn get_many_mut(&mut self, indices: &[usize]) -> Vec<&mut T> {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));

        // Sweeps must finish before any entry is materialized, otherwise a
        // sweep could evict a zero entry that a handle is about to point at.
        for _ in indices {
            self.tick();
        }
        self.recently_touched.extend_from_slice(indices);
        for &index in indices {
            self.entries.entry(index).or_insert_with(T::zero);
        }

        let mut slots: Vec<Option<&mut T>> = indices.iter().map(|_| None).collect();
        for (index, value) in self.entries.iter_mut() {
            if let Ok(position) = indices.binary_search(index) {
                slots[position] = Some(value);
            }
        }
        slots.into_iter().flatten().collect()
    }
}
