//! Configuration for the sparse backend's eviction policy

/// Configuration for sparse compaction sweeps
///
/// A sweep runs once the number of mutable accesses since the previous sweep
/// exceeds `ceil(eviction_percent / 100 * rows * cols)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseConfig {
    /// Percentage of the logical slot count that triggers a sweep
    pub eviction_percent: usize,
    /// Initial capacity reserved for the recently-touched index list
    pub track_capacity_hint: usize,
}

impl SparseConfig {
    /// Create config with an eviction percentage
    pub fn with_eviction_percent(eviction_percent: usize) -> Self {
        Self {
            eviction_percent,
            ..Self::default()
        }
    }

    /// Set the initial capacity of the recently-touched list
    pub fn with_track_capacity_hint(mut self, capacity: usize) -> Self {
        self.track_capacity_hint = capacity;
        self
    }

    /// Number of mutable accesses tolerated between sweeps for `max_size` slots
    pub fn eviction_threshold(&self, max_size: usize) -> usize {
        (max_size * self.eviction_percent).div_ceil(100)
    }
}

impl Default for SparseConfig {
    fn default() -> Self {
        Self {
            eviction_percent: 5,
            track_capacity_hint: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_rounds_up() {
        let config = SparseConfig::default();
        assert_eq!(config.eviction_threshold(100), 5);
        assert_eq!(config.eviction_threshold(101), 6);
        assert_eq!(config.eviction_threshold(9), 1);
        assert_eq!(config.eviction_threshold(0), 0);
    }

    #[test]
    fn test_custom_percent() {
        let config = SparseConfig::with_eviction_percent(50).with_track_capacity_hint(16);
        assert_eq!(config.eviction_threshold(10), 5);
        assert_eq!(config.track_capacity_hint, 16);
    }
}
