//! Construction parameters for `HashTable`

use crate::error::{HashTableError, Result};

/// Bucket count used by `HashTable::new`
pub const DEFAULT_BUCKET_COUNT: usize = 16;

/// Load factor threshold used by `HashTable::new`
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Parameters a `HashTable` is built from.
///
/// ```rust
/// use chaintable::{HashTable, TableConfig};
///
/// let config = TableConfig::default().with_initial_bucket_count(4).with_load_factor(1.5);
/// let table: HashTable<u32> = HashTable::with_config(config)?;
/// assert_eq!(table.bucket_count(), 4);
/// # Ok::<(), chaintable::HashTableError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// Number of buckets allocated up front. Not rounded to a power of two.
    pub initial_bucket_count: usize,
    /// Maximum tolerated `len / bucket_count` before the table grows
    pub load_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { initial_bucket_count: DEFAULT_BUCKET_COUNT, load_factor: DEFAULT_LOAD_FACTOR }
    }
}

impl TableConfig {
    /// Sets the number of buckets allocated on construction
    #[must_use]
    pub fn with_initial_bucket_count(mut self, bucket_count: usize) -> Self {
        self.initial_bucket_count = bucket_count;
        self
    }

    /// Sets the load factor threshold
    #[must_use]
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks that the parameters describe a usable table.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::InvalidBucketCount`] for zero buckets and
    /// [`HashTableError::InvalidLoadFactor`] when the load factor is not a
    /// finite number greater than zero.
    pub fn validate(&self) -> Result<()> {
        if self.initial_bucket_count == 0 {
            return Err(HashTableError::InvalidBucketCount(self.initial_bucket_count));
        }
        validate_load_factor(self.load_factor)
    }
}

/// Rejects NaN, infinite, zero and negative thresholds
pub(crate) fn validate_load_factor(load_factor: f64) -> Result<()> {
    if load_factor.is_finite() && load_factor > 0.0 {
        Ok(())
    } else {
        Err(HashTableError::InvalidLoadFactor(load_factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TableConfig::default();
        assert_eq!(config.initial_bucket_count, 16);
        assert!((config.load_factor - 0.75).abs() < f64::EPSILON);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_buckets() {
        let config = TableConfig::default().with_initial_bucket_count(0);
        assert_eq!(config.validate(), Err(HashTableError::InvalidBucketCount(0)));
    }

    #[test]
    fn test_rejects_bad_load_factors() {
        for load_factor in [0.0, -1.0, f64::INFINITY] {
            let config = TableConfig::default().with_load_factor(load_factor);
            assert_eq!(config.validate(), Err(HashTableError::InvalidLoadFactor(load_factor)));
        }

        let config = TableConfig::default().with_load_factor(f64::NAN);
        assert!(matches!(config.validate(), Err(HashTableError::InvalidLoadFactor(lf)) if lf.is_nan()));
    }

    #[test]
    fn test_accepts_load_factor_above_one() {
        let config = TableConfig::default().with_initial_bucket_count(3).with_load_factor(2.5);
        assert_eq!(config.validate(), Ok(()));
    }
}
