//! Error type shared by every fallible `HashTable` operation

use thiserror::Error;

/// Errors produced by the hash table.
///
/// A missing key is never an error: lookups report absence through `Option`
/// and `remove` through its boolean result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HashTableError {
    /// A bucket index outside `[0, bucket_count)` was used to access storage.
    ///
    /// The hash function always reduces modulo the bucket count, so this
    /// indicates an internal bug. It is raised before any mutation happens.
    #[error("bucket index {index} is out of range for {bucket_count} buckets")]
    OutOfRange {
        /// The offending index
        index: usize,
        /// Number of buckets at the time of the access
        bucket_count: usize,
    },
    /// The table was configured with zero buckets.
    #[error("initial bucket count must be positive, got {0}")]
    InvalidBucketCount(usize),
    /// The load factor threshold is not a finite positive number.
    #[error("load factor must be a finite positive number, got {0}")]
    InvalidLoadFactor(f64),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, HashTableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = HashTableError::OutOfRange { index: 16, bucket_count: 16 };
        assert_eq!(err.to_string(), "bucket index 16 is out of range for 16 buckets");

        let err = HashTableError::InvalidBucketCount(0);
        assert_eq!(err.to_string(), "initial bucket count must be positive, got 0");

        let err = HashTableError::InvalidLoadFactor(-0.5);
        assert_eq!(err.to_string(), "load factor must be a finite positive number, got -0.5");
    }
}
