//! # Chain Table
//!
//! A separate-chaining hash table from string keys to values of any type, built on a
//! plain bucket array.
//!
//! Keys are hashed with a rolling polynomial hash reduced modulo the bucket count.
//! Colliding keys share a bucket and are kept in a chain in insertion order. Once an
//! insertion pushes `len / bucket_count` above the load factor (0.75 by default), the
//! bucket array doubles and every entry is rehashed before the insertion returns.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chaintable::{HashTable, HashTableExtensions};
//!
//! // Create a new table with 16 buckets
//! let mut table = HashTable::new();
//!
//! // Insert values
//! table.set("apple", 1)?;
//! table.set("banana", 2)?;
//!
//! // Retrieve values
//! assert_eq!(table.get("apple")?, Some(&1));
//! assert!(table.has("banana")?);
//!
//! // Update values
//! table.set("apple", 10)?;
//! assert_eq!(table.get("apple")?, Some(&10));
//! assert_eq!(table.len(), 2);
//!
//! // Remove values
//! assert!(table.remove("apple")?);
//! assert_eq!(table.get("apple")?, None);
//!
//! // Bulk views
//! assert_eq!(table.keys(), vec!["banana"]);
//! # Ok::<(), chaintable::HashTableError>(())
//! ```
//!
//! ## Growth
//!
//! ```rust
//! use chaintable::HashTable;
//!
//! let mut table = HashTable::with_params(4, 0.5)?;
//! table.set("one", 1)?;
//! table.set("two", 2)?;
//! assert_eq!(table.bucket_count(), 4);
//!
//! // 3 / 4 exceeds 0.5, so the bucket array doubles
//! table.set("three", 3)?;
//! assert_eq!(table.bucket_count(), 8);
//! assert_eq!(table.get("one")?, Some(&1));
//! # Ok::<(), chaintable::HashTableError>(())
//! ```

/// Construction parameters and their validation
mod config;
/// Error type for table operations
mod error;
/// The rolling polynomial string hash
pub mod hash;
/// Module implementing the separate-chaining hash table
mod hash_table;
/// `env_logger` initialisation
pub mod logger;
/// Utility functions and traits for the hash table
mod utils;

pub use config::{DEFAULT_BUCKET_COUNT, DEFAULT_LOAD_FACTOR, TableConfig};
pub use error::{HashTableError, Result};
pub use hash_table::{HashTable, Iter, TableStats};
pub use utils::{HashTableExtensions, from_pairs};
