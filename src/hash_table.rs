use std::{iter, mem, num::NonZeroUsize, slice};

use log::{debug, trace};

use crate::{
    config::{self, DEFAULT_BUCKET_COUNT, DEFAULT_LOAD_FACTOR, TableConfig},
    error::{HashTableError, Result},
    hash::polynomial_hash,
};

/// A key-value pair stored in a chain
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key, compared by exact string equality
    key: String,
    /// The value associated with the key
    value: V,
}

/// Chain of entries whose keys hash to the same slot, in insertion order
type Bucket<V> = Vec<Entry<V>>;

/// Snapshot of how entries are spread over the buckets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    /// Number of buckets
    pub bucket_count: usize,
    /// Number of stored entries
    pub len: usize,
    /// Buckets holding no entry
    pub empty_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// `len / bucket_count`
    pub load_factor: f64,
}

/// A hash table from string keys to values, resolving collisions by separate chaining.
///
/// Every bucket is a chain of entries kept in insertion order. When an insertion pushes
/// `len / bucket_count` above the configured load factor, the bucket array is doubled and
/// every entry is rehashed into the new layout before `set` returns.
///
/// Operations that hash into the bucket array return [`Result`]: the only error they can
/// report is [`HashTableError::OutOfRange`], which a correct hash function never produces.
/// A missing key is reported through `Option` or `false`, never as an error.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct HashTable<V> {
    /// The chains, one per bucket
    buckets: Vec<Bucket<V>>,
    /// Current number of entries across all chains
    size: usize,
    /// Maximum `size / bucket_count` tolerated after an insertion
    load_factor_threshold: f64,
    /// Number of times the bucket array has been grown
    resizes: usize,
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Allocates `count` empty chains
fn empty_buckets<V>(count: usize) -> Vec<Bucket<V>> {
    iter::repeat_with(Vec::new).take(count).collect()
}

impl<V> HashTable<V> {
    /// Creates an empty table with 16 buckets and a load factor of 0.75
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(DEFAULT_BUCKET_COUNT, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty table with the given bucket count and load factor threshold.
    ///
    /// # Errors
    ///
    /// Fails when `initial_bucket_count` is zero or `load_factor` is not a finite
    /// positive number.
    pub fn with_params(initial_bucket_count: usize, load_factor: f64) -> Result<Self> {
        Self::with_config(TableConfig { initial_bucket_count, load_factor })
    }

    /// Creates an empty table from a [`TableConfig`].
    ///
    /// # Errors
    ///
    /// Returns the validation error of [`TableConfig::validate`].
    pub fn with_config(config: TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config.initial_bucket_count, config.load_factor))
    }

    /// Builds the table from already validated parameters
    fn from_parts(bucket_count: usize, load_factor_threshold: f64) -> Self {
        Self { buckets: empty_buckets(bucket_count), size: 0, load_factor_threshold, resizes: 0 }
    }

    /// Computes the bucket index for a key under the current bucket count
    fn hash(&self, key: &str) -> usize {
        NonZeroUsize::new(self.buckets.len()).map_or(0, |count| polynomial_hash(key, count))
    }

    /// Returns the chain at `index`
    fn get_bucket(&self, index: usize) -> Result<&Bucket<V>> {
        let bucket_count = self.buckets.len();
        self.buckets.get(index).ok_or(HashTableError::OutOfRange { index, bucket_count })
    }

    /// Returns the chain at `index` for modification
    fn get_bucket_mut(&mut self, index: usize) -> Result<&mut Bucket<V>> {
        let bucket_count = self.buckets.len();
        self.buckets.get_mut(index).ok_or(HashTableError::OutOfRange { index, bucket_count })
    }

    /// Inserts or overwrites the value for `key`.
    ///
    /// An existing entry keeps its position in its chain and gets the new value; the
    /// previous value is returned. A new key is appended to its chain, and if that pushes
    /// the table over its load factor the bucket array grows before this call returns.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::OutOfRange`] if the computed bucket index does not address
    /// a bucket. The table is left unchanged in that case.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Result<Option<V>> {
        let key = key.into();
        let index = self.hash(&key);
        let bucket = self.get_bucket_mut(index)?;

        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            return Ok(Some(mem::replace(&mut entry.value, value)));
        }

        trace!("inserting key {key:?} into bucket {index}");
        self.append_at(index, Entry { key, value })?;

        if self.exceeds_threshold(self.buckets.len()) {
            self.resize()?;
        }

        Ok(None)
    }

    /// Appends an entry whose key is not yet present to the chain at `index`
    fn append_at(&mut self, index: usize, entry: Entry<V>) -> Result<()> {
        self.get_bucket_mut(index)?.push(entry);
        self.size = self.size.saturating_add(1);
        Ok(())
    }

    /// Whether holding `size` entries in `bucket_count` buckets breaks the load factor
    #[allow(clippy::cast_precision_loss)]
    fn exceeds_threshold(&self, bucket_count: usize) -> bool {
        self.size as f64 / bucket_count as f64 > self.load_factor_threshold
    }

    /// Grows the bucket array and rehashes every entry into it.
    ///
    /// The count doubles. If the threshold was lowered after construction, doubling
    /// continues until the current size fits, so the rehash runs exactly once.
    fn resize(&mut self) -> Result<()> {
        let old_count = self.buckets.len();
        let mut new_count = old_count.max(1).saturating_mul(2);
        while self.exceeds_threshold(new_count) && new_count < usize::MAX {
            new_count = new_count.saturating_mul(2);
        }

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_count));
        let len = mem::take(&mut self.size);

        for entry in old_buckets.into_iter().flatten() {
            let index = self.hash(&entry.key);
            self.append_at(index, entry)?;
        }
        debug_assert_eq!(self.size, len);

        self.resizes = self.resizes.saturating_add(1);
        debug!("resized hash table from {old_count} to {new_count} buckets holding {len} entries");
        Ok(())
    }

    /// Retrieves the value stored for `key`, `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::OutOfRange`] if the computed bucket index does not address
    /// a bucket.
    pub fn get(&self, key: &str) -> Result<Option<&V>> {
        let bucket = self.get_bucket(self.hash(key))?;
        Ok(bucket.iter().find(|entry| entry.key == key).map(|entry| &entry.value))
    }

    /// Retrieves a mutable reference to the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::OutOfRange`] if the computed bucket index does not address
    /// a bucket.
    pub fn get_mut(&mut self, key: &str) -> Result<Option<&mut V>> {
        let index = self.hash(key);
        let bucket = self.get_bucket_mut(index)?;
        Ok(bucket.iter_mut().find(|entry| entry.key == key).map(|entry| &mut entry.value))
    }

    /// Returns true if the table holds an entry for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::OutOfRange`] if the computed bucket index does not address
    /// a bucket.
    pub fn has(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Removes the entry for `key`, returning whether one was present.
    ///
    /// The remaining entries of the chain keep their relative order. The bucket array
    /// never shrinks.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::OutOfRange`] if the computed bucket index does not address
    /// a bucket.
    pub fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.take(key)?.is_some())
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::OutOfRange`] if the computed bucket index does not address
    /// a bucket.
    pub fn take(&mut self, key: &str) -> Result<Option<V>> {
        let index = self.hash(key);
        let bucket = self.get_bucket_mut(index)?;
        let Some(position) = bucket.iter().position(|entry| entry.key == key) else {
            return Ok(None);
        };

        let entry = bucket.remove(position);
        self.size = self.size.saturating_sub(1);
        trace!("removed key {key:?} from bucket {index}");
        Ok(Some(entry.value))
    }

    /// Returns the number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every entry, keeping the bucket count and load factor threshold
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            *bucket = Vec::new();
        }
        self.size = 0;
        debug!("cleared hash table with {} buckets", self.buckets.len());
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current ratio of entries to buckets
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Returns the load factor above which an insertion grows the table
    #[must_use]
    pub fn load_factor_threshold(&self) -> f64 {
        self.load_factor_threshold
    }

    /// Changes the load factor threshold.
    ///
    /// The table is not rehashed here; the next insertion of a new key grows it as far
    /// as needed to satisfy the new threshold.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::InvalidLoadFactor`] when `threshold` is not a finite
    /// positive number; the current threshold is kept.
    pub fn set_load_factor_threshold(&mut self, threshold: f64) -> Result<()> {
        config::validate_load_factor(threshold)?;
        self.load_factor_threshold = threshold;
        Ok(())
    }

    /// Returns how many times the bucket array has grown since construction
    #[must_use]
    pub fn resize_count(&self) -> usize {
        self.resizes
    }

    /// Returns the length of every chain in bucket order
    #[must_use]
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }

    /// Summarizes how the entries are spread over the buckets
    #[must_use]
    pub fn stats(&self) -> TableStats {
        TableStats {
            bucket_count: self.buckets.len(),
            len: self.size,
            empty_buckets: self.buckets.iter().filter(|bucket| bucket.is_empty()).count(),
            longest_chain: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
            load_factor: self.load_factor(),
        }
    }

    /// Returns an iterator over the entries, bucket by bucket and in chain order within
    /// a bucket.
    ///
    /// The order has no relation to insertion order once the table has resized.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: self.buckets.iter(), chain: slice::Iter::default() }
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`HashTable`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Buckets not yet visited
    buckets: slice::Iter<'a, Bucket<V>>,
    /// Remaining entries of the bucket being visited
    chain: slice::Iter<'a, Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                return Some((entry.key.as_str(), &entry.value));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }
}
