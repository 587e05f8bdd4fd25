//! Utility functions and traits for `HashTable`

use crate::{HashTable, error::Result};

/// Extension trait providing eager bulk views of a table.
///
/// Each call walks the buckets in index order and every chain in order, and collects
/// the result into a fresh `Vec`.
pub trait HashTableExtensions<V> {
    /// Returns the keys of the table as a Vec
    fn keys(&self) -> Vec<&str>;

    /// Returns the values of the table as a Vec
    fn values(&self) -> Vec<&V>;

    /// Returns the key-value pairs of the table as a Vec
    fn entries(&self) -> Vec<(&str, &V)>;
}

impl<V> HashTableExtensions<V> for HashTable<V> {
    fn keys(&self) -> Vec<&str> {
        self.iter().map(|(k, _)| k).collect()
    }

    fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    fn entries(&self) -> Vec<(&str, &V)> {
        self.iter().collect()
    }
}

/// Creates a `HashTable` with default parameters from an iterator of key-value pairs.
///
/// Later pairs overwrite earlier pairs with the same key.
///
/// # Errors
///
/// Propagates the error of the first failing [`HashTable::set`].
pub fn from_pairs<K, V, I>(iter: I) -> Result<HashTable<V>>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut table = HashTable::new();

    for (key, value) in iter {
        table.set(key, value)?;
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() -> Result<()> {
        let data = vec![("a", 1), ("b", 2), ("c", 3), ("a", 4)];

        let table = from_pairs(data)?;

        assert_eq!(table.get("a")?, Some(&4));
        assert_eq!(table.get("b")?, Some(&2));
        assert_eq!(table.get("c")?, Some(&3));
        assert_eq!(table.len(), 3);
        Ok(())
    }

    #[test]
    fn test_keys_and_values() -> Result<()> {
        let mut table = HashTable::new();
        table.set("a", 1)?;
        table.set("b", 2)?;
        table.set("c", 3)?;

        let mut keys = table.keys();
        keys.sort_unstable();

        let mut values = table.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(values, vec![&1, &2, &3]);
        Ok(())
    }

    #[test]
    fn test_views_share_bucket_order() -> Result<()> {
        let table = from_pairs((0..40).map(|i| (format!("key-{i}"), i)))?;

        let entries = table.entries();
        let keys = table.keys();
        let values = table.values();

        assert_eq!(entries.len(), table.len());
        assert_eq!(entries.iter().map(|&(k, _)| k).collect::<Vec<_>>(), keys);
        assert_eq!(entries.iter().map(|&(_, v)| v).collect::<Vec<_>>(), values);
        Ok(())
    }

    #[test]
    fn test_views_are_repeatable() -> Result<()> {
        let table = from_pairs([("x", 'x'), ("y", 'y'), ("ice cream", 'i')])?;

        assert_eq!(table.keys(), table.keys());
        assert_eq!(table.values(), table.values());
        assert_eq!(table.entries(), table.entries());
        Ok(())
    }

    #[test]
    fn test_views_of_empty_table() {
        let table: HashTable<u8> = HashTable::new();
        assert!(table.keys().is_empty());
        assert!(table.values().is_empty());
        assert!(table.entries().is_empty());
    }
}
