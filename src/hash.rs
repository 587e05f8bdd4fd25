//! Rolling polynomial string hash used to pick a bucket

use std::num::{NonZeroU128, NonZeroUsize};

/// Multiplier applied to the accumulator before each code unit is added
pub const HASH_MULTIPLIER: u128 = 31;

/// Maps `key` to a bucket index in `[0, bucket_count)`.
///
/// Walks the key's UTF-16 code units left to right, computing
/// `acc = (31 * acc + unit) mod bucket_count` from `acc = 0`. Reducing at every
/// step keeps the accumulator below `bucket_count`, so the result depends on
/// the bucket count and has to be recomputed for every entry on resize.
/// The empty key hashes to 0.
///
/// The accumulator is widened to `u128`: it stays below `bucket_count <= usize::MAX`,
/// so `31 * acc + unit` never overflows and the recurrence is exact for every bucket count.
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use chaintable::hash::polynomial_hash;
///
/// let buckets = NonZeroUsize::new(16).unwrap_or(NonZeroUsize::MIN);
/// assert_eq!(polynomial_hash("", buckets), 0);
/// assert_eq!(polynomial_hash("apple", buckets), 10);
/// ```
#[must_use]
pub fn polynomial_hash(key: &str, bucket_count: NonZeroUsize) -> usize {
    let Some(modulus) = u128::try_from(bucket_count.get()).ok().and_then(NonZeroU128::new) else {
        return 0;
    };
    let hash = key.encode_utf16().fold(0_u128, |acc, unit| {
        acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u128::from(unit)) % modulus
    });
    // Below the modulus, which came from a usize
    usize::try_from(hash).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets(count: usize) -> NonZeroUsize {
        NonZeroUsize::new(count).unwrap_or(NonZeroUsize::MIN)
    }

    #[test]
    fn test_empty_key_hashes_to_zero() {
        assert_eq!(polynomial_hash("", buckets(1)), 0);
        assert_eq!(polynomial_hash("", buckets(16)), 0);
        assert_eq!(polynomial_hash("", buckets(1000)), 0);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(polynomial_hash("a", buckets(1000)), 97);
        assert_eq!(polynomial_hash("ab", buckets(1000)), 105);
        assert_eq!(polynomial_hash("apple", buckets(16)), 10);
        assert_eq!(polynomial_hash("apple", buckets(32)), 26);
        assert_eq!(polynomial_hash("ice cream", buckets(1000)), 837);
    }

    #[test]
    fn test_hashes_utf16_code_units() {
        assert_eq!(polynomial_hash("é", buckets(1000)), 233);
        // Surrogate pair: 0xD83D then 0xDE00
        assert_eq!(polynomial_hash("😀", buckets(1000)), 899);
    }

    #[test]
    fn test_single_bucket_always_zero() {
        for key in ["", "a", "moon", "a much longer key with spaces"] {
            assert_eq!(polynomial_hash(key, buckets(1)), 0);
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_exact_near_max_bucket_count() {
        // The accumulator exceeds usize::MAX / 31 after a dozen code units
        assert_eq!(polynomial_hash(&"z".repeat(16), NonZeroUsize::MAX), 12_141_879_601_913_932_907);
        assert_eq!(
            polynomial_hash(&"ice cream".repeat(3), NonZeroUsize::MAX),
            9_883_409_612_355_150_816
        );
    }

    proptest::proptest! {
        #[test]
        fn test_index_in_range(key in ".*", count in 1_usize..10_000) {
            proptest::prop_assert!(polynomial_hash(&key, buckets(count)) < count);
        }
    }
}
