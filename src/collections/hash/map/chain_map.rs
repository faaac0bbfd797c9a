use std::fmt::{self, Debug, Display, Formatter};
use std::iter;

use super::Iter;
use super::entry::{Entry, EntryArena, Link};

/// The bucket count used by [`ChainMap::new`], matching the original exercise.
pub const DEFAULT_CAP: usize = 100;

/// The factor in the rolling hash steps through powers of 31, held below 2^16.
const FACTOR_BOUND: usize = 1 << 16;

/// A string-to-string map with a fixed bucket count and separate-chaining collision
/// resolution.
///
/// Every key hashes to one of the buckets; entries that share a bucket form a chain. The
/// bucket count never changes, so load simply deepens the chains.
///
/// Insertion prepends to the chain and never inspects existing keys: inserting a key twice
/// stores two entries, and because [`get`](ChainMap::get) takes the first match in chain
/// order, the most recent insertion shadows the older one until it is removed.
///
/// # Time Complexity
/// For this analysis of time complexity, `k` is the length of the chain in the target bucket.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(1)` |
/// | `get` | `O(k)` |
/// | `remove` | `O(k)` |
/// | `len` | `O(1)` |
#[derive(Clone)]
pub struct ChainMap {
    pub(crate) buckets: Box<[Link]>,
    pub(crate) entries: EntryArena,
}

impl ChainMap {
    /// Creates an empty ChainMap with the default bucket count of 100.
    pub fn new() -> ChainMap {
        ChainMap::with_cap(DEFAULT_CAP)
    }

    /// Creates an empty ChainMap with the provided bucket count.
    ///
    /// # Panics
    /// Panics if `cap` is zero; with no buckets there would be nowhere to chain an entry, and
    /// insertion is infallible by contract.
    pub fn with_cap(cap: usize) -> ChainMap {
        assert!(cap > 0, "a ChainMap needs at least one bucket");

        ChainMap {
            buckets: iter::repeat_n(None, cap).collect(),
            entries: EntryArena::new(),
        }
    }

    /// Returns the fixed bucket count.
    pub fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries in the map, counting shadowed duplicates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a `key`/`value` pair by prepending a new entry to its bucket's chain.
    ///
    /// Existing entries with the same key are neither rejected nor merged - the new entry
    /// shadows them (see the type-level docs).
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::hash::ChainMap;
    /// let mut map = ChainMap::new();
    /// map.insert("age", "22");
    /// assert_eq!(map.get("age"), Some("22"));
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let bucket = self.bucket_of(&key);

        let entry = self.entries.alloc(Entry {
            key,
            value: value.into(),
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(entry);
    }

    /// Returns the value stored under `key`, or None if the bucket's chain holds no match.
    /// The first match in chain order wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut current = self.buckets[self.bucket_of(key)];

        while let Some(index) = current {
            let entry = self.entries.get(index)?;
            if entry.key == key {
                return Some(&entry.value);
            }
            current = entry.next;
        }

        None
    }

    /// Detaches and releases the first entry matching `key`, relinking the bucket head or the
    /// predecessor's link over it, and returns the removed value. An absent key is a no-op
    /// yielding None.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let bucket = self.bucket_of(key);

        let mut prev: Link = None;
        let mut current = self.buckets[bucket];

        while let Some(index) = current {
            let entry = self.entries.get(index)?;
            let next = entry.next;

            if entry.key == key {
                match prev {
                    None => self.buckets[bucket] = next,
                    Some(before) => self.entries.get_mut(before)?.next = next,
                }
                return self.entries.release(index).map(|removed| removed.value);
            }

            prev = current;
            current = next;
        }

        None
    }

    /// Returns a lazy iterator over all entries, bucket by bucket and then along each chain.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            map: self,
            bucket: 0,
            current: None,
        }
    }

    /// Computes the bucket for `key` with the original's polynomial rolling hash: each byte is
    /// weighted by a running power of 31 (kept below 2^16), everything reduced by the bucket
    /// count as it accumulates.
    fn bucket_of(&self, key: &str) -> usize {
        let cap = self.cap();

        let mut sum = 0_usize;
        let mut factor = 31_usize;
        for byte in key.bytes() {
            sum = ((sum % cap) + (byte as usize * factor) % cap) % cap;
            factor = (factor * 31) % FACTOR_BOUND;
        }

        sum
    }
}

impl Default for ChainMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ChainMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainMap")
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl Display for ChainMap {
    /// Formats all entries map-style, e.g. `{"age": "22", "name": "Kate"}`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
