use std::fmt::{self, Debug, Display, Formatter};
use std::iter;
use std::mem;

use derive_more::IsVariant;

#[doc(inline)]
pub use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The maximum length of a [`Record`] name in bytes; longer names are truncated on
/// construction, reflecting the fixed-length name buffer of the original exercise.
pub const MAX_NAME: usize = 256;

/// The slot count used by [`HashTable::new`], matching the original exercise.
pub const DEFAULT_CAP: usize = 10;

/// A name/age pair, the unit the [`HashTable`] stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    age: i32,
}

impl Record {
    /// Creates a Record, truncating `name` to [`MAX_NAME`] bytes (at a char boundary) if it is
    /// longer.
    pub fn new(name: impl Into<String>, age: i32) -> Record {
        let mut name = name.into();
        if name.len() > MAX_NAME {
            let mut end = MAX_NAME;
            while !name.is_char_boundary(end) {
                end -= 1;
            }
            name.truncate(end);
        }

        Record { name, age }
    }

    /// The record's name, which is also its key in the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record's age.
    pub const fn age(&self) -> i32 {
        self.age
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

/// The state of one table slot.
///
/// A removed record leaves a [`Tombstone`](Slot::Tombstone) rather than reverting the slot to
/// [`Empty`](Slot::Empty). Probing treats the two differently: an empty slot ends a probe
/// sequence, a tombstone is skipped over. Without the distinction, removing a record would
/// punch a hole that made every record probed past that slot unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq, IsVariant)]
pub(crate) enum Slot {
    #[default]
    Empty,
    Occupied(Record),
    Tombstone,
}

use Slot::*;

/// A fixed-size hash table of [`Record`]s keyed by name, with linear-probe collision
/// resolution.
///
/// The table never resizes or rehashes: once every slot is occupied, insertion fails and the
/// caller is told so. The hash function is the original exercise's multiplicative byte mix -
/// deterministic, not remotely uniform, and collision-prone by design, which is exactly what
/// makes the probing observable.
///
/// # Time Complexity
/// For this analysis of time complexity, `c` is the fixed slot count of the table.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(c)` |
/// | `lookup` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `len` | `O(c)` |
///
/// Each is `O(1)` when the probe finds its slot immediately; the bound is the full probe
/// sequence.
#[derive(Clone, PartialEq, Eq)]
pub struct HashTable {
    slots: Box<[Slot]>,
}

impl HashTable {
    /// Creates an empty HashTable with the default capacity of 10 slots.
    pub fn new() -> HashTable {
        HashTable::with_cap(DEFAULT_CAP)
    }

    /// Creates an empty HashTable with the provided `cap`acity. A zero-capacity table is legal
    /// but rejects every insertion.
    pub fn with_cap(cap: usize) -> HashTable {
        HashTable {
            slots: iter::repeat_n(Empty, cap).collect(),
        }
    }

    /// Returns the fixed slot count of the table.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots, counting neither empties nor tombstones.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    /// Returns true if no slot holds a record.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `record` into the table, panicking on a failure.
    ///
    /// # Panics
    /// Panics if no free slot remains.
    pub fn insert(&mut self, record: Record) {
        self.try_insert(record).throw()
    }

    /// Inserts `record` into the first free slot on its probe sequence, returning an [`Err`]
    /// (and dropping the record) if the whole sequence is occupied.
    ///
    /// Probing starts at the name's home index and walks forward one slot at a time, wrapping
    /// at the end of the table, until it finds a slot that is empty or tombstoned. Duplicate
    /// names are not detected; inserting a name twice stores two records, and lookup finds
    /// whichever sits earlier in the probe order.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::hash::table::{HashTable, Record};
    /// let mut table = HashTable::new();
    /// table.try_insert(Record::new("Jacob", 256)).unwrap();
    /// assert_eq!(table.lookup("Jacob"), Some(&Record::new("Jacob", 256)));
    /// ```
    pub fn try_insert(&mut self, record: Record) -> Result<(), CapacityOverflow> {
        let full = CapacityOverflow { cap: self.cap() };
        let Some(home) = self.home_index(record.name()) else {
            return Err(full);
        };

        for offset in 0..self.cap() {
            let index = (home + offset) % self.cap();
            if !self.slots[index].is_occupied() {
                self.slots[index] = Occupied(record);
                return Ok(());
            }
        }

        Err(full)
    }

    /// Returns the record stored under `name`, or None if there is none.
    ///
    /// The probe stops early at the first empty slot it meets - nothing hashed here was ever
    /// pushed past an empty slot - and skips tombstones, which mark removals that must not end
    /// the sequence.
    ///
    /// # Examples
    /// ```
    /// # use basic_structures::collections::hash::table::HashTable;
    /// let table = HashTable::new();
    /// assert_eq!(table.lookup("George"), None);
    /// ```
    pub fn lookup(&self, name: &str) -> Option<&Record> {
        let index = self.find(name)?;
        match &self.slots[index] {
            Occupied(record) => Some(record),
            _ => None,
        }
    }

    /// Removes and returns the record stored under `name`, leaving a tombstone in its slot, or
    /// returns None (touching nothing) if there is no such record.
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        let index = self.find(name)?;
        match mem::replace(&mut self.slots[index], Tombstone) {
            Occupied(record) => Some(record),
            // find only ever returns occupied indices.
            other => {
                self.slots[index] = other;
                None
            },
        }
    }

    /// Returns an iterator over the occupied slots' records, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.slots.iter().filter_map(|slot| match slot {
            Occupied(record) => Some(record),
            _ => None,
        })
    }

    /// Finds the slot index holding `name`, probing the same sequence as insertion. (The
    /// original's lookup recomputed `home + 1` on every step of this loop, pinning the probe
    /// to a single slot; the corrected sequence below is the one its delete routine used.)
    fn find(&self, name: &str) -> Option<usize> {
        let home = self.home_index(name)?;

        for offset in 0..self.cap() {
            let index = (home + offset) % self.cap();
            match &self.slots[index] {
                Empty => return None,
                Tombstone => continue,
                Occupied(record) => {
                    if record.name() == name {
                        return Some(index);
                    }
                },
            }
        }

        None
    }

    /// Computes the home index for `name`: per byte, add it in, multiply by it, reduce by the
    /// capacity. Returns None for a zero-capacity table (there is nowhere to hash to).
    fn home_index(&self, name: &str) -> Option<usize> {
        let cap = self.cap();
        if cap == 0 {
            return None;
        }

        let mut hash = 0_usize;
        for byte in name.bytes() {
            hash += byte as usize;
            hash = (hash * byte as usize) % cap;
        }

        Some(hash)
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for HashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("slots", &self.slots)
            .field("len", &self.len())
            .finish()
    }
}

impl Display for HashTable {
    /// Formats the table one slot per line in the original's rendering: `---` for an empty
    /// slot, `--- <deleted>` for a tombstone, and the record otherwise.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "HashTable ({} of {} slots occupied)", self.len(), self.cap())?;
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Empty => writeln!(f, "\t{index}\t---")?,
                Tombstone => writeln!(f, "\t{index}\t--- <deleted>")?,
                Occupied(record) => writeln!(f, "\t{index}\t{record}")?,
            }
        }
        Ok(())
    }
}
