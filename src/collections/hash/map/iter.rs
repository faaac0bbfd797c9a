use std::iter::FusedIterator;

use super::ChainMap;
use super::entry::Link;

/// A lazy iterator over a [`ChainMap`]'s entries: buckets in index order, each chain from its
/// most recent insertion backward.
pub struct Iter<'a> {
    pub(crate) map: &'a ChainMap,
    pub(crate) bucket: usize,
    pub(crate) current: Link,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(index) = self.current {
                let entry = self.map.entries.get(index)?;
                self.current = entry.next;
                return Some((&entry.key, &entry.value));
            }

            if self.bucket >= self.map.buckets.len() {
                return None;
            }
            self.current = self.map.buckets[self.bucket];
            self.bucket += 1;
        }
    }
}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ChainMap {
    type Item = (&'a str, &'a str);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
