use std::iter::FusedIterator;

use super::LinkedList;
use super::node::{Link, NodeArena};

/// A lazy left-to-right iterator over a [`LinkedList`]'s values.
pub struct Iter<'a> {
    pub(crate) nodes: &'a NodeArena,
    pub(crate) current: Link,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current?;
        let node = self.nodes.get(index);
        self.current = node.next;
        Some(&node.data)
    }
}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = &'a i32;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
