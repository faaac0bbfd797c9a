//! A module containing [`Array`].
//!
//! No bespoke iterator types are needed here: [`Array`] dereferences to a slice, so
//! [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from [`std::slice`] cover
//! borrowed iteration.

mod array;
mod tests;

pub use array::*;
