use derive_more::{Display, Error};

/// An index or position argument fell outside the valid bounds of the collection it was given to.
///
/// The failed operation is a no-op; no partial mutation is left behind.
#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display("index {index} out of bounds for a collection of {len} elements")]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The number of elements the collection held at the time.
    pub len: usize,
}

/// A bounded collection was already at capacity when asked to take another element.
///
/// The failed operation is a no-op; the collection is unchanged.
#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display("collection is full at capacity {cap}")]
pub struct CapacityOverflow {
    /// The fixed capacity of the collection.
    pub cap: usize,
}
