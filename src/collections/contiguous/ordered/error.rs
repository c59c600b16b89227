use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the range accepted by the operation.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    /// The index that was provided.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

/// No element in the collection is the same handle as the one provided.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("collection doesn't contain the provided element")]
pub struct NotFound;

/// The operation needs at least one (candidate) element but the collection has none.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("operation requires a non-empty collection")]
pub struct EmptyCollection;

/// A [`Cursor`](super::Cursor) was asked for an element after it ran out.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("cursor has no elements left to yield")]
pub struct CursorExhausted;

/// A string couldn't be parsed as a [`SortOrder`](super::SortOrder).
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("unrecognized sort order {name:?}, expected \"min\" or \"max\"")]
pub struct InvalidOrder {
    /// The rejected name.
    pub name: String,
}

/// Growing the buffer would overflow [`usize`].
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

/// Any of the errors returned by [`OrderedCollection`](super::OrderedCollection) and its
/// [`Cursor`](super::Cursor), for callers that would rather propagate a single type.
#[allow(missing_docs)]
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum OrderedCollectionError {
    IndexOutOfBounds(IndexOutOfBounds),
    NotFound(NotFound),
    EmptyCollection(EmptyCollection),
    CursorExhausted(CursorExhausted),
    InvalidOrder(InvalidOrder),
}
