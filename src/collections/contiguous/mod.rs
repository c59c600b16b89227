//! Contiguous collection types. Namely [`OrderedCollection`], a growable collection that can be
//! modified while a [`Cursor`] is traversing it.
#![warn(missing_docs)]

pub mod ordered;

#[doc(inline)]
pub use ordered::{CAP_INCREMENT, Cursor, OrderedCollection, SortOrder};
