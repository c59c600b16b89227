//! A module containing [`OrderedCollection`] and associated types.
//!
//! Next to the collection itself, this includes [`Cursor`] for traversals that remove elements
//! along the way, [`SortOrder`] for [`sorted`](OrderedCollection::sorted), borrowed and owned
//! iterators, and the errors returned by the fallible operations.
//!
//! [`OrderedCollection`] is also re-exported under the parent module.

mod cursor;
mod error;
mod iter;
mod order;
mod ordered_collection;

pub use cursor::*;
pub use error::*;
pub use iter::*;
pub use order::*;
pub use ordered_collection::*;
