//! A growable, ordered collection that can be modified while it is being traversed.
//!
//! # Purpose
//! Standard collections are fail-fast: removing an element while iterating over them is either a
//! compile error ([`Vec`] and friends, thanks to the borrow checker) or a runtime error in other
//! languages. [`OrderedCollection`](collections::contiguous::OrderedCollection) turns that around.
//! Its [`Cursor`](collections::contiguous::Cursor) is detached from the collection, so the element
//! that was just visited can be removed and the traversal carries on with its successor, without
//! skipping or repeating anything.
//!
//! On top of that the collection offers order statistics (`min` / `max`), random access and
//! removal, stable sorting in either direction and a copy that leaves out one element.
//!
//! # Identity
//! Elements are stored as [`Rc`](std::rc::Rc) handles and looked up by identity rather than by
//! value. Two elements that compare equal are still different elements, and removing one never
//! removes the other.
//!
//! # Error Handling
//! Fallible operations return strongly typed errors, one small struct per failure, each
//! implementing [`Error`](std::error::Error). These can be collected into
//! [`OrderedCollectionError`](collections::contiguous::ordered::OrderedCollectionError) with `?`.
//! Indexing with `[]` panics, like it does for slices.
//!
//! # Features
//! - `contiguous` (default): the collection itself.
//! - `io` (default): the `fs` module for loading lines of text into a collection.
//! - `tracing`: emits [`tracing`](https://docs.rs/tracing) events for reallocations, sorts and
//!   file loads.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
#[cfg(feature = "io")]
pub mod fs;

pub(crate) mod util;
