//! Loading [`OrderedCollection`]s from line based text.
//!
//! Each line becomes one element, in file order, with the line terminator (`\n` or `\r\n`)
//! removed.

mod lines;
mod tests;

pub use lines::*;

#[doc(no_inline)]
pub use crate::collections::contiguous::OrderedCollection;
