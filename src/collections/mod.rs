//! General-purpose collection types.
//!
//! # Method
//! Elements are held through shared handles, which lets collections hand out an element and
//! still recognize that exact element later on, even when other elements compare equal to it.

#[cfg(feature = "contiguous")]
pub mod contiguous;
