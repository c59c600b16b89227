#![warn(missing_docs)]

pub mod panic;
#[cfg(test)]
pub mod probe;
pub mod result;
pub mod slot;
