use std::hint;

pub(crate) trait SlotExtension<T> {
    unsafe fn occupied(self) -> T;
}

impl<T> SlotExtension<T> for Option<T> {
    /// Unwraps a buffer slot that is known to hold an element, i.e. one below the collection's
    /// length. Hits [`unreachable!`] for dev builds and
    /// [`unreachable_unchecked`](hint::unreachable_unchecked) for release builds when empty.
    ///
    /// No panics annotation is used so that this passes the clippy lint, the whole point being
    /// that calling it asserts that the slot can't be empty.
    unsafe fn occupied(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!("empty slot below collection length"),
            // SAFETY: It is the responsibility of the caller to only invoke this on slots in
            // [0, len), which are always populated.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
