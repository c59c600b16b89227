use std::rc::Rc;

use super::{CursorExhausted, OrderedCollection};

/// A traversal position over an [`OrderedCollection`] that survives the removal of the element
/// it last yielded.
///
/// A Cursor doesn't borrow the collection it walks. Instead, every step takes the collection as
/// an argument, which leaves the caller free to modify it in between. The cursor remembers the
/// index and handle of the last element it yielded: if that slot no longer holds the same handle
/// when the next element is requested, the element must have been removed and its successor has
/// slid into the slot, so the cursor yields that slot again instead of moving on.
///
/// The caller may remove only the most recently yielded element, at most once, before
/// requesting the next one. Removing anything else, or removing more than one element between
/// steps, leaves the order of the remaining elements unspecified (although never out of bounds).
///
/// A cursor should only ever be used with the collection that created it.
///
/// # Examples
/// ```
/// # use core_list::collections::contiguous::OrderedCollection;
/// let mut list = OrderedCollection::new();
/// list.add('a');
/// let b = list.add('b');
/// list.add('c');
/// list.add('d');
///
/// let mut visited = Vec::new();
/// let mut cursor = list.cursor();
/// while cursor.has_next(&list) {
///     let item = cursor.next(&list).unwrap();
///     if std::rc::Rc::ptr_eq(&item, &b) {
///         list.remove_key(&item).unwrap();
///     }
///     visited.push(*item);
/// }
/// assert_eq!(visited, ['a', 'b', 'c', 'd']);
/// assert_eq!(list.to_vec(), ['a', 'c', 'd']);
/// ```
#[derive(Debug)]
pub struct Cursor<T> {
    pub(crate) pos: usize,
    pub(crate) last: Option<(usize, Rc<T>)>,
    pub(crate) skip: Option<usize>,
}

impl<T> Cursor<T> {
    /// Creates a cursor positioned before the first element.
    pub const fn new() -> Cursor<T> {
        Cursor {
            pos: 0,
            last: None,
            skip: None,
        }
    }

    /// Creates a cursor positioned before the first element which will never yield the element
    /// at `index`.
    pub const fn skipping(index: usize) -> Cursor<T> {
        Cursor {
            pos: 0,
            last: None,
            skip: Some(index),
        }
    }

    /// Returns true if [`next`](Cursor::next) would yield an element, based on the current state
    /// of `list`.
    pub fn has_next(&self, list: &OrderedCollection<T>) -> bool {
        self.resume(list).0 < list.len()
    }

    /// Yields the next element of `list`.
    ///
    /// # Errors
    /// Returns [`CursorExhausted`] if [`has_next`](Cursor::has_next) would return false.
    pub fn next(&mut self, list: &OrderedCollection<T>) -> Result<Rc<T>, CursorExhausted> {
        let (index, skip) = self.resume(list);
        let item = Rc::clone(list.slot(index).ok_or(CursorExhausted)?);

        self.skip = skip;
        self.last = Some((index, Rc::clone(&item)));
        self.pos = index + 1;
        Ok(item)
    }

    /// Yields the next element of `list` if there is one. Convenient for `while let` loops.
    pub fn advance(&mut self, list: &OrderedCollection<T>) -> Option<Rc<T>> {
        self.next(list).ok()
    }

    /// Returns true if the last yielded element is no longer in the slot it was yielded from.
    fn removed_since_yield(&self, list: &OrderedCollection<T>) -> bool {
        match &self.last {
            Some((index, handle)) => !list
                .slot(*index)
                .is_some_and(|current| Rc::ptr_eq(current, handle)),
            None => false,
        }
    }

    /// Works out the index of the next element to yield, along with the skip index adjusted for
    /// any removal since the last yield.
    fn resume(&self, list: &OrderedCollection<T>) -> (usize, Option<usize>) {
        let (index, skip) = match &self.last {
            Some((last, _)) if self.removed_since_yield(list) => (
                *last,
                // Everything above the removed slot moved down by one, the skipped element too.
                self.skip.map(|skip| if skip > *last { skip - 1 } else { skip }),
            ),
            _ => (self.pos, self.skip),
        };

        match skip {
            Some(skip) if skip == index => (index + 1, Some(skip)),
            _ => (index, skip),
        }
    }
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Cursor {
            pos: self.pos,
            last: self.last.clone(),
            skip: self.skip,
        }
    }
}
