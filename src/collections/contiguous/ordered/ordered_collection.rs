use std::fmt::{self, Debug, Formatter};
use std::iter;
use std::mem;
use std::ops::Index;
use std::rc::Rc;

use rand::Rng;

use super::{
    CapacityOverflow, Cursor, EmptyCollection, IndexOutOfBounds, InvalidOrder, Iter, NotFound,
    SortOrder,
};
use crate::util::result::ResultExtension;
use crate::util::slot::SlotExtension;

/// The fixed number of slots added to the buffer every time it runs out of room.
pub const CAP_INCREMENT: usize = 10;

/// A growable, ordered collection of shared element handles which can be modified while it is
/// being traversed.
///
/// Elements are stored as [`Rc<T>`] handles. Every lookup that takes an element
/// ([`contains`](OrderedCollection::contains), [`index_of`](OrderedCollection::index_of),
/// [`remove_key`](OrderedCollection::remove_key), ...) compares handles by identity using
/// [`Rc::ptr_eq`], not by value, so two equal but distinct elements are told apart.
///
/// Traversal goes through a detached [`Cursor`], which tolerates the removal of the element it
/// just yielded. See [`cursor`](OrderedCollection::cursor) and
/// [`traverse`](OrderedCollection::traverse).
///
/// # Capacity
/// The buffer grows by exactly [`CAP_INCREMENT`] slots whenever a push or insert finds it full.
/// This keeps the capacity predictable at the cost of linear amortized pushes, unlike the
/// geometric growth of [`Vec`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the collection.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove_index` | `O(n)` |
/// | `remove_key` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `max` / `min` | `O(n)` |
/// | `get_random` | `O(1)` |
/// | `sorted` | `O(n log n)` |
///
/// \* If the buffer is full, `push` has to move every element into a new one.
pub struct OrderedCollection<T> {
    pub(crate) buf: Box<[Option<Rc<T>>]>,
    pub(crate) len: usize,
}

impl<T> OrderedCollection<T> {
    /// Creates a new, empty collection with a capacity of [`CAP_INCREMENT`].
    ///
    /// # Examples
    /// ```
    /// # use core_list::collections::contiguous::{OrderedCollection, CAP_INCREMENT};
    /// let list: OrderedCollection<u8> = OrderedCollection::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), CAP_INCREMENT);
    /// ```
    pub fn new() -> OrderedCollection<T> {
        OrderedCollection {
            buf: alloc_slots(CAP_INCREMENT),
            len: 0,
        }
    }

    /// Creates a collection holding clones of the provided handles, in order. The capacity is the
    /// first multiple of [`CAP_INCREMENT`] strictly greater than the number of handles.
    ///
    /// # Examples
    /// ```
    /// # use std::rc::Rc;
    /// # use core_list::collections::contiguous::OrderedCollection;
    /// let a = Rc::new('a');
    /// let list = OrderedCollection::from_handles(&[a.clone(), Rc::new('b')]);
    /// assert!(list.contains(&a));
    /// assert_eq!(list.cap(), 10);
    /// ```
    pub fn from_handles(handles: &[Rc<T>]) -> OrderedCollection<T> {
        Self::from_exact(handles.iter().cloned())
    }

    /// Creates a collection from owned values, wrapping each in a new handle.
    ///
    /// # Examples
    /// ```
    /// # use core_list::collections::contiguous::OrderedCollection;
    /// let list = OrderedCollection::from_values(0..12);
    /// assert_eq!(list.len(), 12);
    /// assert_eq!(list.cap(), 20);
    /// ```
    pub fn from_values<I>(values: I) -> OrderedCollection<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        Self::from_exact(values.into_iter().map(Rc::new))
    }

    fn from_exact<I: ExactSizeIterator<Item = Rc<T>>>(mut handles: I) -> OrderedCollection<T> {
        let cap = (handles.len() / CAP_INCREMENT)
            .checked_add(1)
            .and_then(|blocks| blocks.checked_mul(CAP_INCREMENT))
            .unwrap_or_else(|| Err(CapacityOverflow).throw());

        let mut list = OrderedCollection {
            buf: alloc_slots(cap),
            len: 0,
        };

        // ExactSizeIterator::len is only a hint as far as safety goes, so len counts the handles
        // actually written and any surplus is pushed as usual.
        for (slot, handle) in list.buf.iter_mut().zip(handles.by_ref()) {
            *slot = Some(handle);
            list.len += 1;
        }
        list.extend(handles);

        list
    }

    /// Returns the number of elements in the collection.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the collection contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated. This is always a multiple of
    /// [`CAP_INCREMENT`].
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Removes every element, returning the collection to the capacity of a new one.
    pub fn clear(&mut self) {
        self.buf = alloc_slots(CAP_INCREMENT);
        self.len = 0;
    }

    /// Appends the provided handle, growing the buffer by [`CAP_INCREMENT`] if it is full.
    ///
    /// # Panics
    /// Panics if the new capacity would overflow [`usize`].
    pub fn push(&mut self, handle: Rc<T>) {
        if self.len == self.cap() {
            self.grow();
        }
        self.buf[self.len] = Some(handle);
        self.len += 1;
    }

    /// Wraps `value` in a new handle and appends it, returning the handle so that the element
    /// can be identified later.
    ///
    /// # Panics
    /// Panics if the new capacity would overflow [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use core_list::collections::contiguous::OrderedCollection;
    /// let mut list = OrderedCollection::new();
    /// let five = list.add(5);
    /// list.add(5);
    /// assert_eq!(list.index_of(&five), Ok(0));
    /// ```
    pub fn add(&mut self, value: T) -> Rc<T> {
        let handle = Rc::new(value);
        self.push(Rc::clone(&handle));
        handle
    }

    /// Inserts the provided handle at `index`, moving all following elements up by one. An index
    /// equal to the length appends.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use std::rc::Rc;
    /// # use core_list::collections::contiguous::OrderedCollection;
    /// let mut list = OrderedCollection::from_values([0, 1, 2]);
    /// list.insert(1, Rc::new(100)).unwrap();
    /// list.insert(4, Rc::new(200)).unwrap();
    /// assert_eq!(list.to_vec(), [0, 100, 1, 2, 200]);
    /// assert!(list.insert(6, Rc::new(300)).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, handle: Rc<T>) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if self.len == self.cap() {
            self.grow();
        }

        let mut prev = Some(handle);
        for i in index..=self.len {
            prev = mem::replace(&mut self.buf[i], prev);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the first element which is the same handle as `key`, moving all following elements
    /// down to fill the gap.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no element is the same handle as `key`.
    ///
    /// # Examples
    /// ```
    /// # use std::rc::Rc;
    /// # use core_list::collections::contiguous::OrderedCollection;
    /// let mut list = OrderedCollection::new();
    /// let first = list.add("twin");
    /// let second = list.add("twin");
    /// list.remove_key(&second).unwrap();
    /// assert!(list.contains(&first));
    /// assert!(list.remove_key(&Rc::new("twin")).is_err());
    /// ```
    pub fn remove_key(&mut self, key: &Rc<T>) -> Result<Rc<T>, NotFound> {
        let index = self.index_of(key)?;
        Ok(self.remove_unchecked(index))
    }

    /// Like [`remove_key`](OrderedCollection::remove_key), except that [`None`] is accepted as
    /// an absent key, for which nothing happens.
    ///
    /// # Errors
    /// Returns [`NotFound`] if `key` is [`Some`] and no element is the same handle.
    pub fn remove_any(&mut self, key: Option<&Rc<T>>) -> Result<Option<Rc<T>>, NotFound> {
        match key {
            Some(key) => self.remove_key(key).map(Some),
            None => Ok(None),
        }
    }

    /// Removes and returns the element at `index`, moving all following elements down by one.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn remove_index(&mut self, index: usize) -> Result<Rc<T>, IndexOutOfBounds> {
        self.get(index)?;
        Ok(self.remove_unchecked(index))
    }

    /// Removes and returns a uniformly random element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if there is nothing to remove.
    pub fn remove_random(&mut self) -> Result<Rc<T>, EmptyCollection> {
        self.remove_random_with(&mut rand::rng())
    }

    /// Removes and returns a uniformly random element, chosen using the provided generator.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if there is nothing to remove.
    pub fn remove_random_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Rc<T>, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection);
        }
        let index = rng.random_range(0..self.len);
        Ok(self.remove_unchecked(index))
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&Rc<T>, IndexOutOfBounds> {
        self.slot(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Returns the index of the first element which is the same handle as `key`.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no element is the same handle as `key`.
    pub fn index_of(&self, key: &Rc<T>) -> Result<usize, NotFound> {
        self.position(key).ok_or(NotFound)
    }

    /// Returns true if any element is the same handle as `key`.
    pub fn contains(&self, key: &Rc<T>) -> bool {
        self.position(key).is_some()
    }

    /// Returns the first element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the collection is empty.
    pub fn first(&self) -> Result<&Rc<T>, EmptyCollection> {
        self.slot(0).ok_or(EmptyCollection)
    }

    /// Returns the last element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the collection is empty.
    pub fn last(&self) -> Result<&Rc<T>, EmptyCollection> {
        self.len
            .checked_sub(1)
            .and_then(|index| self.slot(index))
            .ok_or(EmptyCollection)
    }

    /// Returns a uniformly random element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the collection is empty.
    pub fn get_random(&self) -> Result<&Rc<T>, EmptyCollection> {
        self.get_random_with(&mut rand::rng())
    }

    /// Returns a uniformly random element, chosen using the provided generator.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the collection is empty.
    pub fn get_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Rc<T>, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection);
        }
        let index = rng.random_range(0..self.len);
        self.slot(index).ok_or(EmptyCollection)
    }

    /// Returns a uniformly random element other than the first one which is the same handle as
    /// `key`. If `key` isn't in the collection at all, this behaves like
    /// [`get_random`](OrderedCollection::get_random).
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if there is no element left to choose from.
    pub fn get_random_other_than(&self, key: &Rc<T>) -> Result<&Rc<T>, EmptyCollection> {
        self.get_random_other_than_with(&mut rand::rng(), key)
    }

    /// Generator injected version of
    /// [`get_random_other_than`](OrderedCollection::get_random_other_than).
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if there is no element left to choose from.
    pub fn get_random_other_than_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        key: &Rc<T>,
    ) -> Result<&Rc<T>, EmptyCollection> {
        let Some(skip) = self.position(key) else {
            return self.get_random_with(rng);
        };
        if self.len < 2 {
            return Err(EmptyCollection);
        }

        // Draw from the len - 1 other indices, stepping over the skipped one.
        let mut index = rng.random_range(0..self.len - 1);
        if index >= skip {
            index += 1;
        }
        self.slot(index).ok_or(EmptyCollection)
    }

    /// Returns a new collection with the same handles in the same order. The elements themselves
    /// are shared, the storage is not.
    ///
    /// # Examples
    /// ```
    /// # use core_list::collections::contiguous::OrderedCollection;
    /// let list = OrderedCollection::from_values(['a', 'b']);
    /// let mut copy = list.copy();
    /// copy.add('c');
    /// assert_eq!(list.len(), 2);
    /// assert!(copy.contains(list.first().unwrap()));
    /// ```
    pub fn copy(&self) -> OrderedCollection<T> {
        let mut copy = OrderedCollection::new();
        for handle in self.iter() {
            copy.push(Rc::clone(handle));
        }
        copy
    }

    /// Returns a new collection containing, in order, every element for which `predicate` holds.
    pub fn filter<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> OrderedCollection<T> {
        let mut filtered = OrderedCollection::new();
        for handle in self.iter() {
            if predicate(&**handle) {
                filtered.push(Rc::clone(handle));
            }
        }
        filtered
    }

    /// Returns a copy of the collection without the first element which is the same handle as
    /// `key`. Being a copy, the result is unaffected by later changes to `self` and can be
    /// traversed while `self` is modified.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no element is the same handle as `key`.
    ///
    /// # Examples
    /// ```
    /// # use core_list::collections::contiguous::OrderedCollection;
    /// let mut list = OrderedCollection::new();
    /// list.add('a');
    /// let b = list.add('b');
    /// list.add('c');
    /// assert_eq!(list.other_than_key(&b).unwrap().to_vec(), ['a', 'c']);
    /// ```
    pub fn other_than_key(&self, key: &Rc<T>) -> Result<OrderedCollection<T>, NotFound> {
        let mut others = self.copy();
        others.remove_key(key)?;
        Ok(others)
    }

    /// Creates a [`Cursor`] starting at the front of the collection.
    pub const fn cursor(&self) -> Cursor<T> {
        Cursor::new()
    }

    /// Creates a [`Cursor`] which steps over the first element that is the same handle as `key`.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no element is the same handle as `key`.
    pub fn cursor_skipping(&self, key: &Rc<T>) -> Result<Cursor<T>, NotFound> {
        self.index_of(key).map(Cursor::skipping)
    }

    /// Visits every element in order, handing `visit` the collection itself along with the
    /// element, so that the visited element may be removed along the way.
    ///
    /// Only the element currently being visited may be removed, at most once per visit. Any
    /// other modification leaves the order of the remaining visits unspecified.
    ///
    /// # Examples
    /// ```
    /// # use core_list::collections::contiguous::OrderedCollection;
    /// let mut list = OrderedCollection::from_values([1, 2, 3, 4, 5, 6]);
    /// let mut seen = Vec::new();
    /// list.traverse(|list, item| {
    ///     seen.push(*item);
    ///     if *item % 2 == 0 {
    ///         list.remove_key(&item).unwrap();
    ///     }
    /// });
    /// assert_eq!(seen, [1, 2, 3, 4, 5, 6]);
    /// assert_eq!(list.to_vec(), [1, 3, 5]);
    /// ```
    pub fn traverse<F: FnMut(&mut Self, Rc<T>)>(&mut self, mut visit: F) {
        let mut cursor = self.cursor();
        while let Some(item) = cursor.advance(self) {
            visit(self, item);
        }
    }

    /// Returns a borrowing iterator over the handles in the collection.
    ///
    /// The borrow checker prevents modification while this is alive, use a [`Cursor`] instead to
    /// remove elements along the way.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.buf[..self.len].iter(),
        }
    }

    /// Returns the handle at `index`, or [`None`] if `index >= len`.
    pub(crate) fn slot(&self, index: usize) -> Option<&Rc<T>> {
        if index < self.len {
            // SAFETY: All slots below len are populated.
            Some(unsafe { self.buf[index].as_ref().occupied() })
        } else {
            None
        }
    }

    fn position(&self, key: &Rc<T>) -> Option<usize> {
        self.iter().position(|handle| Rc::ptr_eq(handle, key))
    }

    /// Removes the element at `index`, which must be less than len.
    fn remove_unchecked(&mut self, index: usize) -> Rc<T> {
        let mut next = None;
        // Iterate backwards to index, leaving the old last slot cleared.
        for i in (index..self.len).rev() {
            next = mem::replace(&mut self.buf[i], next);
        }

        self.len -= 1;
        // SAFETY: next holds the value previously located at index, which is below len.
        unsafe { next.occupied() }
    }

    /// Moves every element into a buffer [`CAP_INCREMENT`] slots larger than the current one.
    ///
    /// # Panics
    /// Panics if the new capacity would overflow [`usize`].
    fn grow(&mut self) {
        let old_cap = self.cap();
        let new_cap = old_cap
            .checked_add(CAP_INCREMENT)
            .unwrap_or_else(|| Err(CapacityOverflow).throw());

        let mut buf = alloc_slots(new_cap);
        for (new, old) in buf.iter_mut().zip(self.buf[..self.len].iter_mut()) {
            *new = old.take();
        }
        self.buf = buf;

        #[cfg(feature = "tracing")]
        tracing::trace!(old_cap, new_cap, len = self.len, "grew ordered collection");
    }
}

impl<T: Ord> OrderedCollection<T> {
    /// Returns the largest element. When several elements are equally large, the first of them
    /// is returned.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the collection is empty.
    ///
    /// # Examples
    /// ```
    /// # use core_list::collections::contiguous::OrderedCollection;
    /// let list = OrderedCollection::from_values([3, 1, 4, 1, 5]);
    /// assert_eq!(**list.max().unwrap(), 5);
    /// assert_eq!(**list.min().unwrap(), 1);
    /// ```
    pub fn max(&self) -> Result<&Rc<T>, EmptyCollection> {
        let mut iter = self.iter();
        let mut max = iter.next().ok_or(EmptyCollection)?;
        for handle in iter {
            if **handle > **max {
                max = handle;
            }
        }
        Ok(max)
    }

    /// Returns the smallest element. When several elements are equally small, the first of them
    /// is returned.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the collection is empty.
    pub fn min(&self) -> Result<&Rc<T>, EmptyCollection> {
        let mut iter = self.iter();
        let mut min = iter.next().ok_or(EmptyCollection)?;
        for handle in iter {
            if **handle < **min {
                min = handle;
            }
        }
        Ok(min)
    }

    /// Returns a new collection with the same handles, stably sorted in the provided order.
    ///
    /// [`SortOrder::Descending`] reverses the ascending result rather than sorting with a reversed
    /// comparison, so elements which compare equal also end up in reverse order.
    ///
    /// # Examples
    /// ```
    /// # use core_list::collections::contiguous::{OrderedCollection, SortOrder};
    /// let list = OrderedCollection::from_values([3, 1, 2]);
    /// assert_eq!(list.sorted(SortOrder::Ascending).to_vec(), [1, 2, 3]);
    /// assert_eq!(list.sorted(SortOrder::Descending).to_vec(), [3, 2, 1]);
    /// ```
    pub fn sorted(&self, order: SortOrder) -> OrderedCollection<T> {
        let mut handles: Box<[Rc<T>]> = self.iter().cloned().collect();
        handles.sort_by(|a, b| (**a).cmp(&**b));
        if order == SortOrder::Descending {
            handles.reverse();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(len = self.len, ?order, "sorted ordered collection");

        OrderedCollection::from_handles(&handles)
    }

    /// Parses `order` as a [`SortOrder`] (such as `"min"` or `"max"`) and sorts accordingly.
    ///
    /// # Errors
    /// Returns [`InvalidOrder`] if `order` isn't a recognized name.
    pub fn sorted_by_name(&self, order: &str) -> Result<OrderedCollection<T>, InvalidOrder> {
        Ok(self.sorted(order.parse()?))
    }
}

impl<T: Clone> OrderedCollection<T> {
    /// Clones every element out into a [`Vec`], in order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().map(|handle| (**handle).clone()).collect()
    }
}

fn alloc_slots<T>(cap: usize) -> Box<[Option<Rc<T>>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

impl<T> Index<usize> for OrderedCollection<T> {
    type Output = Rc<T>;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).throw()
    }
}

impl<T> Extend<Rc<T>> for OrderedCollection<T> {
    fn extend<I: IntoIterator<Item = Rc<T>>>(&mut self, iter: I) {
        for handle in iter {
            self.push(handle);
        }
    }
}

impl<T> FromIterator<Rc<T>> for OrderedCollection<T> {
    fn from_iter<I: IntoIterator<Item = Rc<T>>>(iter: I) -> Self {
        let mut list = OrderedCollection::new();
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for OrderedCollection<T> {
    fn from(value: Vec<T>) -> Self {
        OrderedCollection::from_values(value)
    }
}

impl<T, const N: usize> From<[T; N]> for OrderedCollection<T> {
    fn from(value: [T; N]) -> Self {
        OrderedCollection::from_values(value)
    }
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for OrderedCollection<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: PartialEq> PartialEq for OrderedCollection<T> {
    /// Compares the elements by value, unlike the identity based lookups.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for OrderedCollection<T> {}

impl<T: Debug> Debug for OrderedCollection<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedCollection")
            .field("contents", &Contents(self))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

struct Contents<'a, T>(&'a OrderedCollection<T>);

impl<T: Debug> Debug for Contents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
