use std::iter::FusedIterator;
use std::rc::Rc;
use std::{slice, vec};

use super::OrderedCollection;
use crate::util::slot::SlotExtension;

/// A borrowing iterator over the handles of an [`OrderedCollection`].
pub struct Iter<'a, T> {
    pub(crate) inner: slice::Iter<'a, Option<Rc<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Rc<T>;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: inner only covers the populated slots below len.
        self.inner.next().map(|slot| unsafe { slot.as_ref().occupied() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        // SAFETY: inner only covers the populated slots below len.
        self.inner.next_back().map(|slot| unsafe { slot.as_ref().occupied() })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a Rc<T>;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator over the handles of an [`OrderedCollection`].
pub struct IntoIter<T> {
    // Trimmed to len when created, so every remaining slot is populated.
    pub(crate) inner: vec::IntoIter<Option<Rc<T>>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = Rc<T>;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: All remaining slots are populated.
        self.inner.next().map(|slot| unsafe { slot.occupied() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        // SAFETY: All remaining slots are populated.
        self.inner.next_back().map(|slot| unsafe { slot.occupied() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for OrderedCollection<T> {
    type Item = Rc<T>;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut slots = self.buf.into_vec();
        slots.truncate(self.len);
        IntoIter {
            inner: slots.into_iter(),
        }
    }
}
