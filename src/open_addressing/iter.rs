use core::iter::FusedIterator;

use super::slot::Slot;
use crate::error::{Result, TableError};

/// Walks live entries in slot order and stops after `remaining` of them.
///
/// It borrows the table, so the table cannot be mutated while iterating.
pub struct Iter<'a, K, V> {
    table: &'a [Slot<K, V>],
    index: usize,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(table: &'a [Slot<K, V>], len: usize) -> Self {
        Self {
            table,
            index: 0,
            remaining: len,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        while let Some(slot) = self.table.get(self.index) {
            self.index += 1;
            if let Some(e) = slot.entry() {
                self.remaining -= 1;
                return Some((&e.key, &e.val));
            }
        }
        // fewer live slots than `len` claimed
        self.remaining = 0;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Self {
            table: self.table,
            index: self.index,
            remaining: self.remaining,
        }
    }
}

/// Keys of the table in slot order. One pass, not restartable.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }

    pub fn has_next(&self) -> bool {
        self.inner.remaining > 0
    }

    /// Like `next`, but running past the end is an error.
    pub fn try_next(&mut self) -> Result<&'a K> {
        self.next().ok_or(TableError::IteratorExhausted)
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}
impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}
