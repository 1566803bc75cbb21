//! Ordered, growable container for variadic argument and result lists.

use std::ops::Index;

use crate::errors::{pop_from_empty_pack, ValueResult};

/// Ordered list of values with checked removal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pack<T> {
    items: Vec<T>,
}

impl<T> Pack<T> {
    pub fn new() -> Self {
        Pack { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the last item. Popping an empty pack is an error.
    pub fn pop(&mut self) -> ValueResult<T> {
        self.items.pop().ok_or_else(pop_from_empty_pack)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Append all of `other` after the items of `self`.
    #[must_use]
    pub fn concat(mut self, other: Pack<T>) -> Self {
        self.items.extend(other.items);
        self
    }

    /// Split off everything from `at` onward; `at` is clamped to the length.
    #[must_use]
    pub fn split_off(&mut self, at: usize) -> Pack<T> {
        let at = at.min(self.items.len());
        Pack {
            items: self.items.split_off(at),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for Pack<T> {
    fn from(items: Vec<T>) -> Self {
        Pack { items }
    }
}

impl<T> FromIterator<T> for Pack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Pack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Pack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Pack<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Pack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Index<usize> for Pack<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}
