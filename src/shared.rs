// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
A sequence that can be sorted while it is shared between threads.

Sorting in place needs exclusive access to the sequence for the whole duration of the sort. For a
plain slice, the borrow checker already guarantees this. When a sequence is shared between threads,
[`SharedSequence`] serializes access with a read-write lock:

1. In-place sorts and writes hold the write lock until they are done
1. Reads (copies, reductions, snapshots) hold the read lock

Readers therefore only ever observe the sequence before or after a sort, never an intermediate
state.
*/

use parking_lot::RwLock;
use std::sync::Arc;

use crate::comparator::Comparator;
use crate::errors::ComparatorResult;
use crate::fallible::TryComparator;
use crate::options::SortOptions;
use crate::reduce;
use crate::sorting::Sorter;

/**
A cheaply cloneable handle to a sequence guarded by a read-write lock.

Clones of a [`SharedSequence`] refer to the same underlying sequence.
*/
#[derive(Debug)]
pub struct SharedSequence<T> {
    /// The guarded elements.
    elements: Arc<RwLock<Vec<T>>>,

    /// The sorter used for in-place sorts.
    sorter: Sorter,
}

/// Public methods
impl<T> SharedSequence<T> {
    /// Create a new instance of [`SharedSequence`] holding `elements`.
    pub fn new(elements: Vec<T>) -> Self {
        Self::with_options(elements, SortOptions::default())
    }

    /// Create a new instance of [`SharedSequence`] that sorts with the provided options.
    pub fn with_options(elements: Vec<T>, options: SortOptions) -> Self {
        Self {
            elements: Arc::new(RwLock::new(elements)),
            sorter: Sorter::new(options),
        }
    }

    /// Get the number of elements in the sequence.
    pub fn len(&self) -> usize {
        self.elements.read().len()
    }

    /// Returns true if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.read().is_empty()
    }

    /// Append an element to the end of the sequence.
    pub fn push(&self, element: T) {
        self.elements.write().push(element);
    }

    /**
    Sort the sequence in place.

    The write lock is held for the duration of the sort so concurrent readers and writers wait
    until the sort is finished.
    */
    pub fn sort_in_place<C>(&self, comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        let mut elements = self.elements.write();
        log::debug!(
            "Sorting a shared sequence of {} elements in place",
            elements.len()
        );
        self.sorter.sort_in_place(elements.as_mut_slice(), comparator);
    }

    /**
    Sort the sequence in place using a fallible comparator.

    # Errors

    Returns the first comparison error. The sequence is left untouched on error.
    */
    pub fn try_sort_in_place<C>(&self, comparator: &C) -> ComparatorResult<()>
    where
        C: TryComparator<T> + ?Sized,
    {
        let mut elements = self.elements.write();
        self.sorter
            .try_sort_in_place(elements.as_mut_slice(), comparator)
    }

    /// Returns true if the sequence is currently sorted according to `comparator`.
    pub fn is_sorted_by<C>(&self, comparator: &C) -> bool
    where
        C: Comparator<T> + ?Sized,
    {
        crate::sorting::is_sorted_by(self.elements.read().as_slice(), comparator)
    }

    /// Consume the handle and return the elements if no other handle refers to them.
    pub fn try_unwrap(self) -> Result<Vec<T>, Self> {
        let sorter = self.sorter;
        Arc::try_unwrap(self.elements)
            .map(|lock| lock.into_inner())
            .map_err(|elements| Self { elements, sorter })
    }
}

/// Methods for elements that can be cloned out of the lock
impl<T: Clone> SharedSequence<T> {
    /// Return a copy of the current elements.
    pub fn snapshot(&self) -> Vec<T> {
        self.elements.read().clone()
    }

    /// Return a sorted copy of the current elements without modifying the sequence.
    pub fn sorted_copy<C>(&self, comparator: &C) -> Vec<T>
    where
        C: Comparator<T> + ?Sized,
    {
        self.sorter
            .sorted_copy(self.elements.read().as_slice(), comparator)
    }

    /// Return a copy of the maximum element, preferring the first on ties.
    pub fn max_by<C>(&self, comparator: &C) -> Option<T>
    where
        C: Comparator<T> + ?Sized,
    {
        reduce::max_by(self.elements.read().iter(), comparator).cloned()
    }

    /// Return a copy of the minimum element, preferring the first on ties.
    pub fn min_by<C>(&self, comparator: &C) -> Option<T>
    where
        C: Comparator<T> + ?Sized,
    {
        reduce::min_by(self.elements.read().iter(), comparator).cloned()
    }
}

impl<T> Clone for SharedSequence<T> {
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
            sorter: self.sorter,
        }
    }
}

impl<T> From<Vec<T>> for SharedSequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}
