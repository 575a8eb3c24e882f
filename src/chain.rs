// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
A comparator made of a runtime list of comparators.

[`ThenBy`](crate::combinators::ThenBy) nests types at compile time which is the cheapest way to
chain a known set of tie-breakers. When the set of sort keys is only known at runtime (e.g. it is
chosen by a user), a [`ComparatorChain`] holds the comparators as boxed trait objects instead.
*/

use std::cmp::Ordering;
use std::fmt;

use crate::combinators::by_key;
use crate::comparator::Comparator;
use crate::errors::{ComparatorError, ComparatorResult};

/// A boxed comparator that can be shared between threads.
pub type BoxedComparator<T> = Box<dyn Comparator<T> + Send + Sync>;

/**
A comparator that consults a primary comparator and then any number of tie-breakers from left to
right. The first result that is not [`Ordering::Equal`] wins.

A chain without tie-breakers compares exactly like its primary comparator.
*/
pub struct ComparatorChain<T: ?Sized> {
    /// The comparator consulted first.
    primary: BoxedComparator<T>,

    /// Comparators consulted in order while the values are still tied.
    tie_breakers: Vec<BoxedComparator<T>>,
}

/// Public methods
impl<T: ?Sized> ComparatorChain<T> {
    /// Create a new [`ComparatorChain`] with the provided primary comparator.
    pub fn new<C>(primary: C) -> Self
    where
        C: Comparator<T> + Send + Sync + 'static,
    {
        Self {
            primary: Box::new(primary),
            tie_breakers: vec![],
        }
    }

    /**
    Create a new [`ComparatorChain`] from a list of comparators.

    The first comparator is the primary comparator and the rest are tie-breakers.

    # Errors

    Returns [`ComparatorError::Usage`] if `comparators` is empty since there is no primary
    comparator to defer to.
    */
    pub fn try_from_iter<I>(comparators: I) -> ComparatorResult<Self>
    where
        I: IntoIterator<Item = BoxedComparator<T>>,
    {
        let mut iter = comparators.into_iter();
        let primary = iter.next().ok_or_else(|| {
            ComparatorError::Usage(
                "A comparator chain requires at least one comparator but none were provided."
                    .to_string(),
            )
        })?;

        Ok(Self {
            primary,
            tie_breakers: iter.collect(),
        })
    }

    /// Add a tie-breaker that is consulted after every comparator already in the chain.
    pub fn then<C>(mut self, tie_breaker: C) -> Self
    where
        C: Comparator<T> + Send + Sync + 'static,
    {
        self.tie_breakers.push(Box::new(tie_breaker));
        self
    }

    /// Add a tie-breaker that compares the natural ordering of a derived key.
    pub fn then_by_key<K, F>(self, extractor: F) -> Self
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.then(by_key(extractor))
    }

    /// Add an already boxed tie-breaker.
    pub fn push(&mut self, tie_breaker: BoxedComparator<T>) {
        self.tie_breakers.push(tie_breaker);
    }

    /// Get the number of comparators in the chain, including the primary comparator.
    pub fn len(&self) -> usize {
        1 + self.tie_breakers.len()
    }

    /// A chain always has a primary comparator so it is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Comparator<T> for ComparatorChain<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let mut ordering = self.primary.compare(a, b);
        for tie_breaker in self.tie_breakers.iter() {
            if ordering != Ordering::Equal {
                break;
            }

            ordering = tie_breaker.compare(a, b);
        }

        ordering
    }
}

impl<T: ?Sized> fmt::Debug for ComparatorChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparatorChain")
            .field("len", &self.len())
            .finish()
    }
}
