// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
Applying comparators to sequences.

There are two sorting contracts and callers must know which one they invoked:

1. Copying sorts (e.g. [`sorted_copy`]) return a new, sorted [`Vec`] and leave the input untouched.
1. In-place sorts (e.g. [`sort_in_place`]) reorder the storage of the given slice.

# Stability

All sorts in this module are stable. Elements that compare as [`Ordering::Equal`] keep their
relative input order. Tie-breaking comparators rely on this: sorting by a secondary key and then by
a primary key with two separate stable sorts gives the same result as a single sort with
`by_key(primary).then_by_key(secondary)`.

# Concurrency

An in-place sort needs exclusive access to the slice for the duration of the call which the borrow
checker enforces. See [`SharedSequence`](crate::shared::SharedSequence) for sorting a sequence that
is shared between threads.
*/

mod merge;
mod permutation;

pub use permutation::apply_permutation;

use std::cmp::Ordering;
use std::convert::Infallible;

use crate::comparator::{Comparator, Natural};
use crate::config::PRESORTED_SCAN_MIN_LENGTH;
use crate::errors::ComparatorResult;
use crate::fallible::TryComparator;
use crate::options::SortOptions;

/**
Sorts sequences with a fixed set of [`SortOptions`].

The free functions in this module (e.g. [`sorted_copy`]) use a [`Sorter`] with default options.
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct Sorter {
    /// Options configuring the sort.
    options: SortOptions,
}

/// Public methods
impl Sorter {
    /// Create a new instance of [`Sorter`].
    pub fn new(options: SortOptions) -> Self {
        Self { options }
    }

    /// Get a reference to the sorter's options.
    pub fn options(&self) -> &SortOptions {
        &self.options
    }

    /**
    Return the stable sorting permutation of `items`.

    The permutation maps sorted positions to original positions i.e. `result[sorted_pos] =
    original_pos`. `items` is not modified.
    */
    pub fn sort_permutation<T, C>(&self, items: &[T], comparator: &C) -> Vec<usize>
    where
        C: Comparator<T> + ?Sized,
    {
        let result = self.permutation_with(items, |a, b| {
            Ok::<Ordering, Infallible>(comparator.compare(a, b))
        });

        match result {
            Ok(permutation) => permutation,
            Err(never) => match never {},
        }
    }

    /**
    Return the stable sorting permutation of `items` using a fallible comparator.

    The first comparison error stops the sort and is returned.
    */
    pub fn try_sort_permutation<T, C>(
        &self,
        items: &[T],
        comparator: &C,
    ) -> ComparatorResult<Vec<usize>>
    where
        C: TryComparator<T> + ?Sized,
    {
        self.permutation_with(items, |a, b| comparator.try_compare(a, b))
            .map_err(|err| {
                log::warn!(
                    "Failed to sort a sequence of {} elements. Error: {}",
                    items.len(),
                    err
                );
                err
            })
    }

    /// Return a new vector with the elements of `items` in sorted order.
    pub fn sorted_copy<T, C>(&self, items: &[T], comparator: &C) -> Vec<T>
    where
        T: Clone,
        C: Comparator<T> + ?Sized,
    {
        let permutation = self.sort_permutation(items, comparator);
        collect_permuted(items, &permutation)
    }

    /// Sort `items` in place.
    pub fn sort_in_place<T, C>(&self, items: &mut [T], comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        let permutation = self.sort_permutation(items, comparator);
        permutation::apply_valid_permutation(items, &permutation);
    }

    /**
    Return a new vector with the elements of `items` in sorted order using a fallible comparator.

    # Errors

    Returns the first comparison error.
    */
    pub fn try_sorted_copy<T, C>(&self, items: &[T], comparator: &C) -> ComparatorResult<Vec<T>>
    where
        T: Clone,
        C: TryComparator<T> + ?Sized,
    {
        let permutation = self.try_sort_permutation(items, comparator)?;
        Ok(collect_permuted(items, &permutation))
    }

    /**
    Sort `items` in place using a fallible comparator.

    # Errors

    Returns the first comparison error. `items` is only reordered after every comparison has
    succeeded so it is left untouched on error.
    */
    pub fn try_sort_in_place<T, C>(&self, items: &mut [T], comparator: &C) -> ComparatorResult<()>
    where
        C: TryComparator<T> + ?Sized,
    {
        let permutation = self.try_sort_permutation(items, comparator)?;
        permutation::apply_valid_permutation(items, &permutation);

        Ok(())
    }
}

/// Private methods
impl Sorter {
    /// Compute the sorting permutation with a comparison function that may fail.
    fn permutation_with<T, E, F>(&self, items: &[T], compare: F) -> Result<Vec<usize>, E>
    where
        F: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        let (permutation, num_comparisons) = self.counted_permutation(items, compare)?;

        if self.options.count_comparisons() {
            log::trace!(
                "Sorted a sequence of {} elements with {} comparisons",
                items.len(),
                num_comparisons
            );
        }

        Ok(permutation)
    }

    /**
    Compute the sorting permutation along with the number of comparisons that were made.

    The count includes the comparisons made while checking whether `items` is already sorted. It is
    always zero when comparison counting is disabled.
    */
    fn counted_permutation<T, E, F>(
        &self,
        items: &[T],
        mut compare: F,
    ) -> Result<(Vec<usize>, u64), E>
    where
        F: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        let count_comparisons = self.options.count_comparisons();
        let mut num_comparisons: u64 = 0;
        let mut counted_compare = |a: &T, b: &T| {
            if count_comparisons {
                num_comparisons += 1;
            }

            compare(a, b)
        };

        let len = items.len();
        if self.options.skip_presorted() && len >= PRESORTED_SCAN_MIN_LENGTH {
            let mut is_presorted = true;
            for pair in items.windows(2) {
                if counted_compare(&pair[0], &pair[1])? == Ordering::Greater {
                    is_presorted = false;
                    break;
                }
            }

            if is_presorted {
                log::debug!(
                    "Sequence of {} elements is already sorted. Skipping the sort.",
                    len
                );
                return Ok(((0..len).collect(), num_comparisons));
            }
        }

        let permutation = merge::stable_sort_indices(len, |original_a, original_b| {
            counted_compare(&items[original_a], &items[original_b])
        })?;

        Ok((permutation, num_comparisons))
    }
}

/// Clone the elements of `items` in the order described by `permutation`.
fn collect_permuted<T: Clone>(items: &[T], permutation: &[usize]) -> Vec<T> {
    permutation
        .iter()
        .map(|&original_pos| items[original_pos].clone())
        .collect()
}

/**
Return a new vector with the elements of `items` stably sorted by `comparator`.

`items` is not modified.

# Example

```
use rainsort::{by_key, sorted_copy};

let words = vec!["pear", "fig", "kiwi", "yam"];
let sorted = sorted_copy(&words, &by_key(|w: &&str| w.len()));

// "fig" and "yam" tie on length and keep their input order
assert_eq!(sorted, vec!["fig", "yam", "pear", "kiwi"]);
```
*/
pub fn sorted_copy<T, C>(items: &[T], comparator: &C) -> Vec<T>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    Sorter::default().sorted_copy(items, comparator)
}

/// Stably sort `items` in place by `comparator`.
pub fn sort_in_place<T, C>(items: &mut [T], comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    Sorter::default().sort_in_place(items, comparator)
}

/// Return a new vector with the elements of `items` in their natural order.
pub fn sorted_by_natural_order<T>(items: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    sorted_copy(items, &Natural)
}

/**
Return a new vector with the elements of `items` in descending natural order.

This is the reverse of the natural comparator, so equal elements still keep their input order.
*/
pub fn sorted_by_natural_order_descending<T>(items: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    sorted_copy(items, &crate::combinators::natural_descending())
}

/// Sort `items` in place by their natural order.
pub fn sort_in_place_by_natural_order<T: Ord>(items: &mut [T]) {
    sort_in_place(items, &Natural)
}

/// Sort `items` in place by their descending natural order.
pub fn sort_in_place_by_natural_order_descending<T: Ord>(items: &mut [T]) {
    sort_in_place(items, &crate::combinators::natural_descending())
}

/// Return a new vector with the elements of `items` sorted by a fallible comparator.
pub fn try_sorted_copy<T, C>(items: &[T], comparator: &C) -> ComparatorResult<Vec<T>>
where
    T: Clone,
    C: TryComparator<T> + ?Sized,
{
    Sorter::default().try_sorted_copy(items, comparator)
}

/// Sort `items` in place by a fallible comparator, leaving it untouched on error.
pub fn try_sort_in_place<T, C>(items: &mut [T], comparator: &C) -> ComparatorResult<()>
where
    C: TryComparator<T> + ?Sized,
{
    Sorter::default().try_sort_in_place(items, comparator)
}

/// Return the stable sorting permutation of `items` where `result[sorted_pos] = original_pos`.
pub fn sort_permutation<T, C>(items: &[T], comparator: &C) -> Vec<usize>
where
    C: Comparator<T> + ?Sized,
{
    Sorter::default().sort_permutation(items, comparator)
}

/// Returns true if no element of `items` compares greater than the element after it.
pub fn is_sorted_by<T, C>(items: &[T], comparator: &C) -> bool
where
    C: Comparator<T> + ?Sized,
{
    items
        .windows(2)
        .all(|pair| comparator.compares_le(&pair[0], &pair[1]))
}
