// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
Reductions over sequences using comparators.

All reductions here are a single linear scan. An empty input is not an error and results in
[`None`].

# Ties

When multiple elements tie for the maximum or the minimum, the **first** such element in the input is
returned. This mirrors the stability guarantee of the sorts: the first tied element is the one that
would be at the front of its group after a stable sort.

Note that this differs from [`Iterator::max_by`] which returns the last of the tied maximums.
*/

use std::cmp::Ordering;

use crate::comparator::Comparator;
use crate::errors::ComparatorResult;
use crate::fallible::TryComparator;

/// Scan `items` and keep the first element for which no later element compares as `replace_on`.
fn select_by<'a, T, I, C>(items: I, comparator: &C, replace_on: Ordering) -> Option<&'a T>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let mut iter = items.into_iter();
    let mut selected = iter.next()?;
    for candidate in iter {
        if comparator.compare(candidate, selected) == replace_on {
            selected = candidate;
        }
    }

    Some(selected)
}

/// Fallible version of [`select_by`].
fn try_select_by<'a, T, I, C>(
    items: I,
    comparator: &C,
    replace_on: Ordering,
) -> ComparatorResult<Option<&'a T>>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    C: TryComparator<T> + ?Sized,
{
    let mut iter = items.into_iter();
    let mut selected = match iter.next() {
        Some(first) => first,
        None => return Ok(None),
    };

    for candidate in iter {
        if comparator.try_compare(candidate, selected)? == replace_on {
            selected = candidate;
        }
    }

    Ok(Some(selected))
}

/**
Return the maximum element of `items` according to `comparator`.

Returns [`None`] for an empty input and the first of the maximum elements when there are ties.

# Example

```
use rainsort::{by_key, max_by};

let pairs = [("a", 2), ("b", 3), ("c", 3)];
let max = max_by(&pairs, &by_key(|pair: &(&str, i32)| pair.1));

assert_eq!(max, Some(&("b", 3)));
```
*/
pub fn max_by<'a, T, I, C>(items: I, comparator: &C) -> Option<&'a T>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    select_by(items, comparator, Ordering::Greater)
}

/// Return the minimum element of `items` according to `comparator`, preferring the first on ties.
pub fn min_by<'a, T, I, C>(items: I, comparator: &C) -> Option<&'a T>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    select_by(items, comparator, Ordering::Less)
}

/// Return the element of `items` with the greatest key, preferring the first on ties.
pub fn max_by_key<'a, T, K, I, F>(items: I, extractor: F) -> Option<&'a T>
where
    T: 'a,
    K: Ord,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> K,
{
    max_by(items, &crate::combinators::by_key(extractor))
}

/// Return the element of `items` with the smallest key, preferring the first on ties.
pub fn min_by_key<'a, T, K, I, F>(items: I, extractor: F) -> Option<&'a T>
where
    T: 'a,
    K: Ord,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> K,
{
    min_by(items, &crate::combinators::by_key(extractor))
}

/**
Return the maximum element of `items` according to a fallible comparator.

# Errors

Returns the first comparison error.
*/
pub fn try_max_by<'a, T, I, C>(items: I, comparator: &C) -> ComparatorResult<Option<&'a T>>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    C: TryComparator<T> + ?Sized,
{
    try_select_by(items, comparator, Ordering::Greater)
}

/**
Return the minimum element of `items` according to a fallible comparator.

# Errors

Returns the first comparison error.
*/
pub fn try_min_by<'a, T, I, C>(items: I, comparator: &C) -> ComparatorResult<Option<&'a T>>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    C: TryComparator<T> + ?Sized,
{
    try_select_by(items, comparator, Ordering::Less)
}
