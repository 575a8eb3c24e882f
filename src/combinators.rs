// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
Combinators that build new comparators out of existing comparators and key extractors.

Every combinator consumes the comparators it is built from and returns a new immutable comparator.
Combinators can be reached either through the free functions in this module (e.g. [`by_key`],
[`reverse`]) or through the methods on [`ComparatorExt`] which read better when chaining.

# Example

```
use rainsort::{by_key, sorted_copy, ComparatorExt};

#[derive(Clone, Debug, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

let people = vec![
    Person { name: "Bob".to_string(), age: 25 },
    Person { name: "Alice".to_string(), age: 30 },
    Person { name: "Alice".to_string(), age: 25 },
];

let oldest_first = by_key(|p: &Person| p.age).reversed().then_by_key(|p: &Person| p.name.clone());
let sorted = sorted_copy(&people, &oldest_first);
assert_eq!(sorted[0].age, 30);
assert_eq!(sorted[1].name, "Alice");
```
*/

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::comparator::{Comparator, Natural};
use crate::fallible::Infallible;

/**
A comparator that compares values by a key derived from them.

The key is produced by an extractor function that is expected to be pure and deterministic. The
extracted keys are compared by the wrapped key comparator.
*/
pub struct ByKey<F, C, K> {
    /// Derives the key to compare from a value.
    extractor: F,

    /// Compares the extracted keys.
    key_comparator: C,

    _key: PhantomData<fn() -> K>,
}

impl<F, C, K> ByKey<F, C, K> {
    /// Create a new [`ByKey`] comparator.
    pub fn new(extractor: F, key_comparator: C) -> Self {
        Self {
            extractor,
            key_comparator,
            _key: PhantomData,
        }
    }
}

impl<T, F, C, K> Comparator<T> for ByKey<F, C, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    C: Comparator<K>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let key_a = (self.extractor)(a);
        let key_b = (self.extractor)(b);
        self.key_comparator.compare(&key_a, &key_b)
    }
}

impl<F, C: Clone, K> Clone for ByKey<F, C, K>
where
    F: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.extractor.clone(), self.key_comparator.clone())
    }
}

impl<F, C: fmt::Debug, K> fmt::Debug for ByKey<F, C, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey")
            .field("key_comparator", &self.key_comparator)
            .finish_non_exhaustive()
    }
}

/**
A comparator that compares values by a key borrowed from them.

This is similar to [`ByKey`] but avoids producing an owned key for every comparison e.g. when
sorting by a `String` field.
*/
pub struct ByRefKey<F, K: ?Sized> {
    /// Borrows the key to compare from a value.
    extractor: F,

    _key: PhantomData<fn(&K)>,
}

impl<F, K: ?Sized> ByRefKey<F, K> {
    /// Create a new [`ByRefKey`] comparator.
    pub fn new(extractor: F) -> Self {
        Self {
            extractor,
            _key: PhantomData,
        }
    }
}

impl<T, F, K> Comparator<T> for ByRefKey<F, K>
where
    T: ?Sized,
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.extractor)(a).cmp((self.extractor)(b))
    }
}

impl<F: Clone, K: ?Sized> Clone for ByRefKey<F, K> {
    fn clone(&self) -> Self {
        Self::new(self.extractor.clone())
    }
}

impl<F, K: ?Sized> fmt::Debug for ByRefKey<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByRefKey").finish_non_exhaustive()
    }
}

/// A comparator that is equivalent to the wrapped comparator with its arguments swapped.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Reversed<C> {
    /// The comparator being reversed.
    inner: C,
}

impl<C> Reversed<C> {
    /// Create a new [`Reversed`] comparator.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /**
    Unwrap the reversed comparator.

    Reversing a [`Reversed`] comparator via this method gives back the original comparator instead
    of stacking another layer of argument swapping.
    */
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Get a reference to the reversed comparator.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<T, C> Comparator<T> for Reversed<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.inner.compare(b, a)
    }
}

/**
A comparator that consults a second comparator only when the first one reports equality.

Chaining [`ThenBy`] comparators is left associative: `a.then_by(b).then_by(c)` consults `a`, then
`b`, then `c`, and the first result that is not [`Ordering::Equal`] wins.
*/
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ThenBy<A, B> {
    /// The primary comparator.
    first: A,

    /// The tie-breaking comparator.
    next: B,
}

impl<A, B> ThenBy<A, B> {
    /// Create a new [`ThenBy`] comparator.
    pub fn new(first: A, next: B) -> Self {
        Self { first, next }
    }

    /// Get a reference to the primary comparator.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Get a reference to the tie-breaking comparator.
    pub fn tie_breaker(&self) -> &B {
        &self.next
    }
}

impl<T, A, B> Comparator<T> for ThenBy<A, B>
where
    T: ?Sized,
    A: Comparator<T>,
    B: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.first.compare(a, b) {
            Ordering::Equal => self.next.compare(a, b),
            ordering => ordering,
        }
    }
}

/// Where absent values are placed relative to present values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NullPlacement {
    /// Absent values are less than every present value.
    First,

    /// Absent values are greater than every present value.
    Last,
}

/**
A comparator over optional values.

An absent value ([`None`]) is equal to another absent value and is ordered before or after every
present value depending on the [`NullPlacement`]. Present values are compared with the wrapped
comparator.

This comparator only implements [`Comparator<Option<T>>`]. Using it where the compared values are
not optional is rejected by the compiler, so the placement policy can never be silently ignored.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Nulls<C> {
    /// The comparator for present values.
    inner: C,

    /// The placement of absent values.
    placement: NullPlacement,
}

impl<C> Nulls<C> {
    /// Create a new [`Nulls`] comparator that places absent values first.
    pub fn first(inner: C) -> Self {
        Self {
            inner,
            placement: NullPlacement::First,
        }
    }

    /// Create a new [`Nulls`] comparator that places absent values last.
    pub fn last(inner: C) -> Self {
        Self {
            inner,
            placement: NullPlacement::Last,
        }
    }

    /// Get the placement of absent values.
    pub fn placement(&self) -> NullPlacement {
        self.placement
    }

    /// Get a reference to the comparator for present values.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<T, C> Comparator<Option<T>> for Nulls<C>
where
    C: Comparator<T>,
{
    fn compare(&self, a: &Option<T>, b: &Option<T>) -> Ordering {
        let absent_ordering = match self.placement {
            NullPlacement::First => Ordering::Less,
            NullPlacement::Last => Ordering::Greater,
        };

        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => absent_ordering,
            (Some(_), None) => absent_ordering.reverse(),
            (Some(a), Some(b)) => self.inner.compare(a, b),
        }
    }
}

/**
Extension methods for building comparators with a fluent syntax.

The trait is implemented for every type instead of only for [`Comparator`]s because the same
combinators also build fallible comparators. [`Reversed`], [`ThenBy`] and [`Nulls`] implement
[`Comparator`] when their parts do and [`TryComparator`](crate::fallible::TryComparator) when their
parts do. Calling these methods on a value that is neither is not an error by itself, but the
result cannot be passed to anything that sorts or compares.

```compile_fail
use rainsort::{sorted_copy, ComparatorExt};

// A string is not a comparator so the reversed string is not one either
let not_a_comparator = "oops".reversed();
sorted_copy(&[2, 1], &not_a_comparator);
```
*/
pub trait ComparatorExt: Sized {
    /// Reverse the ordering of this comparator.
    fn reversed(self) -> Reversed<Self> {
        Reversed::new(self)
    }

    /// Consult `next` when this comparator reports that two values are equal.
    fn then_by<B>(self, next: B) -> ThenBy<Self, B> {
        ThenBy::new(self, next)
    }

    /// Compare the natural ordering of a derived key when this comparator reports equality.
    fn then_by_key<T, K, F>(self, extractor: F) -> ThenBy<Self, ByKey<F, Natural, K>>
    where
        T: ?Sized,
        K: Ord,
        F: Fn(&T) -> K,
    {
        ThenBy::new(self, by_key(extractor))
    }

    /// Compare the reversed natural ordering of a derived key when this comparator reports
    /// equality.
    fn then_by_key_descending<T, K, F>(
        self,
        extractor: F,
    ) -> ThenBy<Self, Reversed<ByKey<F, Natural, K>>>
    where
        T: ?Sized,
        K: Ord,
        F: Fn(&T) -> K,
    {
        ThenBy::new(self, Reversed::new(by_key(extractor)))
    }

    /// Extend this comparator to optional values, placing absent values first.
    fn nulls_first(self) -> Nulls<Self> {
        Nulls::first(self)
    }

    /// Extend this comparator to optional values, placing absent values last.
    fn nulls_last(self) -> Nulls<Self> {
        Nulls::last(self)
    }

    /**
    Lift this comparator into a [`TryComparator`](crate::fallible::TryComparator) that never fails.

    This allows infallible comparators to be used as tie-breakers for fallible comparators.
    */
    fn infallible(self) -> Infallible<Self> {
        Infallible::new(self)
    }
}

impl<C> ComparatorExt for C {}

/**
Build a comparator that compares the natural ordering of a key derived from each value.

The extractor must be side-effect free and deterministic across calls.
*/
pub fn by_key<T, K, F>(extractor: F) -> ByKey<F, Natural, K>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    ByKey::new(extractor, Natural)
}

/// Build a comparator that compares a key derived from each value with `key_comparator`.
pub fn by_key_with<T, K, F, C>(extractor: F, key_comparator: C) -> ByKey<F, C, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    C: Comparator<K>,
{
    ByKey::new(extractor, key_comparator)
}

/// Build a comparator that compares the natural ordering of a key borrowed from each value.
pub fn by_ref_key<T, K, F>(extractor: F) -> ByRefKey<F, K>
where
    T: ?Sized,
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    ByRefKey::new(extractor)
}

/// Build a comparator equivalent to `comparator` with its arguments swapped.
pub fn reverse<C>(comparator: C) -> Reversed<C> {
    Reversed::new(comparator)
}

/// Build a comparator that consults `next` only when `first` reports equality.
pub fn then_by<A, B>(first: A, next: B) -> ThenBy<A, B> {
    ThenBy::new(first, next)
}

/// Extend `comparator` to optional values where absent values come before present values.
pub fn nulls_first<C>(comparator: C) -> Nulls<C> {
    Nulls::first(comparator)
}

/// Extend `comparator` to optional values where absent values come after present values.
pub fn nulls_last<C>(comparator: C) -> Nulls<C> {
    Nulls::last(comparator)
}

/// Get the natural ordering comparator.
pub fn natural() -> Natural {
    Natural
}

/// Get the reverse of the natural ordering comparator.
pub fn natural_descending() -> Reversed<Natural> {
    Reversed::new(Natural)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Person {
        name: String,
        age: u32,
    }

    fn person(name: &str, age: u32) -> Person {
        Person {
            name: name.to_string(),
            age,
        }
    }

    #[test]
    fn by_key_compares_extracted_keys() {
        let cmp = by_key(|p: &Person| p.age);

        assert_eq!(cmp.compare(&person("a", 1), &person("b", 2)), Ordering::Less);
        assert_eq!(cmp.compare(&person("a", 2), &person("b", 2)), Ordering::Equal);
    }

    #[test]
    fn by_key_with_uses_the_key_comparator() {
        let cmp = by_key_with(|p: &Person| p.age, Natural.reversed());

        assert_eq!(
            cmp.compare(&person("a", 1), &person("b", 2)),
            Ordering::Greater
        );
    }

    #[test]
    fn by_ref_key_compares_borrowed_keys() {
        let cmp = by_ref_key(|p: &Person| &p.name);

        assert_eq!(
            cmp.compare(&person("Alice", 1), &person("Bob", 1)),
            Ordering::Less
        );
        assert_eq!(
            cmp.compare(&person("Bob", 1), &person("Bob", 9)),
            Ordering::Equal
        );
    }

    #[test]
    fn reverse_swaps_arguments() {
        let cmp = reverse(Natural);

        assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
        assert_eq!(cmp.compare(&2, &1), Ordering::Less);
        assert_eq!(cmp.compare(&2, &2), Ordering::Equal);
    }

    #[test]
    fn double_reverse_matches_the_original_ordering() {
        let original = by_key(|p: &Person| p.age);
        let doubled = original.clone().reversed().reversed();
        let unwrapped = original.clone().reversed().into_inner();
        let people = [person("a", 3), person("b", 1), person("c", 3)];

        for a in people.iter() {
            for b in people.iter() {
                assert_eq!(doubled.compare(a, b), original.compare(a, b));
                assert_eq!(unwrapped.compare(a, b), original.compare(a, b));
            }
        }
    }

    #[test]
    fn then_by_only_consults_the_tie_breaker_on_equality() {
        let primary = by_key(|p: &Person| p.name.clone());
        let tie_breaker = by_key(|p: &Person| p.age);
        let combined = then_by(primary.clone(), tie_breaker.clone());
        let people = [
            person("Bob", 25),
            person("Alice", 30),
            person("Alice", 25),
            person("Bob", 25),
        ];

        for a in people.iter() {
            for b in people.iter() {
                let expected = match primary.compare(a, b) {
                    Ordering::Equal => tie_breaker.compare(a, b),
                    ordering => ordering,
                };
                assert_eq!(combined.compare(a, b), expected);
            }
        }
    }

    #[test]
    fn then_by_chains_left_to_right() {
        let cmp = by_key(|t: &(u8, u8, u8)| t.0)
            .then_by_key(|t: &(u8, u8, u8)| t.1)
            .then_by_key_descending(|t: &(u8, u8, u8)| t.2);

        assert_eq!(cmp.compare(&(1, 9, 9), &(2, 0, 0)), Ordering::Less);
        assert_eq!(cmp.compare(&(1, 1, 9), &(1, 2, 0)), Ordering::Less);
        assert_eq!(cmp.compare(&(1, 1, 9), &(1, 1, 0)), Ordering::Less);
        assert_eq!(cmp.compare(&(1, 1, 1), &(1, 1, 1)), Ordering::Equal);
    }

    #[test]
    fn nulls_first_places_absent_values_before_present_values() {
        let cmp = nulls_first(Natural);

        assert_eq!(cmp.compare(&None, &Some(i32::MIN)), Ordering::Less);
        assert_eq!(cmp.compare(&Some(i32::MIN), &None), Ordering::Greater);
        assert_eq!(cmp.compare(&None::<i32>, &None), Ordering::Equal);
        assert_eq!(cmp.compare(&Some(1), &Some(2)), Ordering::Less);
        assert_eq!(cmp.placement(), NullPlacement::First);
    }

    #[test]
    fn nulls_last_places_absent_values_after_present_values() {
        let cmp = Natural.reversed().nulls_last();

        assert_eq!(cmp.compare(&None, &Some(i32::MAX)), Ordering::Greater);
        assert_eq!(cmp.compare(&Some(i32::MAX), &None), Ordering::Less);
        assert_eq!(cmp.compare(&None::<i32>, &None), Ordering::Equal);
        assert_eq!(cmp.compare(&Some(1), &Some(2)), Ordering::Greater);
    }

    #[test]
    fn null_placement_ignores_the_inner_ordering() {
        let ascending = nulls_first(Natural);
        let descending = nulls_first(natural_descending());

        for value in [i64::MIN, -1, 0, 1, i64::MAX] {
            assert_eq!(ascending.compare(&None, &Some(value)), Ordering::Less);
            assert_eq!(descending.compare(&None, &Some(value)), Ordering::Less);
        }
    }

    #[test]
    fn nulls_can_wrap_key_comparators() {
        let cmp = by_key(|p: &Person| p.age).nulls_last();

        assert_eq!(
            cmp.compare(&Some(person("a", 100)), &None),
            Ordering::Less
        );
        assert_eq!(
            cmp.compare(&Some(person("a", 1)), &Some(person("b", 2))),
            Ordering::Less
        );
    }

    #[test]
    fn natural_descending_is_reversed_natural() {
        assert_eq!(natural_descending().compare(&1, &2), Ordering::Greater);
        assert_eq!(natural().compare(&1, &2), Ordering::Less);
    }
}
