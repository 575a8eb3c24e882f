// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
The ordering primitive that the rest of the crate is built on.

A comparator is any type implementing [`Comparator`]. Comparators are useful for sorting by
properties different from the natural ordering provided by ordering traits e.g. [`Ord`].

Three kinds of comparators are provided here:

1. [`Natural`] which defers to a type's [`Ord`] implementation
1. [`FloatTotalOrder`] which orders floating point numbers by their IEEE 754 total order
1. Closures and [`FnComparator`] for orderings that are easier to write by hand

Comparators built out of other comparators (e.g. reversed or key based comparators) live in the
[`combinators`](crate::combinators) module.
*/

use std::cmp::Ordering;
use std::fmt;

/**
An interface for structs intended to be used as a comparator.

# Contract

Implementations must describe a strict weak ordering over the values they accept. Distinct values
may compare as [`Ordering::Equal`] e.g. when a comparator only looks at a key derived from the
values. Explicitly, for all `a`, `b` and `c`:

1. `compare(a, b)` and `compare(b, a)` are never both [`Ordering::Less`]
1. If `compare(a, b)` and `compare(b, c)` are [`Ordering::Less`] then so is `compare(a, c)`
1. If `compare(a, b)` and `compare(b, c)` are [`Ordering::Equal`] then so is `compare(a, c)`

This is the responsibility of the implementor and is not checked at runtime. The sorting functions
in this crate will not crash when handed a comparator that breaks the contract, but the resulting
order is unspecified.

# Concurrency

Comparators take `&self` and have no way to change between calls. A comparator built from parts
that are [`Send`] and [`Sync`] can be shared freely between threads. Key extractors and closures
are expected to be free of side effects.
*/
pub trait Comparator<T: ?Sized> {
    /**
    Return an ordering obtained by comparing `a` and `b`.

    Invariants:

    1. Returns [`Ordering::Greater`] if `a` > `b`
    1. Returns [`Ordering::Equal`] if `a` == `b`
    1. Returns [`Ordering::Less`] if `a` < `b`
    */
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` is less than `b`.
    fn compares_lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns true if `a` is less than or equal to `b`.
    fn compares_le(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    /// Returns true if `a` is greater than `b`.
    fn compares_gt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Returns true if `a` is greater than or equal to `b`.
    fn compares_ge(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Less
    }

    /// Returns true if `a` and `b` are equivalent under this comparator.
    fn compares_eq(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Returns true if `a` and `b` are not equivalent under this comparator.
    fn compares_ne(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Equal
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/**
A comparator that uses the natural ordering of a type i.e. its [`Ord`] implementation.

Only types that provide a total order can be compared with [`Natural`]. Trying to use it with a
type that does not implement [`Ord`] is rejected by the compiler.
*/
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/**
A comparator for floating point numbers that uses the IEEE 754 `totalOrder` predicate.

Floating point types only implement [`PartialOrd`] so they cannot be used with [`Natural`]. With
this ordering negative zero sorts before positive zero and NaN values sort to the ends depending on
their sign bit.
*/
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FloatTotalOrder;

impl Comparator<f64> for FloatTotalOrder {
    fn compare(&self, a: &f64, b: &f64) -> Ordering {
        a.total_cmp(b)
    }
}

impl Comparator<f32> for FloatTotalOrder {
    fn compare(&self, a: &f32, b: &f32) -> Ordering {
        a.total_cmp(b)
    }
}

/**
A comparator built directly from a two-argument function.

Closures already implement [`Comparator`] so this wrapper is mostly useful for giving hand written
comparators a [`Debug`] implementation and a name that can be stored in a struct field.
*/
#[derive(Clone, Copy)]
pub struct FnComparator<F> {
    /// The function performing the comparison.
    compare_fn: F,
}

impl<F> FnComparator<F> {
    /// Create a new [`FnComparator`] wrapping the provided function.
    pub fn new(compare_fn: F) -> Self {
        Self { compare_fn }
    }
}

impl<T, F> Comparator<T> for FnComparator<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare_fn)(a, b)
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComparator").finish_non_exhaustive()
    }
}

/**
Build a comparator from an arbitrary function.

This is for orderings that cannot be neatly expressed with the combinators e.g. comparing multiple
fields with special cased tie-breaking in a single pass. A comparator built this way is
interchangeable with a combinator-built comparator that expresses the same ordering.

# Example

```
use std::cmp::Ordering;
use rainsort::{from_fn, Comparator};

let by_length = from_fn(|a: &&str, b: &&str| a.len().cmp(&b.len()));
assert_eq!(by_length.compare(&"abc", &"de"), Ordering::Greater);
```
*/
pub fn from_fn<T, F>(compare_fn: F) -> FnComparator<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    FnComparator::new(compare_fn)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::combinators::{by_key, ComparatorExt};
    use crate::sorting::sorted_copy;

    #[test]
    fn natural_defers_to_ord() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare(&2, &1), Ordering::Greater);
        assert_eq!(Natural.compare(&2, &2), Ordering::Equal);
        assert_eq!(Natural.compare("apple", "banana"), Ordering::Less);
    }

    #[test]
    fn provided_predicates_agree_with_compare() {
        assert!(Natural.compares_lt(&1, &2));
        assert!(Natural.compares_le(&1, &2));
        assert!(Natural.compares_le(&2, &2));
        assert!(Natural.compares_gt(&3, &2));
        assert!(Natural.compares_ge(&3, &3));
        assert!(Natural.compares_eq(&3, &3));
        assert!(Natural.compares_ne(&3, &4));
        assert!(!Natural.compares_lt(&2, &2));
    }

    #[test]
    fn closures_are_comparators() {
        let by_len = |a: &String, b: &String| a.len().cmp(&b.len());

        assert_eq!(
            by_len.compare(&"aaa".to_string(), &"b".to_string()),
            Ordering::Greater
        );
        assert_eq!(
            by_len.compare(&"aa".to_string(), &"bb".to_string()),
            Ordering::Equal
        );
    }

    #[test]
    fn from_fn_matches_the_equivalent_closure() {
        let closure = |a: &(u8, u8), b: &(u8, u8)| a.1.cmp(&b.1).then(a.0.cmp(&b.0));
        let wrapped = from_fn(closure);
        let values = [(1, 2), (2, 1), (1, 1), (2, 2)];

        for a in values.iter() {
            for b in values.iter() {
                assert_eq!(wrapped.compare(a, b), closure.compare(a, b));
            }
        }
    }

    #[test]
    fn from_fn_and_an_equivalent_combinator_chain_are_interchangeable() {
        let custom = from_fn(|a: &(u8, u8), b: &(u8, u8)| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));
        let chained =
            by_key(|pair: &(u8, u8)| pair.0).then_by_key_descending(|pair: &(u8, u8)| pair.1);

        // A small key space so that there are plenty of ties on the first field
        let mut rng = StdRng::seed_from_u64(0xc0ffee);
        let values: Vec<(u8, u8)> = (0..200)
            .map(|_| (rng.gen_range(0..4), rng.gen_range(0..8)))
            .collect();

        for a in values.iter().take(40) {
            for b in values.iter().take(40) {
                assert_eq!(custom.compare(a, b), chained.compare(a, b));
            }
        }

        assert_eq!(sorted_copy(&values, &custom), sorted_copy(&values, &chained));
    }

    #[test]
    fn float_total_order_handles_signed_zero_and_nan() {
        assert_eq!(FloatTotalOrder.compare(&-0.0_f64, &0.0), Ordering::Less);
        assert_eq!(FloatTotalOrder.compare(&1.5_f64, &f64::NAN), Ordering::Less);
        assert_eq!(FloatTotalOrder.compare(&f64::NAN, &f64::NAN), Ordering::Equal);
        assert_eq!(FloatTotalOrder.compare(&2.0_f32, &1.0), Ordering::Greater);
    }
}
