// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
Comparators whose comparisons can fail.

Most orderings cannot fail, but a key extractor may be unable to produce a key that the caller
declared as mandatory. Instead of silently coercing a missing key to some placeholder value, a
[`ByRequiredKey`] comparator reports a [`ComparatorError::TypeMismatch`] at comparison time. The
`try_*` functions in the [`sorting`](crate::sorting) and [`reduce`](crate::reduce) modules stop at
the first failed comparison and leave their input untouched.

Fallible comparators compose with the same combinators as infallible ones. [`Reversed`],
[`ThenBy`] and [`Nulls`] implement [`TryComparator`] whenever the comparators they wrap do, so a
descending sort over a mandatory key is written the same way as any other descending sort.

```
use rainsort::{by_required_key, try_sorted_copy, ComparatorExt};

let scores = vec![Some(2), Some(7), Some(5)];
let highest_first = by_required_key("score", |s: &Option<u32>| *s).reversed();

assert_eq!(
    try_sorted_copy(&scores, &highest_first),
    Ok(vec![Some(7), Some(5), Some(2)])
);
```
*/

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::combinators::{NullPlacement, Nulls, Reversed, ThenBy};
use crate::comparator::{Comparator, Natural};
use crate::errors::{ComparatorError, ComparatorResult};

/// An interface for comparators that may fail to compare two values.
pub trait TryComparator<T: ?Sized> {
    /**
    Return an ordering obtained by comparing `a` and `b` or an error if the values could not be
    compared.

    Successful comparisons are held to the same contract as [`Comparator::compare`].
    */
    fn try_compare(&self, a: &T, b: &T) -> ComparatorResult<Ordering>;

    /// Consult `next` when this comparator reports that two values are equal.
    fn try_then_by<B>(self, next: B) -> TryThenBy<Self, B>
    where
        Self: Sized,
        B: TryComparator<T>,
    {
        TryThenBy { first: self, next }
    }
}

/// Adapts a [`Comparator`] into a [`TryComparator`] that never fails.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Infallible<C> {
    /// The wrapped comparator.
    inner: C,
}

impl<C> Infallible<C> {
    /// Create a new [`Infallible`] adapter.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<T, C> TryComparator<T> for Infallible<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    fn try_compare(&self, a: &T, b: &T) -> ComparatorResult<Ordering> {
        Ok(self.inner.compare(a, b))
    }
}

/// A fallible comparator that consults a second comparator on equality.
#[derive(Clone, Copy, Debug)]
pub struct TryThenBy<A, B> {
    /// The primary comparator.
    first: A,

    /// The tie-breaking comparator.
    next: B,
}

impl<T, A, B> TryComparator<T> for TryThenBy<A, B>
where
    T: ?Sized,
    A: TryComparator<T>,
    B: TryComparator<T>,
{
    fn try_compare(&self, a: &T, b: &T) -> ComparatorResult<Ordering> {
        match self.first.try_compare(a, b)? {
            Ordering::Equal => self.next.try_compare(a, b),
            ordering => Ok(ordering),
        }
    }
}

impl<T, C> TryComparator<T> for Reversed<C>
where
    T: ?Sized,
    C: TryComparator<T>,
{
    fn try_compare(&self, a: &T, b: &T) -> ComparatorResult<Ordering> {
        self.inner().try_compare(b, a)
    }
}

impl<T, A, B> TryComparator<T> for ThenBy<A, B>
where
    T: ?Sized,
    A: TryComparator<T>,
    B: TryComparator<T>,
{
    fn try_compare(&self, a: &T, b: &T) -> ComparatorResult<Ordering> {
        match self.first().try_compare(a, b)? {
            Ordering::Equal => self.tie_breaker().try_compare(a, b),
            ordering => Ok(ordering),
        }
    }
}

impl<T, C> TryComparator<Option<T>> for Nulls<C>
where
    C: TryComparator<T>,
{
    fn try_compare(&self, a: &Option<T>, b: &Option<T>) -> ComparatorResult<Ordering> {
        let absent_ordering = match self.placement() {
            NullPlacement::First => Ordering::Less,
            NullPlacement::Last => Ordering::Greater,
        };

        match (a, b) {
            (None, None) => Ok(Ordering::Equal),
            (None, Some(_)) => Ok(absent_ordering),
            (Some(_), None) => Ok(absent_ordering.reverse()),
            (Some(a), Some(b)) => self.inner().try_compare(a, b),
        }
    }
}

/**
A comparator over a key that every compared value is required to have.

The extractor returns [`None`] when a value does not have the key. Comparing such a value fails with
[`ComparatorError::TypeMismatch`] instead of treating the missing key as a low or high value. Use
[`nulls_first`](crate::combinators::nulls_first) or [`nulls_last`](crate::combinators::nulls_last)
when missing keys are expected.

Present keys are compared with the key comparator, which is the natural ordering unless the
comparator was built with [`by_required_key_with`].
*/
pub struct ByRequiredKey<F, K, C = Natural> {
    /// A human readable name for the key used in error messages.
    key_name: String,

    /// Derives the key from a value.
    extractor: F,

    /// Compares the extracted keys.
    key_comparator: C,

    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByRequiredKey<F, K> {
    /// Create a new [`ByRequiredKey`] comparator that compares keys by their natural ordering.
    pub fn new(key_name: impl Into<String>, extractor: F) -> Self {
        Self::with_key_comparator(key_name, extractor, Natural)
    }
}

impl<F, K, C> ByRequiredKey<F, K, C> {
    /// Create a new [`ByRequiredKey`] comparator that compares keys with `key_comparator`.
    pub fn with_key_comparator(
        key_name: impl Into<String>,
        extractor: F,
        key_comparator: C,
    ) -> Self {
        Self {
            key_name: key_name.into(),
            extractor,
            key_comparator,
            _key: PhantomData,
        }
    }

    /// Get the name of the key.
    pub fn key_name(&self) -> &str {
        self.key_name.as_str()
    }

    fn missing_key_error(&self, position: &str) -> ComparatorError {
        ComparatorError::TypeMismatch {
            key: self.key_name.clone(),
            reason: format!(
                "the key is required but the extractor returned no value for the {} operand",
                position
            ),
        }
    }
}

impl<T, F, K, C> TryComparator<T> for ByRequiredKey<F, K, C>
where
    T: ?Sized,
    F: Fn(&T) -> Option<K>,
    C: Comparator<K>,
{
    fn try_compare(&self, a: &T, b: &T) -> ComparatorResult<Ordering> {
        let key_a = (self.extractor)(a).ok_or_else(|| self.missing_key_error("left"))?;
        let key_b = (self.extractor)(b).ok_or_else(|| self.missing_key_error("right"))?;

        Ok(self.key_comparator.compare(&key_a, &key_b))
    }
}

impl<F: Clone, K, C: Clone> Clone for ByRequiredKey<F, K, C> {
    fn clone(&self) -> Self {
        Self::with_key_comparator(
            self.key_name.clone(),
            self.extractor.clone(),
            self.key_comparator.clone(),
        )
    }
}

impl<F, K, C: fmt::Debug> fmt::Debug for ByRequiredKey<F, K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByRequiredKey")
            .field("key_name", &self.key_name)
            .field("key_comparator", &self.key_comparator)
            .finish_non_exhaustive()
    }
}

/**
Build a comparator over a mandatory key.

`key_name` is only used to describe the key in errors.

# Example

```
use rainsort::{by_required_key, ComparatorError, TryComparator};

let cmp = by_required_key("length", |s: &Option<&str>| s.map(|s| s.len()));

assert!(cmp.try_compare(&Some("a"), &Some("bb")).is_ok());
assert!(matches!(
    cmp.try_compare(&Some("a"), &None),
    Err(ComparatorError::TypeMismatch { .. })
));
```
*/
pub fn by_required_key<T, K, F>(key_name: impl Into<String>, extractor: F) -> ByRequiredKey<F, K>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> Option<K>,
{
    ByRequiredKey::new(key_name, extractor)
}

/**
Build a comparator over a mandatory key where present keys are compared with `key_comparator`.

Missing keys fail with [`ComparatorError::TypeMismatch`] exactly like [`by_required_key`].
*/
pub fn by_required_key_with<T, K, F, C>(
    key_name: impl Into<String>,
    extractor: F,
    key_comparator: C,
) -> ByRequiredKey<F, K, C>
where
    T: ?Sized,
    F: Fn(&T) -> Option<K>,
    C: Comparator<K>,
{
    ByRequiredKey::with_key_comparator(key_name, extractor, key_comparator)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::combinators::{by_key, natural_descending, nulls_last, reverse, ComparatorExt};
    use crate::sorting::{try_sort_in_place, try_sorted_copy};

    #[derive(Clone, Debug, PartialEq)]
    struct Record {
        id: u32,
        score: Option<u32>,
    }

    #[test]
    fn required_key_compares_present_keys() {
        let cmp = by_required_key("score", |r: &Record| r.score);
        let low = Record {
            id: 1,
            score: Some(1),
        };
        let high = Record {
            id: 2,
            score: Some(2),
        };

        assert_eq!(cmp.try_compare(&low, &high), Ok(Ordering::Less));
        assert_eq!(cmp.try_compare(&high, &low), Ok(Ordering::Greater));
        assert_eq!(cmp.key_name(), "score");
    }

    #[test]
    fn required_key_fails_on_missing_keys() {
        let cmp = by_required_key("score", |r: &Record| r.score);
        let missing = Record { id: 1, score: None };
        let present = Record {
            id: 2,
            score: Some(2),
        };

        match cmp.try_compare(&present, &missing) {
            Err(ComparatorError::TypeMismatch { key, reason }) => {
                assert_eq!(key, "score");
                assert!(reason.contains("right operand"));
            }
            other => panic!("Expected a type mismatch but got {:?}", other),
        }
    }

    #[test]
    fn infallible_never_fails() {
        let cmp = Natural.infallible();

        assert_eq!(cmp.try_compare(&3, &2), Ok(Ordering::Greater));
        assert_eq!(cmp.try_compare(&2, &2), Ok(Ordering::Equal));
    }

    #[test]
    fn then_by_breaks_ties_and_propagates_errors() {
        let cmp = by_required_key("score", |r: &Record| r.score)
            .try_then_by(by_key(|r: &Record| r.id).infallible());
        let a = Record {
            id: 1,
            score: Some(5),
        };
        let b = Record {
            id: 2,
            score: Some(5),
        };
        let c = Record { id: 3, score: None };

        assert_eq!(cmp.try_compare(&a, &b), Ok(Ordering::Less));
        assert_eq!(cmp.try_compare(&b, &a), Ok(Ordering::Greater));
        assert!(cmp.try_compare(&a, &c).is_err());
    }

    fn records() -> Vec<Record> {
        [(1, 3), (2, 9), (3, 3), (4, 5)]
            .into_iter()
            .map(|(id, score)| Record {
                id,
                score: Some(score),
            })
            .collect()
    }

    fn ids(records: &[Record]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn required_keys_can_be_sorted_in_descending_order() {
        let highest_first = reverse(by_required_key("score", |r: &Record| r.score));
        let sorted = try_sorted_copy(&records(), &highest_first).unwrap();
        assert_eq!(ids(&sorted), vec![2, 4, 1, 3]);

        let highest_first = by_required_key("score", |r: &Record| r.score).reversed();
        let mut in_place = records();
        try_sort_in_place(&mut in_place, &highest_first).unwrap();
        assert_eq!(in_place, sorted);

        let highest_first =
            by_required_key_with("score", |r: &Record| r.score, natural_descending());
        assert_eq!(try_sorted_copy(&records(), &highest_first), Ok(sorted));
    }

    #[test]
    fn reversing_a_required_key_still_reports_missing_keys() {
        let highest_first = by_required_key("score", |r: &Record| r.score).reversed();
        let mut items = records();
        items[1].score = None;
        let expected = items.clone();

        let result = try_sort_in_place(&mut items, &highest_first);

        assert!(matches!(
            result,
            Err(ComparatorError::TypeMismatch { ref key, .. }) if key == "score"
        ));
        assert_eq!(items, expected);
    }

    #[test]
    fn fallible_comparators_compose_with_then_by() {
        let cmp = by_required_key("score", |r: &Record| r.score)
            .reversed()
            .then_by(by_key(|r: &Record| r.id).reversed().infallible());

        let sorted = try_sorted_copy(&records(), &cmp).unwrap();

        assert_eq!(ids(&sorted), vec![2, 4, 3, 1]);
    }

    #[test]
    fn absent_values_are_placed_by_a_fallible_nulls_comparator() {
        let mut items: Vec<Option<Record>> = records().into_iter().map(Some).collect();
        items.insert(1, None);
        let cmp = nulls_last(by_required_key("score", |r: &Record| r.score));

        let sorted = try_sorted_copy(&items, &cmp).unwrap();

        let sorted_ids: Vec<Option<u32>> = sorted
            .iter()
            .map(|record| record.as_ref().map(|r| r.id))
            .collect();
        assert_eq!(sorted_ids, vec![Some(1), Some(3), Some(4), Some(2), None]);
    }
}
