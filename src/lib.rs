/*!
RainSort is a small library of composable comparators and stable sorting helpers. It grew out of the
comparator utilities of [RainDB] and, in the same spirit, aims to be a learning tool with extensive
documentation on the design and intentions of the code. With regard to this, we have configured the
project such that `rustdoc` generates output even for private methods.

The library is made of three layers where each layer only depends on the one below it:

1. The ordering primitive: the [`Comparator`] trait and the [`Natural`] ordering
1. Comparator combinators that build new comparators from key extractors and other comparators
   e.g. [`by_key`], [`reverse`], [`then_by`], [`nulls_first`] and [`ComparatorChain`]
1. Sorting and reductions that apply comparators to sequences e.g. [`sorted_copy`],
   [`sort_in_place`], [`max_by`] and [`min_by`]

# Example

```
use rainsort::{by_key, sorted_copy, ComparatorExt};

let people = vec![("Bob", 25), ("Alice", 30), ("Alice", 25)];

let by_name_then_age = by_key(|p: &(&str, u32)| p.0).then_by_key(|p: &(&str, u32)| p.1);
assert_eq!(
    sorted_copy(&people, &by_name_then_age),
    vec![("Alice", 25), ("Alice", 30), ("Bob", 25)]
);

// Sorts are stable so "Bob" stays ahead of the "Alice" with the same age
let by_age = by_key(|p: &(&str, u32)| p.1);
assert_eq!(
    sorted_copy(&people, &by_age),
    vec![("Bob", 25), ("Alice", 25), ("Alice", 30)]
);
```

[RainDB]: https://github.com/nerdondon/raindb
*/

#![warn(missing_debug_implementations, missing_docs)]

pub mod chain;
pub use chain::{BoxedComparator, ComparatorChain};

pub mod combinators;
pub use combinators::{
    by_key, by_key_with, by_ref_key, natural, natural_descending, nulls_first, nulls_last, reverse,
    then_by, ByKey, ByRefKey, ComparatorExt, NullPlacement, Nulls, Reversed, ThenBy,
};

pub mod comparator;
pub use comparator::{from_fn, Comparator, FloatTotalOrder, FnComparator, Natural};

mod config;

mod errors;
pub use errors::{ComparatorError, ComparatorResult};

pub mod fallible;
pub use fallible::{
    by_required_key, by_required_key_with, ByRequiredKey, Infallible, TryComparator, TryThenBy,
};

pub mod options;
pub use options::SortOptions;

pub mod reduce;
pub use reduce::{max_by, max_by_key, min_by, min_by_key, try_max_by, try_min_by};

pub mod shared;
pub use shared::SharedSequence;

pub mod sorting;
pub use sorting::{
    apply_permutation, is_sorted_by, sort_in_place, sort_in_place_by_natural_order,
    sort_in_place_by_natural_order_descending, sort_permutation, sorted_by_natural_order,
    sorted_by_natural_order_descending, sorted_copy, try_sort_in_place, try_sorted_copy, Sorter,
};
