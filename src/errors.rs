// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
This module contains error types for comparator construction and fallible comparisons.

Note that there is intentionally no error for comparators that break the ordering contract (e.g. a
comparator that is not transitive). Detecting that in general is not possible at runtime, so a
misbehaving comparator results in an unspecified order instead of an error. See the
[`Comparator`](crate::Comparator) documentation for the contract.
*/

use std::fmt;

/// Result that wraps [`ComparatorError`].
pub type ComparatorResult<T> = Result<T, ComparatorError>;

/// Errors that can arise from building or running comparators.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ComparatorError {
    /**
    Variant for misapplication of a combinator.

    These are raised when a comparator is constructed so that no data is touched by a comparator
    that was never valid.
    */
    Usage(String),

    /**
    Variant for a key extractor that did not produce a key that it is required to produce.

    This is raised at comparison time by comparators that declared their key as mandatory.
    */
    TypeMismatch {
        /// The name of the key that could not be extracted.
        key: String,
        /// A description of the problem.
        reason: String,
    },
}

impl std::error::Error for ComparatorError {}

impl fmt::Display for ComparatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparatorError::Usage(msg) => write!(f, "Invalid comparator usage: {}", msg),
            ComparatorError::TypeMismatch { key, reason } => {
                write!(
                    f,
                    "Type mismatch while comparing on the key \"{}\": {}",
                    key, reason
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_includes_the_key_name_for_type_mismatches() {
        let err = ComparatorError::TypeMismatch {
            key: "age".to_string(),
            reason: "the extractor returned no value".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Type mismatch while comparing on the key \"age\": the extractor returned no value"
        );
    }

    #[test]
    fn display_for_usage_errors() {
        let err = ComparatorError::Usage("a chain needs a primary comparator".to_string());

        assert_eq!(
            err.to_string(),
            "Invalid comparator usage: a chain needs a primary comparator"
        );
    }
}
