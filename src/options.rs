// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
This module holds the option structures that can be passed to a [`Sorter`](crate::sorting::Sorter).
*/

/// Holds options to control sorting behavior.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortOptions {
    /**
    Check whether the input is already sorted before doing any work.

    The check is a single linear scan and is only done for inputs with at least
    [`PRESORTED_SCAN_MIN_LENGTH`](crate::config::PRESORTED_SCAN_MIN_LENGTH) elements.

    **This defaults to true.**
    */
    skip_presorted: bool,

    /**
    Count the comparisons performed by each sort and emit the count as a trace log.

    **This defaults to false.**
    */
    count_comparisons: bool,
}

/// Public methods
impl SortOptions {
    /// Get whether presorted inputs are detected and skipped.
    pub fn skip_presorted(&self) -> bool {
        self.skip_presorted
    }

    /// Get whether comparisons are counted.
    pub fn count_comparisons(&self) -> bool {
        self.count_comparisons
    }

    /// Set whether presorted inputs are detected and skipped.
    pub fn with_skip_presorted(mut self, skip_presorted: bool) -> Self {
        self.skip_presorted = skip_presorted;
        self
    }

    /// Set whether comparisons are counted.
    pub fn with_count_comparisons(mut self, count_comparisons: bool) -> Self {
        self.count_comparisons = count_comparisons;
        self
    }
}

impl Default for SortOptions {
    fn default() -> Self {
        SortOptions {
            skip_presorted: true,
            count_comparisons: false,
        }
    }
}
