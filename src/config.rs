// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
This module contains global configuration constants for the sorting routines.

Values that callers may want to change per sort are exposed through
[`SortOptions`](crate::options::SortOptions) instead.
*/

/**
The length of the runs that are sorted with insertion sort before merging starts.

Insertion sort does fewer comparisons than merging on very short runs. Larger values trade extra
comparisons on random data for fewer passes over the index buffer.
*/
pub(crate) const INSERTION_SORT_RUN_LENGTH: usize = 16;

/**
The minimum sequence length for which a linear "already sorted?" scan is done before sorting.

Below this length the scan costs about as much as the sort itself.
*/
pub(crate) const PRESORTED_SCAN_MIN_LENGTH: usize = 32;
