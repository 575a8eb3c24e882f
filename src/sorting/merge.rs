// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
A stable, bottom-up merge sort over element indices.

Sorting indices instead of the elements themselves means that elements never need to be cloned or
moved while comparisons are still running. This has two nice properties:

1. A failed comparison can abort the sort without leaving the caller's data half sorted.
1. A comparator that breaks the ordering contract only produces an odd permutation. There is no
   code path here that panics because of an inconsistent comparator.

The sort first orders short runs with insertion sort and then merges runs of doubling width,
ping-ponging between the index vector and a scratch buffer.
*/

use std::cmp::{self, Ordering};

use crate::config::INSERTION_SORT_RUN_LENGTH;

/**
Return the stable sorting permutation for `len` elements where `compare(i, j)` compares the
elements at original positions `i` and `j`.

The returned vector maps sorted positions to original positions i.e. `result[sorted_pos] =
original_pos`. The first error returned by `compare` stops the sort and is returned as-is.
*/
pub(crate) fn stable_sort_indices<E, F>(len: usize, mut compare: F) -> Result<Vec<usize>, E>
where
    F: FnMut(usize, usize) -> Result<Ordering, E>,
{
    let mut indices: Vec<usize> = (0..len).collect();
    if len < 2 {
        return Ok(indices);
    }

    for run in indices.chunks_mut(INSERTION_SORT_RUN_LENGTH) {
        insertion_sort(run, &mut compare)?;
    }

    let mut buffer = vec![0_usize; len];
    let mut width = INSERTION_SORT_RUN_LENGTH;
    while width < len {
        for start in (0..len).step_by(2 * width) {
            let mid = cmp::min(start + width, len);
            let end = cmp::min(start + 2 * width, len);
            merge(
                &indices[start..mid],
                &indices[mid..end],
                &mut buffer[start..end],
                &mut compare,
            )?;
        }

        std::mem::swap(&mut indices, &mut buffer);
        width *= 2;
    }

    Ok(indices)
}

/// Stable insertion sort of a short run of indices.
fn insertion_sort<E, F>(run: &mut [usize], compare: &mut F) -> Result<(), E>
where
    F: FnMut(usize, usize) -> Result<Ordering, E>,
{
    for unsorted_idx in 1..run.len() {
        let mut idx = unsorted_idx;
        // Only move past strictly greater elements to keep equal elements in input order
        while idx > 0 && compare(run[idx - 1], run[idx])? == Ordering::Greater {
            run.swap(idx - 1, idx);
            idx -= 1;
        }
    }

    Ok(())
}

/**
Merge two adjacent sorted runs into `out`.

On ties the element from the left run is taken first, which is what makes the sort stable.
*/
fn merge<E, F>(left: &[usize], right: &[usize], out: &mut [usize], compare: &mut F) -> Result<(), E>
where
    F: FnMut(usize, usize) -> Result<Ordering, E>,
{
    if right.is_empty() {
        out.copy_from_slice(left);
        return Ok(());
    }

    // The runs are already in order relative to each other so the merge is just a copy
    if compare(left[left.len() - 1], right[0])? != Ordering::Greater {
        out[..left.len()].copy_from_slice(left);
        out[left.len()..].copy_from_slice(right);
        return Ok(());
    }

    let mut left_idx = 0;
    let mut right_idx = 0;
    let mut out_idx = 0;
    while left_idx < left.len() && right_idx < right.len() {
        if compare(right[right_idx], left[left_idx])? == Ordering::Less {
            out[out_idx] = right[right_idx];
            right_idx += 1;
        } else {
            out[out_idx] = left[left_idx];
            left_idx += 1;
        }
        out_idx += 1;
    }

    let left_rest = &left[left_idx..];
    out[out_idx..out_idx + left_rest.len()].copy_from_slice(left_rest);
    out_idx += left_rest.len();
    out[out_idx..].copy_from_slice(&right[right_idx..]);

    Ok(())
}
