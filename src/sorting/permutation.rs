// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
Applying sorting permutations to sequences in place.

A permutation here always maps sorted positions to original positions i.e. `permutation[sorted_pos]
= original_pos`. This is the format produced by
[`sort_permutation`](crate::sorting::sort_permutation).
*/

use crate::errors::{ComparatorError, ComparatorResult};

/**
Reorder `items` so that the element at position `idx` is the element that was at position
`permutation[idx]`.

This is done in place by following the cycles of the permutation, so the elements do not need to be
[`Clone`].

# Errors

Returns [`ComparatorError::Usage`] and leaves `items` untouched if `permutation` is not a
permutation of `0..items.len()`.
*/
pub fn apply_permutation<T>(items: &mut [T], permutation: &[usize]) -> ComparatorResult<()> {
    validate_permutation(items.len(), permutation)?;
    apply_valid_permutation(items, permutation);

    Ok(())
}

/// Check that `permutation` contains every index in `0..len` exactly once.
fn validate_permutation(len: usize, permutation: &[usize]) -> ComparatorResult<()> {
    if permutation.len() != len {
        return Err(ComparatorError::Usage(format!(
            "The permutation has {} entries but the sequence has {} elements.",
            permutation.len(),
            len
        )));
    }

    let mut seen = vec![false; len];
    for &original_pos in permutation {
        if original_pos >= len {
            return Err(ComparatorError::Usage(format!(
                "The permutation references position {} which is out of bounds for a sequence with {} elements.",
                original_pos, len
            )));
        }

        if seen[original_pos] {
            return Err(ComparatorError::Usage(format!(
                "The permutation references position {} more than once.",
                original_pos
            )));
        }

        seen[original_pos] = true;
    }

    Ok(())
}

/**
Apply a permutation that is already known to be valid.

**NOTE**: Passing an invalid permutation here can panic on an out of bounds index.
*/
pub(crate) fn apply_valid_permutation<T>(items: &mut [T], permutation: &[usize]) {
    let mut placed = vec![false; items.len()];
    for cycle_start in 0..items.len() {
        if placed[cycle_start] {
            continue;
        }

        /*
        Walk the cycle that starts at `cycle_start`. After the swap, `current_pos` holds its final
        element and the element that was originally at `cycle_start` moves to `source_pos`. The
        cycle closes when the next source is the start, at which point the original start element
        is already sitting in its final position.
        */
        let mut current_pos = cycle_start;
        loop {
            placed[current_pos] = true;
            let source_pos = permutation[current_pos];
            if source_pos == cycle_start {
                break;
            }

            items.swap(current_pos, source_pos);
            current_pos = source_pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn applies_a_permutation_with_multiple_cycles() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        // Cycles: (0 2 4) and (1 3)
        let permutation = [2, 3, 4, 1, 0];

        apply_permutation(&mut items, &permutation).unwrap();

        assert_eq!(items, vec!['c', 'd', 'e', 'b', 'a']);
    }

    #[test]
    fn identity_permutation_is_a_no_op() {
        let mut items = vec![3, 1, 2];

        apply_permutation(&mut items, &[0, 1, 2]).unwrap();

        assert_eq!(items, vec![3, 1, 2]);
    }

    #[test]
    fn works_for_elements_that_are_not_clone() {
        struct Opaque(u8);

        let mut items = vec![Opaque(1), Opaque(2), Opaque(3)];
        apply_permutation(&mut items, &[2, 0, 1]).unwrap();

        let values: Vec<u8> = items.iter().map(|o| o.0).collect();
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn rejects_permutations_of_the_wrong_length() {
        let mut items = vec![1, 2, 3];

        let result = apply_permutation(&mut items, &[0, 1]);

        assert!(matches!(result, Err(ComparatorError::Usage(_))));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn rejects_duplicate_and_out_of_bounds_positions() {
        let mut items = vec![1, 2, 3];

        assert!(apply_permutation(&mut items, &[0, 0, 1]).is_err());
        assert!(apply_permutation(&mut items, &[0, 1, 3]).is_err());
        assert_eq!(items, vec![1, 2, 3]);
    }
}
