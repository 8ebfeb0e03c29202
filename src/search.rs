//! Searching slices.
//!
//! Every routine returns the index of a match, or `None` when the target is
//! absent. All but [`linear_search`] require the input to be sorted in
//! ascending order; on unsorted input they return an unspecified result but
//! never panic.

use core::cmp::Ordering;

use num_traits::ToPrimitive;

/// Index of the first element equal to `target`. O(n).
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}

/// Index of some element equal to `target` in a sorted slice. O(log n).
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, sorted.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match sorted[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}

/// Largest `s` with `s * s <= n`, but at least 1.
fn block_size(n: usize) -> usize {
    let mut step = 1;
    while (step + 1) * (step + 1) <= n {
        step += 1;
    }
    step
}

/// Index of the first element equal to `target` in a sorted slice.
///
/// Jumps ahead in blocks of roughly √n elements until a block's last element
/// is not smaller than the target, then scans that block. O(√n).
pub fn jump_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let step = block_size(n);
    let mut start = 0;
    let mut end = step.min(n);
    while sorted[end - 1] < *target {
        start = end;
        if start >= n {
            return None;
        }
        end = (end + step).min(n);
    }
    linear_search(&sorted[start..end], target).map(|offset| start + offset)
}

/// Index of some element equal to `target` in a sorted numeric slice.
///
/// Looks where the target would sit if values were evenly spread between
/// the current bounds. O(log log n) on uniform data, O(n) worst case.
/// Returns `None` for values that do not convert to `f64`.
pub fn interpolation_search<T>(sorted: &[T], target: &T) -> Option<usize>
where
    T: Ord + ToPrimitive,
{
    if sorted.is_empty() {
        return None;
    }
    let wanted = target.to_f64()?;
    let (mut lo, mut hi) = (0, sorted.len() - 1);

    while lo <= hi && *target >= sorted[lo] && *target <= sorted[hi] {
        if sorted[lo] == sorted[hi] {
            return (sorted[lo] == *target).then_some(lo);
        }
        let pos = interpolated_offset(&sorted[lo], &sorted[hi], wanted, hi - lo)
            .map_or(lo + (hi - lo) / 2, |offset| (lo + offset).min(hi));

        match sorted[pos].cmp(target) {
            Ordering::Equal => return Some(pos),
            Ordering::Less => lo = pos + 1,
            Ordering::Greater if pos == 0 => return None,
            Ordering::Greater => hi = pos - 1,
        }
    }
    None
}

// Offset of the interpolated position from `lo`, or `None` when the endpoints
// are indistinguishable as `f64` (large integers that round together).
fn interpolated_offset<T: ToPrimitive>(low: &T, high: &T, wanted: f64, span: usize) -> Option<usize> {
    let low = low.to_f64()?;
    let high = high.to_f64()?;
    if high <= low {
        return None;
    }
    let span: f64 = num_traits::cast(span)?;
    let offset = (wanted - low) / (high - low) * span;
    if offset.is_finite() {
        num_traits::cast(offset.max(0.0))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SORTED: [i32; 5] = [1, 2, 3, 4, 5];

    #[test]
    fn finds_present_values() {
        for (idx, value) in SORTED.iter().enumerate() {
            assert_eq!(linear_search(&SORTED, value), Some(idx));
            assert_eq!(binary_search(&SORTED, value), Some(idx));
            assert_eq!(jump_search(&SORTED, value), Some(idx));
            assert_eq!(interpolation_search(&SORTED, value), Some(idx));
        }
    }

    #[test]
    fn absent_values_are_none() {
        for value in [0, 6, -10, 100] {
            assert_eq!(linear_search(&SORTED, &value), None);
            assert_eq!(binary_search(&SORTED, &value), None);
            assert_eq!(jump_search(&SORTED, &value), None);
            assert_eq!(interpolation_search(&SORTED, &value), None);
        }
        let gaps = [10, 20, 30, 40];
        assert_eq!(jump_search(&gaps, &25), None);
        assert_eq!(interpolation_search(&gaps, &25), None);
    }

    #[test]
    fn empty_input() {
        let empty: [u8; 0] = [];
        assert_eq!(linear_search(&empty, &1), None);
        assert_eq!(binary_search(&empty, &1), None);
        assert_eq!(jump_search(&empty, &1), None);
        assert_eq!(interpolation_search(&empty, &1), None);
    }

    #[test]
    fn flat_runs_do_not_divide_by_zero() {
        let flat = [7, 7, 7, 7];
        assert_eq!(interpolation_search(&flat, &7), Some(0));
        assert_eq!(interpolation_search(&flat, &8), None);
        assert_eq!(jump_search(&flat, &7), Some(0));
    }

    #[test]
    fn integers_that_round_to_the_same_float_are_still_found() {
        let base: i64 = 1 << 60;
        let items = [base, base + 1];
        assert_eq!(interpolation_search(&items, &(base + 1)), Some(1));
        assert_eq!(interpolation_search(&items, &base), Some(0));

        let extremes = [i64::MIN, -1, 0, i64::MAX - 1, i64::MAX];
        for (idx, value) in extremes.iter().enumerate() {
            assert_eq!(interpolation_search(&extremes, value), Some(idx));
        }
        assert_eq!(interpolation_search(&extremes, &1), None);
    }

    #[test]
    fn block_size_is_floor_sqrt() {
        assert_eq!(block_size(1), 1);
        assert_eq!(block_size(8), 2);
        assert_eq!(block_size(9), 3);
        assert_eq!(block_size(99), 9);
    }
}
