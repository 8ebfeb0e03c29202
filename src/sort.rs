//! In-place comparison sorts.
//!
//! None of these are stable except [`bubble_sort`] and [`insertion_sort`].

use core::cmp::Ordering;
use core::fmt;

/// Repeatedly swaps adjacent out-of-order pairs. Stops early once a full
/// pass makes no swap, so sorted input costs O(n).
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let mut unsorted = items.len();
    while unsorted > 1 {
        let mut last_swap = 0;
        for j in 1..unsorted {
            if items[j - 1] > items[j] {
                items.swap(j - 1, j);
                last_swap = j;
            }
        }
        // Everything from the last swap onward is already in place.
        unsorted = last_swap;
    }
}

/// Grows a sorted prefix by sinking each new element into place.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1] > items[j] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Moves the minimum of the unsorted suffix to its front, one slot at a time.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if items[j] < items[min] {
                min = j;
            }
        }
        items.swap(i, min);
    }
}

/// Quicksort with a median-of-three pivot and a three-way partition.
///
/// Elements equal to the pivot are grouped in the middle and never revisited,
/// so inputs with many duplicates stay O(n log n). Recurses into the smaller
/// side and loops over the larger one, so stack depth stays O(log n).
pub fn quick_sort<T: Ord>(mut items: &mut [T]) {
    while items.len() > 1 {
        let (lt, gt) = partition(items);
        let (left, rest) = core::mem::take(&mut items).split_at_mut(lt);
        let right = &mut rest[gt - lt..];
        if left.len() < right.len() {
            quick_sort(left);
            items = right;
        } else {
            quick_sort(right);
            items = left;
        }
    }
}

// Requires `items.len() >= 2`. Afterwards `items[..lt]` is below the pivot,
// `items[lt..gt]` equals it and `items[gt..]` is above it.
fn partition<T: Ord>(items: &mut [T]) -> (usize, usize) {
    let last = items.len() - 1;
    let mid = last / 2;
    if items[mid] < items[0] {
        items.swap(mid, 0);
    }
    if items[last] < items[0] {
        items.swap(last, 0);
    }
    if items[mid] < items[last] {
        items.swap(mid, last);
    }
    // The median now sits at `last`; move it to the front.
    items.swap(0, last);

    // `items[lt]` always holds a copy of the pivot.
    let (mut lt, mut i, mut gt) = (0, 1, items.len());
    while i < gt {
        match items[i].cmp(&items[lt]) {
            Ordering::Less => {
                items.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                items.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}

/// The sorting algorithms offered by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// [`bubble_sort`]
    Bubble,
    /// [`insertion_sort`]
    Insertion,
    /// [`selection_sort`]
    Selection,
    /// [`quick_sort`]
    Quick,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
    ];

    /// Sorts `items` in place with this algorithm.
    pub fn sort<T: Ord>(self, items: &mut [T]) {
        match self {
            Algorithm::Bubble => bubble_sort(items),
            Algorithm::Insertion => insertion_sort(items),
            Algorithm::Selection => selection_sort(items),
            Algorithm::Quick => quick_sort(items),
        }
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns a sorted copy of `items`, leaving the input untouched.
pub fn sorted<T: Ord + Clone>(items: &[T], algorithm: Algorithm) -> Vec<T> {
    let mut out = items.to_vec();
    algorithm.sort(&mut out);
    out
}
