//! Array techniques: scans, two pointers, sliding windows and dense
//! matrices.

use core::cmp::Ordering;
use core::fmt;
use core::ops::Add;

use num_traits::{CheckedAdd, Zero};

use crate::error::{Error, Result};

/// Largest element, or `None` for an empty slice.
pub fn find_max<T: Ord>(items: &[T]) -> Option<&T> {
    items.iter().max()
}

/// Two-pointer search over a sorted slice for indices `i < j` with
/// `items[i] + items[j] == target`.
///
/// Pair sums that do not fit in `T` are compared by their sign: an overflow
/// past the maximum is larger than any target, an underflow past the
/// minimum is smaller.
pub fn two_sum_sorted<T>(sorted: &[T], target: T) -> Option<(usize, usize)>
where
    T: Copy + Ord + CheckedAdd + Zero,
{
    if sorted.len() < 2 {
        return None;
    }
    let (mut left, mut right) = (0, sorted.len() - 1);
    while left < right {
        let order = match sorted[left].checked_add(&sorted[right]) {
            Some(sum) => sum.cmp(&target),
            None if sorted[right] > T::zero() => Ordering::Greater,
            None => Ordering::Less,
        };
        match order {
            Ordering::Equal => return Some((left, right)),
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }
    None
}

/// Maximum sum over all contiguous windows of `size` elements.
///
/// Window sums are accumulated in `i128`, so only the final answer has to
/// fit in `i64`.
///
/// # Errors
/// Returns [`Error::InvalidWindow`] if `size` is zero or exceeds the input
/// length, and [`Error::Overflow`] if the largest window sum does not fit
/// in `i64`.
pub fn max_window_sum(items: &[i64], size: usize) -> Result<i64> {
    if size == 0 || size > items.len() {
        return Err(Error::InvalidWindow {
            size,
            len: items.len(),
        });
    }
    let mut window: i128 = items[..size].iter().map(|&v| i128::from(v)).sum();
    let mut best = window;
    for i in size..items.len() {
        window += i128::from(items[i]) - i128::from(items[i - size]);
        best = best.max(window);
    }
    i64::try_from(best).map_err(|_| Error::Overflow("window sum"))
}

/// Row-major traversal of a 3-D array.
pub fn flatten_3d<T: Clone>(cube: &[Vec<Vec<T>>]) -> Vec<T> {
    cube.iter()
        .flat_map(|plane| plane.iter().flat_map(|row| row.iter().cloned()))
        .collect()
}

/// A dense row-major 2-D matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(row_count * cols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(Error::DimensionMismatch {
                    left: (r, cols),
                    right: (r, row.len()),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: row_count,
            cols,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Iterates the rows top to bottom.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.cols.max(1)).take(self.rows)
    }

    /// Iterates every element in row-major order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Element-wise sum.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if the shapes differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self>
    where
        T: Copy + Add<Output = T>,
    {
        if self.shape() != other.shape() {
            return Err(Error::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| a + b)
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_iter() {
            let mut first = true;
            for value in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
