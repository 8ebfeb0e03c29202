//! Recursion and backtracking.

use core::fmt;

/// `n!`, or `None` if it does not fit in a `u64` (n > 20).
pub fn factorial(n: u32) -> Option<u64> {
    (1..=u64::from(n)).try_fold(1u64, u64::checked_mul)
}

/// The `n`-th Fibonacci number (`fib(0) = 0`, `fib(1) = 1`), computed
/// bottom-up. Wraps around past `fib(93)`.
pub fn fibonacci(n: u32) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        (a, b) = (b, a.wrapping_add(b));
    }
    a
}

/// The textbook double recursion. Exponential time; kept for comparison
/// with [`fibonacci`].
pub fn fibonacci_recursive(n: u32) -> u64 {
    if n <= 1 {
        u64::from(n)
    } else {
        fibonacci_recursive(n - 1).wrapping_add(fibonacci_recursive(n - 2))
    }
}

/// One N-Queens solution: `columns[row]` is the column of the queen in `row`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    columns: Vec<usize>,
}

impl Board {
    /// Queen column for each row.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Board size.
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Rows rendered as `Q` and `.` cells.
    pub fn rows(&self) -> Vec<String> {
        let n = self.size();
        self.columns
            .iter()
            .map(|&col| (0..n).map(|c| if c == col { 'Q' } else { '.' }).collect())
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Every placement of `n` non-attacking queens on an `n x n` board, in
/// lexicographic order of queen columns.
pub fn solve_n_queens(n: usize) -> Vec<Board> {
    let mut state = Placement {
        n,
        columns: Vec::with_capacity(n),
        used_cols: vec![false; n],
        used_diag: vec![false; 2 * n],
        used_anti: vec![false; 2 * n],
    };
    let mut solutions = Vec::new();
    state.place(&mut solutions);
    solutions
}

struct Placement {
    n: usize,
    columns: Vec<usize>,
    used_cols: Vec<bool>,
    // row + col
    used_diag: Vec<bool>,
    // row + n - col
    used_anti: Vec<bool>,
}

impl Placement {
    fn place(&mut self, solutions: &mut Vec<Board>) {
        let row = self.columns.len();
        if row == self.n {
            solutions.push(Board {
                columns: self.columns.clone(),
            });
            return;
        }
        for col in 0..self.n {
            let (d, a) = (row + col, row + self.n - col);
            if self.used_cols[col] || self.used_diag[d] || self.used_anti[a] {
                continue;
            }
            self.set(col, d, a, true);
            self.columns.push(col);
            self.place(solutions);
            self.columns.pop();
            self.set(col, d, a, false);
        }
    }

    fn set(&mut self, col: usize, diag: usize, anti: usize, taken: bool) {
        self.used_cols[col] = taken;
        self.used_diag[diag] = taken;
        self.used_anti[anti] = taken;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorials() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), None);
    }

    #[test]
    fn fibonacci_variants_agree() {
        for n in 0..25 {
            assert_eq!(fibonacci(n), fibonacci_recursive(n));
        }
        assert_eq!(fibonacci(5), 5);
        assert_eq!(fibonacci(90), 2_880_067_194_370_816_120);
    }

    #[test]
    fn four_queens() {
        let solutions = solve_n_queens(4);
        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].columns(), &[1, 3, 0, 2]);
        assert_eq!(solutions[0].rows(), vec![".Q..", "...Q", "Q...", "..Q."]);
        assert_eq!(solutions[1].columns(), &[2, 0, 3, 1]);
    }

    #[test]
    fn solution_counts() {
        assert_eq!(solve_n_queens(0).len(), 1);
        assert_eq!(solve_n_queens(1).len(), 1);
        assert_eq!(solve_n_queens(2).len(), 0);
        assert_eq!(solve_n_queens(3).len(), 0);
        assert_eq!(solve_n_queens(8).len(), 92);
    }
}
