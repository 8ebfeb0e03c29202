//! The error type shared by every fallible operation in the crate.

use thiserror::Error;

use crate::graph::NodeId;

/// Errors reported by graph, container, array and account operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A graph operation referenced a node that was never added.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// `pop`, `peek`, `dequeue` or `front` on an empty container.
    #[error("{0} is empty")]
    EmptyContainer(&'static str),

    /// Element-wise matrix operation on differently shaped operands
    /// (or a ragged row while building a matrix).
    #[error("dimension mismatch: {left:?} vs {right:?}")]
    DimensionMismatch {
        /// `(rows, cols)` of the left operand.
        left: (usize, usize),
        /// `(rows, cols)` of the right operand.
        right: (usize, usize),
    },

    /// Sliding window of size zero, or wider than the input.
    #[error("invalid window size {size} for input of length {len}")]
    InvalidWindow {
        /// Requested window size.
        size: usize,
        /// Length of the input slice.
        len: usize,
    },

    /// Deposits and withdrawals must be strictly positive and finite.
    #[error("amount must be positive, got {0}")]
    InvalidAmount(f64),

    /// Withdrawal larger than the available balance.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// Amount asked for.
        requested: f64,
        /// Balance at the time of the request.
        available: f64,
    },

    /// An integer result does not fit in its return type.
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// An adjacency matrix whose cell count does not fit in memory.
    #[error("adjacency matrix of size {0} is too large")]
    MatrixTooLarge(usize),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
