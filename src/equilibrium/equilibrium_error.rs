use thiserror::Error;

use super::{RowOrigin, Unknown};

#[derive(Debug, Error, PartialEq)]
pub enum LinearSolverError {
    #[error("Matrix is singular: no usable pivot for column {column}.")]
    Singular { column: usize },

    #[error("Cannot solve a {rows}x{cols} matrix with a right-hand side of length {rhs}.")]
    DimensionMismatch { rows: usize, cols: usize, rhs: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum EquilibriumError {
    #[error(
        "No equilibrium of this form found for the {n1}x{n2} game: singular system at {unknown}, \
         the {rows} rows are linearly dependent."
    )]
    SingularSystem {
        n1: usize,
        n2: usize,
        unknown: Unknown,
        rows: RowOrigin,
        #[source]
        source: LinearSolverError,
    },

    #[error("Invalid linear system for the {n1}x{n2} game.")]
    InvalidSystem {
        n1: usize,
        n2: usize,
        #[source]
        source: LinearSolverError,
    },

    #[error("Solution has {found} components, expected {expected}.")]
    IndexMismatch { expected: usize, found: usize },
}
