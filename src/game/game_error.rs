use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("The payoff table has no actions.")]
    Empty,

    #[error("Line {line} has {found} actions, expected {expected}.")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Payoff matrices must have same size: {0:?} and {1:?}.")]
    ShapeMismatch(Vec<usize>, Vec<usize>),

    #[error("Invalid cell on line {line}: {cell}")]
    InvalidCell { line: usize, cell: String },

    #[error("Invalid number on line {line}: {value}")]
    InvalidNumber { line: usize, value: String },

    #[error("Invalid payoff range: [{low}, {high}).")]
    InvalidRange { low: f64, high: f64 },

    #[error("Players have a different number of actions ({n1} and {n2}).")]
    UnequalActions { n1: usize, n2: usize },

    #[error("Cannot read game file.")]
    Io(#[from] std::io::Error),
}
