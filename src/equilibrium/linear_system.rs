use std::fmt;

use ndarray::prelude::*;

use crate::game::PayoffGame;

use super::{
    EquilibriumError, LinearSolverError, normalization_rows, player1_indifference_rows,
    player2_indifference_rows,
};

/// Number of unknowns (and equations) of the system for a game with `n1` and `n2` actions.
pub fn dimension(num_strategies: (usize, usize)) -> usize {
    num_strategies.0 + num_strategies.1 + 2
}

/// Unknowns of the system, in column order: player 1 weights, player 2 weights, `v1`, `v2`.
///
/// `v1` is the equilibrium payoff of player 2 and `v2` the equilibrium payoff of player 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unknown {
    P1Weight(usize),
    P2Weight(usize),
    V1,
    V2,
}

impl Unknown {
    pub fn from_index(idx: usize, num_strategies: (usize, usize)) -> Option<Self> {
        let (n1, n2) = num_strategies;
        match idx {
            i if i < n1 => Some(Unknown::P1Weight(i)),
            i if i < n1 + n2 => Some(Unknown::P2Weight(i - n1)),
            i if i == n1 + n2 => Some(Unknown::V1),
            i if i == n1 + n2 + 1 => Some(Unknown::V2),
            _ => None,
        }
    }

    pub fn index(&self, num_strategies: (usize, usize)) -> usize {
        let (n1, n2) = num_strategies;
        match self {
            Unknown::P1Weight(k) => *k,
            Unknown::P2Weight(j) => n1 + j,
            Unknown::V1 => n1 + n2,
            Unknown::V2 => n1 + n2 + 1,
        }
    }

    /// Player 1 weights and `v1` only appear in the player 2 indifference rows, and player 2
    /// weights and `v2` only in the player 1 ones.
    pub fn rows(&self) -> RowOrigin {
        match self {
            Unknown::P1Weight(_) | Unknown::V1 => RowOrigin::Player2Indifference,
            Unknown::P2Weight(_) | Unknown::V2 => RowOrigin::Player1Indifference,
        }
    }
}

impl fmt::Display for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unknown::P1Weight(k) => write!(f, "weight of player 1 action {}", k + 1),
            Unknown::P2Weight(j) => write!(f, "weight of player 2 action {}", j + 1),
            Unknown::V1 => write!(f, "equilibrium value of player 2 (v1)"),
            Unknown::V2 => write!(f, "equilibrium value of player 1 (v2)"),
        }
    }
}

/// Builder of the equations an unknown takes part in, besides its normalization row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrigin {
    /// Rows giving player 2 the payoff `v1` from every action.
    Player2Indifference,
    /// Rows giving player 1 the payoff `v2` from every action.
    Player1Indifference,
}

impl fmt::Display for RowOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOrigin::Player2Indifference => write!(f, "player 2 indifference"),
            RowOrigin::Player1Indifference => write!(f, "player 1 indifference"),
        }
    }
}

/// Consecutive rows of the system together with their right-hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBlock {
    pub coefficients: Array2<f64>,
    pub rhs: Array1<f64>,
}

impl RowBlock {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            coefficients: Array2::zeros((rows, cols)),
            rhs: Array1::zeros(rows),
        }
    }

    pub fn len(&self) -> usize {
        self.rhs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }
}

/// Square system `A·x = b` whose solution `x` holds the equilibrium weights and values.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    pub coefficients: Array2<f64>,
    pub rhs: Array1<f64>,
    num_strategies: (usize, usize),
}

impl LinearSystem {
    /// Stacks the player 2 indifference rows, the player 1 indifference rows and the two
    /// normalization rows, in that order.
    pub fn assemble(game: &PayoffGame) -> Self {
        let num_strategies = game.num_strategies();
        let d = dimension(num_strategies);
        let blocks = [
            player2_indifference_rows(game),
            player1_indifference_rows(game),
            normalization_rows(num_strategies),
        ];

        let mut system = Self {
            coefficients: Array2::zeros((d, d)),
            rhs: Array1::zeros(d),
            num_strategies,
        };
        let mut first = 0;
        for block in &blocks {
            let rows = first..first + block.len();
            system
                .coefficients
                .slice_mut(s![rows.clone(), ..])
                .assign(&block.coefficients);
            system.rhs.slice_mut(s![rows]).assign(&block.rhs);
            first += block.len();
        }
        log::trace!("Assembled system:\n{}", system.coefficients);

        system
    }

    pub fn num_strategies(&self) -> (usize, usize) {
        self.num_strategies
    }

    pub fn dimension(&self) -> usize {
        self.rhs.len()
    }

    /// Attaches the game dimensions, the failing unknown and its rows to a solver error.
    pub fn diagnose(&self, err: LinearSolverError) -> EquilibriumError {
        let (n1, n2) = self.num_strategies;
        match err {
            LinearSolverError::Singular { column } => {
                match Unknown::from_index(column, self.num_strategies) {
                    Some(unknown) => EquilibriumError::SingularSystem {
                        n1,
                        n2,
                        unknown,
                        rows: unknown.rows(),
                        source: err,
                    },
                    None => EquilibriumError::InvalidSystem { n1, n2, source: err },
                }
            }
            LinearSolverError::DimensionMismatch { .. } => {
                EquilibriumError::InvalidSystem { n1, n2, source: err }
            }
        }
    }
}
