use std::fmt;

use ndarray::prelude::*;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::GameError;

/// Two-player game in normal form. Row `k` is action `k` of player 1 and column `j` is action
/// `j` of player 2.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffGame {
    payoff: (Array2<f64>, Array2<f64>),
}

/// Mixed strategies of both players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy(pub Array1<f64>, pub Array1<f64>);

impl PayoffGame {
    pub fn new(p1: Array2<f64>, p2: Array2<f64>) -> Result<Self, GameError> {
        if p1.shape() != p2.shape() {
            return Err(GameError::ShapeMismatch(
                p1.shape().to_vec(),
                p2.shape().to_vec(),
            ));
        }
        if p1.is_empty() {
            return Err(GameError::Empty);
        }
        Ok(PayoffGame { payoff: (p1, p2) })
    }

    /// Builds the game from a table of `(player 1, player 2)` payoff pairs.
    pub fn from_cells(cells: &[Vec<(f64, f64)>]) -> Result<Self, GameError> {
        let n1 = cells.len();
        let n2 = cells.first().map_or(0, |row| row.len());
        if n2 == 0 {
            return Err(GameError::Empty);
        }
        if let Some((row, r)) = cells.iter().enumerate().find(|(_, r)| r.len() != n2) {
            return Err(GameError::Ragged {
                line: row + 1,
                expected: n2,
                found: r.len(),
            });
        }
        let p1 = Array2::from_shape_fn((n1, n2), |(k, j)| cells[k][j].0);
        let p2 = Array2::from_shape_fn((n1, n2), |(k, j)| cells[k][j].1);
        Self::new(p1, p2)
    }

    /// Random game with payoffs drawn uniformly from `[low, high)`.
    pub fn random<R: Rng + ?Sized>(
        n1: usize,
        n2: usize,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(GameError::InvalidRange { low, high });
        }
        let dist = Uniform::new(low, high);
        let p1 = Array::random_using((n1, n2), dist, rng);
        let p2 = Array::random_using((n1, n2), dist, rng);
        Self::new(p1, p2)
    }

    pub fn num_strategies(&self) -> (usize, usize) {
        (self.payoff.0.shape()[0], self.payoff.0.shape()[1])
    }

    pub fn total_strategies(&self) -> usize {
        self.payoff.0.shape()[0] + self.payoff.1.shape()[1]
    }

    pub fn payoff_matrix(&self, player: usize) -> &Array2<f64> {
        if player == 0 {
            &self.payoff.0
        } else {
            &self.payoff.1
        }
    }

    pub fn cell(&self, k: usize, j: usize) -> (f64, f64) {
        (self.payoff.0[[k, j]], self.payoff.1[[k, j]])
    }

    pub fn strategy_payoff(&self, strategy: &Strategy) -> (f64, f64) {
        let payoff0 = self.payoff.0.dot(&strategy.1).dot(&strategy.0);
        let payoff1 = self.payoff.1.dot(&strategy.1).dot(&strategy.0);

        (payoff0, payoff1)
    }

    /// Expected payoff of every pure action of `player` against the opponent's mixture.
    pub fn action_payoffs(&self, player: usize, strategy: &Strategy) -> Array1<f64> {
        if player == 0 {
            self.payoff.0.dot(&strategy.1)
        } else {
            strategy.0.dot(&self.payoff.1)
        }
    }

    pub fn regret(&self, strategy: &Strategy) -> (f64, f64) {
        let strategy_payoff = self.strategy_payoff(strategy);
        let max_payoff0 = self
            .action_payoffs(0, strategy)
            .fold(f64::NEG_INFINITY, |m, &v| m.max(v));
        let max_payoff1 = self
            .action_payoffs(1, strategy)
            .fold(f64::NEG_INFINITY, |m, &v| m.max(v));
        (
            max_payoff0 - strategy_payoff.0,
            max_payoff1 - strategy_payoff.1,
        )
    }

    pub fn is_ne(&self, strategy: &Strategy, tolerance: f64) -> bool {
        let r = self.regret(strategy);

        r.0 < tolerance && r.1 < tolerance
    }
}

/// Same layout as a payoff file: one row per line, `(a,b)` cells separated by `;`.
impl fmt::Display for PayoffGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n1, n2) = self.num_strategies();
        for k in 0..n1 {
            for j in 0..n2 {
                if j > 0 {
                    write!(f, ";")?;
                }
                let (a, b) = self.cell(k, j);
                write!(f, "({a},{b})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
