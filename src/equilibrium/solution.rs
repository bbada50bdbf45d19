use ndarray::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game::Strategy;

use super::{EquilibriumError, dimension};

/// Mixtures and equilibrium values read from the solution of the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equilibrium {
    pub p1_weights: Array1<f64>,
    pub p2_weights: Array1<f64>,
    /// Payoff of player 2.
    pub v1: f64,
    /// Payoff of player 1.
    pub v2: f64,
}

impl Equilibrium {
    pub fn from_solution(
        x: &Array1<f64>,
        num_strategies: (usize, usize),
    ) -> Result<Self, EquilibriumError> {
        let (n1, n2) = num_strategies;
        let expected = dimension(num_strategies);
        if x.len() != expected {
            return Err(EquilibriumError::IndexMismatch {
                expected,
                found: x.len(),
            });
        }
        Ok(Self {
            p1_weights: x.slice(s![0..n1]).to_owned(),
            p2_weights: x.slice(s![n1..n1 + n2]).to_owned(),
            v1: x[n1 + n2],
            v2: x[n1 + n2 + 1],
        })
    }

    pub fn strategy(&self) -> Strategy {
        Strategy(self.p1_weights.clone(), self.p2_weights.clone())
    }

    /// Whether both weight vectors are probability distributions. A negative weight means the
    /// indifference equations have a solution but it is not an equilibrium.
    pub fn is_mixture(&self, tolerance: f64) -> bool {
        [&self.p1_weights, &self.p2_weights].iter().all(|w| {
            w.iter().all(|&p| p >= -tolerance) && (w.sum() - 1.).abs() <= tolerance
        })
    }
}
