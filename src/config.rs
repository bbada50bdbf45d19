use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    equilibrium::{DEFAULT_TOLERANCE, LinearSolver, SolverKind},
    game::{GameError, PayoffGame},
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config path: {1}")]
    InvalidConfigPath(#[source] std::io::Error, String),

    #[error("Cannot parse config file.")]
    ConfigParseJsonError(#[from] serde_json::Error),
}

/// Solver settings. Every field may be left out of the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub solver: SolverKind,
    /// Relative pivot size below which the system is considered singular.
    pub tolerance: f64,
    /// Tolerance used when checking that the weights form probability distributions.
    pub check_tolerance: f64,
    /// Reject games where both players do not have the same number of actions.
    pub require_equal_actions: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            solver: SolverKind::default(),
            tolerance: DEFAULT_TOLERANCE,
            check_tolerance: 1e-9,
            require_equal_actions: false,
        }
    }
}

impl SolverConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|err| ConfigError::InvalidConfigPath(err, path.display().to_string()))?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn linear_solver(&self) -> Box<dyn LinearSolver> {
        self.solver.build(self.tolerance)
    }

    pub fn check_game(&self, game: &PayoffGame) -> Result<(), GameError> {
        let (n1, n2) = game.num_strategies();
        if self.require_equal_actions && n1 != n2 {
            return Err(GameError::UnequalActions { n1, n2 });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn partial_config() {
        let config: SolverConfig =
            serde_json::from_str(r#"{ "solver": "gauss", "tolerance": 1e-12 }"#).unwrap();

        assert_eq!(config.solver, SolverKind::Gauss);
        assert_eq!(config.tolerance, 1e-12);
        assert_eq!(config.check_tolerance, 1e-9);
        assert!(!config.require_equal_actions);
    }

    #[test]
    fn invalid_config() {
        assert!(serde_json::from_str::<SolverConfig>(r#"{ "solver": "qr" }"#).is_err());
        assert!(matches!(
            SolverConfig::from_file(Path::new("does/not/exist.json")),
            Err(ConfigError::InvalidConfigPath(_, _))
        ));
    }

    #[test]
    fn equal_actions() {
        let game = PayoffGame::new(Array2::zeros((2, 3)), Array2::zeros((2, 3))).unwrap();

        assert!(SolverConfig::default().check_game(&game).is_ok());
        let strict = SolverConfig {
            require_equal_actions: true,
            ..Default::default()
        };
        assert!(matches!(
            strict.check_game(&game),
            Err(GameError::UnequalActions { n1: 2, n2: 3 })
        ));
    }
}
