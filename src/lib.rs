//! Mixed-strategy equilibria of bimatrix games where both players use every action.
pub mod config;
pub mod equilibrium;
pub mod game;
pub mod report;

pub use equilibrium::{Equilibrium, EquilibriumError, solve_equilibrium, solve_equilibrium_with};
pub use game::{GameError, PayoffGame, Strategy};
