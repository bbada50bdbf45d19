//! Full-support equilibrium of a bimatrix game through the linear system of indifference and
//! normalization conditions.
mod indifference;
pub use indifference::*;

mod normalization;
pub use normalization::*;

mod linear_system;
pub use linear_system::*;

mod linear_solver;
pub use linear_solver::*;

mod solution;
pub use solution::*;

mod solve;
pub use solve::*;

mod equilibrium_error;
pub use equilibrium_error::{EquilibriumError, LinearSolverError};
