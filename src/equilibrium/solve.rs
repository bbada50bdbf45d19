use crate::game::PayoffGame;

use super::{Equilibrium, EquilibriumError, LinearSolver, LinearSystem, LuSolver};

/// Equilibrium in which both players use every action, solved with [`LuSolver`].
pub fn solve_equilibrium(game: &PayoffGame) -> Result<Equilibrium, EquilibriumError> {
    solve_equilibrium_with(game, &LuSolver::default())
}

pub fn solve_equilibrium_with<S>(
    game: &PayoffGame,
    solver: &S,
) -> Result<Equilibrium, EquilibriumError>
where
    S: LinearSolver + ?Sized,
{
    let system = LinearSystem::assemble(game);
    log::debug!(
        "Solving {0}x{0} system for a {1}x{2} game",
        system.dimension(),
        system.num_strategies().0,
        system.num_strategies().1
    );

    let x = solver
        .solve(&system.coefficients, &system.rhs)
        .map_err(|err| system.diagnose(err))?;
    Equilibrium::from_solution(&x, system.num_strategies())
}
