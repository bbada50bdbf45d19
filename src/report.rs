//! Text and CSV output of solved games.
use std::{
    fmt::Write as _,
    io,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use serde::Serialize;
use walkdir::WalkDir;

use crate::{
    config::SolverConfig,
    equilibrium::{Equilibrium, EquilibriumError, solve_equilibrium_with},
    game::{GameError, PayoffGame, read_game},
};

/// Weights one action per line, as `P1 Action 1: 0.5`.
pub fn weights_table(eq: &Equilibrium) -> String {
    let mut s = String::new();
    for (i, w) in eq.p1_weights.iter().enumerate() {
        let _ = writeln!(s, "P1 Action {}: {w}", i + 1);
    }
    for (j, w) in eq.p2_weights.iter().enumerate() {
        let _ = writeln!(s, "P2 Action {}: {w}", j + 1);
    }
    s
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Solved,
    /// The system has a solution but some weight is negative.
    NotMixture,
    Singular,
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveRecord {
    pub file: String,
    pub n1: Option<usize>,
    pub n2: Option<usize>,
    pub status: Status,
    pub p1_weights: String,
    pub p2_weights: String,
    pub v1: Option<f64>,
    pub v2: Option<f64>,
    pub message: String,
}

impl SolveRecord {
    fn new(file: &Path, game: Option<&PayoffGame>, status: Status, message: String) -> Self {
        let num_strategies = game.map(|g| g.num_strategies());
        Self {
            file: file.display().to_string(),
            n1: num_strategies.map(|n| n.0),
            n2: num_strategies.map(|n| n.1),
            status,
            p1_weights: String::new(),
            p2_weights: String::new(),
            v1: None,
            v2: None,
            message,
        }
    }

    pub fn solved(file: &Path, game: &PayoffGame, eq: &Equilibrium, check_tolerance: f64) -> Self {
        let status = if eq.is_mixture(check_tolerance) {
            Status::Solved
        } else {
            Status::NotMixture
        };
        Self {
            p1_weights: eq.p1_weights.iter().join(";"),
            p2_weights: eq.p2_weights.iter().join(";"),
            v1: Some(eq.v1),
            v2: Some(eq.v2),
            ..Self::new(file, Some(game), status, String::new())
        }
    }

    pub fn malformed(file: &Path, err: &GameError) -> Self {
        Self::new(file, None, Status::Malformed, err.to_string())
    }

    pub fn failed(file: &Path, game: &PayoffGame, err: &EquilibriumError) -> Self {
        let status = match err {
            EquilibriumError::SingularSystem { .. } => Status::Singular,
            _ => Status::Malformed,
        };
        Self::new(file, Some(game), status, err.to_string())
    }
}

/// Reads, checks and solves one game file. Failures end up in the record, never in a panic.
pub fn solve_file(path: &Path, config: &SolverConfig) -> SolveRecord {
    let game = match read_game(path).and_then(|game| config.check_game(&game).map(|_| game)) {
        Ok(game) => game,
        Err(err) => {
            log::warn!("{}: {err}", path.display());
            return SolveRecord::malformed(path, &err);
        }
    };
    match solve_equilibrium_with(&game, config.linear_solver().as_ref()) {
        Ok(eq) => SolveRecord::solved(path, &game, &eq, config.check_tolerance),
        Err(err) => {
            log::warn!("{}: {err}", path.display());
            SolveRecord::failed(path, &game, &err)
        }
    }
}

/// Game files (`*.txt`) below `dir`, sorted by path.
pub fn game_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect()
}

pub fn write_records<W: io::Write>(writer: W, records: &[SolveRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
