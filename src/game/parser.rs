use std::{fs, path::Path};

use super::{GameError, PayoffGame};

/// Parses a game written one row per line, each row a `;` separated list of `(a,b)` cells.
///
///     use eqsolver::game::parse_game;
///
///     let game = parse_game("(1,-1);(-1,1)\n(-1,1);(1,-1)\n").unwrap();
///     assert_eq!(game.num_strategies(), (2, 2));
///     assert_eq!(game.cell(0, 1), (-1., 1.));
///
/// Blank lines are skipped. Line numbers in errors start at 1.
pub fn parse_game(s: &str) -> Result<PayoffGame, GameError> {
    let mut cells = Vec::new();
    for (idx, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split(';')
            .map(|cell| parse_cell(cell, idx + 1))
            .collect::<Result<Vec<(f64, f64)>, GameError>>()?;
        let expected = cells.first().map_or(row.len(), Vec::len);
        if row.len() != expected {
            return Err(GameError::Ragged {
                line: idx + 1,
                expected,
                found: row.len(),
            });
        }
        cells.push(row);
    }
    PayoffGame::from_cells(&cells)
}

pub fn read_game(path: &Path) -> Result<PayoffGame, GameError> {
    let contents = fs::read_to_string(path)?;
    parse_game(&contents)
}

fn parse_cell(cell: &str, line: usize) -> Result<(f64, f64), GameError> {
    let invalid_cell = || GameError::InvalidCell {
        line,
        cell: cell.trim().to_owned(),
    };
    let inner = cell
        .trim()
        .strip_prefix('(')
        .and_then(|c| c.strip_suffix(')'))
        .ok_or_else(invalid_cell)?;
    let (a, b) = inner.split_once(',').ok_or_else(invalid_cell)?;
    Ok((parse_number(a, line)?, parse_number(b, line)?))
}

fn parse_number(s: &str, line: usize) -> Result<f64, GameError> {
    let s = s.trim();
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GameError::InvalidNumber {
            line,
            value: s.to_owned(),
        })
}
