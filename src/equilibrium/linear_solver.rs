use clap::ValueEnum;
use nalgebra::{DMatrix, DVector};
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};

use super::LinearSolverError;

pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Dense solver for square systems `A·x = b`.
///
/// Both solvers first scale every row, then every column, of `A` to a largest magnitude of
/// one. Pivots of the scaled matrix whose magnitude is at most `tolerance` count as zero, so
/// effectively singular matrices fail the same way as exactly singular ones, whatever the
/// units of `A`.
pub trait LinearSolver {
    fn solve(&self, a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, LinearSolverError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum SolverKind {
    /// LU decomposition with partial pivoting.
    #[default]
    Lu,
    /// Gauss-Jordan elimination with partial pivoting.
    Gauss,
}

impl SolverKind {
    pub fn build(self, tolerance: f64) -> Box<dyn LinearSolver> {
        match self {
            SolverKind::Lu => Box::new(LuSolver { tolerance }),
            SolverKind::Gauss => Box::new(GaussianElimination { tolerance }),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LuSolver {
    pub tolerance: f64,
}

impl Default for LuSolver {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl LinearSolver for LuSolver {
    fn solve(&self, a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, LinearSolverError> {
        let n = check_dimensions(a, b)?;
        let system = Equilibrated::new(a, b);

        let lu = DMatrix::from_fn(n, n, |i, j| system.a[[i, j]]).lu();
        if let Some((column, _)) = lu
            .u()
            .diagonal()
            .iter()
            .enumerate()
            .find(|(_, pivot)| pivot.abs() <= self.tolerance)
        {
            return Err(LinearSolverError::Singular { column });
        }

        let rhs = DVector::from_iterator(n, system.b.iter().copied());
        let y = lu
            .solve(&rhs)
            .ok_or(LinearSolverError::Singular { column: n - 1 })?;
        finite(system.unscale(Array1::from_iter(y.iter().copied())))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GaussianElimination {
    pub tolerance: f64,
}

impl Default for GaussianElimination {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl LinearSolver for GaussianElimination {
    fn solve(&self, a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, LinearSolverError> {
        let n = check_dimensions(a, b)?;
        let system = Equilibrated::new(a, b);

        let mut m = Array2::<f64>::zeros((n, n + 1));
        m.slice_mut(s![.., 0..n]).assign(&system.a);
        m.column_mut(n).assign(&system.b);

        for col in 0..n {
            let pivot_row = (col..n)
                .max_by(|&i, &j| m[[i, col]].abs().total_cmp(&m[[j, col]].abs()))
                .unwrap_or(col);
            if m[[pivot_row, col]].abs() <= self.tolerance {
                return Err(LinearSolverError::Singular { column: col });
            }
            if pivot_row != col {
                for k in col..=n {
                    m.swap([col, k], [pivot_row, k]);
                }
            }

            let pivot = m[[col, col]];
            let r = m.row(col).mapv(|v| v / pivot);
            for (i, mut row) in m.rows_mut().into_iter().enumerate() {
                let coeff = row[col];
                if i != col && coeff != 0. {
                    row.scaled_add(-coeff, &r);
                }
            }
            m.row_mut(col).assign(&r);
        }

        finite(system.unscale(m.column(n).to_owned()))
    }
}

fn check_dimensions(a: &Array2<f64>, b: &Array1<f64>) -> Result<usize, LinearSolverError> {
    let (rows, cols) = a.dim();
    if rows != cols || rows != b.len() || rows == 0 {
        return Err(LinearSolverError::DimensionMismatch {
            rows,
            cols,
            rhs: b.len(),
        });
    }
    Ok(rows)
}

/// `R·A·C·y = R·b` with `x = C·y`, where `R` and `C` are the diagonal row and column scalings.
struct Equilibrated {
    a: Array2<f64>,
    b: Array1<f64>,
    column_scale: Array1<f64>,
}

impl Equilibrated {
    fn new(a: &Array2<f64>, b: &Array1<f64>) -> Self {
        let mut a = a.to_owned();
        let mut b = b.to_owned();
        for (mut row, bi) in a.rows_mut().into_iter().zip(b.iter_mut()) {
            let m = max_abs(row.view());
            if m > 0. {
                row.mapv_inplace(|v| v / m);
                *bi /= m;
            }
        }

        let mut column_scale = Array1::<f64>::ones(a.ncols());
        for (mut col, s) in a.columns_mut().into_iter().zip(column_scale.iter_mut()) {
            let m = max_abs(col.view());
            if m > 0. {
                col.mapv_inplace(|v| v / m);
                *s = m.recip();
            }
        }

        Self { a, b, column_scale }
    }

    fn unscale(&self, y: Array1<f64>) -> Array1<f64> {
        y * &self.column_scale
    }
}

fn max_abs(v: ArrayView1<f64>) -> f64 {
    v.fold(0., |m: f64, x| m.max(x.abs()))
}

fn finite(x: Array1<f64>) -> Result<Array1<f64>, LinearSolverError> {
    match x.iter().position(|v| !v.is_finite()) {
        Some(column) => Err(LinearSolverError::Singular { column }),
        None => Ok(x),
    }
}
