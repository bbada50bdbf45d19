use ndarray::prelude::*;

use crate::game::PayoffGame;

use super::{RowBlock, dimension};

/// One row per action `i` of player 2 stating that, against the mixture of player 1, action `i`
/// pays player 2 exactly `v1`:
///
/// `sum_k payoff2(k, i)·p1_k - v1 = 0`
pub fn player2_indifference_rows(game: &PayoffGame) -> RowBlock {
    let (n1, n2) = game.num_strategies();
    let mut block = RowBlock::zeros(n2, dimension((n1, n2)));

    block
        .coefficients
        .slice_mut(s![.., 0..n1])
        .assign(&game.payoff_matrix(1).t());
    block.coefficients.column_mut(n1 + n2).fill(-1.);

    block
}

/// One row per action `k` of player 1 stating that, against the mixture of player 2, action `k`
/// pays player 1 exactly `v2`:
///
/// `sum_j payoff1(k, j)·p2_j - v2 = 0`
pub fn player1_indifference_rows(game: &PayoffGame) -> RowBlock {
    let (n1, n2) = game.num_strategies();
    let mut block = RowBlock::zeros(n1, dimension((n1, n2)));

    block
        .coefficients
        .slice_mut(s![.., n1..n1 + n2])
        .assign(game.payoff_matrix(0));
    block.coefficients.column_mut(n1 + n2 + 1).fill(-1.);

    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_game() -> PayoffGame {
        let a = array![[1., 2., 3.], [4., 5., 6.]];
        let b = array![[7., 8., 9.], [10., 11., 12.]];
        PayoffGame::new(a, b).unwrap()
    }

    #[test]
    fn player2_rows() {
        let block = player2_indifference_rows(&test_game());

        assert_eq!(block.len(), 3);
        assert_eq!(
            block.coefficients,
            array![
                [7., 10., 0., 0., 0., -1., 0.],
                [8., 11., 0., 0., 0., -1., 0.],
                [9., 12., 0., 0., 0., -1., 0.]
            ]
        );
        assert_eq!(block.rhs, Array1::<f64>::zeros(3));
    }

    #[test]
    fn player1_rows() {
        let block = player1_indifference_rows(&test_game());

        assert_eq!(block.len(), 2);
        assert_eq!(
            block.coefficients,
            array![
                [0., 0., 1., 2., 3., 0., -1.],
                [0., 0., 4., 5., 6., 0., -1.]
            ]
        );
        assert_eq!(block.rhs, Array1::<f64>::zeros(2));
    }

    #[test]
    fn rows_evaluate_to_zero_at_equilibrium() {
        let a = array![[1., 3., 0.], [0., 0., 2.], [2., 1., 1.]];
        let b = array![[2., 1., 0.], [1., 3., 1.], [0., 0., 3.]];
        let game = PayoffGame::new(a, b).unwrap();
        let x = array![
            6. / 13.,
            3. / 13.,
            4. / 13.,
            1. / 9.,
            1. / 3.,
            5. / 9.,
            15. / 13.,
            10. / 9.
        ];

        let residual2 = player2_indifference_rows(&game).coefficients.dot(&x);
        let residual1 = player1_indifference_rows(&game).coefficients.dot(&x);

        assert!(residual2.iter().all(|r| r.abs() < 1e-12));
        assert!(residual1.iter().all(|r| r.abs() < 1e-12));
    }
}
