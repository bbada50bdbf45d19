use ndarray::prelude::*;

use super::{RowBlock, dimension};

/// The two rows forcing each mixture to add up to one: first the weights of player 2, then the
/// weights of player 1.
pub fn normalization_rows(num_strategies: (usize, usize)) -> RowBlock {
    let (n1, n2) = num_strategies;
    let mut block = RowBlock::zeros(2, dimension(num_strategies));

    block.coefficients.slice_mut(s![0, n1..n1 + n2]).fill(1.);
    block.coefficients.slice_mut(s![1, 0..n1]).fill(1.);
    block.rhs.fill(1.);

    block
}
