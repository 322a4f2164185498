use crate::board::Board;
use crate::types::{Disc, Position};

/// Move selection for the automated side.
pub trait OpponentPolicy<const N: usize>: Send + Sync {
    /// Returns `None` when `disc` has no move it is willing to play.
    fn choose_move(&self, board: &Board<N>, disc: Disc) -> Option<Position>;
}

/// Plays the first legal cell in row-major order.
///
/// Deterministic: for a given board it always returns the
/// lexicographically smallest legal `(row, col)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMove;

impl<const N: usize> OpponentPolicy<N> for FirstLegalMove {
    fn choose_move(&self, board: &Board<N>, disc: Disc) -> Option<Position> {
        board
            .positions()
            .find(|&pos| board.is_legal_move(pos, disc))
    }
}
