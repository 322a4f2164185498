use crate::types::Position;

/// Reasons a move request is rejected. The game state is unchanged on every
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    #[display("row/col out of range: ({row}, {col})")]
    InvalidCoordinate { row: usize, col: usize },

    #[display("illegal move at ({}, {})", _0.row, _0.col)]
    IllegalMove(Position),

    #[display("game is already over")]
    GameOver,

    #[display("it is not the human player's turn")]
    NotHumanTurn,

    #[display("opponent policy could not select a move")]
    PolicyFailed,

    #[display("opponent policy selected an illegal move at ({}, {})", _0.row, _0.col)]
    PolicyChoseIllegal(Position),
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_coordinate() {
        let err = EngineError::IllegalMove(Position::new(0, 7));
        assert_eq!(err.to_string(), "illegal move at (0, 7)");

        let err = EngineError::InvalidCoordinate { row: 8, col: 2 };
        assert_eq!(err.to_string(), "row/col out of range: (8, 2)");
    }
}
