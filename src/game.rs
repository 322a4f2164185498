use tracing::{debug, instrument, trace};

use crate::ai::{FirstLegalMove, OpponentPolicy};
use crate::board::{BOARD_SIZE, Board};
use crate::error::EngineError;
use crate::types::{Disc, EngineConfig, GameResult, GameState, Position, Scores};

/// Owns the authoritative game state and is the only place it is mutated.
///
/// Every public operation runs to completion before returning. When automated
/// play is enabled, a human move returns only after the automated side has
/// replied, so callers always observe a settled state.
pub struct GameEngine<const N: usize = BOARD_SIZE> {
    board: Board<N>,
    current_player: Disc,
    scores: Scores,
    config: EngineConfig,
    is_game_over: bool,
    is_pass: bool,
    flipped: Vec<Position>,
    policy: Box<dyn OpponentPolicy<N>>,
}

impl<const N: usize> GameEngine<N> {
    pub fn new(policy: Box<dyn OpponentPolicy<N>>) -> Self {
        Self::with_config(EngineConfig::default(), policy)
    }

    pub fn with_config(config: EngineConfig, policy: Box<dyn OpponentPolicy<N>>) -> Self {
        let board = Board::new();
        Self {
            board,
            current_player: Disc::Black,
            scores: board.count(),
            config,
            is_game_over: false,
            is_pass: false,
            flipped: Vec::new(),
            policy,
        }
    }

    pub fn new_with_default_policy() -> Self {
        Self::new(Box::new(FirstLegalMove))
    }

    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    pub fn current_player(&self) -> Disc {
        self.current_player
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn opponent_enabled(&self) -> bool {
        self.config.opponent_enabled
    }

    pub fn human_player(&self) -> Disc {
        self.config.human_player
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn is_pass(&self) -> bool {
        self.is_pass
    }

    pub fn flipped(&self) -> &[Position] {
        &self.flipped
    }

    /// True when the side to move is played by the opponent policy.
    pub fn is_automated_turn(&self) -> bool {
        !self.is_game_over
            && self.config.opponent_enabled
            && self.current_player != self.config.human_player
    }

    /// Whether the side to move may legally play at `(row, col)`.
    /// Out-of-range coordinates are simply not legal.
    pub fn is_legal_move(&self, row: usize, col: usize) -> bool {
        !self.is_game_over
            && self
                .board
                .is_legal_move(Position::new(row, col), self.current_player)
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        if self.is_game_over {
            return Vec::new();
        }
        self.board.legal_moves(self.current_player)
    }

    /// Plays a move for the side to move, then lets the automated side reply
    /// until it is a human turn again or the game is over.
    ///
    /// `InvalidCoordinate`, `IllegalMove`, `GameOver` and `NotHumanTurn` leave
    /// the state untouched. Policy errors are reported after the human move
    /// has been applied; the state then reflects the last applied move and
    /// the automated side keeps the turn, so further calls return
    /// `NotHumanTurn` until `play_automated` succeeds or the game is reset.
    #[instrument(skip(self), level = "debug")]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        if self.is_game_over {
            return Err(EngineError::GameOver);
        }
        let pos = self.checked_position(row, col)?;
        if self.is_automated_turn() {
            return Err(EngineError::NotHumanTurn);
        }

        self.apply_move(pos)?;
        self.play_automated()
    }

    /// Runs the opponent policy while it is the automated side's turn.
    ///
    /// Needed directly only when the automated side moves first after a
    /// reset; `make_move` calls it on its own.
    #[instrument(skip(self), level = "debug")]
    pub fn play_automated(&mut self) -> Result<(), EngineError> {
        while self.is_automated_turn() {
            let disc = self.current_player;
            let pos = self
                .policy
                .choose_move(&self.board, disc)
                .ok_or(EngineError::PolicyFailed)?;
            if !self.board.is_legal_move(pos, disc) {
                return Err(EngineError::PolicyChoseIllegal(pos));
            }
            trace!(?disc, row = pos.row, col = pos.col, "automated reply");
            self.apply_move(pos)?;
        }
        Ok(())
    }

    /// Restores the starting position. Opponent settings are kept.
    #[instrument(skip(self), level = "debug")]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Disc::Black;
        self.scores = self.board.count();
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
    }

    pub fn set_opponent_enabled(&mut self, enabled: bool) {
        self.config.opponent_enabled = enabled;
        self.reset();
    }

    pub fn toggle_opponent(&mut self) {
        self.set_opponent_enabled(!self.config.opponent_enabled);
    }

    pub fn set_human_player(&mut self, disc: Disc) {
        self.config.human_player = disc;
        self.reset();
    }

    /// Alias kept for presentation layers that name it after the UI action.
    pub fn choose_human_side(&mut self, disc: Disc) {
        self.set_human_player(disc);
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
        self.reset();
    }

    /// Snapshot for presentation layers.
    pub fn state(&self) -> GameState {
        GameState {
            size: N,
            board: self.board.to_vec(),
            current_player: self.current_player,
            scores: self.scores,
            opponent_enabled: self.config.opponent_enabled,
            human_player: self.config.human_player,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
            legal_moves: self.legal_moves(),
        }
    }

    /// Final result, available once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.is_game_over.then(|| GameResult::from(self.scores))
    }

    fn checked_position(&self, row: usize, col: usize) -> Result<Position, EngineError> {
        let pos = Position::new(row, col);
        if !self.board.contains(pos) {
            return Err(EngineError::InvalidCoordinate { row, col });
        }
        Ok(pos)
    }

    fn apply_move(&mut self, pos: Position) -> Result<(), EngineError> {
        let mover = self.current_player;
        let flips = self.board.place(pos, mover);
        if flips.is_empty() {
            return Err(EngineError::IllegalMove(pos));
        }

        self.scores = self.board.count();
        debug!(
            ?mover,
            row = pos.row,
            col = pos.col,
            flipped = flips.len(),
            black = self.scores.black,
            white = self.scores.white,
            "move applied"
        );
        self.flipped = flips;
        self.advance_turn(mover);
        Ok(())
    }

    /// Hands the turn to the other side, passing back to `mover` when the
    /// other side cannot move and ending the game when neither can.
    fn advance_turn(&mut self, mover: Disc) {
        let next = !mover;
        self.is_pass = false;

        if self.board.empty_count() > 0 {
            if self.board.has_legal_move(next) {
                self.current_player = next;
                return;
            }
            if self.board.has_legal_move(mover) {
                debug!(passed = ?next, "no legal move, turn passes");
                self.current_player = mover;
                self.is_pass = true;
                return;
            }
        }

        self.current_player = next;
        self.is_game_over = true;
        debug!(
            black = self.scores.black,
            white = self.scores.white,
            "game over"
        );
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board<N>, current_player: Disc) {
        self.board = board;
        self.current_player = current_player;
        self.scores = board.count();
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
    }
}

impl<const N: usize> Default for GameEngine<N> {
    fn default() -> Self {
        Self::new_with_default_policy()
    }
}
