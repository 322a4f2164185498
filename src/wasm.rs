//! JavaScript facade over [`GameEngine`].
//!
//! Resets leave the starting position as is. When the computer holds black,
//! the UI calls `playAutomated` while `isHumanTurn` is false.

use wasm_bindgen::prelude::*;

use crate::game::GameEngine;
use crate::types::{Disc, EngineConfig};

#[wasm_bindgen]
pub struct OthelloGame {
    engine: GameEngine,
}

#[wasm_bindgen]
impl OthelloGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> OthelloGame {
        OthelloGame {
            engine: GameEngine::new_with_default_policy(),
        }
    }

    /// `config` is `{ opponentEnabled?: boolean, humanPlayer?: "black" | "white" }`.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<OthelloGame, JsError> {
        let config: EngineConfig = serde_wasm_bindgen::from_value(config)?;
        let mut game = OthelloGame::new();
        game.engine.set_config(config);
        Ok(game)
    }

    #[wasm_bindgen(js_name = makeMove)]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), JsError> {
        self.engine.make_move(row, col)?;
        Ok(())
    }

    /// Lets the computer move until it is the human's turn or the game ends.
    #[wasm_bindgen(js_name = playAutomated)]
    pub fn play_automated(&mut self) -> Result<(), JsError> {
        self.engine.play_automated()?;
        Ok(())
    }

    #[wasm_bindgen(js_name = resetGame)]
    pub fn reset_game(&mut self) {
        self.engine.reset();
    }

    #[wasm_bindgen(js_name = toggleOpponent)]
    pub fn toggle_opponent(&mut self) {
        self.engine.toggle_opponent();
    }

    /// `side` is `"black"` or `"white"`.
    #[wasm_bindgen(js_name = chooseHumanSide)]
    pub fn choose_human_side(&mut self, side: JsValue) -> Result<(), JsError> {
        let disc: Disc = serde_wasm_bindgen::from_value(side)?;
        self.assign_human(disc);
        Ok(())
    }

    #[wasm_bindgen(js_name = isLegalMove)]
    pub fn is_legal_move(&self, row: usize, col: usize) -> bool {
        self.engine.is_legal_move(row, col)
    }

    /// False while the automated side is to move or after game over; the UI
    /// disables board input then.
    #[wasm_bindgen(js_name = isHumanTurn)]
    pub fn is_human_turn(&self) -> bool {
        !self.engine.is_game_over() && !self.engine.is_automated_turn()
    }

    #[wasm_bindgen(js_name = getState)]
    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.engine.state())?)
    }

    /// `null` until the game is over.
    #[wasm_bindgen(js_name = getResult)]
    pub fn result(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.engine.result())?)
    }
}

impl OthelloGame {
    fn assign_human(&mut self, disc: Disc) {
        self.engine.choose_human_side(disc);
    }
}

impl Default for OthelloGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::Scores;

    fn assert_initial(game: &OthelloGame) {
        assert_eq!(game.engine.board(), &Board::new());
        assert_eq!(game.engine.scores(), Scores { black: 2, white: 2 });
        assert_eq!(game.engine.current_player(), Disc::Black);
    }

    fn computer_holds_black() -> OthelloGame {
        let mut game = OthelloGame::new();
        game.engine.set_config(EngineConfig {
            opponent_enabled: true,
            human_player: Disc::White,
        });
        game
    }

    #[test]
    fn resets_keep_starting_position_when_computer_holds_black() {
        let mut game = computer_holds_black();
        game.play_automated().unwrap();

        game.reset_game();
        assert_initial(&game);
        assert!(!game.is_human_turn());

        game.toggle_opponent();
        assert_initial(&game);
        game.toggle_opponent();
        assert_initial(&game);

        game.assign_human(Disc::White);
        assert_initial(&game);
        assert_eq!(game.engine.human_player(), Disc::White);
    }

    #[test]
    fn play_automated_opens_for_computer() {
        let mut game = computer_holds_black();

        game.play_automated().unwrap();

        assert!(game.is_human_turn());
        assert_eq!(game.engine.current_player(), Disc::White);
        assert_eq!(game.engine.scores(), Scores { black: 4, white: 1 });
    }
}
