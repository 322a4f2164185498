use serde::{Deserialize, Serialize};

/// One of the two disc colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Disc {
    Black,
    White,
}

impl Disc {
    /// Returns the other color.
    pub fn opponent(self) -> Self {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
        }
    }
}

impl std::ops::Not for Disc {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

/// Contents of one board cell. Serialized as `null`, `"black"` or `"white"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Option<Disc>", from = "Option<Disc>")]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Disc),
}

impl Cell {
    pub fn disc(self) -> Option<Disc> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(disc) => Some(disc),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Cell> for Option<Disc> {
    fn from(cell: Cell) -> Self {
        cell.disc()
    }
}

impl From<Option<Disc>> for Cell {
    fn from(disc: Option<Disc>) -> Self {
        disc.map_or(Cell::Empty, Cell::Occupied)
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Disc counts, always recounted from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Scores {
    pub black: usize,
    pub white: usize,
}

impl Scores {
    pub fn of(&self, disc: Disc) -> usize {
        match disc {
            Disc::Black => self.black,
            Disc::White => self.white,
        }
    }
}

/// Who controls which side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub opponent_enabled: bool,
    pub human_player: Disc,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            opponent_enabled: false,
            human_player: Disc::Black,
        }
    }
}

/// Read model handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub size: usize,
    /// Row-major, `size * size` cells.
    pub board: Vec<Cell>,
    pub current_player: Disc,
    pub scores: Scores,
    pub opponent_enabled: bool,
    pub human_player: Disc,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the side that should have moved after the last move had
    ///   no legal move, so the turn went back to the mover.
    /// - `false` otherwise.
    pub is_pass: bool,
    /// Cells flipped by the last applied move. Empty after a reset.
    pub flipped: Vec<Position>,
    pub legal_moves: Vec<Position>,
}

impl GameState {
    /// Returns `None` when `(row, col)` is off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if col >= self.size {
            return None;
        }
        let index = row.checked_mul(self.size)?.checked_add(col)?;
        self.board.get(index).copied()
    }
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// `None` on a draw.
    pub winner: Option<Disc>,
    pub black: usize,
    pub white: usize,
}

impl From<Scores> for GameResult {
    fn from(scores: Scores) -> Self {
        let winner = match scores.black.cmp(&scores.white) {
            std::cmp::Ordering::Greater => Some(Disc::Black),
            std::cmp::Ordering::Less => Some(Disc::White),
            std::cmp::Ordering::Equal => None,
        };
        Self {
            winner,
            black: scores.black,
            white: scores.white,
        }
    }
}
