use crate::types::{Cell, Disc, Position, Scores};

/// Side length of the standard board.
pub const BOARD_SIZE: usize = 8;

/// All (row, col) deltas except (0, 0).
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Reversi board as an `N x N` grid of cells.
///
/// `N` must be even and at least 4 so the four starting discs fit in the
/// center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board<const N: usize = BOARD_SIZE> {
    cells: [[Cell; N]; N],
}

impl<const N: usize> Board<N> {
    const VALID_SIZE: () = assert!(N >= 4 && N % 2 == 0, "board size must be even and >= 4");

    /// Creates the initial board:
    /// white on the main-diagonal center cells, black on the other two.
    pub fn new() -> Self {
        let mut board = Self::empty();
        let lo = N / 2 - 1;
        let hi = N / 2;
        board.cells[lo][lo] = Cell::Occupied(Disc::White);
        board.cells[hi][hi] = Cell::Occupied(Disc::White);
        board.cells[lo][hi] = Cell::Occupied(Disc::Black);
        board.cells[hi][lo] = Cell::Occupied(Disc::Black);
        board
    }

    pub fn empty() -> Self {
        let () = Self::VALID_SIZE;
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    pub fn from_cells(cells: [[Cell; N]; N]) -> Self {
        let () = Self::VALID_SIZE;
        Self { cells }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < N && pos.col < N
    }

    /// Returns `None` when `pos` is off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Returns true when placing `disc` at `pos` captures at least one line.
    pub fn is_legal_move(&self, pos: Position, disc: Disc) -> bool {
        if self.get(pos) != Some(Cell::Empty) {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&dir| self.captured_in_direction(pos, dir, disc) > 0)
    }

    /// Returns every cell that would flip if `disc` were placed at `pos`,
    /// grouped by direction in `DIRECTIONS` order. Empty when illegal.
    pub fn flips(&self, pos: Position, disc: Disc) -> Vec<Position> {
        if self.get(pos) != Some(Cell::Empty) {
            return Vec::new();
        }

        let mut flips = Vec::new();
        for dir in DIRECTIONS {
            let captured = self.captured_in_direction(pos, dir, disc);
            let mut cursor = pos;
            for _ in 0..captured {
                let Some(next) = step(cursor, dir, N) else {
                    break;
                };
                flips.push(next);
                cursor = next;
            }
        }
        flips
    }

    /// Places one disc and flips captured discs along every capturing line.
    /// Returns the flipped cells. Returns an empty list when the move is
    /// illegal, leaving the board unchanged.
    pub fn place(&mut self, pos: Position, disc: Disc) -> Vec<Position> {
        let flips = self.flips(pos, disc);
        if flips.is_empty() {
            return flips;
        }

        self.cells[pos.row][pos.col] = Cell::Occupied(disc);
        for flipped in &flips {
            self.cells[flipped.row][flipped.col] = Cell::Occupied(disc);
        }
        flips
    }

    /// Legal moves for `disc` in row-major order.
    pub fn legal_moves(&self, disc: Disc) -> Vec<Position> {
        self.positions()
            .filter(|&pos| self.is_legal_move(pos, disc))
            .collect()
    }

    pub fn has_legal_move(&self, disc: Disc) -> bool {
        self.positions().any(|pos| self.is_legal_move(pos, disc))
    }

    /// Recounts both colors from the grid.
    pub fn count(&self) -> Scores {
        let mut scores = Scores::default();
        for cell in self.cells.iter().flatten() {
            match cell.disc() {
                Some(Disc::Black) => scores.black += 1,
                Some(Disc::White) => scores.white += 1,
                None => {}
            }
        }
        scores
    }

    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_empty())
            .count()
    }

    /// Every coordinate in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<N> {
        (0..N).flat_map(|row| (0..N).map(move |col| Position::new(row, col)))
    }

    /// Cells in row-major order.
    pub fn to_vec(&self) -> Vec<Cell> {
        self.cells.iter().flatten().copied().collect()
    }

    /// Number of opponent discs captured by `disc` at `pos` walking in `dir`.
    /// Zero unless the run of opponent discs is closed by one of `disc`.
    fn captured_in_direction(&self, pos: Position, dir: (isize, isize), disc: Disc) -> usize {
        let mut cursor = pos;
        let mut run = 0;

        while let Some(next) = step(cursor, dir, N) {
            match self.cells[next.row][next.col] {
                Cell::Occupied(found) if found == disc => return run,
                Cell::Occupied(_) => run += 1,
                Cell::Empty => return 0,
            }
            cursor = next;
        }

        0
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

fn step(pos: Position, (dr, dc): (isize, isize), size: usize) -> Option<Position> {
    let row = pos.row.checked_add_signed(dr).filter(|&r| r < size)?;
    let col = pos.col.checked_add_signed(dc).filter(|&c| c < size)?;
    Some(Position::new(row, col))
}
