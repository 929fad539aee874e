//! Board representation: cells, positions, and the fixed 9x9 grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of a block (sub-square).
pub const BLOCK_SIZE: usize = 3;
/// Side length of the whole grid.
pub const GRID_SIZE: usize = BLOCK_SIZE * BLOCK_SIZE;

/// A single cell: an optional value in `1..=GRID_SIZE` plus a clue flag.
///
/// The clue flag marks cells fixed by the puzzle; solving and editing
/// never change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    value: Option<u8>,
    given: bool,
}

impl Cell {
    /// An empty, editable cell.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A clue cell fixed by the puzzle.
    pub fn given(value: u8) -> Self {
        Self {
            value: Some(value),
            given: true,
        }
    }

    /// The value held by this cell, if any.
    pub fn value(&self) -> Option<u8> {
        self.value
    }

    /// Whether this cell is a clue from the puzzle.
    pub fn is_given(&self) -> bool {
        self.given
    }

    /// Whether this cell holds no value.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// A cell address, zero-indexed row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Index of the block containing this position, row-major in `0..GRID_SIZE`.
    pub fn block_index(&self) -> usize {
        (self.row / BLOCK_SIZE) * BLOCK_SIZE + self.col / BLOCK_SIZE
    }

    /// All positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Position::new(row, col)))
    }

    /// The positions of one row, left to right.
    pub fn row_cells(row: usize) -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).map(move |col| Position::new(row, col))
    }

    /// The positions of one column, top to bottom.
    pub fn col_cells(col: usize) -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).map(move |row| Position::new(row, col))
    }

    /// The positions of one block, row-major within the block.
    pub fn block_cells(block: usize) -> impl Iterator<Item = Position> {
        let base_row = (block / BLOCK_SIZE) * BLOCK_SIZE;
        let base_col = (block % BLOCK_SIZE) * BLOCK_SIZE;
        (0..GRID_SIZE)
            .map(move |i| Position::new(base_row + i / BLOCK_SIZE, base_col + i % BLOCK_SIZE))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row + 1, self.col + 1)
    }
}

/// A 9x9 Sudoku board held as a fixed two-dimensional cell array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Create a board with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::empty(); GRID_SIZE]; GRID_SIZE],
        }
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// The value at `pos`, if any.
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.cells[pos.row][pos.col].value()
    }

    /// Fix `value` at `pos` as a clue cell.
    ///
    /// # Panics
    /// Panics if `value` is outside `1..=GRID_SIZE`.
    pub fn set_given(&mut self, pos: Position, value: u8) {
        check_value(value);
        self.cells[pos.row][pos.col] = Cell::given(value);
    }

    /// Write `value` at `pos`. The clue flag is left as it is; callers
    /// that must not touch clue cells check [`Cell::is_given`] first.
    ///
    /// # Panics
    /// Panics if `value` is outside `1..=GRID_SIZE`.
    pub fn set_value(&mut self, pos: Position, value: u8) {
        check_value(value);
        self.cells[pos.row][pos.col].value = Some(value);
    }

    /// Clear the value at `pos`, keeping the clue flag.
    pub fn clear_value(&mut self, pos: Position) {
        self.cells[pos.row][pos.col].value = None;
    }

    /// Drop every non-clue value, returning the board to its puzzle state.
    pub fn reset_to_givens(&mut self) {
        for pos in Position::all() {
            if !self.cell(pos).is_given() {
                self.clear_value(pos);
            }
        }
    }

    /// Whether every cell holds a value.
    pub fn is_full(&self) -> bool {
        Position::all().all(|pos| self.get(pos).is_some())
    }

    /// Number of clue cells.
    pub fn given_count(&self) -> usize {
        Position::all().filter(|&pos| self.cell(pos).is_given()).count()
    }

    /// Number of cells holding a value.
    pub fn filled_count(&self) -> usize {
        Position::all().filter(|&pos| self.get(pos).is_some()).count()
    }

    /// Parse an 81-character row-major string. Digits `1`-`9` become clue
    /// cells, `0` and `.` empty cells. Returns `None` on any other
    /// character or a wrong length.
    pub fn from_compact(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != GRID_SIZE * GRID_SIZE {
            return None;
        }
        let mut board = Self::empty();
        for (i, ch) in chars.into_iter().enumerate() {
            let pos = Position::new(i / GRID_SIZE, i % GRID_SIZE);
            match ch {
                '0' | '.' => {}
                '1'..='9' => board.set_given(pos, ch as u8 - b'0'),
                _ => return None,
            }
        }
        Some(board)
    }

    /// The row-major 81-character form, `.` for empty cells.
    pub fn to_compact(&self) -> String {
        Position::all()
            .map(|pos| match self.get(pos) {
                Some(v) => (b'0' + v) as char,
                None => '.',
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            if row > 0 && row % BLOCK_SIZE == 0 {
                writeln!(f, "---------------------")?;
            }
            for col in 0..GRID_SIZE {
                if col > 0 && col % BLOCK_SIZE == 0 {
                    write!(f, "| ")?;
                }
                match self.get(Position::new(row, col)) {
                    Some(v) => write!(f, "{}", v)?,
                    None => write!(f, ".")?,
                }
                if col < GRID_SIZE - 1 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn check_value(value: u8) {
    assert!(
        (1..=GRID_SIZE as u8).contains(&value),
        "cell value {} outside 1..={}",
        value,
        GRID_SIZE
    );
}
