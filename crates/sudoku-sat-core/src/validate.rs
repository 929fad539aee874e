//! Board validation.
//!
//! Pure checks over a board snapshot; nothing here mutates state. The
//! canonical notion of a valid solution requires completeness, while the
//! duplicate check on its own also applies to boards mid-edit.

use crate::board::{Board, Position, GRID_SIZE};

/// Whether `board` is a complete, rule-abiding solution: every cell
/// filled and no value repeated in any row, column, or block.
pub fn is_valid_solution(board: &Board) -> bool {
    board.is_full() && is_duplicate_free(board)
}

/// Whether no value repeats within any row, column, or block. Empty
/// cells are ignored, so partially filled boards can be checked too.
pub fn is_duplicate_free(board: &Board) -> bool {
    for i in 0..GRID_SIZE {
        if !no_duplicates(board, Position::row_cells(i))
            || !no_duplicates(board, Position::col_cells(i))
            || !no_duplicates(board, Position::block_cells(i))
        {
            return false;
        }
    }
    true
}

/// Whether the value at `pos` also appears elsewhere in its row, column,
/// or block. Empty cells are never in conflict.
pub fn cell_in_conflict(board: &Board, pos: Position) -> bool {
    let value = match board.get(pos) {
        Some(value) => value,
        None => return false,
    };
    Position::row_cells(pos.row)
        .chain(Position::col_cells(pos.col))
        .chain(Position::block_cells(pos.block_index()))
        .any(|other| other != pos && board.get(other) == Some(value))
}

fn no_duplicates(board: &Board, house: impl Iterator<Item = Position>) -> bool {
    let mut seen = [false; GRID_SIZE + 1];
    for pos in house {
        if let Some(value) = board.get(pos) {
            if seen[value as usize] {
                return false;
            }
            seen[value as usize] = true;
        }
    }
    true
}
