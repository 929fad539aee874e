//! Writing a satisfying assignment back onto the board.

use crate::board::{Board, Position, GRID_SIZE};
use crate::error::{SolveError, SolveResult};
use crate::oracle::Assignment;
use crate::vars::var_cell;

/// Decode every true variable in `assignment` and write its value onto
/// `board`. Clue flags are left untouched, and nothing is written unless
/// the whole assignment decodes cleanly.
///
/// A sound oracle assigns exactly one value per cell; if two true
/// variables map to the same cell, [`SolveError::ConflictingModel`] names
/// the cell and both values and the board stays as it was.
///
/// # Panics
/// Panics if a variable id lies outside `1..=VAR_COUNT`; the oracle only
/// ever hands back ids the compiler emitted.
pub fn apply_assignment(board: &mut Board, assignment: &Assignment) -> SolveResult<()> {
    let mut decoded: [[Option<u8>; GRID_SIZE]; GRID_SIZE] = [[None; GRID_SIZE]; GRID_SIZE];

    for &var in assignment {
        let (pos, value) = var_cell(var);
        if let Some(kept) = decoded[pos.row][pos.col] {
            return Err(SolveError::ConflictingModel {
                position: pos,
                kept,
                duplicate: value,
            });
        }
        decoded[pos.row][pos.col] = Some(value);
    }

    for pos in Position::all() {
        if let Some(value) = decoded[pos.row][pos.col] {
            board.set_value(pos, value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::var_id;

    #[test]
    fn test_assignment_fills_the_board() {
        let solution =
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
        let assignment: Assignment = solution
            .bytes()
            .enumerate()
            .map(|(i, b)| var_id(i / GRID_SIZE, i % GRID_SIZE, b - b'0'))
            .collect();

        let mut board = Board::empty();
        apply_assignment(&mut board, &assignment).unwrap();

        assert!(board.is_full());
        assert_eq!(board.to_compact(), solution);
    }

    #[test]
    fn test_clue_flags_survive_decoding() {
        let mut board = Board::empty();
        board.set_given(Position::new(0, 0), 5);

        let assignment = vec![var_id(0, 0, 5), var_id(0, 1, 3)];
        apply_assignment(&mut board, &assignment).unwrap();

        assert!(board.cell(Position::new(0, 0)).is_given());
        assert!(!board.cell(Position::new(0, 1)).is_given());
        assert_eq!(board.get(Position::new(0, 1)), Some(3));
    }

    #[test]
    fn test_two_values_for_one_cell_fail_loudly() {
        let mut board = Board::empty();
        board.set_given(Position::new(8, 8), 1);
        let before = board.clone();

        let assignment = vec![var_id(4, 4, 2), var_id(4, 4, 7)];
        let err = apply_assignment(&mut board, &assignment).unwrap_err();

        assert_eq!(
            err,
            SolveError::ConflictingModel {
                position: Position::new(4, 4),
                kept: 2,
                duplicate: 7,
            }
        );
        // Nothing was committed.
        assert_eq!(board, before);
    }

    #[test]
    fn test_conflict_message_names_the_cell() {
        let err = SolveError::ConflictingModel {
            position: Position::new(4, 4),
            kept: 2,
            duplicate: 7,
        };
        assert_eq!(
            err.to_string(),
            "assignment puts both 2 and 7 in cell R5C5"
        );
    }
}
