//! Mapping between cells and CNF variables.
//!
//! Each (row, col, value) triple gets its own propositional variable: the
//! variable is true exactly when that cell holds that value. Ids are dense
//! in `1..=VAR_COUNT` and carried as DIMACS-style signed integers, so a
//! negative literal is the negation of the variable with that magnitude.

use crate::board::{Position, GRID_SIZE};

/// Number of propositional variables (one per cell/value combination).
pub const VAR_COUNT: usize = GRID_SIZE * GRID_SIZE * GRID_SIZE;

/// The variable id for "cell (row, col) holds value".
///
/// Ids follow `row * GRID_SIZE^2 + col * GRID_SIZE + (value - 1) + 1`, so
/// value varies fastest and `(0, 0, 1)` maps to id 1.
///
/// # Panics
/// Panics if `row` or `col` is outside `0..GRID_SIZE` or `value` outside
/// `1..=GRID_SIZE`; callers iterate over board coordinates, so an
/// out-of-range argument is a bug, not an input condition.
pub fn var_id(row: usize, col: usize, value: u8) -> i32 {
    assert!(
        row < GRID_SIZE && col < GRID_SIZE,
        "cell ({}, {}) outside the grid",
        row,
        col
    );
    assert!(
        (1..=GRID_SIZE as u8).contains(&value),
        "value {} outside 1..={}",
        value,
        GRID_SIZE
    );
    (row * GRID_SIZE * GRID_SIZE + col * GRID_SIZE + (value as usize - 1) + 1) as i32
}

/// The cell and value a variable id stands for; inverse of [`var_id`].
///
/// # Panics
/// Panics if `var` is outside `1..=VAR_COUNT`.
pub fn var_cell(var: i32) -> (Position, u8) {
    assert!(
        (1..=VAR_COUNT as i32).contains(&var),
        "variable {} outside 1..={}",
        var,
        VAR_COUNT
    );
    let idx = (var - 1) as usize;
    let value = (idx % GRID_SIZE) as u8 + 1;
    let col = (idx / GRID_SIZE) % GRID_SIZE;
    let row = idx / (GRID_SIZE * GRID_SIZE);
    (Position::new(row, col), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids() {
        assert_eq!(var_id(0, 0, 1), 1);
        assert_eq!(var_id(0, 0, 9), 9);
        assert_eq!(var_id(0, 1, 1), 10);
        assert_eq!(var_id(1, 0, 1), 82);
        assert_eq!(var_id(8, 8, 9), VAR_COUNT as i32);
    }

    #[test]
    fn test_bijection_over_full_domain() {
        // Every triple encodes to a distinct id that decodes back.
        let mut seen = vec![false; VAR_COUNT + 1];
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                for value in 1..=GRID_SIZE as u8 {
                    let id = var_id(row, col, value);
                    assert!((1..=VAR_COUNT as i32).contains(&id));
                    assert!(!seen[id as usize], "id {} produced twice", id);
                    seen[id as usize] = true;

                    let (pos, back) = var_cell(id);
                    assert_eq!((pos.row, pos.col, back), (row, col, value));
                }
            }
        }

        // And every id in range decodes to a triple that encodes back.
        for id in 1..=VAR_COUNT as i32 {
            let (pos, value) = var_cell(id);
            assert_eq!(var_id(pos.row, pos.col, value), id);
        }
    }

    #[test]
    #[should_panic(expected = "outside the grid")]
    fn test_row_out_of_range_panics() {
        var_id(9, 0, 1);
    }

    #[test]
    #[should_panic(expected = "outside 1..=9")]
    fn test_value_out_of_range_panics() {
        var_id(0, 0, 0);
    }

    #[test]
    #[should_panic(expected = "outside 1..=729")]
    fn test_var_out_of_range_panics() {
        var_cell(730);
    }
}
