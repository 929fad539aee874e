//! Compilation of board constraints to CNF.
//!
//! The clause families, in emission order:
//!
//! 1. one unit clause per pre-filled cell,
//! 2. per cell (row-major): at least one value, then the pairwise
//!    at-most-one clauses,
//! 3. per value: each row, each column, then each block contains it.
//!
//! Families 3 carry no at-most-one side: a value cannot repeat within a
//! house anyway, because the per-cell at-most-one clauses leave only
//! `GRID_SIZE` cells for `GRID_SIZE` values. The order is fixed so clause
//! counts and solver behaviour are reproducible run to run.

use crate::board::{Board, Position, GRID_SIZE};
use crate::vars::{var_id, VAR_COUNT};
use std::io::{self, Write};

/// A disjunction of DIMACS-style literals.
pub type Clause = Vec<i32>;

/// An ordered CNF formula over the cell variables.
///
/// Built per solve attempt and discarded afterwards; nothing is cached
/// between attempts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseSet {
    clauses: Vec<Clause>,
}

impl ClauseSet {
    /// Create an empty formula.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clause.
    pub fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the formula has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Number of variables the formula ranges over. The cell variable
    /// space is dense, so this is always [`VAR_COUNT`].
    pub fn var_count(&self) -> usize {
        VAR_COUNT
    }

    /// The clauses, in emission order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Write the formula in DIMACS CNF format: a `p cnf` header line,
    /// then one zero-terminated clause per line.
    pub fn write_dimacs<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "p cnf {} {}", self.var_count(), self.len())?;
        for clause in &self.clauses {
            for lit in clause {
                write!(w, "{} ", lit)?;
            }
            writeln!(w, "0")?;
        }
        Ok(())
    }
}

/// Compile the constraints of `board` into a CNF formula.
///
/// Clue clauses come first so the unit prefix of the formula mirrors the
/// board; the rule clauses that follow are the same for every board.
pub fn compile(board: &Board) -> ClauseSet {
    let mut cnf = ClauseSet::new();

    // Pre-filled cells are pinned by unit clauses.
    for pos in Position::all() {
        if let Some(value) = board.get(pos) {
            cnf.push(vec![var_id(pos.row, pos.col, value)]);
        }
    }

    // Each cell holds at least one value, and no two.
    for pos in Position::all() {
        cnf.push((1..=GRID_SIZE as u8).map(|v| var_id(pos.row, pos.col, v)).collect());
        for v in 1..=GRID_SIZE as u8 {
            for w in (v + 1)..=GRID_SIZE as u8 {
                cnf.push(vec![-var_id(pos.row, pos.col, v), -var_id(pos.row, pos.col, w)]);
            }
        }
    }

    // Each value appears in every row, column, and block.
    for value in 1..=GRID_SIZE as u8 {
        for row in 0..GRID_SIZE {
            cnf.push(Position::row_cells(row).map(|p| var_id(p.row, p.col, value)).collect());
        }
        for col in 0..GRID_SIZE {
            cnf.push(Position::col_cells(col).map(|p| var_id(p.row, p.col, value)).collect());
        }
        for block in 0..GRID_SIZE {
            cnf.push(Position::block_cells(block).map(|p| var_id(p.row, p.col, value)).collect());
        }
    }

    cnf
}
