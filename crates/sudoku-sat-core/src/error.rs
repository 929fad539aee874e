//! Error types for the solve pipeline.
//!
//! An unsatisfiable puzzle is a normal outcome and is reported through
//! [`crate::SolveOutcome`], never through these errors. Errors mean the
//! pipeline itself broke its contract with the oracle.

use crate::board::Position;
use thiserror::Error;

/// Result alias for solve pipeline operations.
pub type SolveResult<T> = Result<T, SolveError>;

/// Contract violations between the pipeline and the SAT oracle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The assignment holds two true variables for one cell, which the
    /// per-cell at-most-one clauses rule out for any sound oracle.
    #[error("assignment puts both {kept} and {duplicate} in cell {position}")]
    ConflictingModel {
        /// The doubly assigned cell.
        position: Position,
        /// The value decoded first.
        kept: u8,
        /// The value decoded second.
        duplicate: u8,
    },

    /// The oracle stopped without reaching a satisfiable or unsatisfiable
    /// verdict.
    #[error("search ended without a verdict")]
    Interrupted,
}
