//! Sudoku solving by reduction to SAT.
//!
//! The pipeline compiles a board's constraints to CNF ([`cnf`]), hands
//! the formula to a SAT oracle ([`oracle`]), decodes the satisfying
//! assignment back onto the board ([`decode`]), and validates the result
//! ([`validate`]). [`Solver`] ties the stages together and reports
//! per-attempt [`SolveMetrics`].
//!
//! ```
//! use sudoku_sat_core::{Board, Solver};
//!
//! let mut board = Board::empty();
//! let report = Solver::new().solve(&mut board)?;
//! assert!(report.is_solved());
//! assert!(board.is_full());
//! # Ok::<(), sudoku_sat_core::SolveError>(())
//! ```

pub mod board;
pub mod cnf;
pub mod decode;
pub mod error;
pub mod metrics;
pub mod oracle;
pub mod solver;
pub mod validate;
pub mod vars;

pub use board::{Board, Cell, Position, BLOCK_SIZE, GRID_SIZE};
pub use cnf::{Clause, ClauseSet};
pub use error::{SolveError, SolveResult};
pub use metrics::SolveMetrics;
pub use oracle::{Assignment, BatsatOracle, Outcome, SatOracle, SearchStats};
pub use solver::{SolveOutcome, SolveReport, Solver};
pub use vars::VAR_COUNT;
