//! The solve pipeline: compile, search, decode, validate.

use crate::board::Board;
use crate::cnf;
use crate::decode;
use crate::error::SolveResult;
use crate::metrics::SolveMetrics;
use crate::oracle::{BatsatOracle, Outcome, SatOracle};
use crate::validate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// How a solve attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveOutcome {
    /// A satisfying assignment was decoded onto the board.
    Solved {
        /// Whether the decoded board passed validation.
        valid: bool,
    },
    /// The constraints admit no solution; the board is untouched.
    Unsolvable,
}

/// Outcome and metrics of one solve attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolveReport {
    /// How the attempt ended.
    pub outcome: SolveOutcome,
    /// Performance counters for the attempt.
    pub metrics: SolveMetrics,
}

impl SolveReport {
    /// Whether a solution was decoded onto the board.
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, SolveOutcome::Solved { .. })
    }
}

/// The compile-solve-decode-validate pipeline over a pluggable oracle.
///
/// Holds no puzzle state of its own; every call compiles a fresh formula
/// from the board it is given, so one solver value can serve many boards.
pub struct Solver<O = BatsatOracle> {
    oracle: O,
}

impl Solver {
    /// Create a solver over the default batsat oracle.
    pub fn new() -> Self {
        Self {
            oracle: BatsatOracle::new(),
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: SatOracle> Solver<O> {
    /// Create a solver over a specific oracle backend.
    pub fn with_oracle(oracle: O) -> Self {
        Self { oracle }
    }

    /// Solve `board` in place.
    ///
    /// On a satisfiable formula the solution is written onto the board
    /// (clue flags untouched) and validated. On an unsatisfiable one the
    /// board is left exactly as it was; that is a normal outcome, not an
    /// error. An error means the oracle broke its contract.
    pub fn solve(&mut self, board: &mut Board) -> SolveResult<SolveReport> {
        let encode_start = Instant::now();
        let formula = cnf::compile(board);
        let encode_time = encode_start.elapsed();
        debug!(
            "compiled {} clauses over {} variables in {:?}",
            formula.len(),
            formula.var_count(),
            encode_time
        );

        let solve_start = Instant::now();
        let outcome = self.oracle.solve(&formula)?;
        let solve_time = solve_start.elapsed();

        let mut metrics = SolveMetrics {
            var_count: formula.var_count(),
            clause_count: formula.len(),
            encode_time,
            solve_time,
            search: Default::default(),
        };

        match outcome {
            Outcome::Satisfiable { assignment, stats } => {
                metrics.search = stats;
                decode::apply_assignment(board, &assignment)?;
                let valid = validate::is_valid_solution(board);
                info!(
                    "solved in {:?}: {} conflicts, {} decisions, {} propagations, valid={}",
                    solve_time, stats.conflicts, stats.decisions, stats.propagations, valid
                );
                Ok(SolveReport {
                    outcome: SolveOutcome::Solved { valid },
                    metrics,
                })
            }
            Outcome::Unsatisfiable { stats } => {
                metrics.search = stats;
                info!("unsatisfiable after {} conflicts", stats.conflicts);
                Ok(SolveReport {
                    outcome: SolveOutcome::Unsolvable,
                    metrics,
                })
            }
        }
    }
}
