//! The SAT oracle boundary.
//!
//! The pipeline never looks inside the search; it hands a formula to a
//! [`SatOracle`] and gets back a verdict plus effort counters. The default
//! backend is batsat, but anything sound and complete that speaks signed
//! integer literals can be swapped in.

use crate::board::GRID_SIZE;
use crate::cnf::ClauseSet;
use crate::error::{SolveError, SolveResult};
use batsat::{lbool, BasicSolver as Solver, Lit, SolverInterface};
use log::debug;
use serde::{Deserialize, Serialize};

/// Variables assigned true in a satisfying assignment, ascending.
pub type Assignment = Vec<i32>;

/// Search effort counters reported by the oracle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Conflicts hit during the search.
    pub conflicts: u64,
    /// Branching decisions taken.
    pub decisions: u64,
    /// Literals propagated.
    pub propagations: u64,
}

/// Verdict of a SAT search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The formula has a model; `assignment` lists its true variables.
    Satisfiable {
        assignment: Assignment,
        stats: SearchStats,
    },
    /// No assignment satisfies the formula.
    Unsatisfiable { stats: SearchStats },
}

/// A sound and complete SAT decision procedure.
///
/// Variables are 1-indexed and literals are signed integers, positive for
/// true and negative for false. A search that stops without a verdict is
/// an error, never a fake unsatisfiable answer.
pub trait SatOracle {
    /// Decide `cnf`.
    fn solve(&mut self, cnf: &ClauseSet) -> SolveResult<Outcome>;
}

/// Oracle backed by the batsat CDCL solver.
///
/// Each call builds a fresh solver instance, so learned clauses never leak
/// between attempts and all solver memory is released when the call
/// returns, whatever the verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatsatOracle;

impl BatsatOracle {
    /// Create a batsat-backed oracle.
    pub fn new() -> Self {
        Self
    }
}

impl SatOracle for BatsatOracle {
    fn solve(&mut self, cnf: &ClauseSet) -> SolveResult<Outcome> {
        let mut solver = Solver::default();
        let vars: Vec<_> = (0..cnf.var_count())
            .map(|_| solver.new_var_default())
            .collect();

        let mut buf: Vec<Lit> = Vec::with_capacity(GRID_SIZE);
        for clause in cnf.clauses() {
            buf.clear();
            buf.extend(
                clause
                    .iter()
                    .map(|&l| Lit::new(vars[(l.unsigned_abs() - 1) as usize], l > 0)),
            );
            if !solver.add_clause_reuse(&mut buf) {
                // Contradiction at level zero; the verdict below is final.
                break;
            }
        }

        let verdict = solver.solve_limited(&[]);
        let stats = SearchStats {
            conflicts: solver.num_conflicts() as u64,
            decisions: solver.num_decisions() as u64,
            propagations: solver.num_propagations() as u64,
        };

        if verdict == lbool::TRUE {
            let mut assignment: Assignment = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
            for (idx, &var) in vars.iter().enumerate() {
                if solver.value_var(var) == lbool::TRUE {
                    assignment.push(idx as i32 + 1);
                }
            }
            debug!(
                "batsat: sat, {} true literals, {} conflicts, {} decisions, {} propagations",
                assignment.len(),
                stats.conflicts,
                stats.decisions,
                stats.propagations
            );
            Ok(Outcome::Satisfiable { assignment, stats })
        } else if verdict == lbool::FALSE {
            debug!(
                "batsat: unsat, {} conflicts, {} decisions, {} propagations",
                stats.conflicts, stats.decisions, stats.propagations
            );
            Ok(Outcome::Unsatisfiable { stats })
        } else {
            Err(SolveError::Interrupted)
        }
    }
}
