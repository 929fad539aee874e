//! Per-attempt performance counters.

use crate::oracle::SearchStats;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counters for a single solve attempt.
///
/// A fresh value is built on every attempt and returned with the report;
/// nothing is accumulated globally, so concurrent attempts never share
/// state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveMetrics {
    /// CNF variables in the encoding.
    pub var_count: usize,
    /// CNF clauses handed to the oracle.
    pub clause_count: usize,
    /// Time spent compiling the constraints.
    pub encode_time: Duration,
    /// Time spent inside the oracle.
    pub solve_time: Duration,
    /// Search effort counters from the oracle.
    pub search: SearchStats,
}

impl SolveMetrics {
    /// Compilation plus search time.
    pub fn total_time(&self) -> Duration {
        self.encode_time + self.solve_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_time_sums_both_stages() {
        let metrics = SolveMetrics {
            encode_time: Duration::from_millis(3),
            solve_time: Duration::from_millis(8),
            ..Default::default()
        };
        assert_eq!(metrics.total_time(), Duration::from_millis(11));
    }

    #[test]
    fn test_metrics_serialize() {
        let metrics = SolveMetrics {
            var_count: 729,
            clause_count: 3270,
            encode_time: Duration::from_micros(1500),
            solve_time: Duration::from_micros(4200),
            search: SearchStats {
                conflicts: 13,
                decisions: 145,
                propagations: 2310,
            },
        };

        let json = serde_json::to_string(&metrics).unwrap();
        let back: SolveMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metrics);
    }
}
