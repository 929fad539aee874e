//! One-shot solving without the interface.

use crate::loader;
use crate::render;
use crate::Args;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use sudoku_sat_core::{cnf, SolveMetrics, SolveOutcome, Solver};

/// Solve the puzzle once, print the result, and return the exit code:
/// 0 for a verified solution, 1 for an unsolvable puzzle, 2 for errors
/// and solutions that fail validation.
pub fn run(args: &Args) -> io::Result<i32> {
    if !args.puzzle.exists() {
        eprintln!("error: puzzle file '{}' not found", args.puzzle.display());
        return Ok(2);
    }
    let mut board = loader::load(&args.puzzle)?;

    if let Some(path) = &args.dump_cnf {
        let formula = cnf::compile(&board);
        let mut out = BufWriter::new(File::create(path)?);
        formula.write_dimacs(&mut out)?;
        out.flush()?;
        info!("wrote {} clauses to {}", formula.len(), path.display());
    }

    let report = match Solver::new().solve(&mut board) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(2);
        }
    };
    let (status, code) = verdict(report.outcome);

    if args.json {
        let doc = serde_json::json!({
            "status": status,
            "outcome": report.outcome,
            "metrics": report.metrics,
            "board": board.to_compact(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{}", board);
        print_metrics(&mut io::stdout(), &report.metrics)?;
        println!();
        println!("{}", status);
    }

    Ok(code)
}

/// Status line and process exit code for an outcome.
fn verdict(outcome: SolveOutcome) -> (&'static str, i32) {
    match outcome {
        SolveOutcome::Solved { valid: true } => ("Solution found and verified!", 0),
        SolveOutcome::Unsolvable => ("No solution exists for this puzzle", 1),
        SolveOutcome::Solved { valid: false } => ("Solution found but invalid!", 2),
    }
}

fn print_metrics(out: &mut impl Write, metrics: &SolveMetrics) -> io::Result<()> {
    for (label, value) in render::metric_rows(Some(metrics)) {
        writeln!(out, "{:<16} {:>10}", format!("{}:", label), value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use sudoku_sat_core::SearchStats;

    #[test]
    fn test_exit_codes() {
        assert_eq!(verdict(SolveOutcome::Solved { valid: true }).1, 0);
        assert_eq!(verdict(SolveOutcome::Unsolvable).1, 1);
        assert_eq!(verdict(SolveOutcome::Solved { valid: false }).1, 2);
    }

    #[test]
    fn test_metrics_print_in_sidebar_order() {
        let metrics = SolveMetrics {
            var_count: 729,
            clause_count: 3270,
            encode_time: Duration::from_micros(250),
            solve_time: Duration::from_micros(750),
            search: SearchStats::default(),
        };

        let mut out = Vec::new();
        print_metrics(&mut out, &metrics).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Variables (CNF):"));
        assert!(lines[0].ends_with("729"));
        assert!(lines[1].contains("3,270"));
        assert!(lines[4].contains("1.000 ms"));
    }
}
