//! Basic example of solving a puzzle through the SAT pipeline.

use sudoku_sat_core::{Board, Solver};

fn main() {
    let puzzle_string = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let mut board = Board::from_compact(puzzle_string).expect("valid puzzle string");

    println!("Puzzle:");
    println!("{}", board);
    println!("Given cells: {}", board.given_count());

    println!("\nSolving...\n");
    match Solver::new().solve(&mut board) {
        Ok(report) if report.is_solved() => {
            println!("Solution:");
            println!("{}", board);

            let m = report.metrics;
            println!("Variables: {}", m.var_count);
            println!("Clauses: {}", m.clause_count);
            println!("Generation time: {:?}", m.encode_time);
            println!("Solving time: {:?}", m.solve_time);
            println!(
                "Search: {} conflicts, {} decisions, {} propagations",
                m.search.conflicts, m.search.decisions, m.search.propagations
            );
        }
        Ok(_) => println!("No solution found (this shouldn't happen for this puzzle!)"),
        Err(e) => println!("Solver error: {}", e),
    }
}
