//! End-to-end solve pipeline tests.

use sudoku_sat_core::vars::var_id;
use sudoku_sat_core::{
    Assignment, Board, ClauseSet, Outcome, Position, SatOracle, SearchStats, SolveError,
    SolveOutcome, SolveResult, Solver, GRID_SIZE,
};

const CLASSIC: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
const CLASSIC_SOLVED: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

#[test]
fn classic_puzzle_solves_to_its_unique_solution() {
    let mut board = Board::from_compact(CLASSIC).unwrap();
    let report = Solver::new().solve(&mut board).unwrap();

    assert_eq!(report.outcome, SolveOutcome::Solved { valid: true });
    assert_eq!(board.to_compact(), CLASSIC_SOLVED);

    // Clue cells keep their flag; solver-filled cells do not get one.
    assert_eq!(board.given_count(), 30);
    assert!(board.cell(Position::new(0, 0)).is_given());
    assert!(!board.cell(Position::new(0, 2)).is_given());

    assert_eq!(report.metrics.var_count, 729);
    assert_eq!(report.metrics.clause_count, 3240 + 30);
}

#[test]
fn empty_board_is_satisfiable() {
    let mut board = Board::empty();
    let report = Solver::new().solve(&mut board).unwrap();

    assert_eq!(report.outcome, SolveOutcome::Solved { valid: true });
    assert!(board.is_full());
    assert_eq!(report.metrics.clause_count, 3240);
}

#[test]
fn repeated_value_in_a_row_is_unsolvable() {
    let mut board = Board::empty();
    board.set_given(Position::new(0, 0), 5);
    board.set_given(Position::new(0, 5), 5);
    let before = board.clone();

    let report = Solver::new().solve(&mut board).unwrap();

    assert_eq!(report.outcome, SolveOutcome::Unsolvable);
    assert_eq!(board, before);
}

#[test]
fn solved_board_stays_fixed() {
    let mut board = Board::from_compact(CLASSIC_SOLVED).unwrap();
    let report = Solver::new().solve(&mut board).unwrap();

    assert_eq!(report.outcome, SolveOutcome::Solved { valid: true });
    assert_eq!(board.to_compact(), CLASSIC_SOLVED);
}

#[test]
fn one_solver_value_serves_many_boards() {
    let mut solver = Solver::new();

    let mut first = Board::from_compact(CLASSIC).unwrap();
    assert!(solver.solve(&mut first).unwrap().is_solved());

    let mut second = Board::empty();
    second.set_given(Position::new(3, 3), 1);
    second.set_given(Position::new(3, 4), 1);
    assert_eq!(
        solver.solve(&mut second).unwrap().outcome,
        SolveOutcome::Unsolvable
    );

    let mut third = Board::empty();
    assert!(solver.solve(&mut third).unwrap().is_solved());
}

/// Oracle that replays a canned verdict, standing in for a real search.
struct ScriptedOracle {
    verdict: SolveResult<Outcome>,
}

impl SatOracle for ScriptedOracle {
    fn solve(&mut self, _cnf: &ClauseSet) -> SolveResult<Outcome> {
        self.verdict.clone()
    }
}

fn full_assignment(solution: &str) -> Assignment {
    solution
        .bytes()
        .enumerate()
        .map(|(i, b)| var_id(i / GRID_SIZE, i % GRID_SIZE, b - b'0'))
        .collect()
}

#[test]
fn any_sound_oracle_can_stand_in() {
    let oracle = ScriptedOracle {
        verdict: Ok(Outcome::Satisfiable {
            assignment: full_assignment(CLASSIC_SOLVED),
            stats: SearchStats::default(),
        }),
    };

    let mut board = Board::from_compact(CLASSIC).unwrap();
    let report = Solver::with_oracle(oracle).solve(&mut board).unwrap();

    assert_eq!(report.outcome, SolveOutcome::Solved { valid: true });
    assert_eq!(board.to_compact(), CLASSIC_SOLVED);
}

#[test]
fn oracle_that_violates_exactly_one_is_rejected() {
    let mut bad = full_assignment(CLASSIC_SOLVED);
    bad.push(var_id(0, 2, 9)); // second value for a cell that already has 4
    bad.sort_unstable();

    let oracle = ScriptedOracle {
        verdict: Ok(Outcome::Satisfiable {
            assignment: bad,
            stats: SearchStats::default(),
        }),
    };

    let mut board = Board::from_compact(CLASSIC).unwrap();
    let before = board.clone();
    let err = Solver::with_oracle(oracle).solve(&mut board).unwrap_err();

    assert!(matches!(err, SolveError::ConflictingModel { .. }));
    assert_eq!(board, before);
}

#[test]
fn interrupted_search_surfaces_as_an_error() {
    let oracle = ScriptedOracle {
        verdict: Err(SolveError::Interrupted),
    };

    let mut board = Board::empty();
    let err = Solver::with_oracle(oracle).solve(&mut board).unwrap_err();
    assert_eq!(err, SolveError::Interrupted);
}

#[test]
fn report_round_trips_through_json() {
    let mut board = Board::from_compact(CLASSIC).unwrap();
    let report = Solver::new().solve(&mut board).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let back: sudoku_sat_core::SolveReport = serde_json::from_str(&json).unwrap();

    assert_eq!(back.outcome, report.outcome);
    assert_eq!(back.metrics, report.metrics);
}
