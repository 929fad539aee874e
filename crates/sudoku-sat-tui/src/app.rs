use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use log::error;
use sudoku_sat_core::{Board, Position, SolveMetrics, SolveOutcome, Solver};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    /// Run the solver once the busy status has been drawn
    Solve,
    Quit,
}

/// Color class of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Success,
    Error,
}

/// The main application state
pub struct App {
    /// Board being displayed and solved
    pub board: Board,
    /// Currently selected cell position
    pub cursor: Position,
    /// Color theme
    pub theme: Theme,
    /// Status line text
    pub status: String,
    /// Status line color class
    pub status_kind: StatusKind,
    /// Metrics from the last solve attempt
    pub metrics: Option<SolveMetrics>,
    /// Puzzle file name shown in the sidebar
    pub puzzle_file: String,
    /// Whether the last solve attempt produced a solution
    solved: bool,
    solver: Solver,
}

impl App {
    /// Create the app around a loaded board.
    pub fn new(board: Board, puzzle_file: String) -> Self {
        let mut app = Self {
            board,
            cursor: Position::new(4, 4),
            theme: Theme::dark(),
            status: String::new(),
            status_kind: StatusKind::Info,
            metrics: None,
            puzzle_file,
            solved: false,
            solver: Solver::new(),
        };
        app.set_ready_status();
        app
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,

            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.solved {
                    self.set_status("Already solved!", StatusKind::Warning);
                } else {
                    self.set_status("Solving...", StatusKind::Warning);
                    return AppAction::Solve;
                }
            }

            KeyCode::Char('r') => self.reset(),

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            // Cell editing; clue cells stay as the file set them
            KeyCode::Char(c @ '1'..='9') => {
                if !self.board.cell(self.cursor).is_given() {
                    self.board
                        .set_value(self.cursor, c.to_digit(10).unwrap() as u8);
                    self.solved = false;
                }
            }
            KeyCode::Char('0') | KeyCode::Delete | KeyCode::Backspace => {
                if !self.board.cell(self.cursor).is_given() {
                    self.board.clear_value(self.cursor);
                    self.solved = false;
                }
            }

            _ => {}
        }
        AppAction::Continue
    }

    /// Run the solver on the current board. Called by the main loop after
    /// the busy status from [`App::handle_key`] has been drawn.
    pub fn run_solve(&mut self) {
        match self.solver.solve(&mut self.board) {
            Ok(report) => {
                self.metrics = Some(report.metrics);
                match report.outcome {
                    SolveOutcome::Solved { valid: true } => {
                        self.solved = true;
                        self.set_status("Solution found and verified!", StatusKind::Success);
                    }
                    SolveOutcome::Solved { valid: false } => {
                        self.solved = true;
                        self.set_status("Solution found but invalid!", StatusKind::Error);
                    }
                    SolveOutcome::Unsolvable => {
                        self.set_status("No solution exists for this puzzle", StatusKind::Error);
                    }
                }
            }
            Err(e) => {
                error!("solve failed: {}", e);
                self.set_status(&format!("Solver error: {}", e), StatusKind::Error);
            }
        }
    }

    /// Reset the board to its clues and drop the last report.
    pub fn reset(&mut self) {
        self.board.reset_to_givens();
        self.metrics = None;
        self.solved = false;
        self.set_ready_status();
    }

    /// Whether the last solve attempt produced a solution.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    fn set_ready_status(&mut self) {
        if self.board.given_count() > 0 {
            self.set_status("Puzzle loaded - Ready to solve", StatusKind::Info);
        } else {
            self.set_status("Ready to solve", StatusKind::Info);
        }
    }

    fn set_status(&mut self, text: &str, kind: StatusKind) {
        self.status = text.to_string();
        self.status_kind = kind;
    }

    fn move_cursor(&mut self, row_delta: i32, col_delta: i32) {
        let new_row = (self.cursor.row as i32 + row_delta).clamp(0, 8) as usize;
        let new_col = (self.cursor.col as i32 + col_delta).clamp(0, 8) as usize;
        self.cursor = Position::new(new_row, new_col);
    }
}
