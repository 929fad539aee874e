#![allow(clippy::format_in_format_args)]

mod app;
mod batch;
mod loader;
mod render;
mod theme;

use app::{App, AppAction};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

/// Command line options
#[derive(Parser, Debug)]
#[command(name = "sudoku-sat", version, about = "SAT-backed Sudoku solver")]
pub struct Args {
    /// Puzzle file, one grid row per line
    #[arg(default_value = "input.txt")]
    pub puzzle: PathBuf,

    /// Solve once and print the result instead of opening the interface
    #[arg(long)]
    pub batch: bool,

    /// Write the compiled formula in DIMACS form to PATH (implies --batch)
    #[arg(long, value_name = "PATH")]
    pub dump_cnf: Option<PathBuf>,

    /// Print the solve report as JSON (implies --batch)
    #[arg(long)]
    pub json: bool,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.batch || args.json || args.dump_cnf.is_some() {
        let code = batch::run(&args)?;
        process::exit(code);
    }

    let board = loader::load(&args.puzzle)?;
    let mut app = App::new(board, args.puzzle.display().to_string());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    loop {
        render::render(stdout, app)?;
        stdout.flush()?;

        // Nothing animates, so block until the next key
        if let Event::Key(key) = event::read()? {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                break;
            }

            match app.handle_key(key) {
                AppAction::Continue => {}
                AppAction::Solve => {
                    // Show the busy status before the search blocks input
                    render::render(stdout, app)?;
                    stdout.flush()?;
                    app.run_solve();
                }
                AppAction::Quit => break,
            }
        }
    }

    Ok(())
}
