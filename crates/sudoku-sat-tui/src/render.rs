use crate::app::{App, StatusKind};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use std::time::Duration;
use sudoku_sat_core::{validate, Position, SolveMetrics};

// Grid footprint: 9 cells of 3 chars plus 10 border columns.
const GRID_WIDTH: u16 = 37;
const GRID_HEIGHT: u16 = 19;
const SIDEBAR_WIDTH: u16 = 38;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, Clear(ClearType::All))?;

    let total_width = GRID_WIDTH + 3 + SIDEBAR_WIDTH;
    let start_x = if term_width > total_width {
        (term_width - total_width) / 2
    } else {
        1
    };
    let start_y = if term_height > GRID_HEIGHT + 8 { 2 } else { 1 };

    render_title(stdout, app, start_x, start_y)?;
    render_grid(stdout, app, start_x, start_y + 1)?;
    render_sidebar(stdout, app, start_x + GRID_WIDTH + 3, start_y + 1)?;
    render_legend(stdout, app, start_x + 3, start_y + GRID_HEIGHT + 1)?;
    render_controls(stdout, app, start_x, start_y + GRID_HEIGHT + 3)?;

    execute!(stdout, Show)?;
    Ok(())
}

fn render_title(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let (title, color) = if app.is_solved() {
        ("SOLVED PUZZLE", theme.success)
    } else {
        ("SUDOKU PUZZLE", theme.accent)
    };

    let title_x = x + (GRID_WIDTH.saturating_sub(title.len() as u16)) / 2;
    execute!(
        stdout,
        MoveTo(title_x, y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(color),
        Print(title)
    )?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    execute!(stdout, SetBackgroundColor(theme.bg))?;

    // Top border (thick)
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.block_border),
        Print("+===+===+===+===+===+===+===+===+===+")
    )?;

    for row in 0..9 {
        let cell_y = y + 1 + row as u16 * 2;

        // Cell row
        execute!(stdout, MoveTo(x, cell_y))?;
        for col in 0..9 {
            // Thick borders at 3x3 boundaries
            if col % 3 == 0 {
                execute!(
                    stdout,
                    SetBackgroundColor(theme.bg),
                    SetForegroundColor(theme.block_border),
                    Print("║")
                )?;
            } else {
                execute!(
                    stdout,
                    SetBackgroundColor(theme.bg),
                    SetForegroundColor(theme.border),
                    Print("│")
                )?;
            }
            render_cell(stdout, app, Position::new(row, col))?;
        }
        execute!(
            stdout,
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.block_border),
            Print("║")
        )?;

        // Horizontal separator
        execute!(stdout, MoveTo(x, cell_y + 1))?;
        if (row + 1) % 3 == 0 {
            execute!(
                stdout,
                SetForegroundColor(theme.block_border),
                Print("+===+===+===+===+===+===+===+===+===+")
            )?;
        } else {
            execute!(
                stdout,
                SetForegroundColor(theme.border),
                Print("+---+---+---+---+---+---+---+---+---+")
            )?;
        }
    }

    Ok(())
}

fn render_cell(stdout: &mut io::Stdout, app: &App, pos: Position) -> io::Result<()> {
    let theme = &app.theme;
    let cell = app.board.cell(pos);

    let bg = if pos == app.cursor {
        theme.selected_bg
    } else {
        theme.cell_bg
    };

    match cell.value() {
        Some(value) => {
            let fg = if validate::cell_in_conflict(&app.board, pos) {
                theme.error
            } else if cell.is_given() {
                theme.given
            } else {
                theme.solved
            };
            execute!(
                stdout,
                SetBackgroundColor(bg),
                SetForegroundColor(fg),
                Print(format!(" {} ", value))
            )?;
        }
        None => {
            execute!(
                stdout,
                SetBackgroundColor(bg),
                SetForegroundColor(theme.border),
                Print(" · ")
            )?;
        }
    }

    Ok(())
}

fn render_sidebar(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    // Panel background
    for row in 0..GRID_HEIGHT {
        execute!(
            stdout,
            MoveTo(x, y + row),
            SetBackgroundColor(theme.panel_bg),
            Print(" ".repeat(SIDEBAR_WIDTH as usize))
        )?;
    }

    execute!(
        stdout,
        MoveTo(x + 2, y),
        SetForegroundColor(theme.accent),
        Print("SUDOKU"),
        MoveTo(x + 2, y + 1),
        SetForegroundColor(theme.label),
        Print("CSP + SAT Solver (batsat)")
    )?;

    // Status
    let status_color = match app.status_kind {
        StatusKind::Info => theme.label,
        StatusKind::Warning => theme.warning,
        StatusKind::Success => theme.success,
        StatusKind::Error => theme.error,
    };
    execute!(
        stdout,
        MoveTo(x + 2, y + 3),
        SetForegroundColor(theme.label),
        Print("STATUS:"),
        MoveTo(x + 2, y + 4),
        SetForegroundColor(status_color),
        Print(&app.status)
    )?;

    // Input file
    execute!(
        stdout,
        MoveTo(x + 2, y + 6),
        SetForegroundColor(theme.label),
        Print("INPUT FILE:"),
        MoveTo(x + 2, y + 7),
        SetForegroundColor(theme.value),
        Print(&app.puzzle_file)
    )?;

    // Metrics
    execute!(
        stdout,
        MoveTo(x + 2, y + 9),
        SetForegroundColor(theme.accent),
        Print("PERFORMANCE METRICS")
    )?;

    for (i, (label, value)) in metric_rows(app.metrics.as_ref()).iter().enumerate() {
        let row_y = y + 10 + i as u16;
        let value_x = x + SIDEBAR_WIDTH - 2 - value.len() as u16;
        execute!(
            stdout,
            MoveTo(x + 2, row_y),
            SetForegroundColor(theme.label),
            Print(format!("{}:", label)),
            MoveTo(value_x, row_y),
            SetForegroundColor(theme.value),
            Print(value)
        )?;
    }

    Ok(())
}

fn render_legend(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.given),
        Print("● Original Clues"),
        Print("   "),
        SetForegroundColor(theme.solved),
        Print("● AI Solved")
    )?;
    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    execute!(stdout, SetBackgroundColor(theme.bg))?;

    let controls = [
        ("Space/Enter", "Solve"),
        ("r", "Reset"),
        ("hjkl/Arrows", "Move"),
        ("1-9", "Set cell"),
        ("0/Del", "Clear cell"),
        ("q/Esc", "Quit"),
    ];

    // Two columns of three
    for (i, (key, desc)) in controls.iter().enumerate() {
        let col = i / 3;
        let row = i % 3;
        let cx = x + (col as u16) * 24;
        let cy = y + row as u16;

        execute!(
            stdout,
            MoveTo(cx, cy),
            SetForegroundColor(theme.value),
            Print(format!("{:>11}", key)),
            SetForegroundColor(theme.label),
            Print(format!(" {}", desc))
        )?;
    }

    Ok(())
}

const METRIC_LABELS: [&str; 8] = [
    "Variables (CNF)",
    "Clauses (CNF)",
    "Generation Time",
    "Solving Time",
    "Total Time",
    "Conflicts",
    "Decisions",
    "Propagations",
];

/// Sidebar metric rows, `--` placeholders before the first solve.
pub(crate) fn metric_rows(metrics: Option<&SolveMetrics>) -> Vec<(&'static str, String)> {
    match metrics {
        Some(m) => METRIC_LABELS
            .iter()
            .zip([
                with_commas(m.var_count as u64),
                with_commas(m.clause_count as u64),
                format_ms(m.encode_time),
                format_ms(m.solve_time),
                format_ms(m.total_time()),
                with_commas(m.search.conflicts),
                with_commas(m.search.decisions),
                with_commas(m.search.propagations),
            ])
            .map(|(&label, value)| (label, value))
            .collect(),
        None => METRIC_LABELS
            .iter()
            .map(|&label| (label, "--".to_string()))
            .collect(),
    }
}

fn with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn format_ms(d: Duration) -> String {
    format!("{:.3} ms", d.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudoku_sat_core::SearchStats;

    #[test]
    fn test_with_commas() {
        assert_eq!(with_commas(0), "0");
        assert_eq!(with_commas(729), "729");
        assert_eq!(with_commas(3270), "3,270");
        assert_eq!(with_commas(1234567), "1,234,567");
    }

    #[test]
    fn test_format_ms() {
        assert_eq!(format_ms(Duration::from_micros(1500)), "1.500 ms");
        assert_eq!(format_ms(Duration::from_millis(12)), "12.000 ms");
    }

    #[test]
    fn test_metric_rows_track_the_report() {
        let metrics = SolveMetrics {
            var_count: 729,
            clause_count: 3270,
            encode_time: Duration::from_micros(500),
            solve_time: Duration::from_micros(1500),
            search: SearchStats {
                conflicts: 3,
                decisions: 40,
                propagations: 1200,
            },
        };

        let rows = metric_rows(Some(&metrics));
        assert_eq!(rows[0], ("Variables (CNF)", "729".to_string()));
        assert_eq!(rows[1], ("Clauses (CNF)", "3,270".to_string()));
        assert_eq!(rows[4], ("Total Time", "2.000 ms".to_string()));
        assert_eq!(rows[7], ("Propagations", "1,200".to_string()));

        let empty = metric_rows(None);
        assert_eq!(empty.len(), 8);
        assert!(empty.iter().all(|(_, value)| value == "--"));
    }
}
