//! Lenient puzzle file loading.

use log::warn;
use std::fs;
use std::io;
use std::path::Path;
use sudoku_sat_core::{Board, Position, GRID_SIZE};

/// Read a puzzle from `path`.
///
/// A missing file is not an error; the interface starts with an empty
/// board instead.
pub fn load(path: &Path) -> io::Result<Board> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(parse(&text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("puzzle file {} not found, starting empty", path.display());
            Ok(Board::empty())
        }
        Err(e) => Err(e),
    }
}

/// Parse a board from text, one grid row per line.
///
/// The first nine lines map to rows by position, so a blank line leaves
/// its row empty. A trimmed line containing a space is split into
/// whitespace tokens, anything else is read character by character.
/// Digits `1`-`9` become clues; `0`, `.`, and unrecognized input leave
/// the cell empty.
pub fn parse(text: &str) -> Board {
    let mut board = Board::empty();
    for (row, line) in text.lines().take(GRID_SIZE).enumerate() {
        let line = line.trim();
        if line.contains(' ') {
            for (col, token) in line.split_whitespace().take(GRID_SIZE).enumerate() {
                if let Some(value) = single_digit(token) {
                    board.set_given(Position::new(row, col), value);
                }
            }
        } else {
            for (col, ch) in line.chars().take(GRID_SIZE).enumerate() {
                if let '1'..='9' = ch {
                    board.set_given(Position::new(row, col), ch as u8 - b'0');
                }
            }
        }
    }
    board
}

fn single_digit(token: &str) -> Option<u8> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch @ '1'..='9'), None) => Some(ch as u8 - b'0'),
        _ => None,
    }
}
