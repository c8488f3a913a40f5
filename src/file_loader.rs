//! File loading and parsing utilities for maze files.
//!
//! A maze file starts with six whitespace-delimited numbers (width and height, then the exit
//! row and column, then the start row and column), followed by one line per grid row.

use std::{fs, path::Path, str::Lines};

use color_eyre::eyre::{eyre, OptionExt as _, Result, WrapErr as _};
use tracing::{debug, warn};

use crate::{
    maze::Maze,
    types::{Cell, Glyphs, Position},
};

/// Number of values in the maze header.
const HEADER_FIELDS: usize = 6;

/// Reads the file at `path` and parses it into a maze.
///
/// # Errors
///
/// This function may return errors if the file cannot be read or if its contents are not a
/// valid maze.
pub(crate) fn load_file(path: &Path, glyphs: Glyphs) -> Result<Maze> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("unable to open file: {}", path.display()))?;

    parse_maze(&contents, glyphs).wrap_err_with(|| format!("invalid maze file: {}", path.display()))
}

/// Parses the textual maze format.
///
/// Once the sixth header number has been read the rest of its line is ignored. Exactly as many
/// lines as the header's height are then read as grid rows, and anything after them is left
/// untouched.
///
/// # Errors
///
/// This function may return errors if:
/// - The header ends early or holds something other than non-negative integers
/// - Fewer grid rows follow the header than it announced
/// - A grid row holds a character other than the wall and clear glyphs
pub(crate) fn parse_maze(input: &str, glyphs: Glyphs) -> Result<Maze> {
    let mut lines = input.lines();
    let [width, height, exit_row, exit_column, start_row, start_column] =
        read_header(&mut lines)?;
    debug!(
        width,
        height, exit_row, exit_column, start_row, start_column, "read maze header"
    );

    let grid = (0..height)
        .map(|row| {
            let line = lines
                .next()
                .ok_or_else(|| eyre!("expected {height} grid rows, found only {row}"))?;
            parse_row(line, row, glyphs)
        })
        .collect::<Result<Vec<_>>>()?;

    let maze = Maze::from_parts(
        (width, height),
        grid,
        Position::new(start_row, start_column),
        Position::new(exit_row, exit_column),
        glyphs,
    );

    if !maze.is_inside(maze.start()) {
        warn!(start = %maze.start(), "start lies outside the grid");
    }
    if !maze.is_inside(maze.exit()) {
        warn!(exit = %maze.exit(), "exit lies outside the grid");
    }

    Ok(maze)
}

/// Reads the six header numbers, which may be spread over several lines.
fn read_header(lines: &mut Lines<'_>) -> Result<[usize; HEADER_FIELDS]> {
    let mut header = [0; HEADER_FIELDS];
    let mut filled = 0;

    while filled < HEADER_FIELDS {
        let line = lines
            .next()
            .ok_or_eyre("maze header ended before all six numbers were read")?;

        for (slot, token) in header.iter_mut().skip(filled).zip(line.split_whitespace()) {
            *slot = token
                .parse()
                .wrap_err_with(|| format!("invalid maze header value `{token}`"))?;
            filled += 1;
        }
    }

    Ok(header)
}

/// Converts one grid line into cells.
fn parse_row(line: &str, row: usize, glyphs: Glyphs) -> Result<Vec<Cell>> {
    line.chars()
        .enumerate()
        .map(|(column, glyph)| {
            glyphs.parse(glyph).ok_or_else(|| {
                eyre!("unexpected character {glyph:?} at row {row}, column {column}")
            })
        })
        .collect()
}
