//! Plain-text and JSON persistence for [`MazeGrid`].
//!
//! The text format is line based:
//!
//! ```text
//! # MAZEGRAPH
//! NAME: backtracker 5x5
//! ROWS: 5
//! COLUMNS: 5
//! HAS_SOLUTION: 1
//! SOLUTION_STEPS: 8
//! DATA:
//! 2 1 1 1 1
//! 0 0 0 0 1
//! ...
//! ```
//!
//! Each `DATA` row lists the numeric [`CellState`] codes separated by single
//! spaces. The name follows `NAME: ` verbatim, with backslashes and line
//! breaks escaped as `\\`, `\n` and `\r`. Every field of the grid survives
//! a round trip.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::cell::CellState;
use super::grid::{cell_count_for, MazeGrid};
use crate::error::{MazeError, Result};

const MAGIC: &str = "# MAZEGRAPH";

impl MazeGrid {
    /// Serializes the grid into the text format.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(128 + self.cell_count() * 2);
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{MAGIC}");
        let _ = writeln!(out, "NAME: {}", escape_name(&self.name));
        let _ = writeln!(out, "ROWS: {}", self.rows());
        let _ = writeln!(out, "COLUMNS: {}", self.columns());
        let _ = writeln!(out, "HAS_SOLUTION: {}", u8::from(self.has_solution));
        let _ = writeln!(out, "SOLUTION_STEPS: {}", self.solution_steps);
        out.push_str("DATA:\n");
        for row in self.row_slices() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{}", cell.code());
            }
            out.push('\n');
        }
        out
    }

    /// Parses the text format.
    ///
    /// # Errors
    /// Returns [`MazeError::Parse`] for a missing or malformed header line,
    /// an unknown cell code or a row of the wrong length, and
    /// [`MazeError::InvalidData`] for dimensions outside `1..=MAX_DIMENSION`
    /// or a missing row.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

        let (line, magic) = lines
            .next()
            .ok_or_else(|| MazeError::parse(1, "empty input"))?;
        if magic.trim() != MAGIC {
            return Err(MazeError::parse(line, format!("expected `{MAGIC}`")));
        }

        let name = name_header(&mut lines)?;
        let rows = number(header(&mut lines, "ROWS")?)?;
        let columns = number(header(&mut lines, "COLUMNS")?)?;
        let has_solution = match header(&mut lines, "HAS_SOLUTION")? {
            (_, "0") => false,
            (_, "1") => true,
            (line, other) => {
                return Err(MazeError::parse(line, format!("HAS_SOLUTION must be 0 or 1, got `{other}`")))
            }
        };
        let solution_steps = number(header(&mut lines, "SOLUTION_STEPS")?)?;

        let cell_count = cell_count_for(rows, columns)?;

        let (line, data) = lines
            .next()
            .ok_or_else(|| MazeError::invalid_data("missing DATA section"))?;
        if data.trim() != "DATA:" {
            return Err(MazeError::parse(line, "expected `DATA:`"));
        }

        let mut cells = Vec::with_capacity(cell_count);
        for row in 0..rows {
            let (line, text) = lines
                .next()
                .ok_or_else(|| MazeError::invalid_data(format!("missing row {row}")))?;
            let before = cells.len();
            for token in text.split_whitespace() {
                let state = token
                    .parse::<u8>()
                    .ok()
                    .and_then(CellState::from_code)
                    .ok_or_else(|| MazeError::parse(line, format!("invalid cell code `{token}`")))?;
                cells.push(state);
            }
            let found = cells.len() - before;
            if found != columns {
                return Err(MazeError::parse(
                    line,
                    format!("expected {columns} cells, found {found}"),
                ));
            }
        }

        let mut grid = Self::from_cells(rows, columns, cells)?.with_name(name);
        grid.has_solution = has_solution;
        grid.solution_steps = solution_steps;
        Ok(grid)
    }

    /// Writes the text format to `path`.
    ///
    /// # Errors
    /// Propagates I/O errors.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path.as_ref(), self.to_text())?;
        log_event!(debug, path = %path.as_ref().display(), "maze saved");
        Ok(())
    }

    /// Reads a grid in the text format from `path`.
    ///
    /// # Errors
    /// Propagates I/O errors and every error of [`from_text`](Self::from_text).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_text(&text)
    }

    /// Serializes the grid as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`MazeError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a grid from JSON and checks its structure.
    ///
    /// # Errors
    /// Returns [`MazeError::Json`] for malformed JSON and
    /// [`MazeError::InvalidData`] if the cell count does not match.
    pub fn from_json(json: &str) -> Result<Self> {
        let grid: Self = serde_json::from_str(json)?;
        grid.validate()?;
        Ok(grid)
    }
}

/// Reads the `NAME` line, keeping everything after `NAME: ` as written.
fn name_header<'a>(lines: &mut impl Iterator<Item = (usize, &'a str)>) -> Result<String> {
    let (line, text) = lines
        .next()
        .ok_or_else(|| MazeError::invalid_data("missing NAME header"))?;
    let raw = text
        .strip_prefix("NAME: ")
        .or_else(|| (text == "NAME:").then_some(""))
        .ok_or_else(|| MazeError::parse(line, "expected `NAME:`"))?;
    unescape_name(raw).ok_or_else(|| MazeError::parse(line, "invalid escape in NAME"))
}

fn escape_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

fn unescape_name(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next()? {
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            _ => return None,
        }
    }
    Some(out)
}

/// Reads the next line as `KEY: value`.
fn header<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    key: &str,
) -> Result<(usize, &'a str)> {
    let (line, text) = lines
        .next()
        .ok_or_else(|| MazeError::invalid_data(format!("missing {key} header")))?;
    text.strip_prefix(key)
        .and_then(|rest| rest.strip_prefix(':'))
        .map(|value| (line, value.trim()))
        .ok_or_else(|| MazeError::parse(line, format!("expected `{key}:`")))
}

fn number((line, value): (usize, &str)) -> Result<usize> {
    value
        .parse()
        .map_err(|_| MazeError::parse(line, format!("expected a number, got `{value}`")))
}
