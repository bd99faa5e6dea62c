//! Algebraic square names ("a1", "E5") for the command-line adapter.
//!
//! Files are letters `A..` (column 0 upward), ranks are 1-based numbers (row 0 upward).
//! Only the first 26 columns have a file letter.

use crate::core::coord::Coord;
use crate::error::TourError;

pub const MAX_FILES: u32 = 26;

/// Parses a square name like `"e5"` into a coordinate on a `width x height` board.
pub fn parse_square(input: &str, width: u32, height: u32) -> Result<Coord, TourError> {
    let err = |reason: String| TourError::Notation {
        input: input.to_string(),
        reason,
    };

    let s = input.trim();
    let mut chars = s.chars();
    let Some(file) = chars.next() else {
        return Err(err("empty square".to_string()));
    };
    let file = file.to_ascii_uppercase();
    if !file.is_ascii_uppercase() {
        return Err(err(format!("file must be a letter, got {file:?}")));
    }
    let col = (file as u8 - b'A') as u32;
    let files = width.min(MAX_FILES);
    if files == 0 {
        return Err(err("board has no files".to_string()));
    }
    if col >= files {
        let last = (b'A' + (files - 1) as u8) as char;
        return Err(err(format!("file {file} is outside A..{last}")));
    }

    let rank_str = chars.as_str();
    if rank_str.is_empty() || !rank_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err(format!("rank must be a number, got {rank_str:?}")));
    }
    let rank: u32 = rank_str
        .parse()
        .map_err(|e| err(format!("invalid rank {rank_str:?}: {e}")))?;
    if rank == 0 || rank > height {
        return Err(err(format!("rank {rank} is outside 1..{height}")));
    }

    let row = i32::try_from(rank - 1)
        .map_err(|_| err(format!("rank {rank} does not fit a board coordinate")))?;

    Ok(Coord::new(col as i32, row))
}

/// The square name for `c`, e.g. `(4, 4) -> "E5"`.
///
/// Columns past `Z` fall back to the numeric `"(col, row)"` form.
pub fn square_name(c: Coord) -> String {
    if c.col >= 0 && (c.col as u32) < MAX_FILES && c.row >= 0 {
        let file = (b'A' + c.col as u8) as char;
        format!("{file}{}", c.row + 1)
    } else {
        c.to_string()
    }
}

/// Joins square names with two spaces, starting a new line every `per_line` squares.
pub fn format_route(route: &[Coord], per_line: usize) -> String {
    let per_line = per_line.max(1);
    route
        .chunks(per_line)
        .map(|line| {
            line.iter()
                .map(|&c| square_name(c))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
