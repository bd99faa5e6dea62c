use crate::core::board::Board;
use crate::core::coord::{Coord, KNIGHT_DELTAS};

/// Knight moves from `from` that land on the board and on an unvisited cell.
///
/// Results follow [`KNIGHT_DELTAS`] order. `from` itself need not be unvisited.
pub fn available_moves(from: Coord, board: &Board) -> Vec<Coord> {
    let mut out: Vec<Coord> = Vec::with_capacity(8);

    for delta in KNIGHT_DELTAS {
        let to = from + delta;
        if !board.in_bounds(to) {
            continue;
        }
        if board.is_visited(to) {
            continue;
        }
        out.push(to);
    }

    out
}

/// Number of available moves from `from` on the board as it stands.
pub fn onward_degree(from: Coord, board: &Board) -> usize {
    KNIGHT_DELTAS
        .iter()
        .map(|&delta| from + delta)
        .filter(|&to| board.in_bounds(to) && !board.is_visited(to))
        .count()
}

/// Whether `a -> b` is a single knight jump.
#[inline]
pub fn is_knight_move(a: Coord, b: Coord) -> bool {
    let d = b - a;
    KNIGHT_DELTAS.contains(&d)
}
