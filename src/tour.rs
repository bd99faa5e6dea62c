//! The result of a tour computation.
//!
//! The engine stops when the knight has no unvisited cell to jump to. That happens either
//! after covering the whole board or at a dead end; [`Tour::outcome`] says which.

use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};

use crate::core::coord::Coord;
use crate::search::movegen::is_knight_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TourOutcome {
    /// Every cell was visited exactly once.
    Complete,
    /// The heuristic got stuck with `missing` cells left unvisited.
    Incomplete { visited: usize, missing: usize },
}

/// An ordered route together with the board it was computed on.
///
/// Serializes as `{"width", "height", "outcome", "route"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    width: u32,
    height: u32,
    route: Vec<Coord>,
}

impl Tour {
    pub(crate) fn new(width: u32, height: u32, route: Vec<Coord>) -> Self {
        debug_assert!(!route.is_empty());
        Self {
            width,
            height,
            route,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn route(&self) -> &[Coord] {
        &self.route
    }

    pub fn into_route(self) -> Vec<Coord> {
        self.route
    }

    pub fn start(&self) -> Coord {
        self.route[0]
    }

    pub fn len(&self) -> usize {
        self.route.len()
    }

    /// Always false: a tour contains at least its start cell.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn missing(&self) -> usize {
        self.cell_count() - self.len()
    }

    pub fn is_complete(&self) -> bool {
        self.missing() == 0
    }

    pub fn outcome(&self) -> TourOutcome {
        match self.missing() {
            0 => TourOutcome::Complete,
            missing => TourOutcome::Incomplete {
                visited: self.len(),
                missing,
            },
        }
    }

    /// Re-checks the route against the board: see [`verify_route`].
    pub fn verify(&self) -> Result<(), RouteViolation> {
        verify_route(&self.route, self.width, self.height)
    }
}

#[derive(Serialize)]
struct TourRecord<'a> {
    width: u32,
    height: u32,
    outcome: TourOutcome,
    route: &'a [Coord],
}

impl Serialize for Tour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TourRecord {
            width: self.width,
            height: self.height,
            outcome: self.outcome(),
            route: &self.route,
        }
        .serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteViolation {
    Empty,
    OutOfBounds { index: usize, cell: Coord },
    Repeated { index: usize, cell: Coord },
    IllegalMove { index: usize, from: Coord, to: Coord },
    TooLong { len: usize, cells: usize },
}

/// Checks that `route` is a legal knight path on a `width x height` board.
///
/// A legal path is non-empty, stays on the board, never repeats a cell and only makes knight
/// jumps. Reports the first violation found.
pub fn verify_route(route: &[Coord], width: u32, height: u32) -> Result<(), RouteViolation> {
    if route.is_empty() {
        return Err(RouteViolation::Empty);
    }

    let cells = width as usize * height as usize;
    if route.len() > cells {
        return Err(RouteViolation::TooLong {
            len: route.len(),
            cells,
        });
    }

    let mut seen: FxHashSet<Coord> = FxHashSet::default();
    seen.reserve(route.len());

    for (index, &cell) in route.iter().enumerate() {
        let on_board = cell.col >= 0
            && cell.row >= 0
            && (cell.col as u32) < width
            && (cell.row as u32) < height;
        if !on_board {
            return Err(RouteViolation::OutOfBounds { index, cell });
        }
        if !seen.insert(cell) {
            return Err(RouteViolation::Repeated { index, cell });
        }
        if index > 0 {
            let from = route[index - 1];
            if !is_knight_move(from, cell) {
                return Err(RouteViolation::IllegalMove {
                    index,
                    from,
                    to: cell,
                });
            }
        }
    }

    Ok(())
}
