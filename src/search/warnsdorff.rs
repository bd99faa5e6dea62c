//! Warnsdorff's rule: always jump to the reachable cell with the fewest onward jumps.
//!
//! The engine is a two-state machine. While running, each [`TourEngine::step`] scores the
//! current candidates on the board as it stands, moves to the lowest score and marks it.
//! It terminates the first time the current cell has no candidates; that is the only exit,
//! and it covers both a finished tour and a dead end.

use tracing::{debug, trace};

use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::error::TourError;
use crate::search::movegen::{available_moves, onward_degree};
use crate::search::resources::{StepTracker, TourCounts};
use crate::tour::Tour;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Running,
    Terminated,
}

/// Picks the next cell from `current`, or `None` if the knight is stuck.
///
/// Ties on onward degree go to the candidate that comes first in
/// [`crate::core::coord::KNIGHT_DELTAS`] order.
pub fn next_move(current: Coord, board: &Board) -> Option<Coord> {
    select(&available_moves(current, board), board).map(|(c, _)| c)
}

fn select(candidates: &[Coord], board: &Board) -> Option<(Coord, usize)> {
    let mut best: Option<(Coord, usize)> = None;
    for &c in candidates {
        let degree = onward_degree(c, board);
        // Strict `<` keeps the earliest candidate on ties.
        if best.map_or(true, |(_, d)| degree < d) {
            best = Some((c, degree));
        }
    }
    best
}

#[derive(Debug, Clone)]
pub struct TourEngine {
    board: Board,
    current: Coord,
    route: Vec<Coord>,
    state: EngineState,
    tracker: StepTracker,
}

impl TourEngine {
    /// Sets up a run from `start` with the start cell already visited.
    ///
    /// The board size and the start are checked before anything is allocated.
    pub fn new(start: Coord, width: u32, height: u32) -> Result<Self, TourError> {
        let cells = Board::check_dimensions(width, height)?;
        let on_board = start.col >= 0
            && start.row >= 0
            && (start.col as u32) < width
            && (start.row as u32) < height;
        if !on_board {
            return Err(TourError::InvalidStart {
                start,
                width,
                height,
            });
        }

        let mut board = Board::new(width, height)?;
        let mut route: Vec<Coord> = Vec::new();
        route
            .try_reserve_exact(cells)
            .map_err(|_| TourError::AllocationFailed {
                structure: "route",
                cells,
            })?;

        board.mark_visited(start);
        route.push(start);
        let tracker = StepTracker::new(cells);

        debug!(%start, width, height, "tour started");

        Ok(Self {
            board,
            current: start,
            route,
            state: EngineState::Running,
            tracker,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == EngineState::Terminated
    }

    pub fn current(&self) -> Coord {
        self.current
    }

    pub fn route(&self) -> &[Coord] {
        &self.route
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn counts(&self) -> TourCounts {
        self.tracker.counts()
    }

    /// Advances one jump and returns the newly visited cell.
    ///
    /// Returns `None` once the engine has terminated, and keeps returning `None` afterwards.
    pub fn step(&mut self) -> Option<Coord> {
        if self.is_terminated() {
            return None;
        }

        let candidates = available_moves(self.current, &self.board);
        self.tracker.bump_scored(candidates.len());

        let Some((next, degree)) = select(&candidates, &self.board) else {
            self.state = EngineState::Terminated;
            debug!(
                len = self.route.len(),
                cells = self.board.cell_count(),
                complete = self.route.len() == self.board.cell_count(),
                "tour terminated"
            );
            return None;
        };

        trace!(from = %self.current, to = %next, degree, candidates = candidates.len(), "step");

        self.tracker.bump_step();
        self.board.mark_visited(next);
        self.route.push(next);
        self.current = next;
        Some(next)
    }

    /// Runs to termination and hands over the route.
    pub fn run(mut self) -> Tour {
        while self.step().is_some() {}
        Tour::new(self.board.width(), self.board.height(), self.route)
    }
}

/// Computes a Warnsdorff tour of a `width x height` board from `start`.
///
/// Fails only on a board outside the size limits or an off-board start. A tour that stops
/// short of covering the board is still `Ok`; check [`Tour::is_complete`].
pub fn tour(start: Coord, width: u32, height: u32) -> Result<Tour, TourError> {
    Ok(TourEngine::new(start, width, height)?.run())
}
