use crate::core::coord::Coord;
use crate::error::TourError;

/// Visited flags for a `width x height` grid.
///
/// Stored densely as a flat table indexed by `row * width + col`, so lookups are O(1).
/// A board belongs to a single tour computation and is thrown away with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    visited: Vec<bool>,
    visited_count: usize,
}

/// Largest accepted side length; keeps `col + 2` and `row + 2` inside `i32`.
pub const MAX_DIMENSION: u32 = i32::MAX as u32 - 2;

/// Largest accepted `width * height` (16384 x 16384).
pub const MAX_CELLS: usize = 1 << 28;

impl Board {
    /// Checks `width x height` against the size limits and returns the cell count.
    pub fn check_dimensions(width: u32, height: u32) -> Result<usize, TourError> {
        let invalid = TourError::InvalidBoard { width, height };
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(invalid);
        }
        match (width as usize).checked_mul(height as usize) {
            Some(cells) if cells <= MAX_CELLS => Ok(cells),
            _ => Err(invalid),
        }
    }

    pub fn new(width: u32, height: u32) -> Result<Self, TourError> {
        let cells = Self::check_dimensions(width, height)?;
        let mut visited: Vec<bool> = Vec::new();
        visited
            .try_reserve_exact(cells)
            .map_err(|_| TourError::AllocationFailed {
                structure: "visited table",
                cells,
            })?;
        visited.resize(cells, false);
        Ok(Self {
            width: width as i32,
            height: height as i32,
            visited,
            visited_count: 0,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width as u32
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height as u32
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.visited.len()
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.col >= 0 && c.col < self.width && c.row >= 0 && c.row < self.height
    }

    /// Panics if `c` is off the board; callers check [`Board::in_bounds`] first.
    #[inline]
    pub fn is_visited(&self, c: Coord) -> bool {
        self.visited[self.index(c)]
    }

    /// Marks `c` visited.
    ///
    /// Marking an off-board or already-visited cell is a logic error in the caller and panics.
    pub fn mark_visited(&mut self, c: Coord) {
        let idx = self.index(c);
        assert!(!self.visited[idx], "cell {c} visited twice");
        self.visited[idx] = true;
        self.visited_count += 1;
    }

    #[inline]
    fn index(&self, c: Coord) -> usize {
        assert!(
            self.in_bounds(c),
            "cell {c} outside {}x{} board",
            self.width,
            self.height
        );
        (c.row as usize) * (self.width as usize) + (c.col as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_board_has_nothing_visited() {
        let board = Board::new(5, 3).unwrap();
        assert_eq!(board.cell_count(), 15);
        assert_eq!(board.visited_count(), 0);
        for col in 0..5 {
            for row in 0..3 {
                assert!(!board.is_visited(Coord::new(col, row)));
            }
        }
    }

    #[test]
    fn bounds_follow_width_and_height() {
        let board = Board::new(5, 3).unwrap();
        assert!(board.in_bounds(Coord::new(4, 2)));
        assert!(!board.in_bounds(Coord::new(5, 0)));
        assert!(!board.in_bounds(Coord::new(0, 3)));
        assert!(!board.in_bounds(Coord::new(-1, 0)));
        assert!(!board.in_bounds(Coord::new(0, -1)));
    }

    #[test]
    fn marking_sets_only_that_cell() {
        let mut board = Board::new(4, 4).unwrap();
        board.mark_visited(Coord::new(1, 2));
        assert!(board.is_visited(Coord::new(1, 2)));
        assert!(!board.is_visited(Coord::new(2, 1)));
        assert_eq!(board.visited_count(), 1);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            Board::new(0, 8),
            Err(TourError::InvalidBoard { width: 0, height: 8 })
        ));
        assert!(Board::new(8, 0).is_err());
    }

    #[test]
    fn oversized_boards_are_rejected_without_allocating() {
        for (w, h) in [
            (i32::MAX as u32, 1),
            (MAX_DIMENSION + 1, 1),
            (1, u32::MAX),
            (16_385, 16_384),
            (MAX_DIMENSION, MAX_DIMENSION),
        ] {
            assert!(matches!(
                Board::new(w, h),
                Err(TourError::InvalidBoard { width, height }) if (width, height) == (w, h)
            ));
        }
        assert_eq!(Board::check_dimensions(16_384, 16_384).unwrap(), MAX_CELLS);
        assert_eq!(Board::check_dimensions(MAX_CELLS as u32, 1).unwrap(), MAX_CELLS);
    }

    #[test]
    #[should_panic(expected = "visited twice")]
    fn double_mark_panics() {
        let mut board = Board::new(3, 3).unwrap();
        board.mark_visited(Coord::ORIGIN);
        board.mark_visited(Coord::ORIGIN);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_bounds_lookup_panics() {
        let board = Board::new(3, 3).unwrap();
        board.is_visited(Coord::new(3, 0));
    }
}
