//! Step accounting for the tour engine.
//!
//! Every step marks one new cell, so a run can take at most `width * height - 1` steps after
//! the start. The tracker asserts that bound; exceeding it means the board lost a visit.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Running counters for a single tour computation.
pub struct TourCounts {
    /// Moves made after the start cell.
    pub steps: u64,
    /// Candidates whose onward degree was evaluated.
    pub scored: u64,
}

#[derive(Debug, Clone)]
pub struct StepTracker {
    max_steps: u64,
    counts: TourCounts,
}

impl StepTracker {
    #[inline]
    pub fn new(cell_count: usize) -> Self {
        Self {
            max_steps: (cell_count as u64).saturating_sub(1),
            counts: TourCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> TourCounts {
        self.counts
    }

    #[inline]
    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }

    #[inline]
    pub fn bump_scored(&mut self, delta: usize) {
        self.counts.scored = self.counts.scored.saturating_add(delta as u64);
    }

    pub fn bump_step(&mut self) {
        self.counts.steps += 1;
        assert!(
            self.counts.steps <= self.max_steps,
            "tour step {} exceeds bound {}",
            self.counts.steps,
            self.max_steps
        );
    }
}
