//! Low-level primitives shared by the move generator and the tour engine.
//!
//! - [`coord`]: integer cell coordinates and the canonical knight jumps.
//! - [`board`]: a fixed-size visited grid owned by one tour computation.

pub mod board;
pub mod coord;
