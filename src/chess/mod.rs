//! Chess-facing adapters around the tour engine.

pub mod notation;
