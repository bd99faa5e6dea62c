//! Tour search: knight move generation and the Warnsdorff engine.

pub mod movegen;
pub mod resources;
pub mod warnsdorff;
