//! Command-line front ends for the `emit` and `reveal` binaries.
mod emit;
mod reveal;

pub use emit::*;
pub use reveal::*;
