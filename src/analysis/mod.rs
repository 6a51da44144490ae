//! Per-player statistics over a finished sequence.
//!
//! - [`Analysis`]: top waits, turn counts, and adjacency for a whole roster
//! - [`Adjacency`]: who came right before and right after one player
mod adjacency;
mod analysis;

pub use adjacency::*;
pub use analysis::*;
