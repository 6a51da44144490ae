//! Players and the fixed roster they are drawn from.
mod player;
mod roster;

pub use player::*;
pub use roster::*;
