//! Turn sequences and the driver that draws them.
mod playout;
mod sequence;

pub use playout::*;
pub use sequence::*;
