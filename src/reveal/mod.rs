//! Undoing the blind: swapping tokens back for policy names.
mod reveal;

pub use reveal::*;
