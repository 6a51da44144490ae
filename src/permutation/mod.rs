//! Permutators: stateful policies that name the next player to act.
//!
//! Each policy is its own struct holding only the history it needs, and
//! [`Permutator`] dispatches over them by tag. A permutator is built fresh
//! for every playout and dropped afterwards; nothing carries over.
//!
//! - [`Uniform`]: uniform over everyone but the previous pick
//! - [`AvoidTurnback`]: as uniform, with one redraw against A-B-A turnbacks
//! - [`Generational`]: weighted by how long each player has waited
mod generational;
mod permutator;
mod policy;
mod turnback;
mod uniform;

pub use generational::*;
pub use permutator::*;
pub use policy::*;
pub use turnback::*;
pub use uniform::*;

use crate::Player;

/// Names the next player to act, advancing internal history.
pub trait Poll {
    fn poll(&mut self) -> Player;
}
