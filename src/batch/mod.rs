//! Batches of blind playouts.
//!
//! - [`Batch`]: which policies, players, turns, and samples to draw
//! - [`Ledger`]: the shuffled [`Record`]s of one run plus their token map
//! - [`Token`] / [`Mint`]: opaque labels, unique within a batch
mod batch;
mod ledger;
mod record;
mod token;

pub use batch::*;
pub use ledger::*;
pub use record::*;
pub use token::*;
