//! Persisting batches: the playouts file and its hints sidecar.
//!
//! - [`Sink`]: anything a [`Ledger`](crate::Ledger) can be written to
//! - [`Directory`]: writes `playouts_<ts>.txt` and `hints_<ts>.json`
//! - [`Stamp`]: the timestamp pairing the two files
//! - [`Hints`]: the sidecar: token to policy, plus the playouts filename
mod directory;
mod hints;
mod sink;
mod stamp;

pub use directory::*;
pub use hints::*;
pub use sink::*;
pub use stamp::*;
