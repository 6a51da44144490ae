//! Reveal Binary
//!
//! Prints a playouts file with every token replaced by the permutator
//! that drew it, after checking the hints sidecar belongs to that file.

use clap::Parser;
use playouts::cli::Unveil;

fn main() {
    playouts::log();
    if let Err(e) = Unveil::parse().run() {
        log::error!("reveal failed: {:#}", e);
        std::process::exit(1);
    }
}
