//! Emit Binary
//!
//! Draws a blind batch of playouts for every permutator and writes
//! `playouts_<ts>.txt` alongside its `hints_<ts>.json` sidecar.

use clap::Parser;
use playouts::cli::Emit;

fn main() {
    playouts::log();
    if let Err(e) = Emit::parse().run() {
        log::error!("emit failed: {:#}", e);
        std::process::exit(1);
    }
}
