//! Randomized turn-order playouts under competing permutation policies.
//!
//! A [`Permutator`] decides who acts next, one [`Player`] per poll. Three
//! policies compete: [`Uniform`], [`AvoidTurnback`], and [`Generational`].
//! A [`Batch`] draws many [`Playout`]s per policy, hides each behind a random
//! [`Token`], shuffles them, and hands them to a [`Sink`]. [`Reveal`] later
//! swaps the tokens back for policy names.
//!
//! ## Core
//!
//! - [`Permutator`]: tagged dispatch over the three policies
//! - [`Playout`]: one finished [`Sequence`] of turns
//! - [`Analysis`]: per-player waits, turn counts, and adjacency
//!
//! ## Plumbing
//!
//! - [`Entropy`]: injected randomness, [`Secure`] in production, [`Scripted`] in tests
//! - [`Batch`] / [`Record`]: tokenized, shuffled playouts
//! - [`Sink`] / [`Directory`] / [`Hints`]: playouts file and JSON sidecar
//! - [`Reveal`]: sidecar lookup and token substitution
mod analysis;
mod batch;
mod entropy;
mod error;
mod permutation;
mod players;
mod playout;
mod reveal;
mod save;

#[cfg(feature = "cli")]
pub mod cli;

pub use analysis::*;
pub use batch::*;
pub use entropy::*;
pub use error::*;
pub use permutation::*;
pub use players::*;
pub use playout::*;
pub use reveal::*;
pub use save::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Number of polls in a playout.
pub type Turns = usize;
/// Number of turns between two appearances of the same player.
pub type Wait = usize;
/// Logical clock of the generational permutator.
pub type Generation = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// BATCH PARAMETERS
// ============================================================================
/// Players at the table when none are specified.
pub const NUM_PLAYERS: usize = 3;
/// Turns drawn per playout.
pub const TURNS: Turns = 20;
/// Playouts drawn for each permutator in a batch.
pub const SAMPLES_EACH: usize = 5;
/// Largest roster the single-letter player alphabet can encode.
pub const MAX_PLAYERS: usize = 26;

// ============================================================================
// ANALYSIS
// ============================================================================
/// Longest waits kept in the analysis summary.
pub const TOP_WAITS: usize = 5;
/// Stand-in for the sequence boundary in adjacency strings.
pub const BOUNDARY: char = '?';

// ============================================================================
// TOKENS
// Tokens are lowercase hex so they never collide with uppercase players.
// ============================================================================
/// Random bytes per token (rendered as twice as many hex digits).
pub const TOKEN_BYTES: usize = 8;
/// Alphabet tokens are drawn from.
pub const TOKEN_ALPHABET: &[u8] = b"0123456789abcdef";

// ============================================================================
// FILE NAMING
// ============================================================================
/// Prefix of the playouts file.
pub const PLAYOUTS_PREFIX: &str = "playouts_";
/// Extension of the playouts file.
pub const PLAYOUTS_SUFFIX: &str = ".txt";
/// Prefix of the hints sidecar.
pub const HINTS_PREFIX: &str = "hints_";
/// Extension of the hints sidecar.
pub const HINTS_SUFFIX: &str = ".json";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
