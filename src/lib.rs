//! Batch simulation of multi-player No-Limit Hold'em tournaments.
//!
//! A [`batch::Scheduler`] fans a list of seeds out over a bounded worker pool.
//! Each worker plays one tournament to completion with a
//! [`tournament::Runner`], persists the resulting [`record::TournamentRecord`]
//! as a self-describing binary file, and the [`record::Summary`] reader later
//! recovers finishing order and elimination hands from those files.
pub mod batch;
pub mod cards;
pub mod error;
pub mod gameplay;
pub mod policy;
pub mod record;
pub mod rng;
pub mod tournament;

pub use error::Error;
pub use error::Result;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, bets, pots and deltas, in chips.
pub type Chips = i32;
/// Seat index within a hand or a tournament.
pub type Position = usize;
/// Strategy weights and sampling distributions.
pub type Probability = f32;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Largest table a tournament may seat.
pub const MAX_PLAYERS: usize = 10;
/// Small blind at the first level.
pub const SMALL_BLIND: Chips = 25;
/// Big blind at the first level.
pub const BIG_BLIND: Chips = 2 * SMALL_BLIND;
/// Every entrant buys in for a hundred big blinds.
pub const STARTING_STACK: Chips = 100 * BIG_BLIND;

// ============================================================================
// BLIND SCHEDULE
// Level k posts BLIND_MULTIPLIERS[k] × (SMALL_BLIND, BIG_BLIND).
// Levels past the end of the table stay at the last tier.
// ============================================================================
pub const BLIND_MULTIPLIERS: [Chips; 9] = [1, 2, 3, 5, 10, 15, 20, 40, 80];

// ============================================================================
// HEURISTIC POLICIES
// ============================================================================
/// Tables with at least this many live seats use full-ring charts.
pub const FULL_RING: usize = 7;
/// Preflop open size, in big blinds.
pub const OPEN_SIZE: Chips = 3;
/// Chance a loose-aggressive seat bets air postflop.
pub const BLUFF_FREQUENCY: Probability = 0.25;

// ============================================================================
// RECORD FORMAT
// ============================================================================
/// Leading bytes of every record file.
pub const MAGIC: [u8; 4] = *b"DSHK";
/// Bumped whenever the binary layout changes.
pub const VERSION: u16 = 1;
/// Extension of finished record files.
pub const EXTENSION: &str = "dsr";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes one level more verbose to file than to terminal.
/// `debug` raises both sinks one level, which turns on per-hand tracing.
pub fn log(debug: bool) -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let (term, file) = match debug {
        true => (log::LevelFilter::Debug, log::LevelFilter::Trace),
        false => (log::LevelFilter::Info, log::LevelFilter::Debug),
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        file,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        term,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
