//! Batch Simulation Binary
//!
//! Runs a batch of tournaments and writes one record per tournament.
//! Exits with 0 when every tournament was persisted, 1 otherwise.
//!
//! Examples:
//!   simulate --players 10 --ai-types 0,6 --seeds 0..100 --directory out
//!   simulate --config batch.json
use clap::Parser;
use deepshark::batch::BatchConfig;
use deepshark::batch::Scheduler;
use deepshark::policy::AiType;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate a batch of Hold'em tournaments", long_about = None)]
struct Args {
    /// Load the whole batch from a JSON file. Other options are ignored.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seats per tournament.
    #[arg(short, long, default_value_t = 10)]
    players: usize,
    /// AI type per seat, by number or name, repeated to fill the table.
    #[arg(short, long, value_delimiter = ',', default_value = "TAG,LAG", value_parser = tag)]
    ai_types: Vec<i32>,
    #[arg(long, default_value_t = 20)]
    hands_per_level: u32,
    #[arg(short, long, default_value = "records")]
    directory: PathBuf,
    /// Either a range `a..b` or a comma list. Defaults to `0..tournaments`.
    #[arg(short, long, value_parser = seeds)]
    seeds: Option<Seeds>,
    #[arg(short, long)]
    tournaments: Option<usize>,
    #[arg(long, default_value_t = num_cpus::get())]
    processors: usize,
    /// MLP weight manifest for NeuralNet seats.
    #[arg(short, long)]
    weights: Option<PathBuf>,
    /// Log every hand.
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Clone)]
struct Seeds(Vec<u64>);

fn tag(s: &str) -> Result<i32, String> {
    s.trim()
        .parse::<i32>()
        .or_else(|_| AiType::try_from(s).map(i32::from).map_err(|e| e.to_string()))
}

fn seeds(s: &str) -> Result<Seeds, String> {
    match s.split_once("..") {
        Some((a, b)) => {
            let a = a.trim().parse::<u64>().map_err(|e| e.to_string())?;
            let b = b.trim().parse::<u64>().map_err(|e| e.to_string())?;
            Ok(Seeds((a..b).collect()))
        }
        None => s
            .split(',')
            .map(|x| x.trim().parse::<u64>().map_err(|e| e.to_string()))
            .collect::<Result<Vec<u64>, String>>()
            .map(Seeds),
    }
}

impl Args {
    fn into_config(self) -> anyhow::Result<BatchConfig> {
        if let Some(path) = self.config {
            return Ok(BatchConfig::from_path(&path)?);
        }
        let seeds = match self.seeds {
            Some(Seeds(seeds)) => seeds,
            None => (0..self.tournaments.unwrap_or(1) as u64).collect(),
        };
        let player_ai_types = match self.ai_types.is_empty() {
            true => vec![],
            false => self
                .ai_types
                .iter()
                .cycle()
                .take(self.players)
                .copied()
                .collect(),
        };
        Ok(BatchConfig {
            num_players: self.players,
            player_ai_types,
            hands_per_level: self.hands_per_level,
            output_directory: self.directory,
            num_tournaments: self.tournaments,
            num_processors: self.processors,
            debug: self.debug,
            weights: self.weights,
            seeds,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let config = Args::parse().into_config()?;
    deepshark::log(config.debug)?;
    let report = Scheduler::run(&config)?;
    for (number, reason) in report.failed.iter() {
        log::error!("tournament {} failed: {}", number, reason);
    }
    std::process::exit(report.status())
}
