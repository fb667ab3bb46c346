use crate::Error;
use crate::MAX_PLAYERS;
use crate::policy::AiType;
use crate::policy::Dispatcher;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Everything one batch invocation needs. Shared by every tournament in the
/// batch; only the seed differs between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub num_players: usize,
    /// Raw AI-type tag per seat.
    pub player_ai_types: Vec<i32>,
    pub hands_per_level: u32,
    pub output_directory: PathBuf,
    /// Seed for tournament `i` is `seeds[i]`.
    pub seeds: Vec<u64>,
    pub num_processors: usize,
    /// Defaults to the number of seeds.
    #[serde(default)]
    pub num_tournaments: Option<usize>,
    #[serde(default)]
    pub debug: bool,
    /// MLP weight manifest for NeuralNet seats. Untrained when absent.
    #[serde(default)]
    pub weights: Option<PathBuf>,
}

impl BatchConfig {
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfiguration(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            Error::InvalidConfiguration(format!("cannot parse {}: {}", path.display(), e))
        })
    }

    pub fn num_tournaments(&self) -> usize {
        self.num_tournaments.unwrap_or(self.seeds.len())
    }

    /// Checks every field and resolves the seat tags. Touches nothing on
    /// disk.
    pub fn validate(&self) -> crate::Result<Vec<AiType>> {
        let invalid = |reason: String| Err(Error::InvalidConfiguration(reason));
        if !(2..=MAX_PLAYERS).contains(&self.num_players) {
            return invalid(format!(
                "num_players is {}, must be between 2 and {}",
                self.num_players, MAX_PLAYERS
            ));
        }
        if self.player_ai_types.len() != self.num_players {
            return invalid(format!(
                "{} ai types for {} players",
                self.player_ai_types.len(),
                self.num_players
            ));
        }
        if self.hands_per_level == 0 {
            return invalid("hands_per_level must be greater than zero".to_string());
        }
        if self.num_processors == 0 {
            return invalid("num_processors must be at least one".to_string());
        }
        if self.num_tournaments() == 0 {
            return invalid("num_tournaments must be at least one".to_string());
        }
        if self.seeds.len() != self.num_tournaments() {
            return invalid(format!(
                "{} seeds for {} tournaments",
                self.seeds.len(),
                self.num_tournaments()
            ));
        }
        if self.output_directory.as_os_str().is_empty() {
            return invalid("output_directory must not be empty".to_string());
        }
        if self.num_tournaments() > u32::MAX as usize {
            return invalid(format!("{} tournaments", self.num_tournaments()));
        }
        Dispatcher::validate(&self.player_ai_types)
    }
}
