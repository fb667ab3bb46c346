use super::*;
use crate::policy::AiType;
use crate::policy::Dispatcher;
use crate::record::TournamentRecord;
use crate::rng::Source;

/// One unit of batch work: a single tournament from seed to record.
///
/// Owns its own [`Source`] and never touches another runner's state, so any
/// number of these can run side by side.
#[derive(Debug, Clone)]
pub struct Runner {
    number: u32,
    seed: u64,
    tags: Vec<AiType>,
    hands_per_level: u32,
    debug: bool,
}

impl Runner {
    pub fn new(number: u32, seed: u64, tags: Vec<AiType>, hands_per_level: u32) -> Self {
        Self {
            number,
            seed,
            tags,
            hands_per_level,
            debug: false,
        }
    }
    /// Log every hand in full.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
    pub fn number(&self) -> u32 {
        self.number
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn run(&self, dispatcher: &Dispatcher) -> crate::Result<TournamentRecord> {
        let ref mut rng = Source::from(self.seed);
        let agents = dispatcher.seat(&self.tags);
        let mut tournament = Tournament::new(self.number, self.seed, &self.tags, self.hands_per_level)?;
        while !tournament.is_complete() {
            let mut table = tournament.begin(rng);
            table.play(&agents, rng).inspect_err(|e| {
                log::error!(
                    "[runner {}] hand {} aborted: {}",
                    self.number,
                    table.index(),
                    e
                )
            })?;
            let busted = tournament.settle(table);
            if let Some(hand) = tournament.hands().last() {
                match self.debug {
                    true => log::debug!("[runner {}]\n{}", self.number, hand),
                    false => log::trace!("[runner {}]\n{}", self.number, hand),
                }
            }
            if !busted.is_empty() {
                log::debug!("[runner {}] {}", self.number, tournament);
            }
        }
        let record = tournament.into_record();
        log::debug!(
            "[runner {}] seed {} won by seat {:?} after {} hands",
            self.number,
            self.seed,
            record.winner(),
            record.num_games()
        );
        Ok(record)
    }
}
