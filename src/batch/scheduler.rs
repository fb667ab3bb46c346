use super::*;
use crate::Error;
use crate::policy::AiType;
use crate::policy::Dispatcher;
use crate::policy::Mlp;
use crate::tournament::Runner;
use rayon::prelude::*;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::path::Path;
use std::sync::Arc;

/// Fans a batch out over a bounded worker pool.
///
/// Configuration errors come back as `Err` before anything is written.
/// Everything after that is per tournament and ends up in the [`Report`].
pub struct Scheduler;

impl Scheduler {
    /// Validates, loads NeuralNet weights if configured, and runs the batch.
    pub fn run(config: &BatchConfig) -> crate::Result<Report> {
        let tags = config.validate()?;
        let dispatcher = match config.weights.as_ref() {
            Some(path) => Dispatcher::new(Arc::new(Mlp::from_file(path)?)),
            None => Dispatcher::default(),
        };
        Self::launch(config, &tags, &dispatcher)
    }

    /// Same as [`Scheduler::run`] with a caller-supplied dispatcher.
    pub fn run_with(config: &BatchConfig, dispatcher: &Dispatcher) -> crate::Result<Report> {
        let tags = config.validate()?;
        Self::launch(config, &tags, dispatcher)
    }

    fn launch(config: &BatchConfig, tags: &[AiType], dispatcher: &Dispatcher) -> crate::Result<Report> {
        let dir = config.output_directory.as_path();
        std::fs::create_dir_all(dir).map_err(|e| {
            Error::InvalidConfiguration(format!("cannot create {}: {}", dir.display(), e))
        })?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.num_processors)
            .build()
            .map_err(|e| Error::InvalidConfiguration(format!("worker pool: {}", e)))?;
        log::info!(
            "[batch] {} tournaments of {} players on {} workers into {}",
            config.num_tournaments(),
            config.num_players,
            config.num_processors,
            dir.display()
        );
        let start = std::time::Instant::now();
        let report = pool.install(|| {
            config
                .seeds
                .par_iter()
                .enumerate()
                .map(|(i, seed)| {
                    let runner = Runner::new(i as u32, *seed, tags.to_vec(), config.hands_per_level)
                        .debug(config.debug);
                    Self::work(&runner, dispatcher, dir)
                })
                .collect::<Vec<_>>()
                .into_iter()
                .collect::<Report>()
        });
        log::info!("[batch] {} in {:?}", report, start.elapsed());
        Ok(report)
    }

    /// Plays and persists one tournament. The worker is not released until
    /// the record is on disk.
    fn work(runner: &Runner, dispatcher: &Dispatcher, dir: &Path) -> Result<u32, (u32, String)> {
        let number = runner.number();
        let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| {
            runner.run(dispatcher).and_then(|record| {
                let path = record.write(dir)?;
                Ok((record, path))
            })
        }));
        let outcome = match outcome {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(payload) => Err(format!("panicked: {}", Self::reason(payload.as_ref()))),
        };
        match outcome {
            Ok((record, path)) => {
                log::info!(
                    "[batch] tournament {} seed {} done in {} hands -> {}",
                    number,
                    runner.seed(),
                    record.num_games(),
                    path.display()
                );
                Ok(number)
            }
            Err(e) => {
                log::warn!("[batch] tournament {} seed {} failed: {}", number, runner.seed(), e);
                Err((number, e))
            }
        }
    }

    fn reason(payload: &(dyn Any + Send)) -> &str {
        payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("unknown cause")
    }
}
