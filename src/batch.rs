//! Reconstruction of many independent games in parallel.
//!
//! Each game gets its own [`EventReconciler`], so games share no mutable
//! state and need no locking. Work runs on a dedicated Rayon pool; if the
//! pool cannot be built the games are processed sequentially instead.
//! Results always come back in input order.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::InputError;
use crate::event::GameInput;
use crate::reconciler::{EventReconciler, Reconstruction};

/// Read and parse one game input file.
pub fn load_game(path: &Path) -> Result<GameInput, InputError> {
    let contents = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Outcome for one input file.
#[derive(Debug)]
pub struct GameResult {
    pub source: PathBuf,
    pub result: Result<Reconstruction, InputError>,
}

impl GameResult {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

type ProgressFn = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Runs the engine over several games.
pub struct BatchRunner {
    config: Config,
    workers: Option<usize>,
    progress: Option<ProgressFn>,
}

impl BatchRunner {
    /// Runner using the config's rules, engine options and worker count.
    pub fn new(config: Config) -> Self {
        let workers = config.batch.workers;
        Self {
            config,
            workers,
            progress: None,
        }
    }

    /// Override the worker count (`None` = Rayon default).
    pub fn workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    /// Call `callback(completed, total)` after every finished game.
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize, usize) + Send + Sync + 'static,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Reconstruct already loaded games, in input order.
    pub fn reconstruct_all(&self, inputs: &[GameInput]) -> Vec<Reconstruction> {
        let completed = AtomicUsize::new(0);
        self.execute(inputs, |input| {
            let result = EventReconciler::from_config(&self.config).reconstruct(input);
            self.report(&completed, inputs.len());
            result
        })
    }

    /// Load and reconstruct every file; unreadable files do not stop the rest.
    pub fn run_files(&self, paths: &[PathBuf]) -> Vec<GameResult> {
        let completed = AtomicUsize::new(0);
        self.execute(paths, |path| {
            let result = load_game(path)
                .map(|input| EventReconciler::from_config(&self.config).reconstruct(&input));
            if let Err(e) = &result {
                warn!(path = %path.display(), "{}", e);
            }
            self.report(&completed, paths.len());
            GameResult {
                source: path.clone(),
                result,
            }
        })
    }

    fn report(&self, completed: &AtomicUsize, total: usize) {
        let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(callback) = &self.progress {
            callback(done, total);
        }
    }

    fn execute<T, R, F>(&self, items: &[T], job: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync,
    {
        if items.len() <= 1 || self.workers == Some(1) {
            return items.iter().map(&job).collect();
        }

        let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("pbp-game-{}", i));
        if let Some(n) = self.workers {
            builder = builder.num_threads(n);
        }

        let pool = match builder.build() {
            Ok(pool) => pool,
            Err(e) => {
                warn!("Failed to create thread pool: {}. Processing sequentially.", e);
                return items.iter().map(&job).collect();
            }
        };

        debug!(games = items.len(), threads = pool.current_num_threads(), "Parallel batch");
        pool.install(|| items.par_iter().map(&job).collect())
    }
}
