// crates/engine/src/lib.rs
use rayon::prelude::*;
use std::path::PathBuf;

pub mod aggregate;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::filesystem::WalkItem;
use crate::stats::{FileStats, RunResult};

/// Run the real-line counting engine.
///
/// Returns a `RunResult` holding the statistics of every counted file, sorted
/// by path, and the files that could not be read.
///
/// # Errors
///
/// Returns an error for invalid configuration or a missing root. In strict
/// mode the first unreadable file or walk error is returned as well; otherwise
/// those are collected in `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    config.validate()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()?;
    log::debug!(
        "counting with {} workers over {} root(s)",
        config.jobs,
        config.walk.roots.len()
    );

    let (tx, rx) = crossbeam_channel::bounded::<WalkItem>(1024);
    let walk_cfg = config.walk.clone();
    let filter_cfg = config.filter.clone();
    let walker = std::thread::spawn(move || {
        crate::filesystem::walk_parallel(&walk_cfg, &filter_cfg, &tx)
    });

    let outcomes: Vec<(PathBuf, Result<FileStats>)> = pool.install(|| {
        rx.into_iter()
            .par_bridge()
            .map(|item| match item {
                Ok(file) => (file.path.clone(), processor::process_file(file)),
                Err(e) => (PathBuf::from("<walk>"), Err(e)),
            })
            .collect()
    });

    walker.join().map_err(|_| EngineError::WalkerPanicked)??;

    let mut result = RunResult::default();
    for (path, outcome) in outcomes {
        match outcome {
            Ok(stats) => result.stats.push(stats),
            Err(err) if config.strict => return Err(err),
            Err(err) => result.errors.push((path, err)),
        }
    }
    result.stats.sort_by(|a, b| a.path.cmp(&b.path));
    result.errors.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(result)
}
