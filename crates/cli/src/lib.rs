// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod presentation;

use std::io::Write;

use args::Args;
use config::Config;
use error::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 引数から設定を組み立て、集計して標準出力へ書き出す
///
/// Unreadable files are logged and skipped unless `--strict` is given.
///
/// # Errors
///
/// Returns an error for invalid arguments, a missing path, a strict-mode file
/// error, or a failure writing the report.
pub fn run(args: &Args) -> Result<()> {
    let config = Config::try_from(args)?;
    let result = real_lines_engine::run(&config)?;

    for (path, err) in &result.errors {
        log::warn!("skipping {}: {err}", path.display());
    }
    log::info!(
        "counted {} file(s), {} skipped",
        result.stats.len(),
        result.errors.len()
    );

    let hierarchy = real_lines_engine::aggregate::aggregate(&result.stats, config.depth);
    let rendered = presentation::render(&result.stats, &hierarchy, args.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
