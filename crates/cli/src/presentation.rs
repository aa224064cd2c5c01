// crates/cli/src/presentation.rs
use std::fmt::Write;

use real_lines_engine::aggregate::{DirectoryTotal, Hierarchy};
use real_lines_engine::stats::FileStats;
use serde::Serialize;

use crate::error::Result;
use crate::options::OutputFormat;

#[derive(Serialize)]
struct Report<'a> {
    directories: &'a [DirectoryTotal],
    files: &'a [FileStats],
    total: usize,
}

/// 集計結果を指定フォーマットの文字列にする
///
/// # Errors
///
/// Returns an error if JSON or YAML serialization fails.
pub fn render(stats: &[FileStats], hierarchy: &Hierarchy, format: OutputFormat) -> Result<String> {
    let report = Report {
        directories: &hierarchy.directories,
        files: stats,
        total: hierarchy.total,
    };
    match format {
        OutputFormat::Table => Ok(render_table(hierarchy)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&report)?),
    }
}

/// One `name/: count` line per directory, indented two spaces per level.
fn render_table(hierarchy: &Hierarchy) -> String {
    let mut out = String::new();
    for dir in &hierarchy.directories {
        let indent = "  ".repeat(dir.level().saturating_sub(1));
        let _ = writeln!(out, "{indent}{}/: {}", dir.name(), dir.real_lines);
    }
    let _ = writeln!(out, "TOTAL: {}", hierarchy.total);
    out
}
