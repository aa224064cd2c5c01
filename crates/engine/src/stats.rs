use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::EngineError;

/// Per-file counting result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    pub path: PathBuf,
    /// Path components relative to the scanned root.
    pub rel_parts: Vec<String>,
    pub name: String,
    pub ext: String,
    pub size: u64,
    pub mtime: Option<DateTime<Local>>,
    /// Physical lines.
    pub lines: usize,
    pub real_lines: usize,
    pub ends_in_block_comment: bool,
}

impl FileStats {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = path
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            rel_parts: vec![name.clone()],
            path,
            name,
            ext,
            size: 0,
            mtime: None,
            lines: 0,
            real_lines: 0,
            ends_in_block_comment: false,
        }
    }
}

/// Outcome of one run: counted files plus the files that could not be read.
#[derive(Debug, Default)]
pub struct RunResult {
    pub stats: Vec<FileStats>,
    pub errors: Vec<(PathBuf, EngineError)>,
}

impl RunResult {
    /// Real lines over every counted file; skipped files contribute nothing.
    #[must_use]
    pub fn total_real_lines(&self) -> usize {
        self.stats.iter().map(|s| s.real_lines).sum()
    }
}
