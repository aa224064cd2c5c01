use serde::{Deserialize, Serialize};

/// Pure analysis result, independent of file system metadata.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Number of physical lines.
    pub lines: usize,
    /// Lines holding code outside comments.
    pub real_lines: usize,
    /// The input ended inside an unterminated block comment.
    pub ends_in_block_comment: bool,
}

impl AnalysisResult {
    /// Creates a new default `AnalysisResult`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
