// crates/core/src/language/counter.rs
//! # File Counter
//!
//! Feeds a file's lines, in order, through the [`classify`] scanner while
//! carrying the block-comment state from one line to the next.
//!
//! Per trimmed line:
//!
//! 1. blank: not counted, state untouched
//! 2. starts with `//`: not counted, state untouched (even inside a block comment)
//! 3. starts with `/*`, or a block comment is open: classified
//! 4. anything else: counted without scanning
//!
//! An unterminated block comment at end of input is not an error.

use super::classifier::{BLOCK_COMMENT_OPEN, LINE_COMMENT, classify};
use super::processor_trait::LineProcessor;

/// 実コード行カウンタ (//, /* */) - ネスト非対応
#[derive(Debug, Default, Clone)]
pub struct RealLineCounter {
    in_block_comment: bool,
    real_lines: usize,
}

impl LineProcessor for RealLineCounter {
    fn process_line(&mut self, line: &str) -> usize {
        self.process(line)
    }

    fn reset(&mut self) {
        self.in_block_comment = false;
        self.real_lines = 0;
    }

    fn is_in_block_comment(&self) -> bool {
        self.in_block_comment
    }
}

impl RealLineCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_block_comment: false,
            real_lines: 0,
        }
    }

    /// 行を処理し、実コード行なら 1 を返す
    pub fn process(&mut self, line: &str) -> usize {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(LINE_COMMENT) {
            return 0;
        }

        let has_code = if self.in_block_comment || trimmed.starts_with(BLOCK_COMMENT_OPEN) {
            let classification = classify(trimmed, self.in_block_comment);
            self.in_block_comment = classification.in_block_comment;
            classification.has_code
        } else {
            true
        };

        let n = usize::from(has_code);
        self.real_lines += n;
        n
    }

    /// Real lines counted since creation or the last reset.
    #[must_use]
    pub const fn real_lines(&self) -> usize {
        self.real_lines
    }
}

/// Count the real lines in a sequence of lines (newlines already stripped).
#[must_use]
pub fn count_real_lines<I, S>(lines: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counter = RealLineCounter::new();
    for line in lines {
        counter.process(line.as_ref());
    }
    counter.real_lines()
}
