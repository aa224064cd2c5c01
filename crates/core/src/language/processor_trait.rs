// crates/core/src/language/processor_trait.rs
//! 行処理トレイト
//!
//! ファイルの行を1行ずつ受け取り、実コード行かどうかを判定するプロセッサの
//! 共通インターフェースを提供します。
//!
//! # Example
//!
//! ```rust
//! use real_lines_core::language::LineProcessor;
//!
//! #[derive(Default)]
//! struct NonBlank;
//!
//! impl LineProcessor for NonBlank {
//!     fn process_line(&mut self, line: &str) -> usize {
//!         usize::from(!line.trim().is_empty())
//!     }
//! }
//!
//! let mut p = NonBlank;
//! assert_eq!(p.process_line("int x;"), 1);
//! assert_eq!(p.process_line("   "), 0);
//! ```

/// 行処理トレイト
///
/// 状態（ブロックコメント内かどうか等）はプロセッサ自身が保持し、
/// ファイルの先頭から順に `process_line` を呼び出すことで判定します。
pub trait LineProcessor: Send {
    /// 行を処理し、実コード行なら `1`、それ以外なら `0` を返す
    ///
    /// # Arguments
    ///
    /// * `line` - 処理対象の行（改行を含まない）
    fn process_line(&mut self, line: &str) -> usize;

    /// 処理状態をリセット
    ///
    /// 新しいファイルの処理を開始する前に呼び出します。
    fn reset(&mut self) {
        // Default: no-op. Override if needed.
    }

    /// 現在ブロックコメント内かどうかを返す
    fn is_in_block_comment(&self) -> bool {
        false
    }
}
