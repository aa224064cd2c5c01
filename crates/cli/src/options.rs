// crates/cli/src/options.rs
use clap::ValueEnum;
use real_lines_engine::config::normalize_extension;
use serde::{Deserialize, Serialize};

/// 出力フォーマット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ディレクトリ別の字下げ表示と合計
    #[default]
    Table,
    Json,
    Yaml,
}

/// 集計対象の拡張子
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceExt {
    #[value(name = ".c", alias = "c")]
    C,
    #[value(name = ".h", alias = "h")]
    H,
    #[value(name = ".cpp", alias = "cpp")]
    Cpp,
}

impl SourceExt {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::C => ".c",
            Self::H => ".h",
            Self::Cpp => ".cpp",
        }
    }

    /// Extension as stored in the engine filter (no leading dot).
    #[must_use]
    pub fn to_filter_value(self) -> String {
        normalize_extension(self.as_str())
    }
}
