// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::options::{OutputFormat, SourceExt};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "real_lines",
    version = crate::VERSION,
    about = "C/C++ ソース (.c/.h/.cpp) の実コード行数を集計します",
    long_about = "空行とコメントだけの行を除いた「実コード行」を数えます。\n\
                  ブロックコメント (/* */) は行をまたいで追跡されます。"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 走査するディレクトリ、または単一のソースファイル
    #[arg(value_hint = ValueHint::AnyPath)]
    pub path: PathBuf,

    /// 除外するパス要素（完全一致、複数指定可）
    #[arg(
        short = 'e',
        long = "exclude",
        value_name = "COMPONENT",
        action = ArgAction::Append,
        help_heading = "フィルタ"
    )]
    pub exclude: Vec<String>,

    /// 集計する拡張子（複数指定可、既定: .c .h .cpp）
    #[arg(long, value_enum, action = ArgAction::Append, help_heading = "フィルタ")]
    pub ext: Vec<SourceExt>,

    /// サブディレクトリ別の集計を表示する深さ（0 は合計のみ）
    #[arg(long, default_value_t = 0, help_heading = "出力")]
    pub depth: usize,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// 読み込めないファイルがあれば即座にエラー終了
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// 並列ワーカー数（既定: CPU 数）
    #[arg(short = 'j', long, help_heading = "動作")]
    pub jobs: Option<usize>,

    /// 隠しファイル/ディレクトリを走査しない
    #[arg(long = "no-hidden", help_heading = "走査")]
    pub no_hidden: bool,

    /// .gitignore / .ignore を尊重する
    #[arg(long = "git-ignore", help_heading = "走査")]
    pub git_ignore: bool,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査")]
    pub follow: bool,

    /// 走査する最大深さ
    #[arg(long, help_heading = "走査")]
    pub max_depth: Option<usize>,

    /// ログを詳細化 (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// `-v` の回数に応じたログレベル
    #[must_use]
    pub const fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
