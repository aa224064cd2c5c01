// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use real_lines_engine::config::{
    Config, ConfigBuilder, DEFAULT_EXTENSIONS, FilterConfig, FilterConfigBuilder, WalkOptions,
    WalkOptionsBuilder,
};

impl TryFrom<&Args> for Config {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let jobs = args.jobs.unwrap_or_else(num_cpus::get);

        ConfigBuilder::default()
            .walk(walk_options_from_args(args, jobs)?)
            .filter(filter_config_from_args(args)?)
            .depth(args.depth)
            .jobs(jobs)
            .strict(args.strict)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

fn walk_options_from_args(args: &Args, threads: usize) -> Result<WalkOptions, AppError> {
    WalkOptionsBuilder::default()
        .roots(vec![args.path.clone()])
        .threads(threads)
        .hidden(!args.no_hidden)
        .git_ignore(args.git_ignore)
        .follow_links(args.follow)
        .max_depth(args.max_depth)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

fn filter_config_from_args(args: &Args) -> Result<FilterConfig, AppError> {
    let mut builder = FilterConfigBuilder::default();
    builder.exclude_components(args.exclude.clone());
    // 未指定ならビルダー既定の拡張子
    if !args.ext.is_empty() {
        builder.extensions(
            args.ext
                .iter()
                .map(|e| e.to_filter_value())
                .collect::<Vec<_>>(),
        );
    }
    builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}
