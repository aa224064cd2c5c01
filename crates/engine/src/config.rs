use derive_builder::Builder;
use std::path::{Component, Path, PathBuf};

use crate::error::{EngineError, Result};

/// Extensions counted when none are requested explicitly.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["c", "h", "cpp"];

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect()
}

/// Strip a leading dot so `.cpp` and `cpp` name the same extension.
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub roots: Vec<PathBuf>,
    #[builder(default = "1")]
    pub threads: usize,
    /// Descend into hidden files and directories.
    #[builder(default = "true")]
    pub hidden: bool,
    /// Honour `.gitignore` / `.ignore` files.
    #[builder(default)]
    pub git_ignore: bool,
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![],
            threads: 1,
            hidden: true,
            git_ignore: false,
            follow_links: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct FilterConfig {
    /// Extensions without the leading dot; compared case-sensitively.
    #[builder(default = "default_extensions()")]
    pub extensions: Vec<String>,
    /// Path components that exclude any file whose path contains them.
    #[builder(default)]
    pub exclude_components: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_components: vec![],
        }
    }
}

impl FilterConfig {
    #[must_use]
    pub fn allows_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// Whether any component of `path` equals an excluded name.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude_components.is_empty() {
            return false;
        }
        path.components().any(|c| match c {
            Component::Normal(name) => name
                .to_str()
                .is_some_and(|name| self.exclude_components.iter().any(|e| e == name)),
            _ => false,
        })
    }

    #[must_use]
    pub fn accepts(&self, path: &Path) -> bool {
        self.allows_extension(path) && !self.is_excluded(path)
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub filter: FilterConfig,
    /// Directory levels reported below the root; 0 reports the total only.
    #[builder(default)]
    pub depth: usize,
    /// Worker threads used to count files.
    #[builder(default = "num_cpus::get()")]
    pub jobs: usize,
    /// Abort on the first unreadable file instead of skipping it.
    #[builder(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            filter: FilterConfig::default(),
            depth: 0,
            jobs: num_cpus::get(),
            strict: false,
        }
    }
}

impl Config {
    /// Check the configuration before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns an error when no root is given, a root does not exist, or a
    /// thread count is zero.
    pub fn validate(&self) -> Result<()> {
        if self.walk.roots.is_empty() {
            return Err(EngineError::Config("no input path given".to_string()));
        }
        if self.jobs == 0 || self.walk.threads == 0 {
            return Err(EngineError::Config(
                "thread counts must be at least 1".to_string(),
            ));
        }
        if self.filter.extensions.is_empty() {
            return Err(EngineError::Config("no extensions selected".to_string()));
        }
        if let Some(missing) = self.walk.roots.iter().find(|r| !r.exists()) {
            return Err(EngineError::PathNotFound(missing.clone()));
        }
        Ok(())
    }
}
