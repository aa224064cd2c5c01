use crate::config::{FilterConfig, WalkOptions};
use crate::error::{EngineError, Result};
use crossbeam_channel::Sender;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// A source file accepted by the filters, with its path relative to the root it was found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub rel_parts: Vec<String>,
}

impl SourceFile {
    /// Build from a path found under `root`. A file given directly as a root is
    /// relative to its own parent, so its parts are just the file name.
    #[must_use]
    pub fn new(path: PathBuf, root: &Path) -> Self {
        let rel = path
            .strip_prefix(root)
            .ok()
            .filter(|rel| !rel.as_os_str().is_empty())
            .or_else(|| path.file_name().map(Path::new))
            .unwrap_or(path.as_path());
        let rel_parts = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Self { path, rel_parts }
    }
}

/// Items sent from the walker: accepted files, or errors met while walking.
pub type WalkItem = Result<SourceFile>;

/// Parallel recursive directory walk.
///
/// Every accepted file is sent on `tx`; errors while reading directories are
/// sent as well so the caller decides whether they are fatal.
///
/// # Errors
///
/// Returns an error if a root does not exist or cannot be resolved.
pub fn walk_parallel(
    options: &WalkOptions,
    filters: &FilterConfig,
    tx: &Sender<WalkItem>,
) -> Result<()> {
    for given in &options.roots {
        // Exclusions are matched against the resolved path, so `.` inside an
        // excluded directory is excluded too.
        let root = given
            .canonicalize()
            .map_err(|_| EngineError::PathNotFound(given.clone()))?;
        if root.is_file() {
            // Files named directly skip the walk but still go through the filters.
            if filters.accepts(&root) {
                let _ = tx.send(Ok(SourceFile::new(root.clone(), &root)));
            }
            continue;
        }
        walk_root(&root, options, filters, tx);
    }
    Ok(())
}

fn walk_root(root: &Path, options: &WalkOptions, filters: &FilterConfig, tx: &Sender<WalkItem>) {
    let mut builder = WalkBuilder::new(root);
    builder
        .threads(options.threads)
        .hidden(!options.hidden)
        .parents(options.git_ignore)
        .ignore(options.git_ignore)
        .git_ignore(options.git_ignore)
        .git_global(options.git_ignore)
        .git_exclude(options.git_ignore)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    // Prune excluded directories early; files are re-checked below.
    let prune = filters.clone();
    builder.filter_entry(move |entry| {
        !(entry.file_type().is_some_and(|ft| ft.is_dir()) && prune.is_excluded(entry.path()))
    });

    let walker = builder.build_parallel();
    walker.run(|| {
        let tx = tx.clone();
        let filters = filters.clone();
        let root = root.to_path_buf();
        Box::new(move |entry| {
            match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                    if is_file && filters.accepts(entry.path()) {
                        log::debug!("found {}", entry.path().display());
                        let file = SourceFile::new(entry.into_path(), &root);
                        if tx.send(Ok(file)).is_err() {
                            return ignore::WalkState::Quit;
                        }
                    }
                }
                Err(err) => {
                    if tx.send(Err(EngineError::Walk(err))).is_err() {
                        return ignore::WalkState::Quit;
                    }
                }
            }
            ignore::WalkState::Continue
        })
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn collect(options: &WalkOptions, filters: &FilterConfig) -> Vec<SourceFile> {
        let (tx, rx) = crossbeam_channel::unbounded();
        walk_parallel(options, filters, &tx).unwrap();
        drop(tx);
        let mut files: Vec<_> = rx.into_iter().map(|item| item.unwrap()).collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));
        files
    }

    #[test]
    fn test_source_file_rel_parts() {
        let root = Path::new("/work/proj");
        let f = SourceFile::new(PathBuf::from("/work/proj/src/net/sock.c"), root);
        assert_eq!(f.rel_parts, vec!["src", "net", "sock.c"]);

        let single = Path::new("/work/proj/main.c");
        let f = SourceFile::new(single.to_path_buf(), single);
        assert_eq!(f.rel_parts, vec!["main.c"]);
    }

    #[test]
    fn test_walk_filters_and_relative_parts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/sub")).unwrap();
        fs::create_dir_all(root.join("auto_gen")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("main.c"), "int x;\n").unwrap();
        fs::write(root.join("src/sub/a.cpp"), "int y;\n").unwrap();
        fs::write(root.join("src/readme.md"), "# doc\n").unwrap();
        fs::write(root.join("auto_gen/gen.h"), "int z;\n").unwrap();
        fs::write(root.join(".hidden/h.c"), "int h;\n").unwrap();

        let options = WalkOptions {
            roots: vec![root.to_path_buf()],
            ..WalkOptions::default()
        };
        let filters = FilterConfig {
            exclude_components: vec!["auto_gen".to_string()],
            ..FilterConfig::default()
        };

        let parts: Vec<_> = collect(&options, &filters)
            .into_iter()
            .map(|f| f.rel_parts.join("/"))
            .collect();
        assert_eq!(parts, vec![".hidden/h.c", "main.c", "src/sub/a.cpp"]);
    }

    #[test]
    fn test_walk_skips_hidden_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".cache")).unwrap();
        fs::write(dir.path().join(".cache/x.c"), "int x;\n").unwrap();
        fs::write(dir.path().join("y.c"), "int y;\n").unwrap();

        let options = WalkOptions {
            roots: vec![dir.path().to_path_buf()],
            hidden: false,
            ..WalkOptions::default()
        };
        let files = collect(&options, &FilterConfig::default());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].rel_parts, vec!["y.c"]);
    }

    #[test]
    fn test_single_file_root_respects_extension() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("main.c");
        fs::write(&file, "int x;\n").unwrap();

        let options = WalkOptions {
            roots: vec![file.clone()],
            ..WalkOptions::default()
        };
        let files = collect(&options, &FilterConfig::default());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].rel_parts, vec!["main.c"]);

        let only_headers = FilterConfig {
            extensions: vec!["h".to_string()],
            ..FilterConfig::default()
        };
        assert!(collect(&options, &only_headers).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_exclusion_sees_resolved_root() {
        let dir = tempfile::tempdir().unwrap();
        let generated = dir.path().join("auto_gen");
        fs::create_dir_all(&generated).unwrap();
        fs::write(generated.join("gen.c"), "int g;\n").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&generated, &link).unwrap();

        let filters = FilterConfig {
            exclude_components: vec!["auto_gen".to_string()],
            ..FilterConfig::default()
        };
        // `link` resolves into `auto_gen`, so both the directory and the file are excluded.
        for root in [link.clone(), link.join("gen.c")] {
            let options = WalkOptions {
                roots: vec![root],
                ..WalkOptions::default()
            };
            assert!(collect(&options, &filters).is_empty());
        }

        let options = WalkOptions {
            roots: vec![link],
            ..WalkOptions::default()
        };
        let files = collect(&options, &FilterConfig::default());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].rel_parts, vec!["gen.c"]);
        assert!(files[0].path.starts_with(generated.canonicalize().unwrap()));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let (tx, _rx) = crossbeam_channel::unbounded();
        let options = WalkOptions {
            roots: vec![PathBuf::from("/no/such/dir/anywhere")],
            ..WalkOptions::default()
        };
        let err = walk_parallel(&options, &FilterConfig::default(), &tx).unwrap_err();
        assert!(matches!(err, EngineError::PathNotFound(_)));
    }
}
