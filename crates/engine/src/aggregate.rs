// crates/engine/src/aggregate.rs
//! Per-directory sums of real lines.
//!
//! A file under `a/b/c.c` contributes to the directory keys `["a"]` and
//! `["a", "b"]`, but only as deep as the requested depth. Files sitting
//! directly in the root have no directory key and only count toward the total.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::stats::FileStats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryTotal {
    /// Directory components relative to the scanned root.
    pub path: Vec<String>,
    pub real_lines: usize,
}

impl DirectoryTotal {
    /// 1 for a top-level directory.
    #[must_use]
    pub fn level(&self) -> usize {
        self.path.len()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.path.last().map_or("", String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    /// Sorted by the space-joined directory key.
    pub directories: Vec<DirectoryTotal>,
    pub total: usize,
}

/// Sum real lines per directory, down to `depth` levels below the root.
#[must_use]
pub fn aggregate(stats: &[FileStats], depth: usize) -> Hierarchy {
    let mut counts: HashMap<&[String], usize> = HashMap::new();
    let mut total = 0;

    for file in stats {
        total += file.real_lines;
        let levels = depth.min(file.rel_parts.len().saturating_sub(1));
        for i in 0..levels {
            *counts.entry(&file.rel_parts[..=i]).or_default() += file.real_lines;
        }
    }

    let mut directories: Vec<DirectoryTotal> = counts
        .into_iter()
        .map(|(path, real_lines)| DirectoryTotal {
            path: path.to_vec(),
            real_lines,
        })
        .collect();
    directories.sort_by_cached_key(|d| d.path.join(" "));

    Hierarchy { directories, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(rel: &str, real_lines: usize) -> FileStats {
        let mut stats = FileStats::new(PathBuf::from(rel));
        stats.rel_parts = rel.split('/').map(str::to_string).collect();
        stats.real_lines = real_lines;
        stats
    }

    fn keys(h: &Hierarchy) -> Vec<(String, usize)> {
        h.directories
            .iter()
            .map(|d| (d.path.join("/"), d.real_lines))
            .collect()
    }

    #[test]
    fn test_depth_zero_is_total_only() {
        let stats = [file("main.c", 7), file("auto_gen/generated.c", 1)];
        let h = aggregate(&stats, 0);
        assert!(h.directories.is_empty());
        assert_eq!(h.total, 8);
    }

    #[test]
    fn test_depth_one() {
        let stats = [
            file("main.c", 7),
            file("utils.h", 4),
            file("auto_gen/generated.c", 1),
        ];
        let h = aggregate(&stats, 1);
        assert_eq!(keys(&h), vec![("auto_gen".to_string(), 1)]);
        assert_eq!(h.total, 12);
    }

    #[test]
    fn test_nested_levels_are_cumulative() {
        let stats = [
            file("src/net/sock.c", 10),
            file("src/net/tls/tls.c", 5),
            file("src/main.c", 2),
            file("include/api.h", 3),
        ];
        let h = aggregate(&stats, 2);
        assert_eq!(
            keys(&h),
            vec![
                ("include".to_string(), 3),
                ("src".to_string(), 17),
                ("src/net".to_string(), 15),
            ]
        );
        assert_eq!(h.directories[2].level(), 2);
        assert_eq!(h.directories[2].name(), "net");
    }

    #[test]
    fn test_sort_uses_space_joined_key() {
        // "a b" sorts before "a-b" because ' ' < '-'.
        let stats = [file("a-b/x.c", 1), file("a/b/y.c", 2)];
        let h = aggregate(&stats, 2);
        assert_eq!(
            keys(&h),
            vec![
                ("a".to_string(), 2),
                ("a/b".to_string(), 2),
                ("a-b".to_string(), 1),
            ]
        );
    }
}
