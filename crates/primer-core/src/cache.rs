//! Plugin cache mirroring.
//!
//! After a plugin registers, the assistant CLI keeps its files in a cache
//! under the user's home directory, keyed by marketplace and plugin name,
//! with one subdirectory per fetched version. Mirroring that version into
//! `.claude/plugins/<name>/` makes the installed files visible inside the
//! project. This is a convenience step: every failure here is non-fatal and
//! leaves the plugin's install outcome untouched.

use crate::error::Result;
use crate::installer::ResourceSpec;
use crate::io;
use crate::paths;
use std::path::{Path, PathBuf};

pub trait CacheResolver {
    /// The cache directory for `(marketplace, name)`, if it exists.
    fn plugin_cache_dir(&self, marketplace: &str, name: &str) -> Option<PathBuf>;
}

/// Resolves the assistant CLI's real cache under `~/.claude/plugins/cache/`.
pub struct HomeCacheResolver;

impl CacheResolver for HomeCacheResolver {
    fn plugin_cache_dir(&self, marketplace: &str, name: &str) -> Option<PathBuf> {
        let dir = home::home_dir()?
            .join(".claude/plugins/cache")
            .join(marketplace)
            .join(name);
        dir.is_dir().then_some(dir)
    }
}

/// Pick the version directory to mirror when the cache holds several.
///
/// Lexicographically last, which prefers the newest-looking version string
/// for the zero-padded and date-stamped schemes the cache uses.
pub fn select_version_dir(candidates: &[String]) -> Option<&str> {
    candidates.iter().max().map(String::as_str)
}

/// Mirror a plugin's cached files into the project tree.
///
/// Returns the populated directory, or `None` when there is nothing to
/// mirror (no cache entry, or an empty one).
pub fn mirror_plugin(
    root: &Path,
    spec: &ResourceSpec,
    resolver: &dyn CacheResolver,
) -> Result<Option<PathBuf>> {
    let Some(cache_dir) = resolver.plugin_cache_dir(&spec.source, &spec.name) else {
        return Ok(None);
    };

    let mut versions = Vec::new();
    for entry in std::fs::read_dir(&cache_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            versions.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    let Some(version) = select_version_dir(&versions) else {
        return Ok(None);
    };

    let dest = paths::plugin_dir(root, &spec.name);
    io::copy_dir_recursive(&cache_dir.join(version), &dest)?;
    Ok(Some(dest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct FixedResolver(Option<PathBuf>);

    impl CacheResolver for FixedResolver {
        fn plugin_cache_dir(&self, _marketplace: &str, _name: &str) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn select_version_picks_lexicographically_last() {
        let candidates = strings(&["1.0.0", "1.2.0", "1.10.0"]);
        // Lexicographic, not semver: "1.2.0" sorts after "1.10.0".
        assert_eq!(select_version_dir(&candidates), Some("1.2.0"));

        let dated = strings(&["2026-01-03", "2026-02-11", "2025-12-30"]);
        assert_eq!(select_version_dir(&dated), Some("2026-02-11"));
    }

    #[test]
    fn select_version_empty_is_none() {
        assert_eq!(select_version_dir(&[]), None);
    }

    #[test]
    fn mirror_copies_single_version() {
        let dir = TempDir::new().unwrap();
        let cache = dir.path().join("cache/primer-marketplace/code-reviewer");
        std::fs::create_dir_all(cache.join("1.0.0/commands")).unwrap();
        std::fs::write(cache.join("1.0.0/plugin.json"), b"{}").unwrap();
        std::fs::write(cache.join("1.0.0/commands/review.md"), b"# Review").unwrap();

        let root = dir.path().join("project");
        let spec = ResourceSpec::plugin("code-reviewer", "primer-marketplace");
        let dest = mirror_plugin(&root, &spec, &FixedResolver(Some(cache)))
            .unwrap()
            .unwrap();

        assert_eq!(dest, root.join(".claude/plugins/code-reviewer"));
        assert!(dest.join("plugin.json").exists());
        assert!(dest.join("commands/review.md").exists());
    }

    #[test]
    fn mirror_prefers_last_version_of_many() {
        let dir = TempDir::new().unwrap();
        let cache = dir.path().join("cache/m/p");
        std::fs::create_dir_all(cache.join("0.9.0")).unwrap();
        std::fs::create_dir_all(cache.join("1.1.0")).unwrap();
        std::fs::write(cache.join("0.9.0/marker"), b"old").unwrap();
        std::fs::write(cache.join("1.1.0/marker"), b"new").unwrap();

        let root = dir.path().join("project");
        let spec = ResourceSpec::plugin("p", "m");
        mirror_plugin(&root, &spec, &FixedResolver(Some(cache))).unwrap();

        let marker = root.join(".claude/plugins/p/marker");
        assert_eq!(std::fs::read_to_string(marker).unwrap(), "new");
    }

    #[test]
    fn mirror_without_cache_entry_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let spec = ResourceSpec::plugin("p", "m");
        let result = mirror_plugin(dir.path(), &spec, &FixedResolver(None)).unwrap();
        assert_eq!(result, None);
        assert!(!dir.path().join(".claude/plugins/p").exists());
    }

    #[test]
    fn mirror_with_empty_cache_dir_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let cache = dir.path().join("cache/m/p");
        std::fs::create_dir_all(&cache).unwrap();

        let spec = ResourceSpec::plugin("p", "m");
        let result = mirror_plugin(dir.path(), &spec, &FixedResolver(Some(cache))).unwrap();
        assert_eq!(result, None);
    }
}
