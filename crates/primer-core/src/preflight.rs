//! Pre-run environment checks.
//!
//! Required tools halt the run before any file is touched; optional tools and
//! the API-key variable only produce warnings the caller prints.

use crate::error::{PrimerError, Result};
use std::path::{Path, PathBuf};

/// An optional tool together with a hint on where to obtain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalTool {
    pub name: &'static str,
    pub hint: &'static str,
}

/// Environment variable holding the assistant API key. Checked, never required.
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Fail with `MissingDependency` on the first required tool that is not
/// resolvable on `PATH`. Nothing may be materialized after this fails.
pub fn check_required(tools: &[&str]) -> Result<()> {
    for tool in tools {
        if which::which(tool).is_err() {
            return Err(PrimerError::MissingDependency(tool.to_string()));
        }
    }
    Ok(())
}

/// Return the subset of `tools` that is absent from `PATH`.
pub fn check_optional(tools: &[OptionalTool]) -> Vec<OptionalTool> {
    tools
        .iter()
        .copied()
        .filter(|t| which::which(t.name).is_err())
        .collect()
}

/// Return a warning message when the API-key variable is absent.
///
/// The lookup is injected so tests don't depend on the process environment.
pub fn check_api_key(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    match lookup(API_KEY_VAR) {
        Some(v) if !v.is_empty() => None,
        _ => Some(format!(
            "{API_KEY_VAR} is not set; some assistant features may be unavailable"
        )),
    }
}

/// Which of `targets` already exist as directories under `root`.
/// A non-empty result means the operator must confirm before we overwrite.
pub fn existing_overwrite_targets(root: &Path, targets: &[&str]) -> Vec<PathBuf> {
    targets
        .iter()
        .map(|t| root.join(t))
        .filter(|p| p.is_dir())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn check_required_passes_for_empty_list() {
        check_required(&[]).unwrap();
    }

    #[test]
    fn check_required_fails_for_bogus_tool() {
        let err = check_required(&["definitely-not-a-real-tool-7f3a"]).unwrap_err();
        match err {
            PrimerError::MissingDependency(name) => {
                assert_eq!(name, "definitely-not-a-real-tool-7f3a")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn check_optional_reports_missing() {
        let tools = [OptionalTool {
            name: "definitely-not-a-real-tool-7f3a",
            hint: "https://example.com",
        }];
        let missing = check_optional(&tools);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].name, "definitely-not-a-real-tool-7f3a");
    }

    #[test]
    fn check_api_key_warns_when_absent() {
        assert!(check_api_key(|_| None).is_some());
        assert!(check_api_key(|_| Some(String::new())).is_some());
        assert!(check_api_key(|_| Some("sk-test".into())).is_none());
    }

    #[test]
    fn existing_overwrite_targets_only_reports_directories() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".claude")).unwrap();
        std::fs::write(dir.path().join("CLAUDE.md"), b"x").unwrap();

        let existing = existing_overwrite_targets(dir.path(), &[".claude", "CLAUDE.md", ".other"]);
        assert_eq!(existing, vec![dir.path().join(".claude")]);
    }
}
