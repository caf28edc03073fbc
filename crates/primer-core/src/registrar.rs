//! Registration of external resources via third-party CLIs.
//!
//! Shelling out is hidden behind the [`Registrar`] trait so the install loop
//! can be exercised with scripted fakes. The real implementation invokes the
//! assistant CLI for plugins and the skills fetcher for skill bundles.

use crate::installer::{ResourceKind, ResourceSpec};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Structured result of a registration attempt.
///
/// `AlreadyInstalled` is a success-equivalent: it is what makes re-running
/// the whole bootstrap safe on a partially set-up project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    AlreadyInstalled,
    Failed(String),
}

pub trait Registrar {
    fn register(&self, spec: &ResourceSpec) -> Result<(), RegistrationError>;
}

/// Substring the assistant CLI emits when a plugin is already registered.
///
/// The CLI gives no structured signal, so classification is pinned to this
/// wording. TODO: switch to the CLI's JSON output once `plugin install`
/// grows a `--json` flag.
const ALREADY_INSTALLED_MARKER: &str = "already installed";

/// Classify a failed invocation's combined output.
pub fn classify_failure(output: &str) -> RegistrationError {
    if output.to_lowercase().contains(ALREADY_INSTALLED_MARKER) {
        RegistrationError::AlreadyInstalled
    } else {
        RegistrationError::Failed(output.trim().to_string())
    }
}

// ---------------------------------------------------------------------------
// CliRegistrar
// ---------------------------------------------------------------------------

/// The real registrar: one subprocess per resource, run in the target project.
pub struct CliRegistrar {
    root: PathBuf,
}

impl CliRegistrar {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn run(&self, bin: &str, args: &[&str]) -> Result<(), RegistrationError> {
        debug!(bin, ?args, "registering external resource");
        let output = Command::new(bin)
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| RegistrationError::Failed(format!("failed to run {bin}: {e}")))?;

        if output.status.success() {
            return Ok(());
        }

        // The CLI reports "already installed" on stderr or stdout depending
        // on version; classify against both.
        let mut combined = String::from_utf8_lossy(&output.stderr).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stdout));
        Err(classify_failure(&combined))
    }
}

impl Registrar for CliRegistrar {
    fn register(&self, spec: &ResourceSpec) -> Result<(), RegistrationError> {
        match spec.kind {
            ResourceKind::Plugin => self.run(
                "claude",
                &[
                    "plugin",
                    "install",
                    &format!("{}@{}", spec.name, spec.source),
                    "--scope",
                    "project",
                ],
            ),
            ResourceKind::SkillBundle => self.run(
                "npx",
                &[
                    "--yes",
                    "skills",
                    "add",
                    &spec.source,
                    "--agent",
                    "claude-code",
                    "--skill",
                    "*",
                    "-y",
                ],
            ),
        }
    }
}
