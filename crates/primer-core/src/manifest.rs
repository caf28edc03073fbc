//! The template manifest: the fixed, ordered set of files a bootstrap run
//! must ensure exists in the target project.
//!
//! Entries are processed front to back. A `protected` entry is never
//! overwritten: re-running the tool must not clobber user edits to their
//! project instructions or local settings.

use crate::error::Result;
use crate::fetch::SourceFetcher;
use crate::io;
use crate::paths;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path relative to the template tree (local dir or remote base URL).
    pub source: &'static str,
    /// Path relative to the target project root.
    pub dest: &'static str,
    /// Never overwrite an existing file at `dest`; skip and report instead.
    pub protected: bool,
}

/// What happened to a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializeAction {
    Created,
    Updated,
    SkippedExisting,
}

const fn entry(source: &'static str, dest: &'static str, protected: bool) -> ManifestEntry {
    ManifestEntry {
        source,
        dest,
        protected,
    }
}

/// The fixed manifest, in report order.
///
/// `settings.local.json` carries per-operator permission grants and is
/// treated exactly like the protected project-instructions file.
pub fn default_manifest() -> &'static [ManifestEntry] {
    static MANIFEST: [ManifestEntry; 9] = [
        entry("CLAUDE.md", paths::CLAUDE_MD, true),
        entry("settings.json", paths::SETTINGS_FILE, false),
        entry("settings.local.json", paths::LOCAL_SETTINGS_FILE, true),
        entry("agents/reviewer.md", ".claude/agents/reviewer.md", false),
        entry("commands/review.md", ".claude/commands/review.md", false),
        entry(
            "skills/code-style/SKILL.md",
            ".claude/skills/code-style/SKILL.md",
            false,
        ),
        entry(
            "skills/design-tokens/SKILL.md",
            ".claude/skills/design-tokens/SKILL.md",
            false,
        ),
        entry(
            "skills/supabase-patterns/SKILL.md",
            ".claude/skills/supabase-patterns/SKILL.md",
            false,
        ),
        entry(
            "skills/gemini-api/SKILL.md",
            ".claude/skills/gemini-api/SKILL.md",
            false,
        ),
    ];
    &MANIFEST
}

/// Materialize one entry into `root`.
///
/// Protected entries whose destination already exists are skipped without
/// fetching. Everything else is fetched and atomically written, creating
/// parent directories as needed. Fetch or write failures are fatal to the
/// whole manifest; the caller must not continue with later entries.
pub fn materialize_entry(
    root: &Path,
    entry: &ManifestEntry,
    fetcher: &dyn SourceFetcher,
) -> Result<MaterializeAction> {
    let dest = root.join(entry.dest);
    if entry.protected && dest.exists() {
        return Ok(MaterializeAction::SkippedExisting);
    }
    let existed = dest.exists();
    let bytes = fetcher.fetch(entry.source)?;
    io::atomic_write(&dest, &bytes)?;
    Ok(if existed {
        MaterializeAction::Updated
    } else {
        MaterializeAction::Created
    })
}
