use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Destination layout constants
// ---------------------------------------------------------------------------

pub const CLAUDE_DIR: &str = ".claude";
pub const CLAUDE_MD: &str = "CLAUDE.md";
pub const SETTINGS_FILE: &str = ".claude/settings.json";
pub const LOCAL_SETTINGS_FILE: &str = ".claude/settings.local.json";
pub const AGENTS_DIR: &str = ".claude/agents";
pub const COMMANDS_DIR: &str = ".claude/commands";
pub const SKILLS_DIR: &str = ".claude/skills";
pub const PLUGINS_DIR: &str = ".claude/plugins";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn claude_dir(root: &Path) -> PathBuf {
    root.join(CLAUDE_DIR)
}

pub fn claude_md_path(root: &Path) -> PathBuf {
    root.join(CLAUDE_MD)
}

pub fn settings_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_FILE)
}

pub fn skill_doc_path(root: &Path, skill: &str) -> PathBuf {
    root.join(SKILLS_DIR).join(skill).join("SKILL.md")
}

/// Per-plugin directory populated from the local plugin cache after install.
pub fn plugin_dir(root: &Path, plugin: &str) -> PathBuf {
    root.join(PLUGINS_DIR).join(plugin)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
