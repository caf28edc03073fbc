//! Install loop for external resources (plugins and skill bundles).
//!
//! One failing resource never blocks the rest: each spec gets exactly one
//! [`InstallOutcome`], accumulated into a [`RunSummary`] for the final
//! report. The summary carries no control-flow significance and the process
//! exits 0 even when some outcomes are `Failed`.

use crate::registrar::{Registrar, RegistrationError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Plugin,
    SkillBundle,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Plugin => "plugin",
            ResourceKind::SkillBundle => "skill bundle",
        }
    }
}

/// One installable unit and where to find it: a marketplace for plugins, a
/// bundle identifier for skill bundles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSpec {
    pub name: String,
    pub source: String,
    pub kind: ResourceKind,
}

impl ResourceSpec {
    pub fn plugin(name: &str, marketplace: &str) -> Self {
        Self {
            name: name.to_string(),
            source: marketplace.to_string(),
            kind: ResourceKind::Plugin,
        }
    }

    pub fn skill_bundle(name: &str, bundle: &str) -> Self {
        Self {
            name: name.to_string(),
            source: bundle.to_string(),
            kind: ResourceKind::SkillBundle,
        }
    }

    /// The command an operator can run by hand to retry this one resource.
    pub fn retry_hint(&self) -> String {
        match self.kind {
            ResourceKind::Plugin => format!(
                "claude plugin install {}@{} --scope project",
                self.name, self.source
            ),
            ResourceKind::SkillBundle => format!(
                "npx --yes skills add {} --agent claude-code --skill '*' -y",
                self.source
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum InstallOutcome {
    Installed,
    AlreadyPresent,
    Failed(String),
}

impl InstallOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, InstallOutcome::Failed(_))
    }
}

// ---------------------------------------------------------------------------
// Default resource lists
// ---------------------------------------------------------------------------

/// Plugins registered through the assistant CLI, in install order.
pub fn default_plugins() -> Vec<ResourceSpec> {
    vec![
        ResourceSpec::plugin("code-reviewer", "primer-marketplace"),
        ResourceSpec::plugin("conventions", "primer-marketplace"),
    ]
}

/// Skill bundles fetched through the skills CLI, in install order.
pub fn default_skill_bundles() -> Vec<ResourceSpec> {
    vec![ResourceSpec::skill_bundle(
        "agent-skills",
        "vercel-labs/agent-skills",
    )]
}

// ---------------------------------------------------------------------------
// Install loop
// ---------------------------------------------------------------------------

/// Attempt one registration and classify the result.
pub fn install_resource(spec: &ResourceSpec, registrar: &dyn Registrar) -> InstallOutcome {
    match registrar.register(spec) {
        Ok(()) => InstallOutcome::Installed,
        Err(RegistrationError::AlreadyInstalled) => InstallOutcome::AlreadyPresent,
        Err(RegistrationError::Failed(msg)) => InstallOutcome::Failed(msg),
    }
}

/// Ordered per-resource outcomes for the final report.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub items: Vec<SummaryItem>,
}

#[derive(Debug, Serialize)]
pub struct SummaryItem {
    #[serde(flatten)]
    pub spec: ResourceSpec,
    #[serde(flatten)]
    pub outcome: InstallOutcome,
}

impl RunSummary {
    pub fn push(&mut self, spec: ResourceSpec, outcome: InstallOutcome) {
        self.items.push(SummaryItem { spec, outcome });
    }

    pub fn installed(&self) -> usize {
        self.count(|o| matches!(o, InstallOutcome::Installed))
    }

    pub fn already_present(&self) -> usize {
        self.count(|o| matches!(o, InstallOutcome::AlreadyPresent))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| o.is_failed())
    }

    pub fn failures(&self) -> impl Iterator<Item = &SummaryItem> {
        self.items.iter().filter(|i| i.outcome.is_failed())
    }

    fn count(&self, pred: impl Fn(&InstallOutcome) -> bool) -> usize {
        self.items.iter().filter(|i| pred(&i.outcome)).count()
    }
}
