//! The bootstrap run: preflight → materialize → install → summary.

use anyhow::Context;
use primer_core::{
    cache::{self, HomeCacheResolver},
    fetch::{LocalFetcher, RemoteFetcher, SourceFetcher},
    installer::{self, InstallOutcome, ResourceKind, ResourceSpec, RunSummary},
    manifest::{self, MaterializeAction},
    paths,
    preflight::{self, OptionalTool},
    registrar::{CliRegistrar, Registrar},
};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::output;

/// Tools the install stage shells out to. Fatal when absent.
const REQUIRED_TOOLS: &[&str] = &["claude"];

const OPTIONAL_TOOLS: &[OptionalTool] = &[OptionalTool {
    name: "npx",
    hint: "https://nodejs.org (ships with npm)",
}];

pub struct SetupOptions {
    pub templates: Option<PathBuf>,
    pub base_url: String,
    pub yes: bool,
    pub skip_install: bool,
    pub json: bool,
}

pub fn run(root: &Path, opts: &SetupOptions) -> anyhow::Result<()> {
    println!("Bootstrapping assistant scaffolding in: {}", root.display());

    // 1. Preflight — a missing required tool halts before anything is written
    if !opts.skip_install {
        preflight::check_required(REQUIRED_TOOLS)?;
        for tool in preflight::check_optional(OPTIONAL_TOOLS) {
            println!(
                "  warning: '{}' not found; get it from {}",
                tool.name, tool.hint
            );
        }
    }
    if let Some(warning) = preflight::check_api_key(|var| std::env::var(var).ok()) {
        println!("  warning: {warning}");
    }

    if !opts.yes {
        let existing = preflight::existing_overwrite_targets(root, &[paths::CLAUDE_DIR]);
        if !existing.is_empty() && !confirm_overwrite(&existing)? {
            // Operator declined: clean abort, not an error.
            println!("Aborted.");
            return Ok(());
        }
    }

    // 2. Materialize the template manifest, in order, one progress line each
    let fetcher: Box<dyn SourceFetcher> = match &opts.templates {
        Some(dir) => Box::new(LocalFetcher::new(dir.clone())),
        None => Box::new(RemoteFetcher::new(opts.base_url.clone())),
    };
    println!("\nMaterializing templates:");
    for entry in manifest::default_manifest() {
        let action = manifest::materialize_entry(root, entry, fetcher.as_ref())
            .with_context(|| format!("materializing {}", entry.dest))?;
        match action {
            MaterializeAction::Created => println!("  created: {}", entry.dest),
            MaterializeAction::Updated => println!("  updated: {}", entry.dest),
            MaterializeAction::SkippedExisting => {
                println!("  skipped: {} (already exists)", entry.dest)
            }
        }
    }

    if opts.skip_install {
        println!("\nSkipped plugin and skill-bundle installation (--skip-install).");
        return Ok(());
    }

    // 3. Install external resources; individual failures never stop the loop
    let registrar = CliRegistrar::new(root);
    let resolver = HomeCacheResolver;
    let mut summary = RunSummary::default();

    println!("\nInstalling plugins:");
    install_list(
        root,
        installer::default_plugins(),
        &registrar,
        &resolver,
        &mut summary,
    );

    println!("\nInstalling skill bundles:");
    install_list(
        root,
        installer::default_skill_bundles(),
        &registrar,
        &resolver,
        &mut summary,
    );

    // 4. Final report
    print_summary(&summary, opts.json)?;
    Ok(())
}

fn install_list(
    root: &Path,
    specs: Vec<ResourceSpec>,
    registrar: &dyn Registrar,
    resolver: &HomeCacheResolver,
    summary: &mut RunSummary,
) {
    for spec in specs {
        let outcome = installer::install_resource(&spec, registrar);
        match &outcome {
            InstallOutcome::Installed => println!("  installed: {}", spec.name),
            InstallOutcome::AlreadyPresent => {
                println!("  exists:    {} (already installed)", spec.name)
            }
            InstallOutcome::Failed(msg) => {
                println!("  failed:    {}: {msg}", spec.name);
                println!("             retry with: {}", spec.retry_hint());
            }
        }

        // Visibility convenience only; never changes the outcome.
        if spec.kind == ResourceKind::Plugin && !outcome.is_failed() {
            if let Err(e) = cache::mirror_plugin(root, &spec, resolver) {
                debug!("plugin cache mirror for '{}' failed: {e}", spec.name);
            }
        }

        summary.push(spec, outcome);
    }
}

fn print_summary(summary: &RunSummary, json: bool) -> anyhow::Result<()> {
    if json {
        return output::print_json(summary);
    }

    println!("\nSummary:");
    let rows = summary
        .items
        .iter()
        .map(|item| {
            let status = match &item.outcome {
                InstallOutcome::Installed => "installed",
                InstallOutcome::AlreadyPresent => "already present",
                InstallOutcome::Failed(_) => "failed",
            };
            vec![
                item.spec.name.clone(),
                item.spec.kind.label().to_string(),
                status.to_string(),
            ]
        })
        .collect();
    output::print_table(&["RESOURCE", "KIND", "STATUS"], rows);
    println!(
        "\nInstalled: {}  Already present: {}  Failed: {}",
        summary.installed(),
        summary.already_present(),
        summary.failed()
    );
    Ok(())
}

fn confirm_overwrite(existing: &[PathBuf]) -> anyhow::Result<bool> {
    println!("\nExisting scaffolding found:");
    for path in existing {
        println!("  {}", path.display());
    }
    print!("Overwrite unprotected files? [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}
