mod cmd;
mod output;
mod root;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "primer",
    about = "Bootstrap AI-assistant scaffolding — project instructions, settings, skills, plugins",
    version
)]
struct Cli {
    /// Target project directory (default: auto-detect from .git/)
    #[arg(long, env = "PRIMER_ROOT")]
    root: Option<PathBuf>,

    /// Materialize templates from a local directory instead of the remote base URL
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Base URL templates are downloaded from
    #[arg(
        long,
        env = "PRIMER_TEMPLATE_BASE_URL",
        default_value = primer_core::fetch::DEFAULT_TEMPLATE_BASE_URL
    )]
    base_url: String,

    /// Proceed without asking before overwriting existing scaffolding
    #[arg(long, short = 'y')]
    yes: bool,

    /// Materialize templates only; skip plugin and skill-bundle installation
    #[arg(long)]
    skip_install: bool,

    /// Output the final summary as JSON
    #[arg(long, short = 'j')]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    let opts = cmd::setup::SetupOptions {
        templates: cli.templates,
        base_url: cli.base_url,
        yes: cli.yes,
        skip_install: cli.skip_install,
        json: cli.json,
    };

    if let Err(e) = cmd::setup::run(&root, &opts) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
