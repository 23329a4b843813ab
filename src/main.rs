use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use version_info::cli::{self, CheckWorkflowArgs};
use version_info::ui;

#[derive(clap::Parser)]
#[command(
    name = "version-info",
    about = "Check whether a release is up to date, outdated or obsolete"
)]
struct Args {
    #[arg(value_name = "VERSION", help = "Version to check, e.g. 1.27.1 or 1.27")]
    requested: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Release catalog JSON file (overrides config)")]
    catalog: Option<PathBuf>,

    #[arg(long, help = "Print results as JSON")]
    json: bool,

    #[arg(long, help = "List known branches and their latest release")]
    list: bool,

    #[arg(long, help = "Print the most recent release and exit")]
    latest: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let workflow_args = CheckWorkflowArgs {
        requested: args.requested,
        config_path: args.config,
        catalog_path: args.catalog,
        json: args.json,
        list: args.list,
        latest: args.latest,
    };

    let loaded = match cli::load_workflow(&workflow_args) {
        Ok(loaded) => loaded,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    };
    for warning in loaded.catalog.warnings() {
        ui::display_catalog_warning(warning);
    }

    match cli::run_check_workflow(&workflow_args, &loaded) {
        Ok(outcome) => ui::print_outcome(&outcome, loaded.format),
        Err(e) => {
            ui::display_error(&e.to_string());
            if let Some(source) = std::error::Error::source(&e) {
                tracing::debug!(error = %source, "request rejected");
            }
            std::process::exit(e.exit_code());
        }
    }
}
