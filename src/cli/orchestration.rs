//! Main workflow orchestration logic
//!
//! Loads configuration and the release catalog, then answers one request:
//! list the known branches, report the latest release, or check a version.
//! Kept apart from `main.rs` so the whole flow can be driven from tests.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::ReleaseCatalog;
use crate::config::{self, OutputFormat};
use crate::domain::Release;
use crate::error::VersionInfoError;
use crate::status::{check_version, StatusReport};

/// Exit code for operator problems: config, catalog, empty catalog
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for bad or missing user input
pub const EXIT_USAGE: i32 = 2;

/// Arguments for the check workflow
///
/// Mirrors the CLI Args without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckWorkflowArgs {
    /// Version string to check
    pub requested: Option<String>,

    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Catalog document, overriding the configured one
    pub catalog_path: Option<PathBuf>,

    /// Force JSON output
    pub json: bool,

    /// List known branches instead of checking a version
    pub list: bool,

    /// Report the latest release instead of checking a version
    pub latest: bool,
}

/// What the workflow produced
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    Report(StatusReport),
    Latest(Release),
    List(Vec<Release>),
}

/// Failures of the workflow, each mapped to an exit code
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("No version given; pass a version such as 1.27.1, or use --list")]
    MissingVersion,

    #[error("Invalid version provided")]
    InvalidVersion(#[source] VersionInfoError),

    #[error(transparent)]
    Failed(VersionInfoError),
}

impl From<VersionInfoError> for WorkflowError {
    fn from(err: VersionInfoError) -> Self {
        if err.is_user_error() {
            WorkflowError::InvalidVersion(err)
        } else {
            WorkflowError::Failed(err)
        }
    }
}

impl WorkflowError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            WorkflowError::MissingVersion | WorkflowError::InvalidVersion(_) => EXIT_USAGE,
            WorkflowError::Failed(_) => EXIT_FAILURE,
        }
    }
}

/// Configuration and catalog, loaded once per run
#[derive(Debug)]
pub struct LoadedWorkflow {
    pub catalog: ReleaseCatalog,
    pub format: OutputFormat,
}

/// Load configuration and the release catalog.
///
/// `--catalog` and `--json` take precedence over the config file.
pub fn load_workflow(args: &CheckWorkflowArgs) -> Result<LoadedWorkflow, WorkflowError> {
    let config = config::load_config(args.config_path.as_deref())?;

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let catalog_path = args
        .catalog_path
        .clone()
        .unwrap_or(config.catalog.path);

    tracing::debug!(catalog = %catalog_path.display(), "loading release catalog");
    let catalog = ReleaseCatalog::from_file(&catalog_path)?;

    Ok(LoadedWorkflow { catalog, format })
}

/// Answer a single request against a loaded catalog.
///
/// `--list` wins over `--latest`, which wins over a version argument.
pub fn run_check_workflow(
    args: &CheckWorkflowArgs,
    loaded: &LoadedWorkflow,
) -> Result<WorkflowOutcome, WorkflowError> {
    let catalog = &loaded.catalog;

    if args.list {
        return Ok(WorkflowOutcome::List(catalog.releases().cloned().collect()));
    }

    if args.latest {
        return Ok(WorkflowOutcome::Latest(catalog.latest_release()?.clone()));
    }

    let requested = args
        .requested
        .as_deref()
        .ok_or(WorkflowError::MissingVersion)?;
    Ok(WorkflowOutcome::Report(check_version(catalog, requested)?))
}
