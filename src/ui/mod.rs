//! User interface module - rendering of results for the terminal.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions and printing helpers
//! - This module - Output selection between text and JSON

use anyhow::Result;
use serde::Serialize;

use crate::cli::WorkflowOutcome;
use crate::config::OutputFormat;
use crate::domain::Release;
use crate::status::StatusReport;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_catalog_warning, display_error, display_status, format_release_line,
    format_status_report,
};

/// Wraps a result under the `mwversioninfo` key, the shape API clients expect
#[derive(Serialize)]
struct ApiResult<'a, T: Serialize> {
    mwversioninfo: &'a T,
}

/// Renders any serializable value as the API-shaped JSON document.
pub fn to_api_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ApiResult {
        mwversioninfo: value,
    })?)
}

/// Prints a status report in the requested format.
pub fn print_status_report(report: &StatusReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => display_status(&format_status_report(report), &report.status),
        OutputFormat::Json => println!("{}", to_api_json(report)?),
    }
    Ok(())
}

/// Prints a single release, e.g. the latest one overall.
pub fn print_release(release: &Release, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", format_release_line(release)),
        OutputFormat::Json => println!("{}", to_api_json(release)?),
    }
    Ok(())
}

/// Prints every known branch with its latest release.
pub fn print_releases(releases: &[Release], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("\x1b[1mKnown branches:\x1b[0m");
            for release in releases {
                println!("  - {}", format_release_line(release));
            }
        }
        OutputFormat::Json => println!("{}", to_api_json(&releases)?),
    }
    Ok(())
}

/// Prints whatever the workflow produced.
pub fn print_outcome(outcome: &WorkflowOutcome, format: OutputFormat) -> Result<()> {
    match outcome {
        WorkflowOutcome::Report(report) => print_status_report(report, format),
        WorkflowOutcome::Latest(release) => print_release(release, format),
        WorkflowOutcome::List(releases) => print_releases(releases, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReleaseCatalog;
    use crate::status::check_version;

    #[test]
    fn test_to_api_json_wraps_result() {
        let catalog = ReleaseCatalog::from_json(
            r#"{"releases": [{"version": "1.27.1", "date": "2016-08-23"}]}"#,
        )
        .unwrap();
        let report = check_version(&catalog, "1.9").unwrap();

        let rendered = to_api_json(&report).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["mwversioninfo"]["status"], "obsolete");
        assert_eq!(json["mwversioninfo"]["latest"], "1.27.1");
    }
}
