//! Pure formatting functions for UI output.
//!
//! `format_*` functions build strings and are testable; `display_*`
//! functions print them with colour.

use crate::domain::Release;
use crate::status::{StatusReport, VersionStatus};
use crate::warning::CatalogWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Print a status line: green when up to date, yellow otherwise.
pub fn display_status(message: &str, status: &VersionStatus) {
    match status {
        VersionStatus::UpToDate => println!("\x1b[32m✓\x1b[0m {}", message),
        VersionStatus::Outdated(_) | VersionStatus::Obsolete(_) => {
            println!("\x1b[33m→\x1b[0m {}", message)
        }
    }
}

/// Display a catalog warning to the operator.
pub fn display_catalog_warning(warning: &CatalogWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Describe a status report in one line.
///
/// # Example
/// ```ignore
/// "1.27.0 is outdated, latest is 1.27.1"
/// ```
pub fn format_status_report(report: &StatusReport) -> String {
    match &report.status {
        VersionStatus::UpToDate => format!("{} is up-to-date", report.requested),
        VersionStatus::Outdated(latest) => {
            format!("{} is outdated, latest is {}", report.requested, latest)
        }
        VersionStatus::Obsolete(latest) => format!(
            "{} is obsolete, latest release is {}",
            report.requested, latest
        ),
    }
}

/// One line per release: version, date and source branch.
pub fn format_release_line(release: &Release) -> String {
    format!(
        "{} ({}) [{}]",
        release.version,
        release.date,
        release.version.git_branch()
    )
}
