//! Status of a requested version against the release catalog

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::catalog::ReleaseCatalog;
use crate::domain::Version;
use crate::error::Result;

/// Where a version stands relative to the known releases
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStatus {
    /// The requested version is the newest release of its branch
    UpToDate,
    /// A newer release exists on the same branch
    Outdated(String),
    /// The branch is unknown; carries the newest release overall
    Obsolete(String),
}

impl VersionStatus {
    /// Short status label (`up-to-date`, `outdated`, `obsolete`)
    pub fn label(&self) -> &'static str {
        match self {
            VersionStatus::UpToDate => "up-to-date",
            VersionStatus::Outdated(_) => "outdated",
            VersionStatus::Obsolete(_) => "obsolete",
        }
    }

    /// The version the caller should move to, if any
    pub fn latest(&self) -> Option<&str> {
        match self {
            VersionStatus::UpToDate => None,
            VersionStatus::Outdated(latest) | VersionStatus::Obsolete(latest) => Some(latest),
        }
    }
}

/// Result of checking one version string.
///
/// Serializes as `{"status": ..., "latest": ...}`, `latest` omitted when up
/// to date; `requested` is kept for text output only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub requested: Version,
    pub status: VersionStatus,
}

impl Serialize for StatusReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let latest = self.status.latest();
        let mut map = serializer.serialize_map(Some(if latest.is_some() { 2 } else { 1 }))?;
        map.serialize_entry("status", self.status.label())?;
        if let Some(latest) = latest {
            map.serialize_entry("latest", latest)?;
        }
        map.end()
    }
}

/// Check a version string against the catalog.
///
/// Fails with `InvalidVersion` when the input does not parse, and with
/// `EmptyCatalog` when the branch is unknown and there is nothing to
/// recommend instead.
pub fn check_version(catalog: &ReleaseCatalog, input: &str) -> Result<StatusReport> {
    let requested = Version::parse(input)?;

    let status = match catalog.latest_release_for(&requested) {
        Some(release) if release.version == requested => VersionStatus::UpToDate,
        Some(release) => VersionStatus::Outdated(release.version.pretty()),
        None => VersionStatus::Obsolete(catalog.latest_release()?.version.pretty()),
    };
    debug!(requested = %requested, status = status.label(), "version checked");

    Ok(StatusReport { requested, status })
}
