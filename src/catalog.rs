//! Release catalog: the newest known release of every branch.
//!
//! The catalog is built once from the raw document supplied by the host and
//! never changes afterwards, so a single instance can be shared freely.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{Release, Version};
use crate::error::{Result, VersionInfoError};
use crate::warning::CatalogWarning;

/// Catalog document as supplied by the host
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawCatalog {
    /// Passed through untouched
    #[serde(default)]
    pub beta: serde_json::Value,
    pub releases: Vec<RawRelease>,
}

/// One `{version, date}` entry of the raw document
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawRelease {
    pub version: String,
    pub date: String,
}

/// Known releases keyed by the canonical form of their branch
#[derive(Debug, Clone)]
pub struct ReleaseCatalog {
    releases: BTreeMap<String, Release>,
    beta: serde_json::Value,
    warnings: Vec<CatalogWarning>,
}

impl ReleaseCatalog {
    /// Build a catalog from an already decoded document.
    ///
    /// Every version string must parse; the document is maintained by the
    /// operator, so a bad entry is a load error rather than a user error.
    /// When a branch appears twice the later entry wins.
    pub fn from_raw(raw: RawCatalog) -> Result<Self> {
        let mut releases = BTreeMap::new();
        let mut warnings = Vec::new();

        for entry in raw.releases {
            let version = Version::parse(&entry.version).map_err(|_| {
                VersionInfoError::catalog_load(format!(
                    "release entry has invalid version '{}'",
                    entry.version
                ))
            })?;

            if version.is_branch() {
                warnings.push(CatalogWarning::BranchOnlyRelease {
                    version: entry.version.clone(),
                });
            }

            let release = Release::new(version, entry.date);
            match releases.entry(release.branch_key()) {
                Entry::Occupied(mut slot) => {
                    let replaced = slot.insert(release);
                    warnings.push(CatalogWarning::DuplicateBranch {
                        branch: version.branch().pretty(),
                        replaced: replaced.version.pretty(),
                        kept: version.pretty(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(release);
                }
            }
        }

        debug!(
            branches = releases.len(),
            warnings = warnings.len(),
            "release catalog built"
        );

        Ok(ReleaseCatalog {
            releases,
            beta: raw.beta,
            warnings,
        })
    }

    /// Decode a JSON catalog document and build the catalog from it
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json).map_err(|e| {
            VersionInfoError::catalog_load(format!("invalid catalog document: {}", e))
        })?;
        Self::from_raw(raw)
    }

    /// Read a JSON catalog document from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            VersionInfoError::catalog_load(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// Latest release on the branch of `version`, if the branch is known
    pub fn latest_release_for(&self, version: &Version) -> Option<&Release> {
        let key = version.branch().canonical();
        let found = self.releases.get(&key);
        debug!(branch = %key, found = found.is_some(), "branch lookup");
        found
    }

    /// Release of the greatest branch by canonical key.
    ///
    /// Fails with [`VersionInfoError::EmptyCatalog`] when nothing is known.
    pub fn latest_release(&self) -> Result<&Release> {
        self.releases
            .values()
            .next_back()
            .ok_or(VersionInfoError::EmptyCatalog)
    }

    /// All releases, oldest branch first
    pub fn releases(&self) -> impl Iterator<Item = &Release> {
        self.releases.values()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn beta(&self) -> &serde_json::Value {
        &self.beta
    }

    /// Non-fatal issues found while building
    pub fn warnings(&self) -> &[CatalogWarning] {
        &self.warnings
    }
}
