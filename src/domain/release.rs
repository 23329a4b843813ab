use crate::domain::version::Version;
use serde::Serialize;

/// A published release: the newest known version of one branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub version: Version,
    /// Release date as given by the catalog, not interpreted
    pub date: String,
}

impl Release {
    /// Create a new release
    pub fn new(version: Version, date: impl Into<String>) -> Self {
        Release {
            version,
            date: date.into(),
        }
    }

    /// Catalog key of the branch this release belongs to
    pub fn branch_key(&self) -> String {
        self.version.branch().canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::version::Patch;

    #[test]
    fn test_release_new() {
        let release = Release::new(Version::new(1, 27, Patch::Release(1)), "2016-08-23");
        assert_eq!(release.version.pretty(), "1.27.1");
        assert_eq!(release.date, "2016-08-23");
    }

    #[test]
    fn test_release_branch_key() {
        let release = Release::new(Version::new(1, 9, Patch::Release(3)), "d");
        assert_eq!(release.branch_key(), "1.09");
    }

    #[test]
    fn test_release_serializes_version_as_string() {
        let release = Release::new(Version::new(1, 26, Patch::Release(3)), "2016-05-31");
        let json = serde_json::to_value(&release).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"version": "1.26.3", "date": "2016-05-31"})
        );
    }
}
