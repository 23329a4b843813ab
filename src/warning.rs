use std::fmt;

/// Warnings noticed while building a release catalog.
/// These are non-fatal issues that should be reported to the operator.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogWarning {
    /// A later entry for the same branch replaced an earlier one
    DuplicateBranch {
        branch: String,
        replaced: String,
        kept: String,
    },
    /// An entry names a whole branch instead of a concrete release
    BranchOnlyRelease { version: String },
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogWarning::DuplicateBranch {
                branch,
                replaced,
                kept,
            } => write!(
                f,
                "Branch {} listed more than once: '{}' replaced by '{}'",
                branch, replaced, kept
            ),
            CatalogWarning::BranchOnlyRelease { version } => {
                write!(
                    f,
                    "Release '{}' has no patch number; concrete versions on this branch can never be up to date",
                    version
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_branch_display() {
        let warning = CatalogWarning::DuplicateBranch {
            branch: "1.27.x".to_string(),
            replaced: "1.27.0".to_string(),
            kept: "1.27.1".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Branch 1.27.x listed more than once: '1.27.0' replaced by '1.27.1'"
        );
    }

    #[test]
    fn test_branch_only_release_display() {
        let warning = CatalogWarning::BranchOnlyRelease {
            version: "1.28".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Release '1.28' has no patch number; concrete versions on this branch can never be up to date"
        );
    }
}
