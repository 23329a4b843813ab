use crate::error::{Result, VersionInfoError};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// `major.minor` with an optional `.patch`, ASCII digits only
static VERSION_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?P<major>[0-9]+)\.(?P<minor>[0-9]+)(?:\.(?P<patch>[0-9]+))?$").ok()
});

/// Patch component of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Patch {
    /// A concrete patch release
    Release(u32),
    /// The whole branch (`1.27.x`), not one patch release
    Branch,
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Patch::Release(n) => write!(f, "{}", n),
            Patch::Branch => f.write_str("x"),
        }
    }
}

/// A `major.minor.patch` version, where patch may denote a whole branch.
///
/// Values are immutable once built; derive new ones with [`Version::branch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: Patch,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: Patch) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from `"1.27"` or `"1.27.1"`.
    ///
    /// A missing patch segment yields a branch version. Signs, whitespace,
    /// suffixes and a literal `x` patch are rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let Some(caps) = VERSION_RE.as_ref().and_then(|re| re.captures(input)) else {
            return Err(VersionInfoError::invalid_version(input));
        };

        // The regex guarantees digits, so the only failure left is overflow
        let number = |name: &str| -> Result<Option<u32>> {
            caps.name(name)
                .map(|m| m.as_str().parse::<u32>())
                .transpose()
                .map_err(|_| VersionInfoError::invalid_version(input))
        };

        let major = number("major")?.ok_or_else(|| VersionInfoError::invalid_version(input))?;
        let minor = number("minor")?.ok_or_else(|| VersionInfoError::invalid_version(input))?;
        let patch = number("patch")?.map_or(Patch::Branch, Patch::Release);

        Ok(Version::new(major, minor, patch))
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> Patch {
        self.patch
    }

    /// Whether this version denotes a whole branch
    pub fn is_branch(&self) -> bool {
        self.patch == Patch::Branch
    }

    /// The branch this version belongs to (e.g. 1.36.2 -> 1.36.x)
    pub fn branch(&self) -> Self {
        Version {
            patch: Patch::Branch,
            ..*self
        }
    }

    /// Human readable form: `1.27.1`, or `1.27.x` for a branch
    pub fn pretty(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Zero-padded form used as a sort and lookup key.
    ///
    /// Minor and patch are padded to two digits, so lexicographic order
    /// matches numeric order only while both stay below 100.
    pub fn canonical(&self) -> String {
        match self.patch {
            Patch::Release(patch) => format!("{}.{:02}.{:02}", self.major, self.minor, patch),
            Patch::Branch => format!("{}.{:02}", self.major, self.minor),
        }
    }

    /// Source control branch for this version (e.g. REL1_37)
    pub fn git_branch(&self) -> String {
        format!("REL{}_{}", self.major, self.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersionInfoError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
