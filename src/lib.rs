pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod status;
pub mod ui;
pub mod warning;

pub use catalog::ReleaseCatalog;
pub use error::{Result, VersionInfoError};
pub use status::{check_version, StatusReport, VersionStatus};
