//! Domain logic - version values and release records

pub mod release;
pub mod version;

pub use release::Release;
pub use version::{Patch, Version};
