//! Config location, version discovery, and format-preserving merge

pub mod locator;
pub mod merger;
pub mod paths;

pub use locator::{Disposition, VersionInfo, VersionSource};
pub use paths::{DEFAULT_VERSION, ProjectPaths};
