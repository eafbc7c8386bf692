pub mod cli;
pub mod config;
pub mod error;
pub mod requirement;
pub mod toolchain;
pub mod ui;
pub mod version;

pub use error::{ReqverError, Result};
pub use requirement::{Requirement, RequirementStatus};
pub use toolchain::{current_version, VersionSource};
pub use version::GoVersion;
