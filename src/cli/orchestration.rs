//! Main workflow orchestration logic
//!
//! Resolves the version to check, builds the requirement from config and
//! flags, and evaluates it. Printing and exit codes stay in `main.rs`.

use crate::config::Config;
use crate::error::Result;
use crate::requirement::{Requirement, RequirementStatus};
use crate::toolchain::{self, PinnedVersion, VersionSource};
use crate::version::GoVersion;

/// Arguments for the check workflow
///
/// Mirrors the CLI Args in a form that does not depend on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckWorkflowArgs {
    /// Minimum version from the command line, overrides config
    pub minimum: Option<String>,

    /// Maximum version from the command line, overrides config
    pub maximum: Option<String>,

    /// Explicit version string to check instead of querying the host
    pub version_string: Option<String>,
}

/// Result of a completed check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    /// The version that was checked
    pub actual: GoVersion,

    /// The effective requirement after merging flags and config
    pub requirement: Requirement,

    pub status: RequirementStatus,
}

/// Merge command-line bounds over the configured ones.
pub fn effective_requirement(args: &CheckWorkflowArgs, config: &Config) -> Result<Requirement> {
    let mut bounds = config.requirement.clone();
    if let Some(minimum) = &args.minimum {
        bounds.minimum = Some(minimum.clone());
    }
    if let Some(maximum) = &args.maximum {
        bounds.maximum = Some(maximum.clone());
    }
    bounds.to_requirement()
}

/// Resolve the version under test: explicit string, else the host toolchain.
pub fn resolve_version(args: &CheckWorkflowArgs, config: &Config) -> Result<GoVersion> {
    match &args.version_string {
        Some(raw) => PinnedVersion(raw.clone()).version(),
        None => toolchain::host_source(config.toolchain.go_binary.as_deref()).version(),
    }
}

/// Check workflow
///
/// 1. Build the effective requirement (fails fast on malformed bounds)
/// 2. Resolve the version to check
/// 3. Evaluate the requirement
pub fn run_check_workflow(args: &CheckWorkflowArgs, config: &Config) -> Result<CheckResult> {
    let requirement = effective_requirement(args, config)?;
    let actual = resolve_version(args, config)?;
    let status = requirement.check(&actual);

    tracing::debug!(version = %actual.short(), %requirement, ?status, "checked requirement");

    Ok(CheckResult {
        actual,
        requirement,
        status,
    })
}
