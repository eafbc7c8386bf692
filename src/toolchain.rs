//! Host Go toolchain access.
//!
//! The version string itself comes from an external collaborator: either the
//! installed `go` binary or an explicitly pinned string. [`VersionSource`] is
//! the seam between that collaborator and [`GoVersion::parse`].

use std::env;
use std::process::Command;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ReqverError, Result};
use crate::version::GoVersion;

/// Environment variable holding an explicit version string, bypassing the go binary
pub const VERSION_ENV: &str = "GOREQVER_GO_VERSION";

/// Environment variable naming the go binary to query
pub const BINARY_ENV: &str = "GOREQVER_GO_BINARY";

/// Binary queried when nothing else is configured
pub const DEFAULT_GO_BINARY: &str = "go";

/// Anything able to report a raw Go version string
pub trait VersionSource {
    /// Returns the raw version string, e.g. `go1.20.3`
    fn version_string(&self) -> Result<String>;

    /// Fetches and parses the version
    fn version(&self) -> Result<GoVersion> {
        let raw = self.version_string()?;
        GoVersion::parse(&raw)
    }
}

/// A fixed, caller-supplied version string; surrounding whitespace is ignored
#[derive(Debug, Clone, PartialEq)]
pub struct PinnedVersion(pub String);

impl VersionSource for PinnedVersion {
    fn version_string(&self) -> Result<String> {
        Ok(self.0.trim().to_string())
    }
}

/// The installed go toolchain, queried through its CLI
#[derive(Debug, Clone, PartialEq)]
pub struct HostToolchain {
    pub go_binary: String,
}

impl HostToolchain {
    pub fn new(go_binary: impl Into<String>) -> Self {
        HostToolchain {
            go_binary: go_binary.into(),
        }
    }

    /// Binary from `GOREQVER_GO_BINARY`, then `configured`, then `go`
    pub fn from_env(configured: Option<&str>) -> Self {
        let go_binary = env::var(BINARY_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| configured.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_GO_BINARY.to_string());
        HostToolchain::new(go_binary)
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(binary = %self.go_binary, ?args, "querying go toolchain");
        let output = Command::new(&self.go_binary)
            .args(args)
            .output()
            .map_err(|e| {
                ReqverError::toolchain(format!("failed to run '{}': {}", self.go_binary, e))
            })?;

        if !output.status.success() {
            return Err(ReqverError::toolchain(format!(
                "'{} {}' exited with {}: {}",
                self.go_binary,
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl VersionSource for HostToolchain {
    fn version_string(&self) -> Result<String> {
        // `go env GOVERSION` is absent on old toolchains, fall back to `go version`
        match self.run(&["env", "GOVERSION"]) {
            Ok(stdout) => {
                if let Some(token) = extract_version_token(&stdout) {
                    return Ok(token.to_string());
                }
                tracing::debug!(stdout = stdout.trim(), "GOVERSION gave no version token");
            }
            Err(e) => tracing::debug!(error = %e, "go env GOVERSION failed"),
        }

        let stdout = self.run(&["version"])?;
        extract_version_token(&stdout)
            .map(str::to_string)
            .ok_or_else(|| {
                ReqverError::toolchain(format!(
                    "no go version found in output: '{}'",
                    stdout.trim()
                ))
            })
    }
}

fn version_token_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bgo\d+\.\d+(?:\.\d+)?").ok())
        .as_ref()
}

/// Extracts the first `go<major>.<minor>[.<patch>]` token from toolchain output.
///
/// Handles both `go1.20.3` and `go version go1.20.3 linux/amd64`. Suffixes such
/// as `rc1` are cut off, so `go1.21rc2` yields `go1.21`.
pub fn extract_version_token(output: &str) -> Option<&str> {
    version_token_regex()?.find(output).map(|m| m.as_str())
}

/// Resolves the source for the running host.
///
/// `GOREQVER_GO_VERSION` wins when set, otherwise the go binary is queried.
pub fn host_source(configured_binary: Option<&str>) -> Box<dyn VersionSource> {
    match env::var(VERSION_ENV) {
        Ok(pinned) if !pinned.trim().is_empty() => {
            tracing::debug!(version = %pinned, "using version from {}", VERSION_ENV);
            Box::new(PinnedVersion(pinned))
        }
        _ => Box::new(HostToolchain::from_env(configured_binary)),
    }
}

/// Parses the version of the host toolchain with default settings
pub fn current_version() -> Result<GoVersion> {
    host_source(None).version()
}

impl GoVersion {
    /// Version of the host go toolchain, see [`current_version`]
    pub fn current() -> Result<GoVersion> {
        current_version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl VersionSource for FailingSource {
        fn version_string(&self) -> Result<String> {
            Err(ReqverError::toolchain("unavailable"))
        }
    }

    #[test]
    fn test_extract_plain_token() {
        assert_eq!(extract_version_token("go1.20.3\n"), Some("go1.20.3"));
        assert_eq!(extract_version_token("go1.18"), Some("go1.18"));
    }

    #[test]
    fn test_extract_from_version_output() {
        assert_eq!(
            extract_version_token("go version go1.22.5 linux/amd64\n"),
            Some("go1.22.5")
        );
    }

    #[test]
    fn test_extract_release_candidate() {
        assert_eq!(
            extract_version_token("go version go1.21rc2 darwin/arm64"),
            Some("go1.21")
        );
    }

    #[test]
    fn test_extract_none() {
        assert_eq!(extract_version_token(""), None);
        assert_eq!(extract_version_token("devel +abc123"), None);
        assert_eq!(extract_version_token("ago1.20"), None);
    }

    #[test]
    fn test_pinned_source() {
        let source = PinnedVersion("go1.19.4".to_string());
        assert_eq!(source.version().unwrap(), GoVersion::new(1, 19, 4));
    }

    #[test]
    fn test_pinned_source_trims_whitespace() {
        let source = PinnedVersion("  go1.20.3\n".to_string());
        assert_eq!(source.version_string().unwrap(), "go1.20.3");
        assert_eq!(source.version().unwrap(), GoVersion::new(1, 20, 3));
    }

    #[test]
    fn test_pinned_source_invalid() {
        let source = PinnedVersion("Hello world".to_string());
        assert!(source.version().unwrap_err().is_format());
    }

    #[test]
    fn test_failing_source_propagates() {
        let err = FailingSource.version().unwrap_err();
        assert!(matches!(err, ReqverError::Toolchain(_)));
    }

    #[test]
    fn test_missing_binary() {
        let toolchain = HostToolchain::new("go-reqver-definitely-missing-binary");
        let err = toolchain.version_string().unwrap_err();
        assert!(err.to_string().contains("go-reqver-definitely-missing-binary"));
    }
}
