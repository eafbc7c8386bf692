use crate::error::{ReqverError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Prefix carried by the major component of a Go version string
const GO_PREFIX: &str = "go";

/// Go toolchain version with major, minor, and patch components.
///
/// Components are signed so a negative value can act as an invalidity sentinel.
/// Comparisons only order valid values; see [`GoVersion::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GoVersion {
    pub major: i64,
    pub minor: i64,
    pub patch: i64,
}

impl GoVersion {
    /// Create a new version
    pub const fn new(major: i64, minor: i64, patch: i64) -> Self {
        GoVersion {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from a Go version string (e.g., "go1.20.3" -> GoVersion(1,20,3)).
    ///
    /// The patch component is optional and defaults to 0. A missing `go` prefix is
    /// tolerated. Segments after the third are ignored.
    ///
    /// # Example
    /// ```
    /// use go_reqver::GoVersion;
    ///
    /// assert_eq!(GoVersion::parse("go1.20").unwrap(), GoVersion::new(1, 20, 0));
    /// assert_eq!(GoVersion::parse("go1.20.3").unwrap(), GoVersion::new(1, 20, 3));
    /// assert!(GoVersion::parse("Hello world").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() < 2 {
            return Err(ReqverError::format(format!(
                "Invalid go version: '{}' - expected go<major>.<minor>[.<patch>]",
                input
            )));
        }

        let major_token = parts[0].strip_prefix(GO_PREFIX).unwrap_or(parts[0]);
        let major = parse_component("major", major_token, input)?;
        let minor = parse_component("minor", parts[1], input)?;
        let patch = match parts.get(2) {
            Some(token) => parse_component("patch", token, input)?,
            None => 0,
        };

        let version = GoVersion::new(major, minor, patch);
        tracing::trace!(input, %version, "parsed go version");
        Ok(version)
    }

    /// Bare tag form, e.g. `go1.20.3`
    pub fn short(&self) -> String {
        format!("{}{}.{}.{}", GO_PREFIX, self.major, self.minor, self.patch)
    }

    /// True when no component is negative
    pub fn is_valid(&self) -> bool {
        self.major >= 0 && self.minor >= 0 && self.patch >= 0
    }

    /// Orders two versions by major, then minor, then patch.
    ///
    /// Returns `None` if either operand is invalid; every comparison predicate
    /// is derived from this, so all of them are false for invalid operands.
    pub fn compare(&self, other: &GoVersion) -> Option<Ordering> {
        if !self.is_valid() || !other.is_valid() {
            return None;
        }

        Some(
            self.major
                .cmp(&other.major)
                .then(self.minor.cmp(&other.minor))
                .then(self.patch.cmp(&other.patch)),
        )
    }

    /// Returns true if this version is strictly higher than `other`
    pub fn is_higher(&self, other: &GoVersion) -> bool {
        matches!(self.compare(other), Some(Ordering::Greater))
    }

    /// Returns true if this version is higher than or equal to `other`
    pub fn is_higher_or_equal(&self, other: &GoVersion) -> bool {
        matches!(
            self.compare(other),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    /// Returns true if both versions are valid and identical
    pub fn is_equal(&self, other: &GoVersion) -> bool {
        matches!(self.compare(other), Some(Ordering::Equal))
    }

    /// Returns true if this version is lower than or equal to `other`
    pub fn is_smaller_or_equal(&self, other: &GoVersion) -> bool {
        matches!(self.compare(other), Some(Ordering::Less | Ordering::Equal))
    }

    /// Returns true if this version is strictly lower than `other`
    pub fn is_smaller(&self, other: &GoVersion) -> bool {
        matches!(self.compare(other), Some(Ordering::Less))
    }
}

fn parse_component(name: &str, token: &str, input: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|e| {
        ReqverError::format(format!(
            "Invalid {} version '{}' in '{}': {}",
            name, token, input, e
        ))
    })
}

impl FromStr for GoVersion {
    type Err = ReqverError;

    fn from_str(s: &str) -> Result<Self> {
        GoVersion::parse(s)
    }
}

impl fmt::Display for GoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "go version {}", self.short())
    }
}
