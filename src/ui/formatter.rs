//! Pure formatting functions for UI output.
//!
//! Nothing here prints; callers in `ui` decide where the text goes.

use crate::requirement::{Requirement, RequirementStatus};
use crate::version::GoVersion;

/// One line of a comparison table
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub predicate: &'static str,
    pub result: bool,
}

/// Summarize a requirement check in one line.
///
/// e.g. `go1.20.3 satisfies >= go1.18.0` or
/// `go1.17.0 does not satisfy >= go1.18.0: version is older than required minimum go1.18.0`
pub fn format_report(
    actual: &GoVersion,
    requirement: &Requirement,
    status: &RequirementStatus,
) -> String {
    if status.is_satisfied() {
        format!("{} satisfies {}", actual.short(), requirement)
    } else {
        format!(
            "{} does not satisfy {}: {}",
            actual.short(),
            requirement,
            status
        )
    }
}

/// Evaluate every comparison predicate of `left` against `right`.
pub fn format_comparison(left: &GoVersion, right: &GoVersion) -> Vec<ComparisonRow> {
    let predicates: [(&'static str, fn(&GoVersion, &GoVersion) -> bool); 5] = [
        ("is_higher", GoVersion::is_higher),
        ("is_higher_or_equal", GoVersion::is_higher_or_equal),
        ("is_equal", GoVersion::is_equal),
        ("is_smaller_or_equal", GoVersion::is_smaller_or_equal),
        ("is_smaller", GoVersion::is_smaller),
    ];

    predicates
        .into_iter()
        .map(|(predicate, check)| ComparisonRow {
            predicate,
            result: check(left, right),
        })
        .collect()
}
