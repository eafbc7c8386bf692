//! User-facing terminal output.
//!
//! - `formatter` - Pure formatting of reports (testable, no I/O)
//! - This module - Printing helpers built on the formatter

use crate::requirement::{Requirement, RequirementStatus};
use crate::version::GoVersion;

pub mod formatter;

pub use formatter::{format_comparison, format_report, ComparisonRow};

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", console::style("ERROR:").red(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", console::style("✓").green(), message);
}

/// Print the outcome of a requirement check.
///
/// Satisfied checks go to stdout; failures are reported as errors.
pub fn display_report(actual: &GoVersion, requirement: &Requirement, status: &RequirementStatus) {
    let report = format_report(actual, requirement, status);
    if status.is_satisfied() {
        display_success(&report);
    } else {
        display_error(&report);
    }
}

/// Print the five predicate results for `left` against `right`.
pub fn display_comparison(left: &GoVersion, right: &GoVersion) {
    println!(
        "{}",
        console::style(format!("Comparing {} with {}", left.short(), right.short())).bold()
    );
    for row in format_comparison(left, right) {
        let mark = if row.result {
            console::style("true").green()
        } else {
            console::style("false").red()
        };
        println!("  {:<20} {}", row.predicate, mark);
    }
}
