mod fixture;
mod heuristics;
mod result;

pub use fixture::FixtureChecker;
pub use heuristics::count_issues;
pub use result::CheckResult;

use crate::registry::FixtureSpec;

pub trait Checker {
    /// Check a single registered fixture.
    ///
    /// - `path`: Fixture path relative to the fixture root
    /// - `spec`: Registered minimum violation count and description
    fn check(&self, path: &str, spec: &FixtureSpec) -> CheckResult;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
