use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::registry::FixtureSpec;

use super::heuristics::count_issues;
use super::{CheckResult, Checker};

/// Checks registered fixtures against the files under a fixture root.
///
/// A missing or unreadable file is a hard failure: someone deleted or broke a
/// fixture the external scanner's test suite depends on. A fixture whose
/// heuristics find fewer issues than registered is only a warning, since the
/// heuristics are far weaker than the real scanner.
pub struct FixtureChecker {
    root: PathBuf,
}

impl FixtureChecker {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl Checker for FixtureChecker {
    fn check(&self, path: &str, spec: &FixtureSpec) -> CheckResult {
        let full_path = self.root.join(path);

        let content = match fs::read_to_string(&full_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return CheckResult::Missing {
                    path: path.to_string(),
                };
            }
            Err(e) => {
                return CheckResult::Unreadable {
                    path: path.to_string(),
                    reason: e.to_string(),
                };
            }
        };

        let issues = count_issues(path, &content);
        let found = issues.len();

        if found < spec.min_violations {
            CheckResult::Warning {
                path: path.to_string(),
                found,
                minimum: spec.min_violations,
                issues,
            }
        } else {
            CheckResult::Passed {
                path: path.to_string(),
                found,
                minimum: spec.min_violations,
                issues,
            }
        }
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
