use serde::Serialize;

use crate::checker::CheckResult;
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    results: Vec<FixtureResult>,
}

#[derive(Serialize)]
struct Summary {
    total_fixtures: usize,
    passed: usize,
    warnings: usize,
    failed: usize,
}

#[derive(Serialize)]
struct FixtureResult {
    path: String,
    status: String,
    found: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum: Option<usize>,
    issues: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[CheckResult]) -> Result<String> {
        let (passed, warnings, failed) = results.iter().fold((0, 0, 0), |(p, w, f), r| {
            if r.is_passed() {
                (p + 1, w, f)
            } else if r.is_warning() {
                (p, w + 1, f)
            } else {
                (p, w, f + 1)
            }
        });

        let output = JsonOutput {
            summary: Summary {
                total_fixtures: results.len(),
                passed,
                warnings,
                failed,
            },
            results: results.iter().map(convert_result).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_result(result: &CheckResult) -> FixtureResult {
    let status = match result {
        CheckResult::Passed { .. } => "passed",
        CheckResult::Warning { .. } => "warning",
        CheckResult::Missing { .. } => "missing",
        CheckResult::Unreadable { .. } => "unreadable",
    };
    let reason = match result {
        CheckResult::Unreadable { reason, .. } => Some(reason.clone()),
        _ => None,
    };

    FixtureResult {
        path: result.path().to_string(),
        status: status.to_string(),
        found: result.found(),
        minimum: result.minimum(),
        issues: result.issues().to_vec(),
        reason,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
