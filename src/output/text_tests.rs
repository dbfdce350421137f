use crate::checker::CheckResult;

use super::*;
use crate::output::OutputFormatter;

fn passed(path: &str, found: usize, minimum: usize) -> CheckResult {
    CheckResult::Passed {
        path: path.to_string(),
        found,
        minimum,
        issues: (0..found).map(|i| format!("issue {i}")).collect(),
    }
}

fn warning(path: &str, found: usize, minimum: usize) -> CheckResult {
    CheckResult::Warning {
        path: path.to_string(),
        found,
        minimum,
        issues: Vec::new(),
    }
}

#[test]
fn passed_fixture_line() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let results = vec![passed("page1.html", 2, 2)];

    let output = formatter.format(&results).unwrap();

    assert!(output.contains("✅ PASSED: page1.html"));
    assert!(output.contains("Issues: 2 found (minimum 2)"));
}

#[test]
fn warning_fixture_line() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let results = vec![warning("page2.html", 0, 1)];

    let output = formatter.format(&results).unwrap();

    assert!(output.contains("⚠️ WARNING: page2.html"));
    assert!(output.contains("Issues: 0 found (minimum 1)"));
}

#[test]
fn missing_fixture_line() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let results = vec![CheckResult::Missing {
        path: "page3.html".to_string(),
    }];

    let output = formatter.format(&results).unwrap();

    assert!(output.contains("❌ MISSING: page3.html"));
    assert!(output.contains("not found"));
}

#[test]
fn unreadable_fixture_shows_reason() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let results = vec![CheckResult::Unreadable {
        path: "page4.html".to_string(),
        reason: "permission denied".to_string(),
    }];

    let output = formatter.format(&results).unwrap();

    assert!(output.contains("❌ UNREADABLE: page4.html"));
    assert!(output.contains("permission denied"));
}

#[test]
fn summary_counts_all_statuses() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let results = vec![
        passed("page1.html", 2, 2),
        warning("page2.html", 0, 1),
        CheckResult::Missing {
            path: "page3.html".to_string(),
        },
    ];

    let output = formatter.format(&results).unwrap();

    assert!(output.contains("Summary: 3 fixtures checked, 1 passed, 1 warnings, 1 failed"));
}

#[test]
fn results_keep_registry_order() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let results = vec![
        warning("b.html", 0, 1),
        passed("a.html", 1, 1),
    ];

    let output = formatter.format(&results).unwrap();

    let b_pos = output.find("b.html").unwrap();
    let a_pos = output.find("a.html").unwrap();
    assert!(b_pos < a_pos);
}

#[test]
fn verbose_lists_issue_labels() {
    let formatter = TextFormatter::with_verbose(ColorMode::Never, 1);
    let results = vec![passed("page1.html", 2, 2)];

    let output = formatter.format(&results).unwrap();

    assert!(output.contains("- issue 0"));
    assert!(output.contains("- issue 1"));
}

#[test]
fn non_verbose_hides_issue_labels() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let results = vec![passed("page1.html", 2, 2)];

    let output = formatter.format(&results).unwrap();

    assert!(!output.contains("- issue 0"));
}

#[test]
fn always_mode_emits_ansi_codes() {
    let formatter = TextFormatter::new(ColorMode::Always);
    let results = vec![passed("page1.html", 2, 2)];

    let output = formatter.format(&results).unwrap();

    assert!(output.contains("\x1b[32m"));
}

#[test]
fn never_mode_emits_no_ansi_codes() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let results = vec![
        passed("page1.html", 2, 2),
        warning("page2.html", 0, 1),
    ];

    let output = formatter.format(&results).unwrap();

    assert!(!output.contains("\x1b["));
}
