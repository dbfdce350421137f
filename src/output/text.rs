use std::fmt::Write as FmtWrite;
use std::io::Write as IoWrite;

use crate::checker::CheckResult;
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        let use_colors = Self::should_use_colors(mode);
        Self { use_colors, verbose }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_icon(result: &CheckResult) -> &'static str {
        match result {
            CheckResult::Passed { .. } => "✅",
            CheckResult::Warning { .. } => "⚠️",
            CheckResult::Missing { .. } | CheckResult::Unreadable { .. } => "❌",
        }
    }

    fn colorize(&self, text: &str, result: &CheckResult) -> String {
        if !self.use_colors {
            return text.to_string();
        }

        let color = match result {
            CheckResult::Passed { .. } => ansi::GREEN,
            CheckResult::Warning { .. } => ansi::YELLOW,
            CheckResult::Missing { .. } | CheckResult::Unreadable { .. } => ansi::RED,
        };

        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_result(&self, result: &CheckResult, output: &mut Vec<u8>) {
        let icon = Self::status_icon(result);
        let status_str = match result {
            CheckResult::Passed { .. } => "PASSED",
            CheckResult::Warning { .. } => "WARNING",
            CheckResult::Missing { .. } => "MISSING",
            CheckResult::Unreadable { .. } => "UNREADABLE",
        };
        let colored_status = self.colorize(status_str, result);

        writeln!(output, "{icon} {colored_status}: {}", result.path()).ok();

        match result {
            CheckResult::Passed {
                found, minimum, ..
            }
            | CheckResult::Warning {
                found, minimum, ..
            } => {
                writeln!(output, "   Issues: {found} found (minimum {minimum})").ok();
                if self.verbose >= 1 {
                    for issue in result.issues() {
                        writeln!(output, "     - {issue}").ok();
                    }
                }
            }
            CheckResult::Missing { .. } => {
                writeln!(output, "   Fixture file not found").ok();
            }
            CheckResult::Unreadable { reason, .. } => {
                writeln!(output, "   Reason: {reason}").ok();
            }
        }
    }

    fn format_summary(
        &self,
        total: usize,
        passed: usize,
        warnings: usize,
        failed: usize,
    ) -> String {
        let passed_str = self.colorize_with_color(&passed.to_string(), ansi::GREEN);
        let warnings_str = self.colorize_with_color(&warnings.to_string(), ansi::YELLOW);
        let failed_str = self.colorize_with_color(&failed.to_string(), ansi::RED);

        let mut summary = format!(
            "Summary: {total} fixtures checked, {passed_str} passed, {warnings_str} warnings, {failed_str} failed"
        );

        if warnings > 0 {
            let _ = write!(
                summary,
                "\nNote: warnings mean a fixture's known defects were not all detected; they do not fail the run"
            );
        }

        summary
    }

    fn colorize_with_color(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[CheckResult]) -> Result<String> {
        let mut output = Vec::new();

        // Results stay in registry order: the report reads as a progress log.
        for result in results {
            self.format_result(result, &mut output);
        }

        let (passed, warnings, failed) = results.iter().fold((0, 0, 0), |(p, w, f), r| {
            if r.is_passed() {
                (p + 1, w, f)
            } else if r.is_warning() {
                (p, w + 1, f)
            } else {
                (p, w, f + 1)
            }
        });

        writeln!(output).ok();
        writeln!(
            output,
            "{}",
            self.format_summary(results.len(), passed, warnings, failed)
        )
        .ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
