/// Result of checking a single fixture.
///
/// `Passed` and `Warning` carry the heuristic outcome: how many issue
/// categories were found, the registered minimum, and the issue labels.
/// `Missing` and `Unreadable` are the only failing variants; a heuristic
/// count below the minimum is a warning, never a failure. Well-meaning
/// contributors deleting a fixture is the regression this tool exists to
/// catch, so absence is treated more severely than insufficient defects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Passed {
        path: String,
        found: usize,
        minimum: usize,
        issues: Vec<String>,
    },
    Warning {
        path: String,
        found: usize,
        minimum: usize,
        issues: Vec<String>,
    },
    Missing {
        path: String,
    },
    Unreadable {
        path: String,
        reason: String,
    },
}

impl CheckResult {
    // Accessor methods

    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Passed { path, .. }
            | Self::Warning { path, .. }
            | Self::Missing { path, .. }
            | Self::Unreadable { path, .. } => path,
        }
    }

    /// Number of issue categories the heuristics found. Zero for failing
    /// variants, where no content was inspected.
    #[must_use]
    pub const fn found(&self) -> usize {
        match self {
            Self::Passed { found, .. } | Self::Warning { found, .. } => *found,
            Self::Missing { .. } | Self::Unreadable { .. } => 0,
        }
    }

    #[must_use]
    pub const fn minimum(&self) -> Option<usize> {
        match self {
            Self::Passed { minimum, .. } | Self::Warning { minimum, .. } => Some(*minimum),
            Self::Missing { .. } | Self::Unreadable { .. } => None,
        }
    }

    #[must_use]
    pub fn issues(&self) -> &[String] {
        match self {
            Self::Passed { issues, .. } | Self::Warning { issues, .. } => issues,
            Self::Missing { .. } | Self::Unreadable { .. } => &[],
        }
    }

    // Predicate methods

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::Warning { .. })
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    #[must_use]
    pub const fn is_unreadable(&self) -> bool {
        matches!(self, Self::Unreadable { .. })
    }

    /// True for the variants that fail the overall run.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Missing { .. } | Self::Unreadable { .. })
    }
}
