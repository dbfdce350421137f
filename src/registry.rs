use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::{FixtureGuardError, Result};

/// The live, production-facing page. It must stay accessible, so it is never
/// registered and always excluded from checking.
pub const LIVE_PAGE: &str = "a11y-scan.html";

/// What a single registered fixture is expected to contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSpec {
    pub min_violations: usize,
    pub description: String,
}

impl FixtureSpec {
    #[must_use]
    pub fn new(min_violations: usize, description: &str) -> Self {
        Self {
            min_violations,
            description: description.to_string(),
        }
    }
}

/// Registry of fixtures to check, keyed by path relative to the fixture root.
///
/// Fixtures are checked in insertion order. Excluded paths are files that must
/// never be checked: the live page is intentionally accessible and registering
/// it would invert the tool's purpose.
#[derive(Debug, Clone)]
pub struct FixtureRegistry {
    fixtures: IndexMap<String, FixtureSpec>,
    excluded: HashSet<String>,
}

impl FixtureRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fixtures: IndexMap::new(),
            excluded: HashSet::new(),
        }
    }

    /// Register a fixture. Fails if the path is already excluded.
    pub fn register(&mut self, path: &str, spec: FixtureSpec) -> Result<()> {
        if self.excluded.contains(path) {
            return Err(FixtureGuardError::Config(format!(
                "fixture '{path}' is excluded and cannot be registered"
            )));
        }
        self.fixtures.insert(path.to_string(), spec);
        Ok(())
    }

    /// Exclude a path from checking. Fails if the path is already registered.
    pub fn exclude(&mut self, path: &str) -> Result<()> {
        if self.fixtures.contains_key(path) {
            return Err(FixtureGuardError::Config(format!(
                "fixture '{path}' is registered and cannot be excluded"
            )));
        }
        self.excluded.insert(path.to_string());
        Ok(())
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FixtureSpec> {
        self.fixtures.get(path)
    }

    #[must_use]
    pub fn is_excluded(&self, path: &str) -> bool {
        self.excluded.contains(path)
    }

    /// Fixtures in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FixtureSpec)> {
        self.fixtures.iter().map(|(path, spec)| (path.as_str(), spec))
    }

    pub fn excluded_paths(&self) -> impl Iterator<Item = &str> {
        self.excluded.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// The built-in fixture table mirroring the repository's checked-in
    /// fixtures and their known defect counts.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry
            .exclude(LIVE_PAGE)
            .expect("builtin exclusion cannot collide");

        let entries = [
            (
                "page1.html",
                FixtureSpec::new(2, "missing alt text and low-contrast styling"),
            ),
            (
                "page2.html",
                FixtureSpec::new(1, "form inputs without labels"),
            ),
            ("page3.html", FixtureSpec::new(1, "heading level skips")),
            (
                "page4.html",
                FixtureSpec::new(1, "empty links and missing landmarks"),
            ),
            (
                "demo-bad.html",
                FixtureSpec::new(3, "duplicate ids, empty button, missing alt text"),
            ),
            (
                "auth/login.html",
                FixtureSpec::new(1, "checkbox without an associated label"),
            ),
            (
                "blog/post1.html",
                FixtureSpec::new(1, "missing document language"),
            ),
        ];
        for (path, spec) in entries {
            registry
                .register(path, spec)
                .expect("builtin registry cannot collide with exclusions");
        }

        registry
    }
}

impl Default for FixtureRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
