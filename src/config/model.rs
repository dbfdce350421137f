use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{FixtureGuardError, Result};
use crate::registry::{FixtureRegistry, FixtureSpec, LIVE_PAGE};

/// A single `[fixtures."<path>"]` table in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixtureEntry {
    /// Minimum number of issue categories the heuristics must find.
    pub min_violations: usize,

    /// Human-readable note on what the fixture intentionally gets wrong.
    #[serde(default)]
    pub description: String,
}

/// Configuration file model.
///
/// An empty `fixtures` table means "use the built-in registry"; a non-empty
/// table replaces it entirely. `exclude` entries are additive: the live page
/// stays excluded no matter what the file says, so no configuration can make
/// the tool read it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub fixtures: IndexMap<String, FixtureEntry>,

    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// Build the effective fixture registry from this configuration.
    ///
    /// # Errors
    /// Returns a config error for empty fixture paths or for a path that is
    /// both registered and excluded.
    pub fn build_registry(&self) -> Result<FixtureRegistry> {
        self.validate()?;

        if self.fixtures.is_empty() {
            let mut registry = FixtureRegistry::builtin();
            for path in &self.exclude {
                if path != LIVE_PAGE {
                    registry.exclude(path)?;
                }
            }
            return Ok(registry);
        }

        let mut registry = FixtureRegistry::new();
        registry.exclude(LIVE_PAGE)?;
        for path in &self.exclude {
            if path != LIVE_PAGE {
                registry.exclude(path)?;
            }
        }
        for (path, entry) in &self.fixtures {
            registry.register(
                path,
                FixtureSpec::new(entry.min_violations, &entry.description),
            )?;
        }

        Ok(registry)
    }

    fn validate(&self) -> Result<()> {
        for path in self.fixtures.keys() {
            if path.trim().is_empty() {
                return Err(FixtureGuardError::Config(
                    "fixture path cannot be empty".to_string(),
                ));
            }
        }
        for path in &self.exclude {
            if path.trim().is_empty() {
                return Err(FixtureGuardError::Config(
                    "exclude entry cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
