use std::path::Path;

use crate::error::{FixtureGuardError, Result};

use super::Config;

pub const LOCAL_CONFIG_NAME: &str = ".fixture-guard.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// A missing default config file is not an error; the built-in fixture
    /// table applies.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or invalid TOML.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fs: RealFileSystem,
        }
    }
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| FixtureGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(toml::from_str(&content)?)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        let path = Path::new(LOCAL_CONFIG_NAME);
        if !self.fs.exists(path) {
            return Ok(Config::default());
        }
        self.parse(path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !self.fs.exists(path) {
            return Err(FixtureGuardError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        self.parse(path)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
