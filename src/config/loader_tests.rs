use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::*;

/// In-memory filesystem for loader tests.
struct MockFileSystem {
    files: HashMap<PathBuf, String>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found")
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

#[test]
fn load_without_config_file_returns_default() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let config = loader.load().unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_reads_local_config_file() {
    let fs = MockFileSystem::new().with_file(
        LOCAL_CONFIG_NAME,
        r#"
        [fixtures."page9.html"]
        min_violations = 5
        description = "everything wrong"
        "#,
    );
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load().unwrap();

    assert_eq!(config.fixtures["page9.html"].min_violations, 5);
}

#[test]
fn load_from_path_missing_file_is_config_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader.load_from_path(Path::new("missing.toml")).unwrap_err();

    assert!(matches!(err, crate::error::FixtureGuardError::Config(_)));
}

#[test]
fn load_from_path_reads_explicit_file() {
    let fs = MockFileSystem::new().with_file(
        "custom.toml",
        r#"
        exclude = ["live.html"]
        "#,
    );
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load_from_path(Path::new("custom.toml")).unwrap();

    assert_eq!(config.exclude, vec!["live.html".to_string()]);
}

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file(LOCAL_CONFIG_NAME, "fixtures = nonsense");
    let loader = FileConfigLoader::with_fs(fs);

    let err = loader.load().unwrap_err();

    assert!(matches!(err, crate::error::FixtureGuardError::TomlParse(_)));
}

#[test]
fn real_filesystem_loader_reads_temp_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("guard.toml");
    std::fs::write(
        &path,
        r#"
        [fixtures."page1.html"]
        min_violations = 2
        "#,
    )
    .unwrap();

    let loader = FileConfigLoader::new();
    let config = loader.load_from_path(&path).unwrap();

    assert_eq!(config.fixtures.len(), 1);
}
