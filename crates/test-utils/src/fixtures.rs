//! Definition documents and helpers to put them on disk or in a mock fs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use punch_config::fs::mock::MockFileSystem;

pub const CONFIG_FILE_NAME: &str = "punch_config.toml";
pub const VERSION_FILE_NAME: &str = "punch_version.toml";

pub const SEMVER_CONFIG: &str = r#"
__config_version__ = 1

FILES = [
    "pkg/__init__.py",
    { path = "version.txt", serializer = "{major}.{minor}" },
]

[GLOBALS]
serializer = "{major}.{minor}.{patch}"

[[VERSION]]
name = "major"
type = "integer"

[[VERSION]]
name = "minor"
type = "integer"

[[VERSION]]
name = "patch"
type = "integer"
"#;

pub const SEMVER_VERSION: &str = r#"
major = 1
minor = 5
patch = 0
"#;

pub const EMPTY: &str = "\n";

pub const ILLEGAL_CONFIG: &str = r#"
__config_version__ = 2
"#;

/// Write both documents into `dir` under the default file names.
pub fn write_pair(dir: &Path, config: &str, version: &str) -> io::Result<(PathBuf, PathBuf)> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    let version_path = dir.join(VERSION_FILE_NAME);
    fs::write(&config_path, config)?;
    fs::write(&version_path, version)?;
    Ok((config_path, version_path))
}

/// Same as [`write_pair`] but into a fresh in-memory filesystem.
pub fn mock_pair(config: &str, version: &str) -> (MockFileSystem, PathBuf, PathBuf) {
    let fs = MockFileSystem::new();
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let version_path = PathBuf::from(VERSION_FILE_NAME);
    fs.add_file(&config_path, config);
    fs.add_file(&version_path, version);
    (fs, config_path, version_path)
}
