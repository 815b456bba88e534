// src/config/loader.rs

use std::path::{Path, PathBuf};

use crate::config::model::ConfigDefinition;
use crate::config::validate::validate_config_bindings;
use crate::config::version::VersionState;
use crate::errors::{ConfigError, Result};
use crate::fs::{FileSystem, RealFileSystem};

/// Parse a definition file's top-level bindings.
///
/// Empty input, invalid UTF-8 and invalid TOML all yield an empty table; the
/// schema checks then report what is missing.
pub fn parse_bindings(bytes: &[u8]) -> toml::Table {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|text| toml::from_str::<toml::Table>(text).ok())
        .unwrap_or_default()
}

fn read_bindings(fs: &dyn FileSystem, path: &Path) -> Result<toml::Table> {
    let bytes = fs.read(path).map_err(|e| ConfigError::io(path, e))?;
    Ok(parse_bindings(&bytes))
}

/// Load and validate a configuration file together with its version file.
///
/// This is the recommended entry point for the rest of the application.
pub fn load(
    config_path: impl AsRef<Path>,
    version_path: impl AsRef<Path>,
) -> Result<ConfigDefinition> {
    load_with_fs(&RealFileSystem, config_path, version_path)
}

/// Same as [`load`], reading through the given filesystem.
///
/// - Reads and validates the configuration file.
/// - Only if that succeeds, reads the version file.
/// - Checks that every part declared in `VERSION` has a value.
///
/// Nothing is returned unless both files are valid.
pub fn load_with_fs(
    fs: &dyn FileSystem,
    config_path: impl AsRef<Path>,
    version_path: impl AsRef<Path>,
) -> Result<ConfigDefinition> {
    let config_bindings = read_bindings(fs, config_path.as_ref())?;
    let (schema_version, sections) = validate_config_bindings(&config_bindings)?;

    let version_bindings = read_bindings(fs, version_path.as_ref())?;
    let version = VersionState::from_bindings(version_bindings);

    ConfigDefinition::new(
        schema_version,
        sections.globals,
        sections.files,
        sections.parts,
        version,
    )
}

/// Default configuration file name, relative to the working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("punch_config.toml")
}

/// Default version file name, relative to the working directory.
pub fn default_version_path() -> PathBuf {
    PathBuf::from("punch_version.toml")
}
