// src/config/version.rs

use std::path::Path;

use crate::config::model::VersionPartSpec;
use crate::errors::{ConfigError, Result};
use crate::fs::FileSystem;

/// Current version values, one binding per part name.
///
/// Bindings keep the order they had in the version file. Value types are not
/// checked here; see [`crate::config::check::type_mismatches`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionState {
    values: toml::Table,
}

impl VersionState {
    pub fn from_bindings(values: toml::Table) -> Self {
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&toml::Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &toml::Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// A copy of this state with `name` set to `value`.
    pub fn with_value(&self, name: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        let mut values = self.values.clone();
        values.insert(name.into(), value.into());
        Self { values }
    }

    /// First declared part that has no binding here.
    pub fn missing_part<'a>(&self, parts: &'a [VersionPartSpec]) -> Option<&'a str> {
        parts
            .iter()
            .map(|p| p.name())
            .find(|name| !self.contains(name))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(&self.values)?)
    }
}

/// Persist version values to a version file, replacing its content.
///
/// This is the only write path in the crate; loading never writes.
pub fn write_version_file(
    fs: &dyn FileSystem,
    path: impl AsRef<Path>,
    state: &VersionState,
) -> Result<()> {
    let path = path.as_ref();
    let rendered = state.to_toml_string()?;
    fs.write(path, rendered.as_bytes())
        .map_err(|e| ConfigError::io(path, e))
}
