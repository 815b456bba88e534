// src/config/validate.rs

use std::collections::HashSet;

use toml::{Table, Value};

use crate::config::model::{FileTarget, VersionPartSpec};
use crate::config::version::VersionState;
use crate::errors::{ConfigError, Result};
use crate::types::{
    CONFIG_VERSION_KEY, FILES_KEY, GLOBALS_KEY, PartType, SERIALIZER_KEY,
    SUPPORTED_CONFIG_VERSIONS, VERSION_KEY,
};

/// Optional sections of a configuration file, already shape-checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigSections {
    pub globals: Table,
    pub files: Vec<FileTarget>,
    pub parts: Vec<VersionPartSpec>,
}

/// Run every check that only needs the configuration file's bindings.
///
/// Checks, in order:
/// - `__config_version__` is present,
/// - its value is a supported schema version,
/// - `GLOBALS`, `FILES` and `VERSION` have the right shape when present,
/// - version part names are unique.
///
/// Returns the schema version and the parsed optional sections.
pub fn validate_config_bindings(bindings: &Table) -> Result<(i64, ConfigSections)> {
    let schema_version = validate_schema_version(bindings)?;

    let sections = ConfigSections {
        globals: parse_globals(bindings)?,
        files: parse_files(bindings)?,
        parts: parse_version_parts(bindings)?,
    };
    ensure_unique_part_names(&sections.parts)?;

    Ok((schema_version, sections))
}

/// Extract `__config_version__` and check it against the supported set.
pub fn validate_schema_version(bindings: &Table) -> Result<i64> {
    let value = bindings.get(CONFIG_VERSION_KEY).ok_or_else(|| {
        ConfigError::invalid_config(format!("missing '{CONFIG_VERSION_KEY}' variable"))
    })?;

    match value.as_integer() {
        Some(version) if SUPPORTED_CONFIG_VERSIONS.contains(&version) => Ok(version),
        _ => Err(ConfigError::UnsupportedSchemaVersion(value.to_string())),
    }
}

pub fn check_supported_version(version: i64) -> Result<()> {
    if SUPPORTED_CONFIG_VERSIONS.contains(&version) {
        Ok(())
    } else {
        Err(ConfigError::UnsupportedSchemaVersion(version.to_string()))
    }
}

fn parse_globals(bindings: &Table) -> Result<Table> {
    match bindings.get(GLOBALS_KEY) {
        None => Ok(Table::new()),
        Some(Value::Table(globals)) => Ok(globals.clone()),
        Some(_) => Err(ConfigError::invalid_config(format!(
            "'{GLOBALS_KEY}' must be a table"
        ))),
    }
}

fn parse_files(bindings: &Table) -> Result<Vec<FileTarget>> {
    let entries = match bindings.get(FILES_KEY) {
        None => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(ConfigError::invalid_config(format!(
                "'{FILES_KEY}' must be an array"
            )));
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| parse_file_entry(idx + 1, entry))
        .collect()
}

fn parse_file_entry(index: usize, entry: &Value) -> Result<FileTarget> {
    let table = match entry {
        Value::String(path) => return Ok(FileTarget::Path(path.clone())),
        Value::Table(table) => table,
        _ => {
            return Err(ConfigError::invalid_config(format!(
                "'{FILES_KEY}' entry #{index} must be a string or a table"
            )));
        }
    };

    if let Some(key) = table
        .keys()
        .find(|k| k.as_str() != "path" && k.as_str() != SERIALIZER_KEY)
    {
        return Err(ConfigError::invalid_config(format!(
            "unknown key '{key}' in '{FILES_KEY}' entry #{index}"
        )));
    }

    let path = match table.get("path") {
        Some(Value::String(path)) => path.clone(),
        Some(_) => {
            return Err(ConfigError::invalid_config(format!(
                "'path' of '{FILES_KEY}' entry #{index} must be a string"
            )));
        }
        None => {
            return Err(ConfigError::invalid_config(format!(
                "'{FILES_KEY}' entry #{index} is missing 'path'"
            )));
        }
    };

    let serializer = match table.get(SERIALIZER_KEY) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            return Err(ConfigError::invalid_config(format!(
                "'{SERIALIZER_KEY}' of file '{path}' must be a string"
            )));
        }
    };

    Ok(FileTarget::Entry { path, serializer })
}

fn parse_version_parts(bindings: &Table) -> Result<Vec<VersionPartSpec>> {
    let entries = match bindings.get(VERSION_KEY) {
        None => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(ConfigError::invalid_config(format!(
                "'{VERSION_KEY}' must be an array"
            )));
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| parse_part_entry(idx + 1, entry))
        .collect()
}

fn parse_part_entry(index: usize, entry: &Value) -> Result<VersionPartSpec> {
    let Value::Table(table) = entry else {
        return Err(ConfigError::invalid_config(format!(
            "'{VERSION_KEY}' entry #{index} must be a table"
        )));
    };

    let name = match table.get("name") {
        Some(Value::String(name)) => name.as_str(),
        Some(_) => {
            return Err(ConfigError::invalid_config(format!(
                "'name' of '{VERSION_KEY}' entry #{index} must be a string"
            )));
        }
        None => {
            return Err(ConfigError::invalid_config(format!(
                "'{VERSION_KEY}' entry #{index} is missing 'name'"
            )));
        }
    };

    let part_type = match table.get("type") {
        Some(Value::String(t)) => t.parse::<PartType>().map_err(|_| {
            ConfigError::invalid_config(format!(
                "version part '{name}' has unknown type '{t}'"
            ))
        })?,
        Some(_) => {
            return Err(ConfigError::invalid_config(format!(
                "'type' of version part '{name}' must be a string"
            )));
        }
        None => {
            return Err(ConfigError::invalid_config(format!(
                "version part '{name}' is missing 'type'"
            )));
        }
    };

    let part = table
        .iter()
        .filter(|(k, _)| k.as_str() != "name" && k.as_str() != "type")
        .fold(VersionPartSpec::new(name, part_type), |part, (k, v)| {
            part.with_option(k.clone(), v.clone())
        });

    Ok(part)
}

pub fn ensure_unique_part_names(parts: &[VersionPartSpec]) -> Result<()> {
    let mut seen = HashSet::new();
    for part in parts {
        if !seen.insert(part.name()) {
            return Err(ConfigError::invalid_config(format!(
                "duplicate version part '{}'",
                part.name()
            )));
        }
    }
    Ok(())
}

/// Cross-check the version file against the declared parts.
///
/// The first declared part (in `VERSION` order) without a value is reported.
/// With no parts declared, any version file is accepted.
pub fn validate_version_state(parts: &[VersionPartSpec], state: &VersionState) -> Result<()> {
    match state.missing_part(parts) {
        Some(name) => Err(ConfigError::invalid_version_file(format!(
            "missing '{name}' variable"
        ))),
        None => Ok(()),
    }
}
