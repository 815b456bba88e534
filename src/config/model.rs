// src/config/model.rs

use serde::Serialize;

use crate::config::validate::{
    check_supported_version, ensure_unique_part_names, validate_version_state,
};
use crate::config::version::VersionState;
use crate::errors::Result;
use crate::types::{PartType, SERIALIZER_KEY};

/// A project file whose content is later updated with a rendered version.
///
/// Mirrors the two shapes accepted in `FILES`:
///
/// ```toml
/// FILES = ["pkg/__init__.py", { path = "version.txt", serializer = "{major}.{minor}" }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FileTarget {
    /// Bare path; the global serializer applies.
    Path(String),
    /// Structured entry with an optional serializer override.
    Entry {
        path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        serializer: Option<String>,
    },
}

impl FileTarget {
    pub fn path(&self) -> &str {
        match self {
            FileTarget::Path(path) | FileTarget::Entry { path, .. } => path,
        }
    }

    /// Serializer declared on this file, ignoring globals.
    pub fn serializer(&self) -> Option<&str> {
        match self {
            FileTarget::Path(_) => None,
            FileTarget::Entry { serializer, .. } => serializer.as_deref(),
        }
    }
}

/// One `[[VERSION]]` entry.
///
/// Keys other than `name` and `type` (`allowed_values`, `fmt`, ...) are kept
/// verbatim in `options` for whoever bumps the part later.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionPartSpec {
    name: String,
    #[serde(rename = "type")]
    part_type: PartType,
    #[serde(flatten)]
    options: toml::Table,
}

impl VersionPartSpec {
    pub fn new(name: impl Into<String>, part_type: PartType) -> Self {
        Self {
            name: name.into(),
            part_type,
            options: toml::Table::new(),
        }
    }

    /// Attach an extra option. `name` and `type` are reserved and ignored.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        let key = key.into();
        if key != "name" && key != "type" {
            self.options.insert(key, value.into());
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn part_type(&self) -> PartType {
        self.part_type
    }

    pub fn options(&self) -> &toml::Table {
        &self.options
    }
}

/// A file target paired with the serializer that applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFile<'a> {
    pub path: &'a str,
    /// File override if present, else `GLOBALS.serializer`, else `None`.
    pub serializer: Option<&'a str>,
}

/// Validated configuration plus the current version values.
///
/// There is no way to mutate a `ConfigDefinition` after construction; new
/// version values are produced with [`VersionState::with_value`] and written
/// back with [`crate::config::write_version_file`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDefinition {
    schema_version: i64,
    globals: toml::Table,
    files: Vec<FileTarget>,
    parts: Vec<VersionPartSpec>,
    version: VersionState,
}

impl ConfigDefinition {
    /// Build a definition from already-typed pieces.
    ///
    /// Runs the same checks as the loader: supported schema version, unique
    /// part names, and a value in `version` for every declared part.
    pub fn new(
        schema_version: i64,
        globals: toml::Table,
        files: Vec<FileTarget>,
        parts: Vec<VersionPartSpec>,
        version: VersionState,
    ) -> Result<Self> {
        check_supported_version(schema_version)?;
        ensure_unique_part_names(&parts)?;
        validate_version_state(&parts, &version)?;

        Ok(Self {
            schema_version,
            globals,
            files,
            parts,
            version,
        })
    }

    pub fn schema_version(&self) -> i64 {
        self.schema_version
    }

    pub fn globals(&self) -> &toml::Table {
        &self.globals
    }

    pub fn file_targets(&self) -> &[FileTarget] {
        &self.files
    }

    pub fn version_parts(&self) -> &[VersionPartSpec] {
        &self.parts
    }

    pub fn part(&self, name: &str) -> Option<&VersionPartSpec> {
        self.parts.iter().find(|p| p.name == name)
    }

    pub fn version(&self) -> &VersionState {
        &self.version
    }

    /// `GLOBALS.serializer`, when it is a string.
    pub fn global_serializer(&self) -> Option<&str> {
        self.globals.get(SERIALIZER_KEY).and_then(|v| v.as_str())
    }

    /// File targets in declaration order with their effective serializer.
    pub fn resolved_files(&self) -> Vec<ResolvedFile<'_>> {
        let global = self.global_serializer();
        self.files
            .iter()
            .map(|file| ResolvedFile {
                path: file.path(),
                serializer: file.serializer().or(global),
            })
            .collect()
    }

    /// Render a configuration document that loads back into an equal
    /// definition (minus the version values, which live in their own file).
    pub fn to_toml_string(&self) -> Result<String> {
        let doc = ConfigDocument {
            config_version: self.schema_version,
            files: &self.files,
            globals: &self.globals,
            version: &self.parts,
        };
        Ok(toml::to_string(&doc)?)
    }
}

#[derive(Serialize)]
struct ConfigDocument<'a> {
    #[serde(rename = "__config_version__")]
    config_version: i64,
    #[serde(rename = "FILES", skip_serializing_if = "is_empty_slice")]
    files: &'a [FileTarget],
    #[serde(rename = "GLOBALS", skip_serializing_if = "is_empty_table")]
    globals: &'a toml::Table,
    #[serde(rename = "VERSION", skip_serializing_if = "is_empty_slice")]
    version: &'a [VersionPartSpec],
}

fn is_empty_slice<T>(items: &&[T]) -> bool {
    items.is_empty()
}

fn is_empty_table(table: &&toml::Table) -> bool {
    table.is_empty()
}
