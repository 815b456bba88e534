#![allow(dead_code)]

use punch_config::config::{ConfigDefinition, FileTarget, VersionPartSpec, VersionState};
use punch_config::errors::Result;
use punch_config::types::{PartType, SERIALIZER_KEY};

/// Builder for `ConfigDefinition` to simplify test setup.
pub struct ConfigDefinitionBuilder {
    schema_version: i64,
    globals: toml::Table,
    files: Vec<FileTarget>,
    parts: Vec<VersionPartSpec>,
    version: VersionState,
}

impl ConfigDefinitionBuilder {
    pub fn new() -> Self {
        Self {
            schema_version: 1,
            globals: toml::Table::new(),
            files: Vec::new(),
            parts: Vec::new(),
            version: VersionState::default(),
        }
    }

    /// `major.minor.patch` integers at 1.5.0 with a global serializer.
    pub fn semver() -> Self {
        Self::new()
            .with_global_serializer("{major}.{minor}.{patch}")
            .with_part("major", PartType::Integer)
            .with_part("minor", PartType::Integer)
            .with_part("patch", PartType::Integer)
            .with_value("major", 1)
            .with_value("minor", 5)
            .with_value("patch", 0)
    }

    pub fn schema_version(mut self, version: i64) -> Self {
        self.schema_version = version;
        self
    }

    pub fn with_global(mut self, key: &str, value: impl Into<toml::Value>) -> Self {
        self.globals.insert(key.to_string(), value.into());
        self
    }

    pub fn with_global_serializer(self, template: &str) -> Self {
        self.with_global(SERIALIZER_KEY, template)
    }

    pub fn with_file(mut self, path: &str) -> Self {
        self.files.push(FileTarget::Path(path.to_string()));
        self
    }

    pub fn with_file_serializer(mut self, path: &str, serializer: &str) -> Self {
        self.files.push(FileTarget::Entry {
            path: path.to_string(),
            serializer: Some(serializer.to_string()),
        });
        self
    }

    pub fn with_part(mut self, name: &str, part_type: PartType) -> Self {
        self.parts.push(VersionPartSpec::new(name, part_type));
        self
    }

    pub fn with_part_spec(mut self, part: VersionPartSpec) -> Self {
        self.parts.push(part);
        self
    }

    pub fn with_value(mut self, name: &str, value: impl Into<toml::Value>) -> Self {
        self.version = self.version.with_value(name, value);
        self
    }

    pub fn try_build(self) -> Result<ConfigDefinition> {
        ConfigDefinition::new(
            self.schema_version,
            self.globals,
            self.files,
            self.parts,
            self.version,
        )
    }

    pub fn build(self) -> ConfigDefinition {
        self.try_build()
            .expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigDefinitionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
