use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Binding that selects the configuration schema.
pub const CONFIG_VERSION_KEY: &str = "__config_version__";
/// Optional table of options applied to every file target.
pub const GLOBALS_KEY: &str = "GLOBALS";
/// Optional array of file targets.
pub const FILES_KEY: &str = "FILES";
/// Optional array of version part declarations.
pub const VERSION_KEY: &str = "VERSION";
/// Option name for the version serializer, both in `GLOBALS` and per file.
pub const SERIALIZER_KEY: &str = "serializer";

/// Schema versions this loader can validate.
pub const SUPPORTED_CONFIG_VERSIONS: &[i64] = &[1];

/// Value type declared for a version part.
///
/// - `Integer`: a counter such as `major` or `patch`.
/// - `String`: free-form text (e.g. a release label).
/// - `Date`: a date component; stored as a TOML date or a string.
/// - `ValueList`: one entry out of an `allowed_values` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartType {
    Integer,
    String,
    Date,
    ValueList,
}

impl PartType {
    pub fn as_str(self) -> &'static str {
        match self {
            PartType::Integer => "integer",
            PartType::String => "string",
            PartType::Date => "date",
            PartType::ValueList => "value_list",
        }
    }

    /// Whether a current value from the version file has the right TOML shape
    /// for this part type.
    pub fn accepts(self, value: &toml::Value) -> bool {
        match self {
            PartType::Integer => value.is_integer(),
            PartType::String | PartType::ValueList => value.is_str(),
            PartType::Date => value.is_str() || value.is_datetime(),
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "integer" => Ok(PartType::Integer),
            "string" => Ok(PartType::String),
            "date" => Ok(PartType::Date),
            "value_list" => Ok(PartType::ValueList),
            other => Err(format!(
                "unknown version part type '{other}' (expected \"integer\", \"string\", \"date\" or \"value_list\")"
            )),
        }
    }
}
