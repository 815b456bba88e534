// src/config/check.rs

//! Consistency checks for consumers of a loaded [`ConfigDefinition`].
//!
//! The loader does not run these; they report problems that only matter
//! once versions are rendered into files.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::model::ConfigDefinition;
use crate::types::PartType;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}").expect("placeholder pattern is valid")
});

/// A serializer placeholder that names no declared version part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlaceholder {
    pub file: String,
    pub name: String,
}

/// A current value whose TOML type does not fit its part's declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMismatch {
    pub part: String,
    pub expected: PartType,
    pub found: toml::Value,
}

/// Names referenced as `{name}` in a serializer template, in order.
pub fn serializer_placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

pub fn unknown_placeholders(cfg: &ConfigDefinition) -> Vec<UnknownPlaceholder> {
    let mut out = Vec::new();
    for file in cfg.resolved_files() {
        let Some(template) = file.serializer else {
            continue;
        };
        for name in serializer_placeholders(template) {
            if cfg.part(name).is_none() {
                out.push(UnknownPlaceholder {
                    file: file.path.to_string(),
                    name: name.to_string(),
                });
            }
        }
    }
    out
}

pub fn type_mismatches(cfg: &ConfigDefinition) -> Vec<TypeMismatch> {
    cfg.version_parts()
        .iter()
        .filter_map(|part| {
            let value = cfg.version().get(part.name())?;
            (!part.part_type().accepts(value)).then(|| TypeMismatch {
                part: part.name().to_string(),
                expected: part.part_type(),
                found: value.clone(),
            })
        })
        .collect()
}
