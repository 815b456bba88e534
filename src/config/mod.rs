// src/config/mod.rs

//! Configuration and version file loading for punch.
//!
//! Responsibilities:
//! - Define the validated data model (`model.rs`, `version.rs`).
//! - Read both definition files from disk (`loader.rs`).
//! - Check the binding schema and cross-check the version file (`validate.rs`).
//! - Offer consumer-side consistency checks (`check.rs`).

pub mod check;
pub mod loader;
pub mod model;
pub mod validate;
pub mod version;

pub use loader::{default_config_path, default_version_path, load, load_with_fs, parse_bindings};
pub use model::{ConfigDefinition, FileTarget, ResolvedFile, VersionPartSpec};
pub use validate::validate_config_bindings;
pub use version::{VersionState, write_version_file};
