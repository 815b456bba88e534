// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod types;

use std::fmt::Write as _;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::ConfigDefinition;
use crate::config::check::{type_mismatches, unknown_placeholders};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - loading both definition files
/// - consumer-side consistency warnings
/// - summary (or `--dump`) output on stdout
pub fn run(args: CliArgs) -> Result<()> {
    debug!(config = ?args.config, version_file = ?args.version_file, "loading definitions");

    let cfg = config::load(&args.config, &args.version_file)
        .with_context(|| format!("loading {:?} with {:?}", args.config, args.version_file))?;

    info!(
        schema_version = cfg.schema_version(),
        files = cfg.file_targets().len(),
        parts = cfg.version_parts().len(),
        "configuration loaded"
    );

    report_findings(&cfg);

    if args.dump {
        print!("{}", render_dump(&cfg)?);
    } else {
        print!("{}", render_summary(&cfg));
    }

    Ok(())
}

/// Log problems that will bite later when versions are rendered.
fn report_findings(cfg: &ConfigDefinition) {
    for p in unknown_placeholders(cfg) {
        warn!(file = %p.file, placeholder = %p.name, "serializer references an undeclared version part");
    }
    for m in type_mismatches(cfg) {
        warn!(
            part = %m.part,
            expected = %m.expected,
            found = %m.found,
            "current value does not match the declared part type"
        );
    }
}

/// Human-readable overview of a loaded definition.
pub fn render_summary(cfg: &ConfigDefinition) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "punch configuration");
    let _ = writeln!(out, "  schema_version = {}", cfg.schema_version());
    for (key, value) in cfg.globals() {
        let _ = writeln!(out, "  globals.{key} = {value}");
    }
    let _ = writeln!(out);

    let files = cfg.resolved_files();
    let _ = writeln!(out, "files ({}):", files.len());
    for file in files {
        let _ = writeln!(out, "  - {}", file.path);
        if let Some(serializer) = file.serializer {
            let _ = writeln!(out, "      serializer: {serializer}");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "version parts ({}):", cfg.version_parts().len());
    for part in cfg.version_parts() {
        let _ = writeln!(out, "  - {} ({})", part.name(), part.part_type());
        if let Some(value) = cfg.version().get(part.name()) {
            let _ = writeln!(out, "      current: {value}");
        }
    }

    out
}

/// Both definitions rendered back as TOML, config first.
pub fn render_dump(cfg: &ConfigDefinition) -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(out, "# configuration");
    out.push_str(&cfg.to_toml_string()?);
    let _ = writeln!(out);
    let _ = writeln!(out, "# version");
    out.push_str(&cfg.version().to_toml_string()?);
    Ok(out)
}
