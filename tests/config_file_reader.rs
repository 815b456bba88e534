use std::error::Error;
use std::path::PathBuf;

use tempfile::tempdir;

use punch_config::config::{FileTarget, load, load_with_fs};
use punch_config::errors::ConfigError;
use punch_config::types::PartType;
use punch_config_test_utils::fixtures::{
    CONFIG_FILE_NAME, EMPTY, ILLEGAL_CONFIG, SEMVER_CONFIG, SEMVER_VERSION, VERSION_FILE_NAME,
    mock_pair, write_pair,
};
use punch_config_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn empty_config_file_is_missing_config_version() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let (config, version) = write_pair(dir.path(), EMPTY, SEMVER_VERSION)?;

    let err = load(&config, &version).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfiguration(_)));
    assert_eq!(
        err.to_string(),
        "Given config file is invalid: missing '__config_version__' variable"
    );

    Ok(())
}

#[test]
fn empty_version_file_reports_first_declared_part() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let (config, version) = write_pair(dir.path(), SEMVER_CONFIG, EMPTY)?;

    let err = load(&config, &version).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidVersionFile(_)));
    assert_eq!(
        err.to_string(),
        "Given version file is invalid: missing 'major' variable"
    );

    Ok(())
}

#[test]
fn unsupported_config_version_is_rejected() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let (config, version) = write_pair(dir.path(), ILLEGAL_CONFIG, SEMVER_VERSION)?;

    match load(&config, &version) {
        Err(ConfigError::UnsupportedSchemaVersion(value)) => assert_eq!(value, "2"),
        Err(e) => panic!("Expected UnsupportedSchemaVersion, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }

    let err = load(&config, &version).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported configuration file version 2");

    Ok(())
}

#[test]
fn reads_plain_variables() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let (config, version) = write_pair(dir.path(), SEMVER_CONFIG, SEMVER_VERSION)?;

    let cfg = load(&config, &version)?;
    assert_eq!(cfg.schema_version(), 1);

    Ok(())
}

#[test]
fn reads_globals_files_and_parts() -> TestResult {
    let (fs, config, version) = mock_pair(SEMVER_CONFIG, SEMVER_VERSION);
    let cfg = load_with_fs(&fs, &config, &version)?;

    assert_eq!(cfg.globals().len(), 1);
    assert_eq!(
        cfg.globals().get("serializer").and_then(|v| v.as_str()),
        Some("{major}.{minor}.{patch}")
    );

    assert_eq!(
        cfg.file_targets(),
        &[
            FileTarget::Path("pkg/__init__.py".to_string()),
            FileTarget::Entry {
                path: "version.txt".to_string(),
                serializer: Some("{major}.{minor}".to_string()),
            },
        ]
    );

    let parts: Vec<(&str, PartType)> = cfg
        .version_parts()
        .iter()
        .map(|p| (p.name(), p.part_type()))
        .collect();
    assert_eq!(
        parts,
        vec![
            ("major", PartType::Integer),
            ("minor", PartType::Integer),
            ("patch", PartType::Integer),
        ]
    );

    assert_eq!(cfg.version().get("major").and_then(|v| v.as_integer()), Some(1));
    assert_eq!(cfg.version().get("minor").and_then(|v| v.as_integer()), Some(5));
    assert_eq!(cfg.version().get("patch").and_then(|v| v.as_integer()), Some(0));

    Ok(())
}

#[test]
fn no_declared_parts_accepts_empty_version_file() -> TestResult {
    let (fs, config, version) = mock_pair("__config_version__ = 1\n", EMPTY);
    let cfg = load_with_fs(&fs, &config, &version)?;

    assert_eq!(cfg.schema_version(), 1);
    assert!(cfg.globals().is_empty());
    assert!(cfg.file_targets().is_empty());
    assert!(cfg.version_parts().is_empty());
    assert!(cfg.version().is_empty());

    Ok(())
}

#[test]
fn no_declared_parts_keeps_any_version_bindings() -> TestResult {
    let (fs, config, version) = mock_pair("__config_version__ = 1\n", "build = 7\n");
    let cfg = load_with_fs(&fs, &config, &version)?;

    assert_eq!(cfg.version().len(), 1);
    assert_eq!(cfg.version().get("build").and_then(|v| v.as_integer()), Some(7));

    Ok(())
}

#[test]
fn missing_config_version_wins_over_any_version_content() {
    for version_content in [EMPTY, SEMVER_VERSION, "not = [valid"] {
        let (fs, config, version) = mock_pair("GLOBALS = { serializer = \"x\" }\n", version_content);
        match load_with_fs(&fs, &config, &version) {
            Err(ConfigError::InvalidConfiguration(msg)) => {
                assert_eq!(msg, "missing '__config_version__' variable");
            }
            Err(e) => panic!("Expected InvalidConfiguration, got: {:?}", e),
            Ok(_) => panic!("Expected error, got Ok"),
        }
    }
}

#[test]
fn invalid_config_never_reads_version_file() {
    let (fs, config, version) = mock_pair(ILLEGAL_CONFIG, EMPTY);

    let result = load_with_fs(&fs, &config, &version);
    assert!(matches!(result, Err(ConfigError::UnsupportedSchemaVersion(_))));
    assert_eq!(fs.reads(), vec![PathBuf::from(CONFIG_FILE_NAME)]);
}

#[test]
fn valid_load_reads_config_then_version() -> TestResult {
    let (fs, config, version) = mock_pair(SEMVER_CONFIG, SEMVER_VERSION);
    load_with_fs(&fs, &config, &version)?;

    assert_eq!(
        fs.reads(),
        vec![
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from(VERSION_FILE_NAME)
        ]
    );

    Ok(())
}

#[test]
fn unparsable_config_is_treated_as_empty() {
    let (fs, config, version) = mock_pair("__config_version__ = = 1\n[[", SEMVER_VERSION);

    let err = load_with_fs(&fs, &config, &version).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Given config file is invalid: missing '__config_version__' variable"
    );
}

#[test]
fn non_utf8_version_file_is_treated_as_empty() {
    let (fs, config, version) = mock_pair(SEMVER_CONFIG, "");
    fs.add_file(&version, vec![0xff, 0xfe, 0x00, 0x6d]);

    let err = load_with_fs(&fs, &config, &version).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Given version file is invalid: missing 'major' variable"
    );
}

#[test]
fn missing_version_file_is_an_io_error() -> TestResult {
    let dir = tempdir()?;
    let (config, _) = write_pair(dir.path(), SEMVER_CONFIG, SEMVER_VERSION)?;
    let absent = dir.path().join("nope.toml");

    match load(&config, &absent) {
        Err(ConfigError::Io { path, source }) => {
            assert_eq!(path, absent);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        Err(e) => panic!("Expected Io error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }

    Ok(())
}

#[test]
fn missing_config_file_is_reported_before_version_file() {
    let (fs, _, version) = mock_pair(SEMVER_CONFIG, SEMVER_VERSION);

    let result = load_with_fs(&fs, "other_config.toml", &version);
    assert!(matches!(result, Err(ConfigError::Io { .. })));
    assert_eq!(fs.reads(), vec![PathBuf::from("other_config.toml")]);
}

#[test]
fn partially_filled_version_file_reports_first_missing_in_declaration_order() {
    let (fs, config, version) = mock_pair(SEMVER_CONFIG, "major = 1\npatch = 3\n");

    let err = load_with_fs(&fs, &config, &version).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Given version file is invalid: missing 'minor' variable"
    );
}
