//! Tests for config version field validation.

use std::path::Path;

use crate::config::FileConfigLoader;
use crate::config::loader::ConfigLoader;
use crate::error::RelocSimError;

use super::mock_fs::MockFileSystem;

#[test]
fn config_with_valid_version_loads_successfully() {
    let config_content = r#"
version = "1"

[roi]
horizon_years = 15
"#;

    let fs = MockFileSystem::new().with_file("/config.toml", config_content);

    let loader = FileConfigLoader::with_fs(fs);
    let result = loader.load_from_path(Path::new("/config.toml")).unwrap();

    assert_eq!(result.config.version, Some("1".to_string()));
    assert_eq!(result.config.roi.horizon_years, 15);
}

#[test]
fn config_without_version_loads_successfully() {
    let fs = MockFileSystem::new().with_file("/config.toml", "[roi]\nhorizon_years = 12\n");

    let loader = FileConfigLoader::with_fs(fs);
    let result = loader.load_from_path(Path::new("/config.toml")).unwrap();

    assert!(result.config.version.is_none());
    assert_eq!(result.config.roi.horizon_years, 12);
}

#[test]
fn config_with_unsupported_version_returns_error() {
    let fs = MockFileSystem::new().with_file("/config.toml", "version = \"99\"\n");

    let loader = FileConfigLoader::with_fs(fs);
    let err = loader
        .load_from_path(Path::new("/config.toml"))
        .unwrap_err();

    match err {
        RelocSimError::Config(msg) => {
            assert!(msg.contains("99"));
            assert!(msg.contains("Only version '1'"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
