use clap::Parser;
use tempfile::TempDir;

use super::{generate_config_template, run_init, run_init_impl};
use crate::cli::{Cli, InitArgs};
use crate::config::{resolve_value, validate_config_semantics};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

fn quiet_cli() -> Cli {
    Cli::parse_from(["reloc-sim", "-q", "--color", "never", "init"])
}

#[test]
fn template_resolves_to_valid_config() {
    let value: toml::Value = toml::from_str(&generate_config_template()).unwrap();
    let (config, preset) = resolve_value(value).unwrap();
    assert!(preset.is_none());
    assert_eq!(config, crate::config::Config {
        version: Some("1".to_string()),
        ..crate::config::Config::default()
    });
    validate_config_semantics(&config).unwrap();
}

#[test]
fn template_documents_every_section() {
    let template = generate_config_template();
    for section in ["[tax]", "[roi]", "[chart]", "[chart.reveal]", "# extends = \"jp-2025\""] {
        assert!(template.contains(section), "missing {section}");
    }
}

#[test]
fn commented_examples_are_valid_when_enabled() {
    let uncommented: String = generate_config_template()
        .lines()
        .map(|line| {
            line.strip_prefix("# ")
                .filter(|rest| {
                    rest.starts_with('[') || rest.contains(" = ") && !rest.starts_with("extends")
                })
                .unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n");
    let value: toml::Value = toml::from_str(&uncommented).unwrap();
    let (config, _) = resolve_value(value).unwrap();
    assert!(config.roi.presets.contains_key("my-flat"));
    assert!(config.cost.cities.contains_key("bangkok"));
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".reloc-sim.toml");

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };
    run_init_impl(&args).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("version = \"1\""));
}

#[test]
fn run_init_fails_if_file_exists_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".reloc-sim.toml");
    std::fs::write(&config_path, "existing content").unwrap();

    let args = InitArgs {
        output: config_path,
        force: false,
    };
    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn run_init_overwrites_with_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".reloc-sim.toml");
    std::fs::write(&config_path, "old content").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: true,
    };
    run_init_impl(&args).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[roi]"));
    assert!(!content.contains("old content"));
}

#[test]
fn run_init_exit_codes() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".reloc-sim.toml");
    let args = InitArgs {
        output: config_path,
        force: false,
    };

    assert_eq!(run_init(&args, &quiet_cli()), EXIT_SUCCESS);
    assert_eq!(run_init(&args, &quiet_cli()), EXIT_CONFIG_ERROR);
}
