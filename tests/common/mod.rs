#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the reloc-sim binary.
#[macro_export]
macro_rules! reloc_sim {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("reloc-sim"))
    };
}

/// Temporary working directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, including parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `.reloc-sim.toml` in the fixture root.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".reloc-sim.toml", content)
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Config layered on the 2025 tables with a shorter projection.
pub const JP_2025_CONFIG: &str = r#"
version = "1"
extends = "jp-2025"

[roi]
horizon_years = 5
"#;

/// Config that parses but fails validation.
pub const INVALID_RATE_CONFIG: &str = r#"
version = "1"

[tax]
social_rate = 1.5
"#;

/// Adds a fourth city with every tier filled in.
pub const EXTRA_CITY_CONFIG: &str = r#"
[cost.cities.bangkok]
name = "Bangkok"
standard = { housing = 8, food = 5, transport = 1, utilities = 1.5, education = 3, healthcare = 1, entertainment = 2, other = 1 }
comfort = { housing = 14, food = 7, transport = 2, utilities = 2, education = 8, healthcare = 2, entertainment = 4, other = 2 }
luxury = { housing = 30, food = 12, transport = 4, utilities = 3, education = 20, healthcare = 4, entertainment = 8, other = 4 }
"#;
