//! Common test utilities for Vitrine CLI tests.
//!
//! `TestEnv` gives each test an isolated project directory (and an isolated
//! HOME so user-level configuration never leaks in), plus helpers to write
//! catalog/config fixtures and run the built binary.

// Helpers are shared across test binaries; not every binary uses all of them.
#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Result of running the vitrine CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_vitrine")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a product source with the standard header plus the given rows
    pub fn write_catalog(&self, rows: &str) {
        self.write_catalog_at("produtos.csv", rows);
    }

    pub fn write_catalog_at(&self, relative: &str, rows: &str) {
        let content = format!("ref,nome,desc,valor,nome_arquivo_imagem\n{}", rows);
        std::fs::write(self.project_path(relative), content).unwrap();
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.project_path("vitrine.toml"), content).unwrap();
    }

    /// Run the vitrine CLI from the project root with a closed stdin
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .args(args)
            .current_dir(self.project_root.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("TERM", "xterm-256color")
            .env("LANG", "en_US.UTF-8")
            .env_remove("NO_COLOR")
            .env_remove("VITRINE_WHATSAPP")
            .env_remove("VITRINE_EMAIL")
            .env_remove("VITRINE_SOURCE")
            .env_remove("VITRINE_COLOR")
            .stdin(Stdio::null())
            .output()
            .unwrap();

        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
