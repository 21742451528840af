#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const POLICY: &str = include_str!("../fixtures/policy.xml");

/// Scratch directory holding a copy of the fixture policy
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("policy.xml"), POLICY).unwrap();
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn policy(&self) -> PathBuf {
        self.path("policy.xml")
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).unwrap()
    }
}

/// Templates shipped with the repository
pub fn shipped_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Run the built binary inside `cwd` with logging kept quiet
pub fn sedoctool(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sedoctool"))
        .current_dir(cwd)
        .env_remove("SEDOC_XML")
        .env_remove("SEDOC_TEMPLATES")
        .env_remove("RUST_LOG")
        .env("SEDOC_LOG_LEVEL", "warn")
        .args(args)
        .output()
        .expect("run sedoctool")
}
