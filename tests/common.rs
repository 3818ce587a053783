#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated workspace: its own config file and data file.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn conf(&self) -> PathBuf {
        self.dir.path().join("nannylog.conf")
    }

    pub fn data(&self) -> PathBuf {
        self.dir.path().join("garde_data.csv")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `nannylog --config <conf> --file <data> ...`
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("nannylog");
        cmd.env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.conf())
            .arg("--file")
            .arg(self.data());
        cmd
    }

    pub fn write_data(&self, content: &str) {
        fs::write(self.data(), content).expect("write data file");
    }

    pub fn read_data(&self) -> String {
        fs::read_to_string(self.data()).expect("read data file")
    }

    /// Two March sessions and one April session.
    pub fn with_sample_data(self) -> Self {
        for (date, start, end, pause) in [
            ("2025-03-03", "08:00", "17:00", "60"),
            ("2025-03-04", "08:30", "16:45", "15"),
            ("2025-04-01", "08:00", "12:00", "0"),
        ] {
            self.cmd()
                .args(["add", date, "--in", start, "--out", end, "--break", pause])
                .assert()
                .success();
        }
        self
    }
}

pub fn data_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read data file")
        .lines()
        .map(str::to_string)
        .collect()
}
