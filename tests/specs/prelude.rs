// SPDX-License-Identifier: MIT

//! Shared spec harness: a temp project directory plus a fluent wrapper
//! around the `jt` binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temp directory with its own record file, wired into `jt` via
/// `JT_DATA_FILE` so specs never touch the real data dir.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_file(&self) -> PathBuf {
        self.path().join("records.json")
    }

    /// Write a file under the project dir, returning its path.
    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, contents).expect("write file");
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).expect("read file")
    }

    pub fn jt(&self) -> Jt {
        let mut cmd = Command::cargo_bin("jt").expect("jt binary");
        cmd.current_dir(self.path());
        cmd.env("JT_DATA_FILE", self.data_file());
        cmd.env("NO_COLOR", "1");
        Jt { cmd }
    }

    /// First whitespace-separated token of the list row mentioning
    /// `needle`: the short record id.
    pub fn id_of(&self, needle: &str) -> String {
        let out = self.jt().args(&["list"]).passes().stdout();
        out.lines()
            .find(|l| l.contains(needle))
            .unwrap_or_else(|| panic!("no row matching '{}' in output:\n{}", needle, out))
            .split_whitespace()
            .next()
            .expect("row should have an id column")
            .to_string()
    }
}

pub struct Jt {
    cmd: Command,
}

impl Jt {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    pub fn passes(mut self) -> Run {
        let assert = self.cmd.assert().success();
        Run::from(assert.get_output())
    }

    pub fn fails(mut self) -> Run {
        let assert = self.cmd.assert().failure();
        Run::from(assert.get_output())
    }
}

pub struct Run {
    stdout: String,
    stderr: String,
}

impl Run {
    fn from(output: &std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn stdout(&self) -> String {
        self.stdout.clone()
    }

    pub fn stdout_has(&self, needle: &str) -> &Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing '{}':\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(&self, needle: &str) -> &Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly has '{}':\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(&self, needle: &str) -> &Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing '{}':\n{}",
            needle,
            self.stderr
        );
        self
    }

    /// Parse stdout as JSON (for `--format json` specs).
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}
