//! External process invocations.
//! Git and the package manager are opaque pass/fail calls returning their
//! captured standard output; stamp never links against them.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

fn run(command: &mut Command, label: &str) -> Result<String> {
    let output = command.output().map_err(|e| Error::ExternalProcess {
        command: label.to_string(),
        detail: e.to_string(),
    })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::ExternalProcess {
            command: label.to_string(),
            detail: format!("{}: {}", output.status, stderr.trim()),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Returns the porcelain git status of `path`, or an empty string when the
/// status query cannot be run at all (no git, not a repository). Best effort
/// only; this function never fails.
pub fn git_status(path: &Path) -> String {
    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(path).args(["status", "--porcelain"]);
    cmd.output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_default()
}

pub fn git_init(dir: &Path) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(dir).arg("init");
    run(&mut cmd, "git init")
}

pub fn git_add_all(dir: &Path) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(dir).args(["add", "."]);
    run(&mut cmd, "git add")
}

pub fn git_commit(dir: &Path, message: &str) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(dir).args(["commit", "-m", message]);
    run(&mut cmd, "git commit")
}

pub fn npm_install(dir: &Path) -> Result<String> {
    let mut cmd = Command::new("npm");
    cmd.arg("install").current_dir(dir);
    run(&mut cmd, "npm install")
}
