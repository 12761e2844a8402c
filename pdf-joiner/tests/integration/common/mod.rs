//! Shared fixtures for the integration tests.
//!
//! Backends are faked with small shell scripts placed in a temp directory
//! that serves as the only search path.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Script that records its arguments, one per line, into `log`.
pub fn recording_script(log: &Path) -> String {
    format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\n", log.display())
}

/// Script that prints `message` to stderr and exits with `code`.
pub fn failing_script(message: &str, code: i32) -> String {
    let quoted = message.replace('\'', r"'\''");
    format!("#!/bin/sh\necho '{quoted}' >&2\nexit {code}\n")
}

/// Write an executable script named `name` into `dir`.
#[cfg(unix)]
pub fn install_script(dir: &Path, name: &str, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, script).expect("Failed to write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
    path
}

/// Create a small placeholder PDF named `name` in `dir`.
pub fn touch_pdf(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"%PDF-1.4\n%%EOF\n").expect("Failed to write fixture");
    path
}

/// Lines recorded by a [`recording_script`].
pub fn recorded_lines(log: &Path) -> Vec<String> {
    std::fs::read_to_string(log)
        .expect("Script did not run")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Temp directories for fake tools and for documents.
pub struct Sandbox {
    pub bin: TempDir,
    pub docs: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            bin: TempDir::new().expect("Failed to create bin dir"),
            docs: TempDir::new().expect("Failed to create docs dir"),
        }
    }

    /// Two placeholder inputs, `a.pdf` then `b.pdf`.
    pub fn inputs(&self) -> Vec<PathBuf> {
        vec![
            touch_pdf(self.docs.path(), "a.pdf"),
            touch_pdf(self.docs.path(), "b.pdf"),
        ]
    }

    pub fn log(&self) -> PathBuf {
        self.docs.path().join("args.log")
    }
}
