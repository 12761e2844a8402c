//! Linux distribution detection.
//!
//! A best-effort heuristic over well-known release files. It only decides
//! which package manager to try, so a wrong guess costs one failed install.

use std::fmt;
use std::path::{Path, PathBuf};

/// Linux distribution family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Debian, Ubuntu and derivatives.
    Debian,
    /// Fedora.
    Fedora,
    /// RHEL, CentOS and derivatives.
    RedHat,
    /// Arch Linux.
    Arch,
    /// openSUSE / SLES.
    Suse,
}

impl Distribution {
    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debian => "debian",
            Self::Fedora => "fedora",
            Self::RedHat => "redhat",
            Self::Arch => "arch",
            Self::Suse => "suse",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Release files that identify a distribution by their presence alone.
const MARKER_FILES: [(&str, Distribution); 5] = [
    ("etc/debian_version", Distribution::Debian),
    ("etc/fedora-release", Distribution::Fedora),
    ("etc/redhat-release", Distribution::RedHat),
    ("etc/arch-release", Distribution::Arch),
    ("etc/SuSE-release", Distribution::Suse),
];

/// Generic release file whose content is matched by name.
const OS_RELEASE: &str = "etc/os-release";

/// Substrings searched in `os-release`, first match wins.
const OS_RELEASE_NAMES: [(&str, Distribution); 8] = [
    ("ubuntu", Distribution::Debian),
    ("debian", Distribution::Debian),
    ("fedora", Distribution::Fedora),
    ("centos", Distribution::RedHat),
    ("rhel", Distribution::RedHat),
    ("arch", Distribution::Arch),
    ("opensuse", Distribution::Suse),
    ("suse", Distribution::Suse),
];

/// Classifies the running system from files under a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistroDetector {
    root: PathBuf,
}

impl DistroDetector {
    /// Detector inspecting the real filesystem root.
    pub fn new() -> Self {
        Self::with_root("/")
    }

    /// Detector inspecting release files below `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory being inspected.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Classify the system, defaulting to Debian when nothing matches.
    pub fn detect(&self) -> Distribution {
        for (marker, distribution) in MARKER_FILES {
            if self.root.join(marker).exists() {
                return distribution;
            }
        }

        std::fs::read_to_string(self.root.join(OS_RELEASE))
            .ok()
            .and_then(|content| classify_os_release(&content))
            .unwrap_or(Distribution::Debian)
    }
}

impl Default for DistroDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Match `os-release` content against known distribution names.
pub fn classify_os_release(content: &str) -> Option<Distribution> {
    let content = content.to_lowercase();
    OS_RELEASE_NAMES
        .iter()
        .find(|(name, _)| content.contains(name))
        .map(|(_, distribution)| *distribution)
}
