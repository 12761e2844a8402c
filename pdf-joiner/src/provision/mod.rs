//! Best-effort installation of a PDF backend.
//!
//! When no backend is found on Linux, the provisioner installs poppler and
//! Ghostscript with the distribution's package manager. Commands run
//! through a privilege helper (`sudo` by default) strictly in sequence, and
//! the first non-zero exit aborts the whole attempt.
//!
//! Failure here is expected on locked-down hosts; it only removes one
//! fallback and the caller reports the missing backends as usual.

mod distro;

pub use distro::{DistroDetector, Distribution, classify_os_release};

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use crate::config::DEFAULT_PRIVILEGE_HELPER;
use crate::error::{JoinerError, Result};
use crate::output::OutputFormatter;
use crate::process::{display_command, run_captured};

/// One package-manager invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCommand {
    /// Package manager executable.
    pub program: &'static str,
    /// Arguments passed to it.
    pub args: Vec<&'static str>,
}

impl PackageCommand {
    fn new(program: &'static str, args: &[&'static str]) -> Self {
        Self {
            program,
            args: args.to_vec(),
        }
    }
}

impl fmt::Display for PackageCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Ordered package-manager commands for one distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    /// Distribution the plan targets.
    pub distribution: Distribution,
    /// Commands, run in order.
    pub commands: Vec<PackageCommand>,
}

impl InstallPlan {
    /// Plan installing poppler and Ghostscript on `distribution`.
    ///
    /// # Errors
    ///
    /// Returns [`JoinerError::UnsupportedDistribution`] when no package
    /// manager mapping exists.
    pub fn for_distribution(distribution: Distribution) -> Result<Self> {
        let commands = match distribution {
            Distribution::Debian => vec![
                PackageCommand::new("apt-get", &["update"]),
                PackageCommand::new(
                    "apt-get",
                    &["install", "-y", "poppler-utils", "ghostscript"],
                ),
            ],
            Distribution::Fedora => vec![PackageCommand::new(
                "dnf",
                &["install", "-y", "poppler-utils", "ghostscript"],
            )],
            Distribution::RedHat => vec![PackageCommand::new(
                "yum",
                &["install", "-y", "poppler-utils", "ghostscript"],
            )],
            Distribution::Arch => vec![PackageCommand::new(
                "pacman",
                &["-S", "--noconfirm", "poppler", "ghostscript"],
            )],
            Distribution::Suse => {
                return Err(JoinerError::unsupported_distribution(
                    distribution.as_str(),
                ));
            }
        };

        Ok(Self {
            distribution,
            commands,
        })
    }
}

/// Runs install plans, optionally through a privilege helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provisioner {
    privilege_helper: Option<String>,
}

impl Provisioner {
    /// Provisioner escalating through `privilege_helper`, or running
    /// package managers directly when `None`.
    pub fn new(privilege_helper: Option<String>) -> Self {
        Self { privilege_helper }
    }

    /// Program and arguments actually executed for `command`.
    pub fn command_line(&self, command: &PackageCommand) -> (PathBuf, Vec<OsString>) {
        let package_args = command.args.iter().map(|arg| OsString::from(*arg));
        match &self.privilege_helper {
            Some(helper) => (
                PathBuf::from(helper),
                std::iter::once(OsString::from(command.program))
                    .chain(package_args)
                    .collect(),
            ),
            None => (PathBuf::from(command.program), package_args.collect()),
        }
    }

    /// Detect the distribution and install the backends on it.
    pub async fn provision(
        &self,
        detector: &DistroDetector,
        formatter: &OutputFormatter,
    ) -> Result<()> {
        let distribution = detector.detect();
        formatter.debug(&format!("Detected Linux distribution: {distribution}"));

        let plan = InstallPlan::for_distribution(distribution)?;
        self.run_plan(&plan, formatter).await
    }

    /// Run every command of `plan` in order, stopping at the first failure.
    pub async fn run_plan(&self, plan: &InstallPlan, formatter: &OutputFormatter) -> Result<()> {
        for command in &plan.commands {
            let (program, args) = self.command_line(command);
            let line = display_command(&program, &args);
            formatter.info(&format!("Running: {line}"));

            let output = run_captured(&program, &args).await?;
            if !output.success() {
                return Err(JoinerError::ProvisioningFailed {
                    command: line,
                    status: output.status,
                    output: output.combined,
                });
            }
        }

        Ok(())
    }
}

impl Default for Provisioner {
    fn default() -> Self {
        Self::new(Some(DEFAULT_PRIVILEGE_HELPER.to_string()))
    }
}
