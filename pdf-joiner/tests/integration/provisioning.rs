//! Provisioning through a fake privilege helper.
//!
//! The helper logs each package-manager command line and, when asked to
//! install, drops a fake `pdfunite` into the search path so the re-probe
//! can find it.

use std::path::Path;

use pdf_joiner::backend::Backend;
use pdf_joiner::error::JoinerError;
use pdf_joiner::joiner::Joiner;
use pdf_joiner::orchestrator::BackendSelector;
use pdf_joiner::output::OutputFormatter;
use pdf_joiner::platform::Platform;
use pdf_joiner::probe::SearchPath;
use pdf_joiner::provision::{DistroDetector, Provisioner};
use tempfile::TempDir;

use crate::common::{Sandbox, install_script};

fn distro_root(marker: &str, content: &str) -> TempDir {
    let root = TempDir::new().unwrap();
    std::fs::create_dir_all(root.path().join("etc")).unwrap();
    std::fs::write(root.path().join(marker), content).unwrap();
    root
}

/// Helper that logs its arguments and installs `pdfunite` on "install".
fn installing_helper(log: &Path, bin: &Path) -> String {
    format!(
        "#!/bin/sh\necho \"$*\" >> '{log}'\nif [ \"$2\" = install ]; then\n  printf '#!/bin/sh\\n' > '{bin}/pdfunite'\n  chmod 755 '{bin}/pdfunite'\nfi\n",
        log = log.display(),
        bin = bin.display()
    )
}

/// Helper that logs its arguments and installs nothing.
fn inert_helper(log: &Path) -> String {
    format!("#!/bin/sh\necho \"$*\" >> '{}'\n", log.display())
}

/// Helper that logs its arguments and fails.
fn failing_helper(log: &Path) -> String {
    format!(
        "#!/bin/sh\necho \"$*\" >> '{}'\necho 'E: Could not get lock' >&2\nexit 100\n",
        log.display()
    )
}

fn logged(log: &Path) -> Vec<String> {
    std::fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

fn selector(sandbox: &Sandbox, helper: &Path, root: &TempDir) -> BackendSelector {
    BackendSelector::new(SearchPath::new([sandbox.bin.path()]))
        .with_detector(DistroDetector::with_root(root.path()))
        .with_provisioner(Some(Provisioner::new(Some(
            helper.display().to_string(),
        ))))
}

#[tokio::test]
async fn test_provisioning_then_reprobe_finds_backend() {
    let sandbox = Sandbox::new();
    let helpers = TempDir::new().unwrap();
    let helper = install_script(
        helpers.path(),
        "fake-sudo",
        &installing_helper(&sandbox.log(), sandbox.bin.path()),
    );
    let root = distro_root("etc/debian_version", "12.5\n");

    let joiner = selector(&sandbox, &helper, &root)
        .select(&Platform::Linux, &OutputFormatter::quiet())
        .await
        .unwrap();

    match joiner {
        Joiner::Linux(linux) => assert_eq!(linux.backend(), Backend::Pdfunite),
        other => panic!("unexpected joiner: {other:?}"),
    }
    assert_eq!(
        logged(&sandbox.log()),
        vec![
            "apt-get update",
            "apt-get install -y poppler-utils ghostscript"
        ]
    );
}

#[tokio::test]
async fn test_provisioning_uses_distribution_package_manager() {
    let sandbox = Sandbox::new();
    let helpers = TempDir::new().unwrap();
    let helper = install_script(helpers.path(), "fake-sudo", &inert_helper(&sandbox.log()));
    let root = distro_root("etc/os-release", "NAME=\"Arch Linux\"\nID=arch\n");

    let result = selector(&sandbox, &helper, &root)
        .select(&Platform::Linux, &OutputFormatter::quiet())
        .await;

    assert!(result.is_err());

    assert_eq!(
        logged(&sandbox.log()),
        vec!["pacman -S --noconfirm poppler ghostscript"]
    );
}

#[tokio::test]
async fn test_failed_step_aborts_provisioning() {
    let sandbox = Sandbox::new();
    let helpers = TempDir::new().unwrap();
    let helper = install_script(helpers.path(), "fake-sudo", &failing_helper(&sandbox.log()));
    let root = distro_root("etc/debian_version", "12.5\n");

    let err = selector(&sandbox, &helper, &root)
        .select(&Platform::Linux, &OutputFormatter::quiet())
        .await
        .unwrap_err();

    // The install step never runs after update fails.
    assert_eq!(logged(&sandbox.log()), vec!["apt-get update"]);

    match &err {
        JoinerError::NoBackendAvailable {
            provisioning: Some(cause),
            ..
        } => assert!(matches!(**cause, JoinerError::ProvisioningFailed { .. })),
        other => panic!("unexpected error: {other}"),
    }

    let msg = err.to_string();
    assert!(msg.contains("pdfunite, gs, qpdf"));
    assert!(msg.contains("E: Could not get lock"));
}

#[tokio::test]
async fn test_reprobe_happens_once() {
    let sandbox = Sandbox::new();
    let helpers = TempDir::new().unwrap();
    let helper = install_script(helpers.path(), "fake-sudo", &inert_helper(&sandbox.log()));
    let root = distro_root("etc/fedora-release", "Fedora release 40\n");

    let err = selector(&sandbox, &helper, &root)
        .select(&Platform::Linux, &OutputFormatter::quiet())
        .await
        .unwrap_err();

    assert_eq!(
        logged(&sandbox.log()),
        vec!["dnf install -y poppler-utils ghostscript"]
    );
    assert!(matches!(
        err,
        JoinerError::NoBackendAvailable {
            provisioning: None,
            ..
        }
    ));
}

#[tokio::test]
async fn test_provisioning_skipped_when_backend_present() {
    let sandbox = Sandbox::new();
    install_script(sandbox.bin.path(), "gs", "#!/bin/sh\n");
    let helpers = TempDir::new().unwrap();
    let helper = install_script(helpers.path(), "fake-sudo", &inert_helper(&sandbox.log()));
    let root = distro_root("etc/debian_version", "12.5\n");

    let joiner = selector(&sandbox, &helper, &root)
        .select(&Platform::Linux, &OutputFormatter::quiet())
        .await
        .unwrap();

    assert_eq!(joiner.name(), "Linux gs");
    assert!(logged(&sandbox.log()).is_empty());
}
