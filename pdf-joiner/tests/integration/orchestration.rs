//! Full runs through the orchestrator with fake backends.

use pdf_joiner::config::Config;
use pdf_joiner::error::JoinerError;
use pdf_joiner::orchestrator::{BackendSelector, Orchestrator};
use pdf_joiner::output::OutputFormatter;
use pdf_joiner::platform::Platform;
use pdf_joiner::probe::SearchPath;

use crate::common::{Sandbox, failing_script, install_script, recorded_lines, recording_script};

fn linux_orchestrator(sandbox: &Sandbox) -> Orchestrator {
    Orchestrator::new(
        Platform::Linux,
        BackendSelector::new(SearchPath::new([sandbox.bin.path()])).with_provisioner(None),
    )
}

#[tokio::test]
async fn test_run_reports_backend_and_destination() {
    let sandbox = Sandbox::new();
    install_script(sandbox.bin.path(), "qpdf", &recording_script(&sandbox.log()));
    install_script(sandbox.bin.path(), "gs", &recording_script(&sandbox.log()));

    let output = sandbox.docs.path().join("joined.pdf");
    let config = Config::new(sandbox.inputs(), output.clone());

    let report = linux_orchestrator(&sandbox)
        .run(&config, &OutputFormatter::quiet())
        .await
        .unwrap();

    assert_eq!(report.backend, "Linux gs");
    assert_eq!(report.output, output);
    assert_eq!(report.inputs.len(), 2);
    assert!(
        recorded_lines(&sandbox.log())
            .iter()
            .any(|line| line == "-sDEVICE=pdfwrite")
    );
}

#[tokio::test]
async fn test_run_creates_output_directory_first() {
    let sandbox = Sandbox::new();
    // Fails if the destination directory is missing when it runs.
    let script = "#!/bin/sh\nfor last; do :; done\n[ -d \"$(dirname \"$last\")\" ] || exit 9\n: > \"$last\"\n";
    install_script(sandbox.bin.path(), "pdfunite", script);

    let output = sandbox.docs.path().join("a").join("b").join("joined.pdf");
    let config = Config::new(sandbox.inputs(), output.clone());

    linux_orchestrator(&sandbox)
        .run(&config, &OutputFormatter::quiet())
        .await
        .unwrap();

    assert!(output.parent().unwrap().is_dir());
    assert!(output.is_file());
}

#[tokio::test]
async fn test_run_surfaces_backend_output() {
    let sandbox = Sandbox::new();
    install_script(
        sandbox.bin.path(),
        "pdfunite",
        &failing_script("Syntax Error: Couldn't find trailer dictionary", 1),
    );

    let config = Config::new(sandbox.inputs(), sandbox.docs.path().join("joined.pdf"));
    let err = linux_orchestrator(&sandbox)
        .run(&config, &OutputFormatter::quiet())
        .await
        .unwrap_err();

    assert!(matches!(err, JoinerError::JoinFailed { .. }));
    assert!(
        err.to_string()
            .contains("Syntax Error: Couldn't find trailer dictionary")
    );
}

#[tokio::test]
async fn test_run_without_backend_fails() {
    let sandbox = Sandbox::new();
    let config = Config::new(sandbox.inputs(), sandbox.docs.path().join("joined.pdf"));

    let err = linux_orchestrator(&sandbox)
        .run(&config, &OutputFormatter::quiet())
        .await
        .unwrap_err();

    assert!(matches!(err, JoinerError::NoBackendAvailable { .. }));
    assert!(!sandbox.docs.path().join("joined.pdf").exists());
}

#[tokio::test]
async fn test_run_on_macos_uses_utility() {
    let sandbox = Sandbox::new();
    let utility = install_script(sandbox.bin.path(), "join", &recording_script(&sandbox.log()));

    let orchestrator = Orchestrator::new(
        Platform::MacOs,
        BackendSelector::new(SearchPath::new([sandbox.bin.path()]))
            .with_provisioner(None)
            .with_macos_joiner(pdf_joiner::joiner::MacOsJoiner::with_path(&utility)),
    );
    let output = sandbox.docs.path().join("joined.pdf");
    let config = Config::new(sandbox.inputs(), output.clone());

    let report = orchestrator
        .run(&config, &OutputFormatter::quiet())
        .await
        .unwrap();

    assert_eq!(report.backend, "macOS built-in PDF joiner");
    let lines = recorded_lines(&sandbox.log());
    assert_eq!(lines[0], "-o");
    assert_eq!(lines[1], output.display().to_string());
}
