//! Backend selection and the end-to-end join flow.
//!
//! The flow for one run:
//! 1. Validate inputs and create the output directory
//! 2. Select a [`Joiner`] for the platform, provisioning once on Linux if
//!    nothing is installed
//! 3. Invoke the joiner and report the outcome
//!
//! Nothing is retried except the single re-probe after provisioning, and a
//! failed backend may leave a partial file at the destination.
//!
//! # Examples
//!
//! ```no_run
//! use pdf_joiner::config::Config;
//! use pdf_joiner::orchestrator::join_pdfs;
//! use pdf_joiner::output::OutputFormatter;
//! use std::path::PathBuf;
//!
//! # async fn example() -> pdf_joiner::Result<()> {
//! let config = Config::new(
//!     vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!     PathBuf::from("joined.pdf"),
//! );
//! let report = join_pdfs(&config, &OutputFormatter::default()).await?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::backend::candidate_identifiers;
use crate::config::{Config, ProvisionMode};
use crate::error::{JoinerError, Result};
use crate::joiner::{JoinRequest, Joiner, LinuxJoiner, MacOsJoiner};
use crate::output::OutputFormatter;
use crate::platform::Platform;
use crate::probe::{SearchPath, ToolLocator, find_backend};
use crate::provision::{DistroDetector, Provisioner};
use crate::validation::Validator;

/// Summary of a successful join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinReport {
    /// Inputs in the order they were joined.
    pub inputs: Vec<PathBuf>,
    /// Destination that was written.
    pub output: PathBuf,
    /// Display name of the backend that ran.
    pub backend: String,
}

impl JoinReport {
    /// One-line summary naming file count, destination and backend.
    pub fn summary(&self) -> String {
        format!(
            "Successfully joined {} PDF files into '{}' using {}",
            self.inputs.len(),
            self.output.display(),
            self.backend
        )
    }
}

/// Picks the joiner for a platform.
#[derive(Debug, Clone)]
pub struct BackendSelector<L = SearchPath> {
    locator: L,
    macos: MacOsJoiner,
    detector: DistroDetector,
    provisioner: Option<Provisioner>,
}

impl BackendSelector<SearchPath> {
    /// Selector for the running host, honoring the provisioning settings.
    pub fn from_config(config: &Config) -> Self {
        let provisioner = match config.provision {
            ProvisionMode::Auto => Some(Provisioner::new(config.privilege_helper.clone())),
            ProvisionMode::Skip => None,
        };

        Self::new(SearchPath::from_env()).with_provisioner(provisioner)
    }
}

impl<L: ToolLocator> BackendSelector<L> {
    /// Selector resolving Linux backends through `locator`.
    pub fn new(locator: L) -> Self {
        Self {
            locator,
            macos: MacOsJoiner::new(),
            detector: DistroDetector::new(),
            provisioner: Some(Provisioner::default()),
        }
    }

    /// Use a different macOS utility location.
    pub fn with_macos_joiner(mut self, macos: MacOsJoiner) -> Self {
        self.macos = macos;
        self
    }

    /// Use a different distribution detector.
    pub fn with_detector(mut self, detector: DistroDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Set the provisioner; `None` disables provisioning.
    pub fn with_provisioner(mut self, provisioner: Option<Provisioner>) -> Self {
        self.provisioner = provisioner;
        self
    }

    /// Return a ready-to-use joiner for `platform`.
    ///
    /// # Errors
    ///
    /// - [`JoinerError::MacOsJoinerMissing`] if the macOS utility is absent
    /// - [`JoinerError::NoBackendAvailable`] if no Linux backend resolves
    /// - [`JoinerError::UnsupportedPlatform`] for any other platform
    pub async fn select(&self, platform: &Platform, formatter: &OutputFormatter) -> Result<Joiner> {
        match platform {
            Platform::MacOs => {
                if !self.macos.is_available() {
                    return Err(JoinerError::MacOsJoinerMissing {
                        path: self.macos.path().to_path_buf(),
                    });
                }
                Ok(Joiner::MacOs(self.macos.clone()))
            }
            Platform::Linux => self.select_linux(formatter).await.map(Joiner::Linux),
            Platform::Other(os) => Err(JoinerError::unsupported_platform(os.as_str())),
        }
    }

    async fn select_linux(&self, formatter: &OutputFormatter) -> Result<LinuxJoiner> {
        if let Some(joiner) = self.probe_linux(formatter) {
            return Ok(joiner);
        }

        let Some(provisioner) = &self.provisioner else {
            return Err(JoinerError::no_backend_available(candidate_identifiers(), None));
        };

        formatter.warning("No PDF joining tool found, attempting to install one");
        if let Err(err) = provisioner.provision(&self.detector, formatter).await {
            return Err(JoinerError::no_backend_available(
                candidate_identifiers(),
                Some(err),
            ));
        }

        self.probe_linux(formatter)
            .ok_or_else(|| JoinerError::no_backend_available(candidate_identifiers(), None))
    }

    fn probe_linux(&self, formatter: &OutputFormatter) -> Option<LinuxJoiner> {
        formatter.debug(&format!(
            "Looking for: {}",
            candidate_identifiers().join(", ")
        ));

        let (backend, program) = find_backend(&self.locator)?;
        formatter.debug(&format!("Found {backend} at {}", program.display()));
        Some(LinuxJoiner::new(backend, program))
    }
}

/// Runs the whole flow for one configuration.
#[derive(Debug, Clone)]
pub struct Orchestrator<L = SearchPath> {
    platform: Platform,
    selector: BackendSelector<L>,
}

impl Orchestrator<SearchPath> {
    /// Orchestrator for the running host.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Platform::current(), BackendSelector::from_config(config))
    }
}

impl<L: ToolLocator> Orchestrator<L> {
    /// Orchestrator for an explicit platform and selector.
    pub fn new(platform: Platform, selector: BackendSelector<L>) -> Self {
        Self { platform, selector }
    }

    /// Validate, select a backend and join.
    ///
    /// Usage errors are reported before any backend is probed.
    pub async fn run(&self, config: &Config, formatter: &OutputFormatter) -> Result<JoinReport> {
        config.validate()?;

        let validator = Validator::new();
        let summary = validator.validate_inputs(config.inputs())?;
        for warning in &summary.warnings {
            formatter.warning(warning);
        }

        validator.prepare_output(config).await?;

        let joiner = self.selector.select(&self.platform, formatter).await?;
        formatter.debug(&format!("Using {}", joiner.name()));

        let request = JoinRequest::new(config.inputs.clone(), config.output.clone())?;
        joiner.join(&request).await?;

        Ok(JoinReport {
            inputs: request.inputs().to_vec(),
            output: request.output().to_path_buf(),
            backend: joiner.name(),
        })
    }
}

/// Join the configured inputs on the running host.
pub async fn join_pdfs(config: &Config, formatter: &OutputFormatter) -> Result<JoinReport> {
    Orchestrator::from_config(config).run(config, formatter).await
}
