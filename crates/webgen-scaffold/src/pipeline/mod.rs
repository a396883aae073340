//! Phased scaffolding pipeline
//!
//! The pipeline is an ordered list of [`Phase`] descriptors driven by a plain
//! loop. Each phase is awaited to completion before the next one starts; the
//! first failure stops the run and is returned unchanged. Nothing created by
//! earlier phases is rolled back.
//!
//! ```text
//! initialize -> prompt -> resolve [+ git init] -> materialize [+ .gitignore]
//!            -> install (dev, runtime) -> finalize [git commit, vcs only]
//! ```

mod observer;
mod phase;
mod session;

pub use observer::{PhaseObserver, TracingObserver};
pub use phase::{Gate, Phase};
pub use session::Session;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;
use webgen_core::{Answers, Author, Error, ErrorKind, Manifest, Result, ScaffoldConfig};

use crate::author::AuthorLookup;
use crate::destination::resolve_destination;
use crate::git::VersionControl;
use crate::install::{DependencyInstaller, InstallMode};
use crate::manifest::{self, ManifestMerger};
use crate::prompt::{self, Prompter};
use crate::templates::{TemplateMaterializer, PROJECT_ASSETS, VCS_IGNORE_ASSET};

/// External capabilities the pipeline drives
pub struct Collaborators {
    pub prompter: Box<dyn Prompter>,
    pub author: Box<dyn AuthorLookup>,
    pub installer: Box<dyn DependencyInstaller>,
    pub vcs: Box<dyn VersionControl>,
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub session: Session,
    pub executed: Vec<Phase>,
    pub skipped: Vec<Phase>,
}

impl ScaffoldReport {
    pub fn destination(&self) -> &Utf8Path {
        self.session.destination()
    }

    pub fn answers(&self) -> Option<&Answers> {
        self.session.answers()
    }

    pub fn manifest(&self) -> Option<&Manifest> {
        self.session.manifest()
    }

    /// Every file written into the destination, in write order
    pub fn written(&self) -> &[Utf8PathBuf] {
        self.session.written()
    }
}

/// Runs the six scaffolding phases against a starting directory
pub struct ScaffoldPipeline {
    config: ScaffoldConfig,
    cwd: Utf8PathBuf,
    collaborators: Collaborators,
    observer: Box<dyn PhaseObserver>,
}

impl ScaffoldPipeline {
    pub fn new(config: ScaffoldConfig, cwd: Utf8PathBuf, collaborators: Collaborators) -> Self {
        Self {
            config,
            cwd,
            collaborators,
            observer: Box::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: impl PhaseObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Run every phase in order, stopping at the first failure
    ///
    /// # Returns
    /// A [`ScaffoldReport`] with the session state and which phases ran
    ///
    /// # Errors
    /// Returns the failing phase's error unchanged. Only author lookups that
    /// fail with [`ErrorKind::ConfigQuery`] are recovered. Files and directories
    /// created before the failure are left in place.
    pub async fn run(mut self) -> Result<ScaffoldReport> {
        let mut session = Session::new(&self.cwd);
        let mut executed = Vec::new();
        let mut skipped = Vec::new();

        for phase in Phase::ALL {
            if !phase.gate().allows(&session) {
                self.observer.on_phase_skipped(phase);
                skipped.push(phase);
                continue;
            }

            self.observer.on_phase_start(phase);
            if let Err(err) = self.execute(phase, &mut session).await {
                self.observer.on_phase_failed(phase, &err);
                return Err(err);
            }
            self.observer.on_phase_complete(phase);
            executed.push(phase);
        }

        Ok(ScaffoldReport {
            session,
            executed,
            skipped,
        })
    }

    async fn execute(&mut self, phase: Phase, session: &mut Session) -> Result<()> {
        match phase {
            Phase::Initialize => {
                self.initialize(session);
                Ok(())
            }
            Phase::Prompt => self.prompt(session),
            Phase::Resolve => self.resolve(session).await,
            Phase::Materialize => self.materialize(session).await,
            Phase::Install => self.install(session).await,
            Phase::Finalize => self.finalize(session).await,
        }
    }

    fn initialize(&self, session: &mut Session) {
        *session = Session::new(&self.cwd);
        debug!("Session initialized at {}", self.cwd);
    }

    fn prompt(&mut self, session: &mut Session) -> Result<()> {
        let cwd = session.original_root().to_path_buf();
        let questions = prompt::project_questions(&self.config.prompts);
        let set = prompt::collect(self.collaborators.prompter.as_mut(), &questions, &cwd)?;
        session.set_answers(prompt::into_answers(&set, &cwd)?);
        Ok(())
    }

    async fn resolve(&mut self, session: &mut Session) -> Result<()> {
        let answers = require_answers(session)?;

        if answers.create_dir() {
            self.observer.on_notice(
                Phase::Resolve,
                &format!(
                    "{} does not exist. I'll automatically create this folder.",
                    answers.name()
                ),
            );
        }
        let destination = resolve_destination(session.original_root(), &answers).await?;
        session.set_destination(destination);

        if answers.enable_vcs() {
            self.collaborators.vcs.init(session.destination()).await?;
            self.observer.on_notice(Phase::Resolve, "Git init done");
        }
        Ok(())
    }

    async fn materialize(&mut self, session: &mut Session) -> Result<()> {
        let answers = require_answers(session)?;
        let destination = session.destination().to_path_buf();

        let existing = manifest::read_existing(&destination).await?;
        let author = self.lookup_author().await?;
        let merged = ManifestMerger::new(&self.config.manifest).merge(&answers, &author, existing);
        let path = manifest::write_manifest(&destination, &merged).await?;
        self.observer
            .on_notice(Phase::Materialize, &format!("Wrote {}", manifest::MANIFEST_FILE));
        session.set_manifest(merged);
        session.record_written([path]);

        let materializer = TemplateMaterializer::new(&destination);
        if answers.enable_vcs() {
            session.record_written(materializer.copy(&VCS_IGNORE_ASSET).await?);
        }
        session.record_written(materializer.copy_all(PROJECT_ASSETS).await?);
        Ok(())
    }

    async fn install(&mut self, session: &mut Session) -> Result<()> {
        let destination = session.destination();
        let sets = [
            (&self.config.dependencies.dev, InstallMode::DevOnly),
            (&self.config.dependencies.runtime, InstallMode::Runtime),
        ];

        for (packages, mode) in sets {
            self.observer.on_notice(
                Phase::Install,
                &format!("Installing {} {} package(s)", packages.len(), mode),
            );
            self.collaborators
                .installer
                .install(destination, packages, mode)
                .await?;
        }
        Ok(())
    }

    async fn finalize(&mut self, session: &mut Session) -> Result<()> {
        let message = &self.config.git.commit_message;
        self.collaborators
            .vcs
            .commit_all(session.destination(), message)
            .await?;
        self.observer
            .on_notice(Phase::Finalize, &format!("Committed: {}", message));
        Ok(())
    }

    /// Author lookup failures of kind `ConfigQuery` degrade to an empty record
    async fn lookup_author(&self) -> Result<Author> {
        match self.collaborators.author.lookup().await {
            Ok(author) => Ok(author),
            Err(err) if err.kind() == ErrorKind::ConfigQuery => {
                debug!("Author lookup unavailable, using empty author: {}", err);
                Ok(Author::default())
            }
            Err(err) => Err(err),
        }
    }
}

fn require_answers(session: &Session) -> Result<Answers> {
    session
        .answers()
        .cloned()
        .ok_or_else(|| Error::missing_answer(prompt::KEY_NAME))
}
