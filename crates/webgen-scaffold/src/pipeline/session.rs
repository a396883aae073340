//! Session state owned by the pipeline for the duration of one run

use camino::{Utf8Path, Utf8PathBuf};
use webgen_core::{Answers, Manifest};

/// Mutable state threaded through the phases.
///
/// Only the orchestrator holds this; phases receive it by `&mut`.
#[derive(Debug, Clone)]
pub struct Session {
    original_root: Utf8PathBuf,
    destination: Utf8PathBuf,
    answers: Option<Answers>,
    manifest: Option<Manifest>,
    written: Vec<Utf8PathBuf>,
}

impl Session {
    pub fn new(root: &Utf8Path) -> Self {
        Self {
            original_root: root.to_path_buf(),
            destination: root.to_path_buf(),
            answers: None,
            manifest: None,
            written: Vec::new(),
        }
    }

    /// Directory webgen was started from
    pub fn original_root(&self) -> &Utf8Path {
        &self.original_root
    }

    /// Directory all generated files go into
    pub fn destination(&self) -> &Utf8Path {
        &self.destination
    }

    pub fn answers(&self) -> Option<&Answers> {
        self.answers.as_ref()
    }

    pub fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }

    /// Files written so far, in write order
    pub fn written(&self) -> &[Utf8PathBuf] {
        &self.written
    }

    pub(crate) fn set_answers(&mut self, answers: Answers) {
        self.answers = Some(answers);
    }

    pub(crate) fn set_destination(&mut self, destination: Utf8PathBuf) {
        self.destination = destination;
    }

    pub(crate) fn set_manifest(&mut self, manifest: Manifest) {
        self.manifest = Some(manifest);
    }

    pub(crate) fn record_written(&mut self, paths: impl IntoIterator<Item = Utf8PathBuf>) {
        self.written.extend(paths);
    }
}
