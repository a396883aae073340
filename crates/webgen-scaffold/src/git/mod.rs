//! Version control collaborator
//!
//! The pipeline only needs two operations: initialize a repository at the
//! destination root, and later stage everything and commit. Both go through
//! the [`VersionControl`] trait so tests can record calls instead of spawning git.

mod repository;

pub use repository::GitRepository;

use async_trait::async_trait;
use camino::Utf8Path;
use webgen_core::Result;

/// Repository operations used by the scaffolding pipeline
#[async_trait]
pub trait VersionControl: Send + Sync {
    /// Initialize a repository at `root`; a no-op if one already exists
    async fn init(&self, root: &Utf8Path) -> Result<()>;

    /// Stage every file under `root` and commit with `message`
    async fn commit_all(&self, root: &Utf8Path, message: &str) -> Result<()>;
}
