//! Git-backed [`VersionControl`] implementation

use async_trait::async_trait;
use camino::Utf8Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info};
use webgen_core::config::GitConfig;
use webgen_core::{Error, Result};

use super::VersionControl;
use crate::process;

/// Runs the git binary, never more than `max_concurrent_processes` at once
#[derive(Debug, Clone)]
pub struct GitRepository {
    binary: String,
    permits: Arc<Semaphore>,
}

impl GitRepository {
    pub fn new(binary: impl Into<String>, max_concurrent_processes: usize) -> Self {
        Self {
            binary: binary.into(),
            permits: Arc::new(Semaphore::new(max_concurrent_processes.max(1))),
        }
    }

    pub fn from_config(config: &GitConfig) -> Self {
        Self::new(&config.binary, config.max_concurrent_processes)
    }

    async fn git(&self, root: &Utf8Path, args: &[&str]) -> Result<String> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| Error::external_process(&self.binary, e.to_string()))?;
        process::run(&self.binary, args, Some(root)).await
    }
}

#[async_trait]
impl VersionControl for GitRepository {
    async fn init(&self, root: &Utf8Path) -> Result<()> {
        info!("Initializing git repository at: {}", root);

        if root.join(".git").exists() {
            debug!("Git repository already exists at: {}", root);
            return Ok(());
        }

        self.git(root, &["init"]).await?;
        info!("Repository initialized successfully");
        Ok(())
    }

    async fn commit_all(&self, root: &Utf8Path, message: &str) -> Result<()> {
        info!("Committing project files in: {}", root);

        self.git(root, &["add", "--all"]).await?;
        self.git(root, &["commit", "-m", message]).await?;

        info!("Commit created: {}", message);
        Ok(())
    }
}
