//! Dependency installer collaborator

use async_trait::async_trait;
use camino::Utf8Path;
use std::fmt;
use tracing::{debug, info};
use webgen_core::config::InstallerConfig;
use webgen_core::{Error, Result};

use crate::process;

/// Which section of the manifest the packages are recorded in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    /// `devDependencies`
    DevOnly,
    /// `dependencies`
    Runtime,
}

impl InstallMode {
    fn as_flag(&self) -> &'static str {
        match self {
            Self::DevOnly => "--save-dev",
            Self::Runtime => "--save",
        }
    }
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DevOnly => f.write_str("dev"),
            Self::Runtime => f.write_str("runtime"),
        }
    }
}

/// Installs a set of packages into the project at `root`
#[async_trait]
pub trait DependencyInstaller: Send + Sync {
    /// Install `packages`, recording them as `mode` dependencies
    ///
    /// # Errors
    /// Returns [`Error::CommandNotFound`] if the installer is missing and
    /// [`Error::ExternalProcess`] if it exits unsuccessfully
    async fn install(&self, root: &Utf8Path, packages: &[String], mode: InstallMode)
        -> Result<()>;
}

/// Installs packages with `npm install`
#[derive(Debug, Clone)]
pub struct NpmInstaller {
    program: String,
}

impl NpmInstaller {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &InstallerConfig) -> Self {
        Self::new(&config.program)
    }

    /// Full argument list passed to the installer
    fn install_args(packages: &[String], mode: InstallMode) -> Vec<String> {
        let mut args = vec!["install".to_string(), mode.as_flag().to_string()];
        args.extend(packages.iter().cloned());
        args
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new("npm")
    }
}

#[async_trait]
impl DependencyInstaller for NpmInstaller {
    async fn install(
        &self,
        root: &Utf8Path,
        packages: &[String],
        mode: InstallMode,
    ) -> Result<()> {
        if packages.is_empty() {
            debug!("No {} packages to install", mode);
            return Ok(());
        }

        let program = process::locate(&self.program)
            .ok_or_else(|| Error::command_not_found(&self.program))?;

        info!("Installing {} {} package(s)", packages.len(), mode);
        process::run(&program, Self::install_args(packages, mode), Some(root)).await?;
        Ok(())
    }
}
