//! # webgen-scaffold
//!
//! The scaffolding pipeline behind the webgen CLI:
//! - Prompt collection with default substitution
//! - Destination directory resolution
//! - `package.json` merging with an existing manifest
//! - Verbatim copying of embedded template assets
//! - Dependency installation and git integration through narrow traits
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use webgen_core::ScaffoldConfig;
//! use webgen_scaffold::pipeline::{Collaborators, ScaffoldPipeline};
//! use webgen_scaffold::{GitRepository, NpmAuthorLookup, NpmInstaller, Prompter};
//!
//! # async fn example(prompter: Box<dyn Prompter>) -> webgen_core::Result<()> {
//! let config = ScaffoldConfig::default();
//! let collaborators = Collaborators {
//!     prompter,
//!     author: Box::new(NpmAuthorLookup::default()),
//!     installer: Box::new(NpmInstaller::from_config(&config.installer)),
//!     vcs: Box::new(GitRepository::from_config(&config.git)),
//! };
//! let report = ScaffoldPipeline::new(config, Utf8PathBuf::from("."), collaborators)
//!     .run()
//!     .await?;
//! println!("Project written to {}", report.destination());
//! # Ok(())
//! # }
//! ```

pub mod author;
pub mod destination;
pub mod git;
pub mod install;
pub mod manifest;
pub mod pipeline;
mod process;
pub mod prompt;
pub mod templates;

pub use author::{AuthorLookup, NpmAuthorLookup};
pub use git::{GitRepository, VersionControl};
pub use install::{DependencyInstaller, InstallMode, NpmInstaller};
pub use pipeline::{Collaborators, Phase, PhaseObserver, ScaffoldPipeline, ScaffoldReport};
pub use prompt::Prompter;
pub use templates::TemplateMaterializer;
