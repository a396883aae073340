//! User answers gathered during the prompt phase

use camino::Utf8Path;
use serde::Serialize;

use crate::utils::dir_base_name;

/// Answers collected from the user, plus the derived `create_dir` flag.
///
/// Constructed once by [`Answers::derive`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answers {
    name: String,
    description: String,
    enable_vcs: bool,
    create_dir: bool,
}

impl Answers {
    /// Build answers relative to the directory the user ran webgen from.
    ///
    /// `create_dir` is true iff `name` differs from the base name of `cwd`.
    pub fn derive(
        name: impl Into<String>,
        description: impl Into<String>,
        enable_vcs: bool,
        cwd: &Utf8Path,
    ) -> Self {
        let name = name.into();
        let create_dir = name != dir_base_name(cwd);
        Self {
            name,
            description: description.into(),
            enable_vcs,
            create_dir,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether a git repository should be initialized and committed
    pub fn enable_vcs(&self) -> bool {
        self.enable_vcs
    }

    /// Whether a project directory named after the project must be created
    pub fn create_dir(&self) -> bool {
        self.create_dir
    }
}
