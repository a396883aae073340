//! Configuration structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete webgen configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScaffoldConfig {
    /// Generated manifest defaults
    #[serde(default)]
    pub manifest: ManifestDefaults,

    /// Packages installed into the new project
    #[serde(default)]
    pub dependencies: DependencyConfig,

    /// Version control settings
    #[serde(default)]
    pub git: GitConfig,

    /// Package installer settings
    #[serde(default)]
    pub installer: InstallerConfig,

    /// Prompt defaults
    #[serde(default)]
    pub prompts: PromptConfig,
}

/// Fixed fields written into every generated manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ManifestDefaults {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default = "default_license")]
    pub license: String,

    #[serde(default = "default_scripts")]
    pub scripts: BTreeMap<String, String>,
}

impl Default for ManifestDefaults {
    fn default() -> Self {
        Self {
            version: default_version(),
            license: default_license(),
            scripts: default_scripts(),
        }
    }
}

/// Development-only and runtime package sets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DependencyConfig {
    #[serde(default = "default_dev_packages")]
    pub dev: Vec<String>,

    #[serde(default = "default_runtime_packages")]
    pub runtime: Vec<String>,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            dev: default_dev_packages(),
            runtime: default_runtime_packages(),
        }
    }
}

/// Git invocation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitConfig {
    /// Git executable name or path
    #[serde(default = "default_git_binary")]
    pub binary: String,

    /// Upper bound on concurrently running git subprocesses
    #[serde(default = "default_max_concurrent_processes")]
    pub max_concurrent_processes: usize,

    /// Message used for the final commit
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            binary: default_git_binary(),
            max_concurrent_processes: default_max_concurrent_processes(),
            commit_message: default_commit_message(),
        }
    }
}

/// Package installer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InstallerConfig {
    #[serde(default = "default_installer_program")]
    pub program: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            program: default_installer_program(),
        }
    }
}

/// Defaults offered by the interactive prompts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PromptConfig {
    #[serde(default = "default_description")]
    pub default_description: String,

    #[serde(default)]
    pub default_enable_vcs: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            default_description: default_description(),
            default_enable_vcs: false,
        }
    }
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_license() -> String {
    "ISC".to_string()
}

fn default_scripts() -> BTreeMap<String, String> {
    BTreeMap::from([("start".to_string(), "gulp".to_string())])
}

fn default_dev_packages() -> Vec<String> {
    [
        "browser-sync",
        "cssnano",
        "del",
        "fancy-log",
        "gulp",
        "gulp-htmlmin",
        "gulp-postcss",
        "gulp-sass",
        "gulp-terser",
        "ini",
        "lodash.get",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_runtime_packages() -> Vec<String> {
    vec!["normalize.css".to_string()]
}

fn default_git_binary() -> String {
    "git".to_string()
}

fn default_max_concurrent_processes() -> usize {
    4
}

fn default_commit_message() -> String {
    "setup complete".to_string()
}

fn default_installer_program() -> String {
    "npm".to_string()
}

fn default_description() -> String {
    "A simple app description".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScaffoldConfig::default();
        assert_eq!(config.manifest.version, "0.1.0");
        assert_eq!(config.manifest.license, "ISC");
        assert_eq!(config.manifest.scripts.get("start").unwrap(), "gulp");
        assert_eq!(config.dependencies.dev.len(), 11);
        assert_eq!(config.dependencies.runtime, vec!["normalize.css"]);
        assert_eq!(config.git.max_concurrent_processes, 4);
        assert_eq!(config.git.commit_message, "setup complete");
        assert!(!config.prompts.default_enable_vcs);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: ScaffoldConfig = serde_yaml_ng::from_str("git:\n  binary: /usr/bin/git\n").unwrap();
        assert_eq!(config.git.binary, "/usr/bin/git");
        assert_eq!(config.git.max_concurrent_processes, 4);
        assert_eq!(config.installer.program, "npm");
    }
}
