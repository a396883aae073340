//! Hierarchical configuration loader with precedence
//!
//! Files are partial overlays: a key missing from a higher layer keeps the
//! value from the layer below it.

use crate::error::{Error, Result};
use crate::utils::get_home_dir;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde_yaml_ng::Value;
use std::env;
use std::fs;
use tracing::debug;

use super::types::ScaffoldConfig;

const DEFAULTS_FILE: &str = "scaffold-defaults.yaml";
const USER_CONFIG_FILE: &str = "config.yaml";

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

/// Configuration hierarchy loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Directory holding the user config file
    config_dir: Option<Utf8PathBuf>,

    /// File passed explicitly on the command line
    explicit_file: Option<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a loader rooted at the standard config directory (~/.webgen)
    pub fn new() -> Result<Self> {
        let home = get_home_dir()?;
        let home = Utf8PathBuf::from_path_buf(home)
            .map_err(|p| Error::invalid_config(format!("Non UTF-8 home directory: {:?}", p)))?;
        Ok(Self::with_dir(home.join(".webgen")))
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self {
            config_dir: Some(config_dir),
            explicit_file: None,
        }
    }

    /// Create a loader that only uses embedded defaults and the environment
    pub fn embedded_only() -> Self {
        Self {
            config_dir: None,
            explicit_file: None,
        }
    }

    /// Layer an explicit config file above the user config
    pub fn with_file(mut self, path: Option<Utf8PathBuf>) -> Self {
        self.explicit_file = path;
        self
    }

    /// Load configuration with hierarchical precedence
    pub fn load(&self) -> Result<ScaffoldConfig> {
        let mut merged = Self::load_embedded_value(DEFAULTS_FILE)?;

        if let Some(dir) = &self.config_dir {
            let user_path = dir.join(USER_CONFIG_FILE);
            if user_path.exists() {
                debug!("Loading user config from {}", user_path);
                merge_values(&mut merged, Self::load_yaml_value(&user_path)?);
            }
        }

        if let Some(path) = &self.explicit_file {
            if !path.exists() {
                return Err(Error::invalid_config(format!(
                    "Config file not found: {}",
                    path
                )));
            }
            debug!("Loading config from {}", path);
            merge_values(&mut merged, Self::load_yaml_value(path)?);
        }

        let config: ScaffoldConfig = serde_yaml_ng::from_value(merged)
            .map_err(|e| Error::invalid_config(format!("Failed to parse configuration: {}", e)))?;

        let config = Self::apply_env_overrides(config)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Reject values no layer may set, regardless of where they came from
    fn validate(config: &ScaffoldConfig) -> Result<()> {
        if config.git.max_concurrent_processes == 0 {
            return Err(Error::invalid_config(
                "git.max-concurrent-processes must be at least 1",
            ));
        }
        Ok(())
    }

    /// Load an embedded configuration file as an untyped YAML value
    fn load_embedded_value(filename: &str) -> Result<Value> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::invalid_config(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                filename, e
            ))
        })
    }

    fn load_yaml_value(path: &Utf8Path) -> Result<Value> {
        let content = fs::read_to_string(path).map_err(|e| Error::file_system(path, e))?;
        let value: Value = serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))?;
        // An empty file parses as null and changes nothing
        Ok(value)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: ScaffoldConfig) -> Result<ScaffoldConfig> {
        if let Ok(val) = env::var("WEBGEN_NPM") {
            config.installer.program = val;
        }

        if let Ok(val) = env::var("WEBGEN_GIT") {
            config.git.binary = val;
        }

        if let Ok(val) = env::var("WEBGEN_GIT_MAX_PROCESSES") {
            config.git.max_concurrent_processes = val.parse().map_err(|_| {
                Error::invalid_config("WEBGEN_GIT_MAX_PROCESSES must be a valid number")
            })?;
        }

        if let Ok(val) = env::var("WEBGEN_COMMIT_MESSAGE") {
            config.git.commit_message = val;
        }

        Ok(config)
    }
}

/// Deep-merge `overlay` into `base`; mappings merge key by key, anything else replaces
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn utf8_dir(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap()
    }

    #[test]
    #[serial]
    fn test_embedded_defaults() {
        let config = ConfigLoader::embedded_only().load().unwrap();
        assert_eq!(config.manifest.version, "0.1.0");
        assert_eq!(config.manifest.license, "ISC");
        assert_eq!(config.dependencies.runtime, vec!["normalize.css"]);
        assert_eq!(config.git.commit_message, "setup complete");
    }

    #[test]
    #[serial]
    fn test_user_file_overlays_single_key() {
        let temp = TempDir::new().unwrap();
        let dir = utf8_dir(&temp);
        fs::write(dir.join("config.yaml"), "manifest:\n  license: MIT\n").unwrap();

        let config = ConfigLoader::with_dir(dir).load().unwrap();
        assert_eq!(config.manifest.license, "MIT");
        assert_eq!(config.manifest.version, "0.1.0");
        assert_eq!(config.manifest.scripts.get("start").unwrap(), "gulp");
    }

    #[test]
    #[serial]
    fn test_explicit_file_beats_user_file() {
        let temp = TempDir::new().unwrap();
        let dir = utf8_dir(&temp);
        fs::write(dir.join("config.yaml"), "installer:\n  program: pnpm\n").unwrap();
        let explicit = dir.join("custom.yaml");
        fs::write(&explicit, "installer:\n  program: yarn\n").unwrap();

        let config = ConfigLoader::with_dir(dir)
            .with_file(Some(explicit))
            .load()
            .unwrap();
        assert_eq!(config.installer.program, "yarn");
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_error() {
        let result = ConfigLoader::embedded_only()
            .with_file(Some(Utf8PathBuf::from("/nonexistent/webgen.yaml")))
            .load();
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        env::set_var("WEBGEN_GIT_MAX_PROCESSES", "2");
        env::set_var("WEBGEN_COMMIT_MESSAGE", "initial scaffold");
        let config = ConfigLoader::embedded_only().load();
        env::remove_var("WEBGEN_GIT_MAX_PROCESSES");
        env::remove_var("WEBGEN_COMMIT_MESSAGE");

        let config = config.unwrap();
        assert_eq!(config.git.max_concurrent_processes, 2);
        assert_eq!(config.git.commit_message, "initial scaffold");
    }

    #[test]
    #[serial]
    fn test_invalid_env_override() {
        env::set_var("WEBGEN_GIT_MAX_PROCESSES", "many");
        let result = ConfigLoader::embedded_only().load();
        env::remove_var("WEBGEN_GIT_MAX_PROCESSES");

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    #[serial]
    fn test_zero_git_processes_rejected_from_file() {
        let temp = TempDir::new().unwrap();
        let dir = utf8_dir(&temp);
        fs::write(
            dir.join("config.yaml"),
            "git:\n  max-concurrent-processes: 0\n",
        )
        .unwrap();

        let result = ConfigLoader::with_dir(dir).load();
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    #[serial]
    fn test_zero_git_processes_rejected_from_env() {
        env::set_var("WEBGEN_GIT_MAX_PROCESSES", "0");
        let result = ConfigLoader::embedded_only().load();
        env::remove_var("WEBGEN_GIT_MAX_PROCESSES");

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_merge_values_nested() {
        let mut base: Value = serde_yaml_ng::from_str("a:\n  b: 1\n  c: 2\n").unwrap();
        let overlay: Value = serde_yaml_ng::from_str("a:\n  c: 3\nd: 4\n").unwrap();
        merge_values(&mut base, overlay);

        let expected: Value = serde_yaml_ng::from_str("a:\n  b: 1\n  c: 3\nd: 4\n").unwrap();
        assert_eq!(base, expected);
    }
}
