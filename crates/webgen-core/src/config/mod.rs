//! Tool configuration for webgen
//!
//! Configuration is layered (low to high precedence):
//! 1. Embedded defaults (built into binary)
//! 2. User config (~/.webgen/config.yaml)
//! 3. Explicit config file (`--config`)
//! 4. Environment variables (WEBGEN_* prefix)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DependencyConfig, GitConfig, InstallerConfig, ManifestDefaults, PromptConfig, ScaffoldConfig,
};
