//! Shared utility functions for webgen crates

use camino::Utf8Path;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so that
/// overrides made by the caller's shell are respected.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir().ok_or_else(|| Error::invalid_config("Could not determine home directory"))
}

/// Base name of a directory, or an empty string for a filesystem root
pub fn dir_base_name(dir: &Utf8Path) -> &str {
    dir.file_name().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_home_dir_from_env() {
        if std::env::var("HOME").is_ok() {
            let home = get_home_dir().unwrap();
            assert!(!home.as_os_str().is_empty());
        }
    }

    #[test]
    fn test_dir_base_name() {
        assert_eq!(dir_base_name(Utf8Path::new("/srv/www/site")), "site");
        assert_eq!(dir_base_name(Utf8Path::new("/")), "");
    }
}
