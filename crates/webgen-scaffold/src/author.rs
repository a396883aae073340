//! Author identity lookup
//!
//! The author record comes from npm's `init-author-name` and
//! `init-author-email` settings. When npm is not installed the lookup fails
//! with [`Error::ConfigQuery`], which the pipeline recovers from by writing an
//! empty author record.

use async_trait::async_trait;
use tracing::debug;
use webgen_core::{Author, Error, Result};

use crate::process;

/// Source of the author name and email recorded in the manifest
#[async_trait]
pub trait AuthorLookup: Send + Sync {
    async fn lookup(&self) -> Result<Author>;
}

/// Reads the author from `npm config get`
#[derive(Debug, Clone)]
pub struct NpmAuthorLookup {
    program: String,
}

impl NpmAuthorLookup {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn config_value(program: &str, key: &str) -> Result<Option<String>> {
        let value = process::run(program, ["config", "get", key], None)
            .await
            .map_err(|e| Error::config_query(e.to_string()))?;
        Ok(normalize(&value))
    }
}

impl Default for NpmAuthorLookup {
    fn default() -> Self {
        Self::new("npm")
    }
}

#[async_trait]
impl AuthorLookup for NpmAuthorLookup {
    async fn lookup(&self) -> Result<Author> {
        let program = process::locate(&self.program).ok_or_else(|| {
            Error::config_query(format!("{} not found in PATH", self.program))
        })?;

        let name = Self::config_value(&program, "init-author-name").await?;
        let email = Self::config_value(&program, "init-author-email").await?;
        debug!("Author from {}: {:?} <{:?}>", self.program, name, email);

        Ok(Author::new(name, email))
    }
}

/// npm prints an empty line or `undefined` for unset keys
fn normalize(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == "undefined" || value == "null" {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Jane Doe \n"), Some("Jane Doe".to_string()));
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("undefined"), None);
        assert_eq!(normalize("null"), None);
    }

    #[tokio::test]
    async fn test_missing_npm_is_config_query_error() {
        let lookup = NpmAuthorLookup::new("webgen-no-such-npm");
        let result = lookup.lookup().await;
        assert!(matches!(result, Err(Error::ConfigQuery { .. })));
    }
}
