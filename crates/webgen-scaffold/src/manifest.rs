//! Manifest (`package.json`) merging
//!
//! Layers, lowest to highest precedence:
//! 1. Generated defaults (name, description, version, scripts, keywords, license)
//! 2. Computed author record
//! 3. Fields of an existing `package.json` at the destination root
//!
//! The merge is shallow: an existing `scripts` object replaces the generated
//! one entirely rather than being combined with it.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{json, Map, Value};
use tracing::debug;
use webgen_core::config::ManifestDefaults;
use webgen_core::{Answers, Author, Error, Manifest, Result};

pub const MANIFEST_FILE: &str = "package.json";

/// Builds the final manifest from answers, author, and any existing file
#[derive(Debug, Clone)]
pub struct ManifestMerger<'a> {
    defaults: &'a ManifestDefaults,
}

impl<'a> ManifestMerger<'a> {
    pub fn new(defaults: &'a ManifestDefaults) -> Self {
        Self { defaults }
    }

    /// Generated default fields only
    pub fn generated(&self, answers: &Answers) -> Manifest {
        let scripts: Map<String, Value> = self
            .defaults
            .scripts
            .iter()
            .map(|(name, command)| (name.clone(), Value::String(command.clone())))
            .collect();

        let mut manifest = Manifest::new();
        manifest.insert("name", json!(answers.name()));
        manifest.insert("description", json!(answers.description()));
        manifest.insert("version", json!(self.defaults.version));
        manifest.insert("scripts", Value::Object(scripts));
        manifest.insert("keywords", json!([]));
        manifest.insert("license", json!(self.defaults.license));
        manifest
    }

    /// Merge all three layers; fields in `existing` always win
    pub fn merge(&self, answers: &Answers, author: &Author, existing: Manifest) -> Manifest {
        let mut manifest = self.generated(answers);
        manifest.insert("author", json!(author));
        manifest.extend(existing);
        manifest
    }
}

/// Path of the manifest below `root`
pub fn manifest_path(root: &Utf8Path) -> Utf8PathBuf {
    root.join(MANIFEST_FILE)
}

/// Read the existing manifest, or an empty one if the file does not exist
///
/// # Arguments
/// * `root` - Destination root holding `package.json`
///
/// # Errors
/// Returns error if:
/// - The file exists but cannot be read ([`Error::FileSystem`])
/// - The content is not a JSON object ([`Error::ManifestParse`])
pub async fn read_existing(root: &Utf8Path) -> Result<Manifest> {
    let path = manifest_path(root);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No existing manifest at {}", path);
            return Ok(Manifest::new());
        }
        Err(e) => return Err(Error::file_system(&path, e)),
    };

    let map: Map<String, Value> =
        serde_json::from_str(&content).map_err(|e| Error::manifest_parse(&path, e))?;
    debug!("Existing manifest at {} has {} field(s)", path, map.len());
    Ok(Manifest::from_map(map))
}

/// Write the manifest, replacing previous content
///
/// # Arguments
/// * `root` - Destination root
/// * `manifest` - Merged manifest to render
///
/// # Returns
/// Path of the written `package.json`
///
/// # Errors
/// Returns [`Error::FileSystem`] if the file cannot be written
pub async fn write_manifest(root: &Utf8Path, manifest: &Manifest) -> Result<Utf8PathBuf> {
    let path = manifest_path(root);
    let rendered = manifest.to_pretty_json()?;
    tokio::fs::write(&path, rendered)
        .await
        .map_err(|e| Error::file_system(&path, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn answers() -> Answers {
        Answers::derive("demo", "x", false, Utf8Path::new("/work/site"))
    }

    fn author() -> Author {
        Author::new(Some("Jane".to_string()), Some("jane@example.com".to_string()))
    }

    fn manifest_from(value: Value) -> Manifest {
        match value {
            Value::Object(map) => Manifest::from_map(map),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_generated_defaults() {
        let defaults = ManifestDefaults::default();
        let merged =
            ManifestMerger::new(&defaults).merge(&answers(), &Author::default(), Manifest::new());

        assert_eq!(
            serde_json::to_value(&merged).unwrap(),
            json!({
                "name": "demo",
                "description": "x",
                "version": "0.1.0",
                "scripts": { "start": "gulp" },
                "keywords": [],
                "license": "ISC",
                "author": {}
            })
        );
    }

    #[test]
    fn test_existing_field_beats_default() {
        let defaults = ManifestDefaults::default();
        let existing = manifest_from(json!({ "license": "MIT" }));
        let merged = ManifestMerger::new(&defaults).merge(&answers(), &author(), existing);

        assert_eq!(merged.get("license"), Some(&json!("MIT")));
        assert_eq!(merged.get("version"), Some(&json!("0.1.0")));
    }

    #[test]
    fn test_existing_field_beats_computed_author_and_answers() {
        let defaults = ManifestDefaults::default();
        let existing = manifest_from(json!({
            "name": "legacy",
            "author": "Someone Else",
            "private": true
        }));
        let merged = ManifestMerger::new(&defaults).merge(&answers(), &author(), existing);

        assert_eq!(merged.get("name"), Some(&json!("legacy")));
        assert_eq!(merged.get("author"), Some(&json!("Someone Else")));
        assert_eq!(merged.get("private"), Some(&json!(true)));
        assert_eq!(merged.get("description"), Some(&json!("x")));
    }

    #[test]
    fn test_scripts_are_replaced_not_combined() {
        let defaults = ManifestDefaults::default();
        let existing = manifest_from(json!({ "scripts": { "build": "make" } }));
        let merged = ManifestMerger::new(&defaults).merge(&answers(), &author(), existing);

        assert_eq!(merged.get("scripts"), Some(&json!({ "build": "make" })));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let defaults = ManifestDefaults::default();
        let merger = ManifestMerger::new(&defaults);
        let existing = manifest_from(json!({ "license": "MIT", "homepage": "https://x.dev" }));

        let once = merger.merge(&answers(), &author(), existing);
        let twice = merger.merge(&answers(), &author(), once.clone());

        assert_eq!(once, twice);
        assert_eq!(
            once.keys().collect::<Vec<_>>(),
            twice.keys().collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_read_missing_manifest_is_empty() {
        let temp = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp.path()).unwrap();
        assert!(read_existing(root).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_then_read_back() {
        let temp = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp.path()).unwrap();
        let defaults = ManifestDefaults::default();
        let merged =
            ManifestMerger::new(&defaults).merge(&answers(), &author(), Manifest::new());

        let path = write_manifest(root, &merged).await.unwrap();
        assert_eq!(path, root.join("package.json"));
        assert_eq!(read_existing(root).await.unwrap(), merged);
    }

    #[tokio::test]
    async fn test_invalid_manifest_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp.path()).unwrap();
        std::fs::write(root.join("package.json"), "{ not json").unwrap();

        let result = read_existing(root).await;
        assert!(matches!(result, Err(Error::ManifestParse { .. })));
    }

    #[tokio::test]
    async fn test_non_object_manifest_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp.path()).unwrap();
        std::fs::write(root.join("package.json"), "[1, 2]").unwrap();

        assert!(matches!(
            read_existing(root).await,
            Err(Error::ManifestParse { .. })
        ));
    }
}
