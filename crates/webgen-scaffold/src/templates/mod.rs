//! Static template assets and their materialization into a project.
//!
//! Assets are compiled into the binary and copied byte-for-byte. Nothing is
//! substituted: the project name and description live only in the manifest.
//!
//! A source name either names a single embedded file (`index.html`) or a
//! directory prefix (`scss`), in which case every file below it is copied while
//! keeping its relative layout.

mod assets;

pub use assets::{TemplateAsset, PROJECT_ASSETS, VCS_IGNORE_ASSET};

use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use std::io;
use tracing::debug;
use webgen_core::{Error, Result};

use assets::AssetKind;

/// Embedded project template files
#[derive(RustEmbed)]
#[folder = "templates/"]
struct ProjectTemplates;

/// Copies template assets below a destination root
#[derive(Debug, Clone)]
pub struct TemplateMaterializer {
    root: Utf8PathBuf,
}

impl TemplateMaterializer {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Copy every asset in order, returning the written paths
    pub async fn copy_all(&self, assets: &[TemplateAsset]) -> Result<Vec<Utf8PathBuf>> {
        let mut written = Vec::new();
        for asset in assets {
            written.extend(self.copy(asset).await?);
        }
        Ok(written)
    }

    /// Copy one asset, overwriting whatever is at the destination
    ///
    /// # Arguments
    /// * `asset` - Embedded source and destination path relative to the root
    ///
    /// # Returns
    /// Every path written, sorted for directory assets
    ///
    /// # Errors
    /// Returns [`Error::FileSystem`] if the source is not embedded, a directory
    /// source has no files, or a write fails
    pub async fn copy(&self, asset: &TemplateAsset) -> Result<Vec<Utf8PathBuf>> {
        debug!("Copying template {} -> {}", asset.source, asset.destination);

        match asset.kind {
            AssetKind::File => {
                let data = embedded_file(asset.source)?;
                let target = self.root.join(asset.destination);
                write_file(&target, &data).await?;
                Ok(vec![target])
            }
            AssetKind::Directory => {
                let prefix = format!("{}/", asset.source);
                let mut written = Vec::new();

                for path in ProjectTemplates::iter() {
                    let Some(relative) = path.strip_prefix(&prefix) else {
                        continue;
                    };
                    let data = embedded_file(&path)?;
                    let target = self.root.join(asset.destination).join(relative);
                    write_file(&target, &data).await?;
                    written.push(target);
                }

                if written.is_empty() {
                    return Err(Error::file_system(
                        asset.source,
                        io::Error::new(io::ErrorKind::NotFound, "template directory is empty"),
                    ));
                }
                written.sort();
                Ok(written)
            }
        }
    }
}

/// Raw bytes of an embedded template file
fn embedded_file(name: &str) -> Result<Vec<u8>> {
    ProjectTemplates::get(name)
        .map(|file| file.data.into_owned())
        .ok_or_else(|| {
            Error::file_system(
                name,
                io::Error::new(io::ErrorKind::NotFound, "template asset not embedded"),
            )
        })
}

async fn write_file(target: &Utf8Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::file_system(parent, e))?;
    }
    tokio::fs::write(target, data)
        .await
        .map_err(|e| Error::file_system(target, e))
}
