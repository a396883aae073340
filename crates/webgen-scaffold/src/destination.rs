//! Destination root resolution

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};
use webgen_core::{Answers, Error, Result};

/// Decide where the project is written.
///
/// When `create_dir` is set, `<root>/<name>` is created (existing directories
/// are fine) and becomes the new root. Otherwise `root` is returned unchanged.
///
/// # Arguments
/// * `root` - Directory webgen was started from
/// * `answers` - Collected answers; `name` and `create_dir` are used
///
/// # Returns
/// The destination root for every later phase
///
/// # Errors
/// Returns [`Error::FileSystem`] if the directory cannot be created, for
/// example when a regular file already has that name
pub async fn resolve_destination(root: &Utf8Path, answers: &Answers) -> Result<Utf8PathBuf> {
    if !answers.create_dir() {
        debug!("Using current directory as project root: {}", root);
        return Ok(root.to_path_buf());
    }

    let target = root.join(answers.name());
    info!("Creating project directory: {}", target);
    tokio::fs::create_dir_all(&target)
        .await
        .map_err(|e| Error::file_system(&target, e))?;

    Ok(target)
}
