//! Subprocess execution shared by the installer, git, and author lookup

use camino::Utf8Path;
use std::io;
use tokio::process::Command;
use tracing::debug;
use webgen_core::{Error, Result};

/// Resolve `program` through PATH (and PATHEXT on Windows).
///
/// Callers spawn the returned path, never the bare name; on Windows npm is an
/// `npm.cmd` shim that `Command::new("npm")` cannot start.
pub(crate) fn locate(program: &str) -> Option<String> {
    let path = which::which(program).ok()?;
    Some(path.to_str().map_or_else(|| program.to_string(), str::to_string))
}

/// Run `program args...` in `cwd` and return trimmed stdout.
///
/// A non-zero exit becomes [`Error::ExternalProcess`] carrying stderr; a
/// missing executable becomes [`Error::CommandNotFound`].
pub(crate) async fn run<I, S>(program: &str, args: I, cwd: Option<&Utf8Path>) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();

    let mut cmd = Command::new(program);
    cmd.args(&args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    debug!("Running: {} {}", program, args.join(" "));
    let output = cmd.output().await.map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::command_not_found(program),
        _ => Error::external_process(program, e.to_string()),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::external_process(
            format!("{} {}", program, args.first().map(String::as_str).unwrap_or("")),
            format!("{} ({})", stderr.trim(), output.status),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_missing_program() {
        assert_eq!(locate("webgen-definitely-not-installed"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_returns_absolute_path() {
        let path = locate("sh").unwrap();
        assert!(Utf8Path::new(&path).is_absolute());
        assert!(path.ends_with("sh"));
    }

    #[tokio::test]
    async fn test_missing_program_is_command_not_found() {
        let result = run("webgen-definitely-not-installed", ["--version"], None).await;
        assert!(matches!(result, Err(Error::CommandNotFound { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_program_is_external_process_error() {
        let result = run("sh", ["-c", "echo nope >&2; exit 3"], None).await;
        match result {
            Err(Error::ExternalProcess { message, .. }) => assert!(message.contains("nope")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stdout_is_trimmed() {
        let out = run("sh", ["-c", "echo '  hello  '"], None).await.unwrap();
        assert_eq!(out, "hello");
    }
}
