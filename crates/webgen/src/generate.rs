//! The `webgen` command: collect answers and scaffold the project

use anyhow::{anyhow, Context, Result};
use camino::Utf8PathBuf;
use std::process::ExitCode;
use tracing::debug;
use webgen_core::ConfigLoader;
use webgen_scaffold::pipeline::{Collaborators, ScaffoldPipeline, ScaffoldReport};
use webgen_scaffold::{GitRepository, NpmAuthorLookup, NpmInstaller};

use crate::cli::Cli;
use crate::observer::ConsoleObserver;
use crate::output;
use crate::prompter::DialoguerPrompter;

/// Run the scaffolding pipeline in the current directory
///
/// Setup errors are returned; a failed phase has already been printed by
/// [`ConsoleObserver`] and only turns into a failing exit code.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    let config = ConfigLoader::new()?
        .with_file(cli.config)
        .load()
        .context("Failed to load webgen configuration")?;

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| anyhow!("Current directory is not valid UTF-8: {}", p.display()))?;

    let collaborators = Collaborators {
        prompter: Box::new(DialoguerPrompter),
        author: Box::new(NpmAuthorLookup::new(&config.installer.program)),
        installer: Box::new(NpmInstaller::from_config(&config.installer)),
        vcs: Box::new(GitRepository::from_config(&config.git)),
    };

    let result = ScaffoldPipeline::new(config, cwd, collaborators)
        .with_observer(ConsoleObserver::default())
        .run()
        .await;
    let report = match settle(result) {
        Ok(report) => report,
        Err(code) => return Ok(code),
    };

    println!();
    output::success("Project scaffolded");
    output::kv("Location", report.destination().as_str());
    output::kv("Files written", &report.written().len().to_string());
    for path in report.written() {
        let shown = path
            .strip_prefix(report.destination())
            .unwrap_or(path.as_path());
        println!("    {}", shown);
    }
    if let Some(answers) = report.answers() {
        output::kv("Name", answers.name());
        output::kv("Git", if answers.enable_vcs() { "enabled" } else { "disabled" });
    }

    output::header("Next steps");
    if report.answers().is_some_and(|a| a.create_dir()) {
        println!("   1. cd {}", report.destination());
        println!("   2. npm start");
    } else {
        println!("   1. npm start");
    }

    Ok(ExitCode::SUCCESS)
}

/// Keep a successful report, or map a failed run to the process exit code
fn settle(
    result: webgen_core::Result<ScaffoldReport>,
) -> std::result::Result<ScaffoldReport, ExitCode> {
    result.map_err(|err| {
        debug!("Scaffolding stopped: {}", err);
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;
    use webgen_core::Error;
    use webgen_scaffold::pipeline::Session;

    #[test]
    fn test_failed_run_becomes_exit_code_not_error() {
        assert!(settle(Err(Error::UserAbort)).is_err());
        assert!(settle(Err(Error::external_process("npm install", "exit status: 1"))).is_err());
    }

    #[test]
    fn test_successful_run_keeps_report() {
        let report = ScaffoldReport {
            session: Session::new(Utf8Path::new("/work/site")),
            executed: Vec::new(),
            skipped: Vec::new(),
        };
        let kept = settle(Ok(report)).ok().unwrap();
        assert_eq!(kept.destination(), Utf8Path::new("/work/site"));
    }
}
