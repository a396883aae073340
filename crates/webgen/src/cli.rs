//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::Parser;

/// webgen - scaffold a static web app with gulp, sass, and browser-sync
///
/// All project details are asked interactively.
#[derive(Parser, Debug)]
#[command(name = "webgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a webgen config file layered over ~/.webgen/config.yaml
    #[arg(short, long, env = "WEBGEN_CONFIG")]
    pub config: Option<Utf8PathBuf>,
}
