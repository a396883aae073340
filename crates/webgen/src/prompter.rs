//! Interactive prompts backed by dialoguer

use console::style;
use dialoguer::{Confirm, Input};
use std::io;
use webgen_core::{Error, Result};
use webgen_scaffold::Prompter;

/// Renders questions on the terminal
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn input(&mut self, message: &str, default: &str) -> Result<Option<String>> {
        let reply = Input::<String>::new()
            .with_prompt(style(message).red().to_string())
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        Ok(Some(reply))
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>> {
        Confirm::new()
            .with_prompt(style(message).red().to_string())
            .default(default)
            .interact_opt()
            .map_err(prompt_error)
    }
}

/// Interrupted or closed input counts as the user cancelling
fn prompt_error(err: dialoguer::Error) -> Error {
    let err = io::Error::from(err);
    match err.kind() {
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => Error::UserAbort,
        _ => Error::Io(err),
    }
}
