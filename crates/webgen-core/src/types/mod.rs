//! Data model shared across webgen crates

mod answers;
mod manifest;

pub use answers::Answers;
pub use manifest::{Author, Manifest};
