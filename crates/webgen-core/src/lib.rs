//! # webgen-core
//!
//! Core library for the webgen CLI providing:
//! - Layered tool configuration (embedded defaults, user file, environment)
//! - The error taxonomy shared by every pipeline stage
//! - Data model types for answers and the project manifest

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, ScaffoldConfig};
pub use error::{Error, ErrorKind, Result};
pub use types::{Answers, Author, Manifest};
pub use utils::get_home_dir;
