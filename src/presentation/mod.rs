//! Presentation Layer
//!
//! CLI argument parsing (via clap). Output rendering lives in `ui`.

pub mod cli;

pub use cli::{Cli, ColorWhen};
