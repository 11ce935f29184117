//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod console;

pub use command_runner::{CommandOutcome, CommandRunner, CommandSpec};
pub use console::Console;
