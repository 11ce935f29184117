//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Env-file store and in-place file rewrite
//! - `repositories/` - Progress cache persistence
//! - `console/` - Terminal console (dialoguer prompts)
//! - `process/` - External command runners
//! - `interrupt` - Ctrl-C flag shared by the console and the runner

pub mod console;
pub mod fs;
pub mod interrupt;
pub mod process;
pub mod repositories;

// Re-export for convenience
pub use console::TerminalConsole;
pub use fs::{replace_in_file, EnvFileStore};
pub use interrupt::InterruptFlag;
pub use process::{DryRunCommandRunner, SystemCommandRunner};
pub use repositories::ProgressCache;
