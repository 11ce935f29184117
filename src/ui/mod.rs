//! Terminal UI
//!
//! Design tokens, icons and status-line rendering shared by the terminal
//! console and the binary's error reporting.

pub mod context;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;

pub use context::UiContext;
