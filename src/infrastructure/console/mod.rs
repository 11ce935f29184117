//! Console Implementations

mod terminal;

pub use terminal::TerminalConsole;
