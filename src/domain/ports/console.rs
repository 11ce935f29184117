//! Console Port
//!
//! Everything the workflow says to or asks of the user. Implementations can
//! be interactive (a real terminal) or scripted (tests).

use crate::error::InstallerResult;

pub trait Console {
    /// Plain informational line
    fn info(&self, message: &str);

    /// Step completed
    fn success(&self, message: &str);

    fn warn(&self, message: &str);

    /// Recoverable failure; the run continues
    fn error(&self, message: &str);

    /// Yes/no question
    fn confirm(&self, prompt: &str, default: bool) -> InstallerResult<bool>;

    /// Free text answer; an empty answer yields `default`
    fn input(&self, prompt: &str, default: &str) -> InstallerResult<String>;

    /// Hidden input; may be empty
    fn password(&self, prompt: &str) -> InstallerResult<String>;
}
