//! Dry-run Command Runner
//!
//! Prints each command instead of running it and reports success.

use std::cell::RefCell;

use crate::domain::ports::{CommandOutcome, CommandRunner, CommandSpec};
use crate::error::InstallerResult;

#[derive(Debug, Default)]
pub struct DryRunCommandRunner {
    printed: RefCell<Vec<String>>,
}

impl DryRunCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands printed so far
    pub fn printed(&self) -> Vec<String> {
        self.printed.borrow().clone()
    }
}

impl CommandRunner for DryRunCommandRunner {
    fn run(&self, spec: &CommandSpec) -> InstallerResult<CommandOutcome> {
        let line = spec.to_string();
        println!("[dry-run] {}", line);
        self.printed.borrow_mut().push(line);
        Ok(CommandOutcome::Success)
    }
}
