//! Interrupt Flag
//!
//! Set by the Ctrl-C handler. Prompts and commands check it when they
//! finish, so the run unwinds through `InstallerError::Interrupted` after
//! the terminal has been handed back in its normal state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{InstallerError, InstallerResult};

#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// `Err(Interrupted)` once the flag has been triggered.
    pub fn check(&self) -> InstallerResult<()> {
        if self.is_set() {
            Err(InstallerError::Interrupted)
        } else {
            Ok(())
        }
    }
}
