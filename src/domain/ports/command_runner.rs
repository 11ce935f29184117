//! Command Runner Port
//!
//! Abstraction over external process invocation (docker, certbot, git, mvn),
//! so the workflow can be exercised without running real tools.

use std::fmt;
use std::path::PathBuf;

use crate::error::InstallerResult;

/// A single external command to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Extra environment variables for the child process
    pub env: Vec<(String, String)>,
    /// Working directory (inherits the installer's when `None`)
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

/// Shell-like rendering, used for dry runs and log lines.
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(dir) = &self.cwd {
            write!(f, "(cd {}) ", dir.display())?;
        }
        for (key, value) in &self.env {
            write!(f, "{}={} ", key, value)?;
        }
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How an external command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    /// Process ran but exited unsuccessfully (`None` when killed by a signal)
    Failed { code: Option<i32> },
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success)
    }
}

/// Runs external commands to completion, blocking the caller.
///
/// Implementations:
/// - `SystemCommandRunner` - spawns real processes with inherited stdio
/// - `DryRunCommandRunner` - prints each command instead of running it
/// - `RecordingRunner` (tests) - records commands, injects failures
pub trait CommandRunner {
    /// Returns `Err` only when the program could not be started.
    fn run(&self, command: &CommandSpec) -> InstallerResult<CommandOutcome>;
}
