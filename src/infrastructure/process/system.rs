//! System Command Runner
//!
//! Spawns real processes with inherited stdio so tool output (and sudo
//! password prompts) reach the user directly. A Ctrl-C reaches the child
//! too; once it exits the run unwinds as interrupted.

use std::process::{Command, Stdio};

use crate::domain::ports::{CommandOutcome, CommandRunner, CommandSpec};
use crate::error::{InstallerError, InstallerResult};
use crate::infrastructure::InterruptFlag;

#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner {
    interrupt: InterruptFlag,
}

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interrupt(mut self, interrupt: InterruptFlag) -> Self {
        self.interrupt = interrupt;
        self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> InstallerResult<CommandOutcome> {
        self.interrupt.check()?;
        tracing::info!(command = %spec, "running");

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .envs(spec.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &spec.cwd {
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|source| InstallerError::CommandSpawn {
            program: spec.program.clone(),
            source,
        })?;
        self.interrupt.check()?;

        if status.success() {
            Ok(CommandOutcome::Success)
        } else {
            tracing::debug!(command = %spec, code = ?status.code(), "exited unsuccessfully");
            Ok(CommandOutcome::Failed {
                code: status.code(),
            })
        }
    }
}
