//! Stack Dispatcher
//!
//! Runs the external build and deploy tools one after another. Every step
//! reports success or failure; a failure is printed and the next step runs
//! anyway. An interrupt stops the remaining steps.

use crate::application::commands::{
    deploy_command, image_build_command, server_build_command, server_clone_command,
};
use crate::application::configure::ConfiguredInstall;
use crate::config::{BuildConfig, DeployConfig};
use crate::domain::ports::{CommandRunner, CommandSpec, Console};
use crate::error::{InstallerError, InstallerResult};

use super::result::DeployReport;

pub struct StackDispatcher<'a, C, R>
where
    C: Console + ?Sized,
    R: CommandRunner + ?Sized,
{
    console: &'a C,
    runner: &'a R,
    build: BuildConfig,
    deploy: DeployConfig,
}

impl<'a, C, R> StackDispatcher<'a, C, R>
where
    C: Console + ?Sized,
    R: CommandRunner + ?Sized,
{
    pub fn new(console: &'a C, runner: &'a R, build: BuildConfig, deploy: DeployConfig) -> Self {
        Self {
            console,
            runner,
            build,
            deploy,
        }
    }

    /// Build images, build the server, deploy the stack.
    pub fn run_all(&self, install: &ConfiguredInstall) -> InstallerResult<DeployReport> {
        Ok(DeployReport {
            images_built: self.build_container_images()?,
            server_built: self.build_server_artifact()?,
            stack_deployed: self.deploy_stack(install)?,
        })
    }

    /// Stops at the first image that fails to build.
    pub fn build_container_images(&self) -> InstallerResult<bool> {
        self.console.info("Building container images");
        for image in &self.build.images {
            if !self.run_step(&image_build_command(image))? {
                self.console.error("Error pulling required docker images.");
                self.console.info("");
                return Ok(false);
            }
        }
        self.console.success("Container images built");
        Ok(true)
    }

    /// Clone the server sources (unless already present) and build them.
    pub fn build_server_artifact(&self) -> InstallerResult<bool> {
        self.console.info("Building sync endpoint");
        if self.build.server_dir.exists() {
            tracing::info!(
                dir = %self.build.server_dir.display(),
                "server sources already present, skipping clone"
            );
        } else if !self.run_step(&server_clone_command(&self.build))? {
            self.console.error("Error building sync endpoint.");
            self.console.info("");
            return Ok(false);
        }

        if !self.run_step(&server_build_command(&self.build))? {
            self.console.error("Error building sync endpoint.");
            self.console.info("");
            return Ok(false);
        }
        self.console.success("Sync endpoint built");
        Ok(true)
    }

    pub fn deploy_stack(&self, install: &ConfiguredInstall) -> InstallerResult<bool> {
        let profile = install.profile();
        self.console
            .info(&format!("Deploying stack '{}' ({})", self.deploy.stack_name, profile));

        let command = deploy_command(&self.deploy, profile, install.certificate.as_ref());
        if !self.run_step(&command)? {
            self.console.error("Error deploying stack.");
            self.console.info("");
            return Ok(false);
        }
        self.console
            .success(&format!("Stack '{}' deployed", self.deploy.stack_name));
        Ok(true)
    }

    /// `Ok(false)` for a failed or unstartable command; only an interrupt
    /// is an error.
    fn run_step(&self, command: &CommandSpec) -> InstallerResult<bool> {
        tracing::debug!(command = %command, "running");
        match self.runner.run(command) {
            Ok(outcome) if outcome.is_success() => Ok(true),
            Ok(outcome) => {
                tracing::warn!(command = %command, ?outcome, "command failed");
                Ok(false)
            }
            Err(InstallerError::Interrupted) => Err(InstallerError::Interrupted),
            Err(e) => {
                tracing::warn!(command = %command, error = %e, "command could not start");
                Ok(false)
            }
        }
    }
}
