//! Install flow
//!
//! Configuration first, then the best-effort deployment steps.

use crate::config::InstallerConfig;
use crate::domain::ports::{CommandRunner, Console};
use crate::error::InstallerResult;

use super::configure::{ConfigureOptions, ConfigureOutcome, ConfigureUseCase};
use super::deploy::{DeployReport, StackDispatcher};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Stopped before deployment; the user re-runs once DNS is ready
    Deferred,
    Deployed(DeployReport),
}

/// Run the whole installer.
///
/// Errors come from the configuration phase or from an interrupt. Once
/// configuration is saved every deployment step runs, whatever the earlier
/// steps did.
pub fn run_install<C, R>(
    config: &InstallerConfig,
    console: &C,
    runner: &R,
) -> InstallerResult<InstallOutcome>
where
    C: Console + ?Sized,
    R: CommandRunner + ?Sized,
{
    let options = ConfigureOptions::from_config(config);
    let install = match ConfigureUseCase::new(console, runner, options).execute()? {
        ConfigureOutcome::Ready(install) => install,
        ConfigureOutcome::Deferred => return Ok(InstallOutcome::Deferred),
    };
    tracing::info!(profile = %install.profile(), "configuration complete");

    let dispatcher = StackDispatcher::new(
        console,
        runner,
        config.build.clone(),
        config.deploy.clone(),
    );
    let report = dispatcher.run_all(&install)?;

    for step in report.failed_steps() {
        console.warn(&format!("{} did not complete", step));
    }
    Ok(InstallOutcome::Deployed(report))
}
