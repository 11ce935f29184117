//! odkx-init - interactive first-run setup for the ODK-X sync endpoint
//!
//! Usage: odkx-init [OPTIONS]
//!
//! Asks for the domain, admin email, LDAP password and certificate source,
//! then builds the images and deploys the stack.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use odkx_init::application::deploy::DeployStep;
use odkx_init::domain::ports::{CommandRunner, Console};
use odkx_init::infrastructure::{
    DryRunCommandRunner, InterruptFlag, SystemCommandRunner, TerminalConsole,
};
use odkx_init::presentation::Cli;
use odkx_init::ui::output::print_fatal;
use odkx_init::ui::UiContext;
use odkx_init::{run_install, InstallOutcome, InstallerConfig, InstallerError, InstallerResult};

const EXIT_FAILURE: i32 = 1;
const EXIT_INTERRUPTED: i32 = 130;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // The handler only flags; prompts and commands unwind on their own.
    let interrupt = InterruptFlag::new();
    let handler_flag = interrupt.clone();
    ctrlc::set_handler(move || handler_flag.trigger())
        .context("failed to install Ctrl-C handler")?;

    let ui = UiContext::new(cli.verbose, cli.color);
    let console = TerminalConsole::new(ui).with_interrupt(interrupt.clone());

    match run(&cli, &console, &interrupt) {
        Ok(InstallOutcome::Deferred) => Ok(()),
        Ok(InstallOutcome::Deployed(report)) => {
            if report.is_success() {
                console.success("Installation complete");
            } else {
                let failed: Vec<String> = report
                    .failed_steps()
                    .iter()
                    .map(DeployStep::to_string)
                    .collect();
                console.warn(&format!(
                    "Installation finished with failed steps: {}",
                    failed.join(", ")
                ));
            }
            Ok(())
        }
        Err(InstallerError::Interrupted) => {
            let mut stdout = std::io::stdout();
            let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
            let _ = writeln!(stdout);
            eprintln!("Interrupted. Answers given so far are kept in the progress file.");
            std::process::exit(EXIT_INTERRUPTED);
        }
        Err(e) => {
            tracing::debug!(error = ?e, "install failed");
            print_fatal(&e, &ui);
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn run(
    cli: &Cli,
    console: &TerminalConsole,
    interrupt: &InterruptFlag,
) -> InstallerResult<InstallOutcome> {
    let config = load_config(cli, console)?;
    tracing::debug!(?config, "effective configuration");

    let runner: Box<dyn CommandRunner> = if cli.dry_run {
        console.info("Dry run: external commands are printed, not executed");
        Box::new(DryRunCommandRunner::new())
    } else {
        Box::new(SystemCommandRunner::new().with_interrupt(interrupt.clone()))
    };

    run_install(&config, console, runner.as_ref())
}

/// Defaults, then the TOML file, then `ODKX_*` variables, then flags.
fn load_config(cli: &Cli, console: &dyn Console) -> InstallerResult<InstallerConfig> {
    let config = match &cli.config {
        Some(path) => {
            let (config, warnings) = InstallerConfig::load_with_warnings(path)?;
            for warning in warnings {
                console.warn(&format!(
                    "Unknown config key '{}' in {}",
                    warning.key,
                    warning.file.display()
                ));
            }
            config
        }
        None => InstallerConfig::default(),
    };
    Ok(config.with_env_overrides().with_cli_overrides(cli))
}

/// `RUST_LOG` wins; otherwise warn, raised one level per `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}
