//! CLI Argument Parsing
//!
//! A single command: all setup answers are collected through prompts, the
//! flags only relocate files and tune output.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Interactive first-run setup for the ODK-X sync endpoint
#[derive(Parser, Debug)]
#[command(name = "odkx-init")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Answers are kept in the progress file, so an interrupted run can be resumed."
)]
pub struct Cli {
    /// Installer configuration file (TOML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// https environment file [default: <program dir>/config/https.env]
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Progress cache file [default: progress.json]
    #[arg(long, value_name = "PATH")]
    pub progress_file: Option<PathBuf>,

    /// LDAP credentials file [default: ldap.env]
    #[arg(long, value_name = "PATH")]
    pub ldap_env_file: Option<PathBuf>,

    /// Print build/certificate/deploy commands instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["odkx-init"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.env_file.is_none());
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_paths() {
        let cli = Cli::try_parse_from([
            "odkx-init",
            "--env-file",
            "conf/https.env",
            "--progress-file",
            "/tmp/progress.json",
            "--ldap-env-file",
            "ldap.env",
        ])
        .unwrap();
        assert_eq!(cli.env_file, Some(PathBuf::from("conf/https.env")));
        assert_eq!(cli.progress_file, Some(PathBuf::from("/tmp/progress.json")));
        assert_eq!(cli.ldap_env_file, Some(PathBuf::from("ldap.env")));
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::try_parse_from(["odkx-init", "-vv", "--dry-run"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.dry_run);
    }

    #[test]
    fn test_cli_color_flag() {
        let cli = Cli::try_parse_from(["odkx-init", "--color", "never"]).unwrap();
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
    }

    #[test]
    fn test_cli_rejects_subcommands() {
        assert!(Cli::try_parse_from(["odkx-init", "deploy"]).is_err());
    }
}
