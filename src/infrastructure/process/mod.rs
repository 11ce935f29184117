//! Command Runner Implementations

mod dry_run;
mod system;

pub use dry_run::DryRunCommandRunner;
pub use system::SystemCommandRunner;
