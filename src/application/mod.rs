//! Application Layer
//!
//! Use cases that orchestrate the install flow.
//! This layer:
//! - Depends on Domain layer (entities, policies, ports)
//! - Does NOT contain validation rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ConfigureUseCase` - Prompts, progress cache, certificate setup
//! - `StackDispatcher` - Image builds, server build, stack deploy
//! - `run_install` - Both of the above, in order

pub mod commands;
pub mod configure;
pub mod deploy;
pub mod install;

#[cfg(test)]
pub(crate) mod test_support;

pub use configure::{ConfigureOptions, ConfigureOutcome, ConfigureUseCase, ConfiguredInstall};
pub use deploy::{DeployReport, DeployStep, StackDispatcher};
pub use install::{run_install, InstallOutcome};
