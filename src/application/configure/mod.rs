//! Configure Module
//!
//! The interactive configuration workflow: prompts, validation, progress
//! cache and certificate setup.
//!
//! ## Structure
//!
//! - `options` - File locations and certbot settings (`ConfigureOptions`)
//! - `result` - Outcome types (`ConfigureOutcome`, `ConfiguredInstall`)
//! - `use_case` - The workflow itself (`ConfigureUseCase`)

mod options;
mod result;
mod use_case;

pub use options::ConfigureOptions;
pub use result::{ConfigureOutcome, ConfiguredInstall};
pub use use_case::ConfigureUseCase;
