//! Deploy Module
//!
//! Best-effort build and deployment once configuration is written.
//!
//! ## Structure
//!
//! - `result` - Per-step outcome report (`DeployReport`, `DeployStep`)
//! - `dispatcher` - Runs image builds, the server build and the stack deploy
//!   (`StackDispatcher`)
//!
//! ## Usage
//!
//! ```ignore
//! use odkx_init::application::deploy::StackDispatcher;
//!
//! let dispatcher = StackDispatcher::new(&console, &runner, build, deploy);
//! let report = dispatcher.run_all(&install)?;
//! ```

mod dispatcher;
mod result;

pub use dispatcher::StackDispatcher;
pub use result::{DeployReport, DeployStep};
