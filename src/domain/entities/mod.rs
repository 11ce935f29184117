//! Domain Entities

mod env_map;
mod progress;

pub use env_map::{keys, EnvironmentMap};
pub use progress::{ProgressKey, ProgressRecord};
