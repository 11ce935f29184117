//! Repository Implementations

mod progress;

pub use progress::{ProgressCache, DEFAULT_PROGRESS_FILE};
