//! File System Implementations

mod env_file;
mod rewrite;

pub use env_file::EnvFileStore;
pub use rewrite::replace_in_file;
