pub mod config;
pub mod manifest;
pub mod name;
pub mod user_config;

// Re-export main types
pub use config::{PackageManager, Settings};
pub use manifest::Manifest;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Resolve the project directory: `dir` if given, else the working directory.
///
/// The directory must exist; the manifest inside it may not.
pub fn project_root(dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };
    Ok(dir.canonicalize()?)
}
