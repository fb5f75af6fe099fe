//! Auto-launch errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by auto-launch operations.
#[derive(Debug, Error)]
pub enum AutoLaunchError {
    /// The program to launch does not exist on disk.
    #[error("App path doesn't exist: {}", .0.display())]
    PathNotExist(PathBuf),

    /// The program path is not absolute.
    #[error("App path is illegal (must be absolute): {}", .0.display())]
    PathIllegal(PathBuf),

    /// The item name cannot be used as a descriptor file name.
    #[error("Invalid launch item name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// The current user's home directory could not be determined.
    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for auto-launch operations.
pub type Result<T> = std::result::Result<T, AutoLaunchError>;
