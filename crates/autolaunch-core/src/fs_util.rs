//! Filesystem helpers.

use std::io::ErrorKind;
use std::path::Path;

/// Check whether `path` exists.
///
/// A failing `stat` counts as "missing", so a permission error looks the same
/// as a path that is not there.
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    match std::fs::metadata(path.as_ref()) {
        Ok(_) => true,
        Err(e) => e.kind() == ErrorKind::AlreadyExists,
    }
}
