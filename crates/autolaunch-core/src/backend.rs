//! The auto-launch capability set.

use std::path::PathBuf;

use crate::error::Result;

/// Operations every auto-launch backend provides.
///
/// Only the LaunchAgent backend exists today; the trait lets callers hold a
/// backend chosen at construction time instead of switching on the platform
/// at every call site.
pub trait AutoLaunch {
    /// Register the program to launch at login.
    fn enable(&self) -> Result<()>;

    /// Remove the registration. Succeeds when nothing is registered.
    fn disable(&self) -> Result<()>;

    /// Whether a registration is currently present.
    fn is_enabled(&self) -> bool;

    /// Location of the descriptor this backend manages.
    fn descriptor_path(&self) -> PathBuf;
}
