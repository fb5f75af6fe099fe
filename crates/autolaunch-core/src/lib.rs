//! # AutoLaunch Core
//!
//! Registers an executable as a per-user auto-launch item by writing or
//! removing a LaunchAgent property list under `~/Library/LaunchAgents`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use autolaunch_core::{AutoLaunch, LaunchAgent, LaunchAgentConfig};
//!
//! let config = LaunchAgentConfig::new("hello-world", "/usr/local/bin/hello-world")
//!     .arg("--autostart=1");
//! let agent = LaunchAgent::for_current_user(config)?;
//!
//! if agent.is_enabled() {
//!     agent.disable()?;
//! } else {
//!     agent.enable()?;
//! }
//! ```
//!
//! Nothing here talks to `launchctl`; the system picks descriptors up from the
//! directory on its own (at the latest on next login).

pub mod backend;
pub mod error;
pub mod fs_util;
pub mod launchd;
pub mod plist;

// Re-exports
pub use backend::AutoLaunch;
pub use error::{AutoLaunchError, Result};
pub use fs_util::path_exists;
pub use launchd::{LaunchAgent, LaunchAgentConfig};
pub use plist::{PlistDocument, PlistValue};
