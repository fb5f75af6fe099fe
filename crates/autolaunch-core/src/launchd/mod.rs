//! macOS LaunchAgent descriptors.
//!
//! A launch item is a property list at
//! `<home>/Library/LaunchAgents/<name>.plist`. Writing the file enables the
//! item, deleting it disables the item.

mod launchd_agent;
mod launchd_config;

pub use launchd_agent::LaunchAgent;
pub use launchd_config::{LaunchAgentConfig, NULL_DEVICE};

#[cfg(test)]
#[path = "launchd_tests.rs"]
mod tests;
