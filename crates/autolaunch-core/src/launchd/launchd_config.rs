//! LaunchAgent configuration types and builder methods.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Redirect target used when no output path is configured.
pub const NULL_DEVICE: &str = "/dev/null";

/// LaunchAgent configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchAgentConfig {
    /// Item name; used as the label and as the plist file name.
    pub name: String,

    /// Absolute path to the program to launch.
    pub program: PathBuf,

    /// Arguments passed after the program path, in order.
    #[serde(default)]
    pub arguments: Vec<String>,

    /// Relaunch interval in seconds, on top of launching at login.
    #[serde(default)]
    pub start_interval: Option<u32>,

    /// Standard output redirect. `/dev/null` when unset.
    #[serde(default)]
    pub standard_out_path: Option<PathBuf>,

    /// Standard error redirect. `/dev/null` when unset.
    #[serde(default)]
    pub standard_error_path: Option<PathBuf>,
}

impl LaunchAgentConfig {
    /// Create a config with no arguments, no interval and no redirects.
    pub fn new(name: impl Into<String>, program: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            arguments: Vec::new(),
            start_interval: None,
            standard_out_path: None,
            standard_error_path: None,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.arguments.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the relaunch interval in seconds.
    pub fn start_interval(mut self, secs: u32) -> Self {
        self.start_interval = Some(secs);
        self
    }

    /// Set the standard output redirect.
    pub fn standard_out_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.standard_out_path = Some(path.into());
        self
    }

    /// Set the standard error redirect.
    pub fn standard_error_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.standard_error_path = Some(path.into());
        self
    }

    /// Full launch command: the program followed by its arguments.
    pub fn program_arguments(&self) -> Vec<String> {
        std::iter::once(self.program.to_string_lossy().into_owned())
            .chain(self.arguments.iter().cloned())
            .collect()
    }
}
