//! LaunchAgent core management: plist generation, enable/disable.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::launchd_config::{LaunchAgentConfig, NULL_DEVICE};
use crate::backend::AutoLaunch;
use crate::error::{AutoLaunchError, Result};
use crate::fs_util::path_exists;
use crate::plist::{PlistDocument, PlistValue};

/// macOS LaunchAgent manager.
#[derive(Debug, Clone)]
pub struct LaunchAgent {
    config: LaunchAgentConfig,
    home_dir: PathBuf,
}

impl LaunchAgent {
    /// Create a manager that keeps its descriptor under `home_dir`.
    pub fn new(config: LaunchAgentConfig, home_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            home_dir: home_dir.into(),
        }
    }

    /// Create a manager for the current user's home directory.
    pub fn for_current_user(config: LaunchAgentConfig) -> Result<Self> {
        let home = dirs::home_dir().ok_or(AutoLaunchError::HomeDirUnavailable)?;
        Ok(Self::new(config, home))
    }

    pub fn config(&self) -> &LaunchAgentConfig {
        &self.config
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// Get the plist file path.
    pub fn plist_path(&self) -> PathBuf {
        self.home_dir
            .join("Library")
            .join("LaunchAgents")
            .join(format!("{}.plist", self.config.name))
    }

    /// Build the descriptor document.
    pub fn document(&self) -> PlistDocument {
        let config = &self.config;
        let mut doc = PlistDocument::new();

        doc.insert("Label", config.name.as_str());
        doc.insert(
            "ProgramArguments",
            PlistValue::Array(
                config
                    .program_arguments()
                    .into_iter()
                    .map(PlistValue::String)
                    .collect(),
            ),
        );
        doc.insert("RunAtLoad", true);

        if let Some(interval) = config.start_interval {
            doc.insert("StartInterval", i64::from(interval));
        }

        doc.insert("StandardOutPath", redirect_target(config.standard_out_path.as_deref()));
        doc.insert("StandardErrorPath", redirect_target(config.standard_error_path.as_deref()));

        doc
    }

    /// Generate the plist XML content.
    pub fn render(&self) -> String {
        self.document().to_xml()
    }

    /// Write the descriptor, replacing any previous one.
    pub fn enable(&self) -> Result<()> {
        let program = &self.config.program;
        if !path_exists(program) {
            return Err(AutoLaunchError::PathNotExist(program.clone()));
        }
        if !program.is_absolute() {
            return Err(AutoLaunchError::PathIllegal(program.clone()));
        }
        validate_name(&self.config.name)?;

        let plist_path = self.plist_path();
        if let Some(parent) = plist_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // fs::write truncates, so a shorter document never leaves stale bytes.
        fs::write(&plist_path, self.render())?;

        info!(
            label = %self.config.name,
            "Enabled launch item at {}",
            plist_path.display()
        );
        Ok(())
    }

    /// Remove the descriptor. Does nothing if it is not there.
    pub fn disable(&self) -> Result<()> {
        validate_name(&self.config.name)?;
        let plist_path = self.plist_path();

        if !path_exists(&plist_path) {
            debug!(label = %self.config.name, "Launch item not enabled, nothing to remove");
            return Ok(());
        }

        match fs::remove_file(&plist_path) {
            Ok(()) => {
                info!(
                    label = %self.config.name,
                    "Removed launch item {}",
                    plist_path.display()
                );
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Check if the descriptor is present. Always false for an unusable name.
    pub fn is_enabled(&self) -> bool {
        validate_name(&self.config.name).is_ok() && path_exists(self.plist_path())
    }
}

impl AutoLaunch for LaunchAgent {
    fn enable(&self) -> Result<()> {
        LaunchAgent::enable(self)
    }

    fn disable(&self) -> Result<()> {
        LaunchAgent::disable(self)
    }

    fn is_enabled(&self) -> bool {
        LaunchAgent::is_enabled(self)
    }

    fn descriptor_path(&self) -> PathBuf {
        self.plist_path()
    }
}

fn redirect_target(path: Option<&Path>) -> String {
    path.map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| NULL_DEVICE.to_string())
}

/// Reject names that would escape the LaunchAgents directory.
pub(super) fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.contains('/') || name.contains('\\') {
        "contains a path separator"
    } else if name == "." || name == ".." {
        "is a relative directory reference"
    } else if name.contains('\0') {
        "contains a NUL byte"
    } else {
        return Ok(());
    };

    Err(AutoLaunchError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}
