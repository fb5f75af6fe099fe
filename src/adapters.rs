//! Glue between the config file, CLI overrides and the LaunchAgent backend.

use std::path::{Path, PathBuf};

use tracing::warn;

use autolaunch_config::{Config, ConfigLoader, ConfigValidator};
use autolaunch_core::{LaunchAgent, LaunchAgentConfig};

use crate::cli::ItemArgs;

/// Load and validate the config file.
///
/// An explicit `--config` must exist; the default location may be absent.
pub(crate) fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(p) => ConfigLoader::load(p)?,
        None => ConfigLoader::load_or_default(&ConfigLoader::default_path())?,
    };

    for warning in ConfigValidator::validate(&config).into_result()? {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    Ok(config)
}

/// Build the item configuration: config file entry first, CLI flags on top.
pub(crate) fn item_config(
    name: &str,
    overrides: &ItemArgs,
    config: &Config,
) -> Result<LaunchAgentConfig, Box<dyn std::error::Error>> {
    let entry = config.item(name);

    let program = overrides
        .program
        .clone()
        .or_else(|| entry.map(|e| e.program_path()))
        .ok_or_else(|| {
            format!(
                "No program configured for '{}'; pass --program or add it to the config file",
                name
            )
        })?;

    let mut item = LaunchAgentConfig::new(name, program);

    if !overrides.args.is_empty() {
        item = item.args(overrides.args.iter().cloned());
    } else if let Some(e) = entry {
        item = item.args(e.args.iter().cloned());
    }

    item.start_interval = overrides.interval.or(entry.and_then(|e| e.start_interval));
    item.standard_out_path = overrides
        .stdout
        .clone()
        .or_else(|| entry.and_then(|e| e.stdout_path()));
    item.standard_error_path = overrides
        .stderr
        .clone()
        .or_else(|| entry.and_then(|e| e.stderr_path()));

    Ok(item)
}

/// Item configuration when only the descriptor location matters.
pub(crate) fn lookup_config(name: &str, config: &Config) -> LaunchAgentConfig {
    let program = config
        .item(name)
        .map(|e| e.program_path())
        .unwrap_or_default();
    LaunchAgentConfig::new(name, program)
}

/// Bind an item to the home directory from `--home`, the config file, or the
/// current user, in that order.
pub(crate) fn launch_agent(
    item: LaunchAgentConfig,
    home: Option<&Path>,
    config: &Config,
) -> Result<LaunchAgent, Box<dyn std::error::Error>> {
    let home: Option<PathBuf> = home.map(Path::to_path_buf).or_else(|| config.resolved_home_dir());
    match home {
        Some(dir) => Ok(LaunchAgent::new(item, dir)),
        None => Ok(LaunchAgent::for_current_user(item)?),
    }
}
