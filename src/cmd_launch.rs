//! Launch item subcommand handlers.

use std::path::Path;

use tracing::info;

use autolaunch_config::Config;
use autolaunch_core::{AutoLaunch, LaunchAgent};

use crate::adapters::{item_config, launch_agent, lookup_config};
use crate::cli::{Commands, ItemArgs};

/// Handle a subcommand.
pub(crate) fn handle_command(
    command: Commands,
    home: Option<&Path>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Enable { name, item } => cmd_enable(&name, &item, home, config),
        Commands::Disable { name } => cmd_disable(&name, home, config),
        Commands::Status { name } => cmd_status(name.as_deref(), home, config),
        Commands::Toggle { name, item } => cmd_toggle(&name, &item, home, config),
        Commands::Render { name, item } => cmd_render(&name, &item, home, config),
    }
}

fn cmd_enable(
    name: &str,
    item: &ItemArgs,
    home: Option<&Path>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let agent = launch_agent(item_config(name, item, config)?, home, config)?;
    agent.enable()?;
    println!("Enabled '{}' ({})", name, agent.plist_path().display());
    Ok(())
}

fn cmd_disable(
    name: &str,
    home: Option<&Path>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let agent = launch_agent(lookup_config(name, config), home, config)?;
    if !agent.is_enabled() {
        info!("Launch item '{}' is not enabled", name);
    }
    agent.disable()?;
    println!("Disabled '{}'", name);
    Ok(())
}

fn cmd_status(
    name: Option<&str>,
    home: Option<&Path>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let names: Vec<&str> = match name {
        Some(n) => vec![n],
        None => config.items.iter().map(|i| i.name.as_str()).collect(),
    };

    if names.is_empty() {
        println!("No launch items configured");
        return Ok(());
    }

    for n in names {
        let agent = launch_agent(lookup_config(n, config), home, config)?;
        print_status(n, &agent);
    }

    Ok(())
}

fn print_status(name: &str, backend: &dyn AutoLaunch) {
    let state = if backend.is_enabled() { "ENABLED" } else { "DISABLED" };
    println!("{:<8} {} ({})", state, name, backend.descriptor_path().display());
}

/// Flip the item's state, the way a program registers itself on first run.
fn cmd_toggle(
    name: &str,
    item: &ItemArgs,
    home: Option<&Path>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let lookup: LaunchAgent = launch_agent(lookup_config(name, config), home, config)?;

    if lookup.is_enabled() {
        lookup.disable()?;
        println!("Disabled '{}'", name);
        Ok(())
    } else {
        cmd_enable(name, item, home, config)
    }
}

fn cmd_render(
    name: &str,
    item: &ItemArgs,
    home: Option<&Path>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let agent = launch_agent(item_config(name, item, config)?, home, config)?;
    print!("{}", agent.render());
    Ok(())
}
