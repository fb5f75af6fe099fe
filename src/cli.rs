//! CLI definitions for AutoLaunch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// AutoLaunch CLI.
#[derive(Parser)]
#[command(name = "autolaunch")]
#[command(about = "Register programs to launch at login (macOS LaunchAgents)")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.autolaunch/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Home directory holding Library/LaunchAgents (default: current user's home)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Also write logs to daily-rotated files in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Write the launch item's descriptor
    Enable {
        /// Launch item name
        name: String,

        #[command(flatten)]
        item: ItemArgs,
    },

    /// Remove the launch item's descriptor
    Disable {
        /// Launch item name
        name: String,
    },

    /// Show whether launch items are enabled
    Status {
        /// Launch item name (default: every configured item)
        name: Option<String>,
    },

    /// Disable the item if enabled, enable it otherwise
    Toggle {
        /// Launch item name
        name: String,

        #[command(flatten)]
        item: ItemArgs,
    },

    /// Print the descriptor `enable` would write
    Render {
        /// Launch item name
        name: String,

        #[command(flatten)]
        item: ItemArgs,
    },
}

/// Per-invocation overrides for a launch item.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct ItemArgs {
    /// Absolute path of the program to launch
    #[arg(long)]
    pub program: Option<PathBuf>,

    /// Relaunch interval in seconds
    #[arg(long)]
    pub interval: Option<u32>,

    /// Standard output redirect (default: /dev/null)
    #[arg(long)]
    pub stdout: Option<PathBuf>,

    /// Standard error redirect (default: /dev/null)
    #[arg(long)]
    pub stderr: Option<PathBuf>,

    /// Program arguments, given after `--`
    #[arg(last = true)]
    pub args: Vec<String>,
}
