//! CLI for inspecting link classification, dispatch and navigation.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sitelink_core::config::{self, SiteConfig};
use sitelink_core::target::LinkTarget;
use std::path::{Path, PathBuf};

use commands::{run_classify, run_config, run_dispatch, run_navigate, DispatchArgs, NavigateArgs};

/// Top-level CLI for sitelink.
#[derive(Debug, Parser)]
#[command(name = "sitelink")]
#[command(about = "sitelink: classify, dispatch and navigate localized site links", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the classification flags of a link target.
    Classify {
        /// Raw link target (URL, path or #fragment).
        target: LinkTarget,
    },

    /// Print the render strategy and props chosen for a link target.
    Dispatch(DispatchArgs),

    /// Print the locale-prefixed destination the router would receive.
    Navigate(NavigateArgs),

    /// Show the config file path and the effective configuration.
    Config,
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Classify { target } => run_classify(&cfg, &target)?,
            CliCommand::Dispatch(args) => run_dispatch(&cfg, &args)?,
            CliCommand::Navigate(args) => run_navigate(&cfg, &args)?,
            CliCommand::Config => run_config(&cfg, cli.config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
