//! `sitelink config` – show where the config lives and what is in effect.

use anyhow::Result;
use sitelink_core::config::{self, SiteConfig};
use std::path::Path;

pub fn run_config(cfg: &SiteConfig, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
