//! `sitelink navigate <path> [locale]` – print the router destination.

use anyhow::Result;
use clap::Args;
use sitelink_core::config::SiteConfig;
use sitelink_core::navigate::{ExecutionContext, NavigateOptions, Navigator, Router};
use std::io::{self, Write};

#[derive(Debug, Args)]
pub struct NavigateArgs {
    /// Root-relative path, e.g. /page/.
    pub path: String,
    /// Target locale; defaults to the configured default_locale.
    pub locale: Option<String>,
    /// Replace the current history entry instead of pushing.
    #[arg(long)]
    pub replace: bool,
    /// Simulate build-time rendering (navigation is a no-op).
    #[arg(long)]
    pub prerender: bool,
}

/// Router that writes each destination and its history mode to a writer.
pub(crate) struct WriterRouter<W> {
    out: W,
}

impl<W: Write> WriterRouter<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Router for WriterRouter<W> {
    type Error = io::Error;

    fn navigate(
        &mut self,
        destination: &str,
        options: Option<&NavigateOptions>,
    ) -> Result<(), Self::Error> {
        let mode = match options {
            Some(o) if o.replace => "replace",
            _ => "push",
        };
        writeln!(self.out, "{mode} {destination}")
    }
}

pub(crate) fn navigate_with<W: Write>(
    cfg: &SiteConfig,
    args: &NavigateArgs,
    out: W,
) -> Result<W> {
    let locale = args.locale.as_deref().unwrap_or(&cfg.default_locale);
    let options = NavigateOptions {
        replace: args.replace,
        state: None,
    };
    let mut navigator = Navigator::new(
        WriterRouter::new(out),
        ExecutionContext::from_interactive(!args.prerender),
    );
    navigator.navigate(&args.path, locale, Some(&options))?;
    Ok(navigator.into_router().out)
}

pub fn run_navigate(cfg: &SiteConfig, args: &NavigateArgs) -> Result<()> {
    let stdout = io::stdout();
    navigate_with(cfg, args, stdout.lock())?;
    Ok(())
}
