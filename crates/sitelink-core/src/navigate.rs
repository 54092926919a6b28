//! Locale-aware programmatic navigation.
//!
//! The navigator prefixes a path with a locale and hands the destination to
//! a [`Router`]. During static pre-rendering navigation is meaningless, so a
//! navigator built with [`ExecutionContext::Prerender`] does nothing.

use serde::{Deserialize, Serialize};

/// Passthrough options for the router; never inspected here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    #[serde(default)]
    pub replace: bool,
    /// Opaque history state.
    #[serde(default)]
    pub state: Option<serde_json::Value>,
}

/// Whether the code runs with a live user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    Interactive,
    /// Build-time rendering; navigation requests are dropped.
    Prerender,
}

impl ExecutionContext {
    pub fn from_interactive(interactive: bool) -> Self {
        if interactive {
            ExecutionContext::Interactive
        } else {
            ExecutionContext::Prerender
        }
    }

    pub fn can_navigate(self) -> bool {
        matches!(self, ExecutionContext::Interactive)
    }
}

/// Client-side router that performs the actual transition.
pub trait Router {
    type Error;

    fn navigate(
        &mut self,
        destination: &str,
        options: Option<&NavigateOptions>,
    ) -> Result<(), Self::Error>;
}

impl<R: Router + ?Sized> Router for &mut R {
    type Error = R::Error;

    fn navigate(
        &mut self,
        destination: &str,
        options: Option<&NavigateOptions>,
    ) -> Result<(), Self::Error> {
        (**self).navigate(destination, options)
    }
}

/// Locale-prefixed destination: `"/" + locale + path`.
pub fn destination(path: &str, locale: &str) -> String {
    format!("/{locale}{path}")
}

pub struct Navigator<R> {
    router: R,
    context: ExecutionContext,
}

impl<R: Router> Navigator<R> {
    pub fn new(router: R, context: ExecutionContext) -> Self {
        Self { router, context }
    }

    pub fn context(&self) -> ExecutionContext {
        self.context
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn into_router(self) -> R {
        self.router
    }

    /// Navigates to `path` under `locale`. A single attempt; router errors
    /// are returned unchanged. No-op outside an interactive context.
    pub fn navigate(
        &mut self,
        path: &str,
        locale: &str,
        options: Option<&NavigateOptions>,
    ) -> Result<(), R::Error> {
        if !self.context.can_navigate() {
            tracing::debug!(path, locale, "navigation skipped outside interactive context");
            return Ok(());
        }

        let destination = destination(path, locale);
        tracing::debug!(%destination, "navigating");
        self.router.navigate(&destination, options)
    }
}
