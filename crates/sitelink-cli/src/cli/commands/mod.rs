//! CLI command handlers, one file per command.

mod classify;
mod config;
mod dispatch;
mod navigate;

pub use classify::run_classify;
pub use config::run_config;
pub use dispatch::{run_dispatch, DispatchArgs};
pub use navigate::{run_navigate, NavigateArgs};

#[cfg(test)]
pub(crate) use navigate::navigate_with;
