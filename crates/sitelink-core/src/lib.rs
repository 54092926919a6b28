pub mod config;
pub mod logging;

pub mod analytics;
pub mod classify;
pub mod dispatch;
pub mod navigate;
pub mod target;
