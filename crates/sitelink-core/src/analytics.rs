//! Analytics events described by the dispatcher and the sinks that emit them.
//!
//! The dispatcher only *describes* the event a click should fire; emitting it
//! is the job of an [`AnalyticsSink`] at the UI boundary. Sinks are
//! fire-and-forget: they return nothing and must not block or panic.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// A single tracking event, fired at most once per click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

impl AnalyticsEvent {
    pub fn new(
        category: impl Into<String>,
        action: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: label.into(),
        }
    }

    /// Default event for a click on an outbound link; the label is the raw target.
    pub fn external_click(target: &str, defaults: &EventDefaults) -> Self {
        Self::new(defaults.category.as_str(), defaults.action.as_str(), target)
    }
}

/// Category and action of the default outbound-click event
/// (optional `[analytics]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDefaults {
    pub category: String,
    pub action: String,
}

impl Default for EventDefaults {
    fn default() -> Self {
        Self {
            category: "External link".to_string(),
            action: "Clicked".to_string(),
        }
    }
}

/// Destination for analytics events.
pub trait AnalyticsSink {
    fn track(&self, event: &AnalyticsEvent);
}

/// Sink that records events as structured log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn track(&self, event: &AnalyticsEvent) {
        tracing::info!(
            category = %event.category,
            action = %event.action,
            label = %event.label,
            "analytics event"
        );
    }
}

/// Sink that keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl AnalyticsSink for RecordingSink {
    fn track(&self, event: &AnalyticsEvent) {
        match self.events.lock() {
            Ok(mut guard) => guard.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}
