//! `sitelink dispatch <target>` – print the chosen strategy and props as JSON.

use anyhow::Result;
use clap::Args;
use sitelink_core::analytics::{AnalyticsEvent, AnalyticsSink, RecordingSink, TracingSink};
use sitelink_core::classify::Classifier;
use sitelink_core::config::SiteConfig;
use sitelink_core::dispatch::{dispatch_target, Direction, LinkOptions, RenderContext};
use sitelink_core::target::LinkTarget;

#[derive(Debug, Args)]
pub struct DispatchArgs {
    /// Raw link target (URL, path or #fragment).
    pub target: LinkTarget,
    /// Explicit locale for internal links.
    #[arg(long)]
    pub locale: Option<String>,
    /// Suppress the new-tab affordance.
    #[arg(long)]
    pub hide_arrow: bool,
    /// Use exact instead of prefix matching for the active state.
    #[arg(long)]
    pub exact: bool,
    /// Render right-to-left.
    #[arg(long)]
    pub rtl: bool,
    /// Override the analytics event category.
    #[arg(long)]
    pub event_category: Option<String>,
    /// Override the analytics event action.
    #[arg(long)]
    pub event_action: Option<String>,
    /// Override the analytics event label.
    #[arg(long)]
    pub event_label: Option<String>,
    /// Simulate a click and print any analytics event fired.
    #[arg(long)]
    pub click: bool,
}

impl DispatchArgs {
    /// Builds link options; any `--event-*` flag turns on a custom event, with
    /// unset parts taken from the configured defaults and the target.
    pub(crate) fn link_options(&self, cfg: &SiteConfig) -> LinkOptions {
        let overridden = self.event_category.is_some()
            || self.event_action.is_some()
            || self.event_label.is_some();
        let custom_event = overridden.then(|| {
            let defaults = cfg.event_defaults();
            AnalyticsEvent::new(
                self.event_category.clone().unwrap_or(defaults.category),
                self.event_action.clone().unwrap_or(defaults.action),
                self.event_label
                    .clone()
                    .unwrap_or_else(|| self.target.to_string()),
            )
        });

        LinkOptions {
            locale: self.locale.clone(),
            hide_arrow: self.hide_arrow,
            is_partially_active: !self.exact,
            custom_event,
            dir: if self.rtl { Direction::Rtl } else { Direction::Ltr },
        }
    }
}

/// Forwards to both the log and an in-memory recorder.
struct TeeSink<'a> {
    log: TracingSink,
    recorder: &'a RecordingSink,
}

impl AnalyticsSink for TeeSink<'_> {
    fn track(&self, event: &AnalyticsEvent) {
        self.log.track(event);
        self.recorder.track(event);
    }
}

pub fn run_dispatch(cfg: &SiteConfig, args: &DispatchArgs) -> Result<()> {
    let classifier = Classifier::new(cfg)?;
    let ctx = RenderContext::from_config(cfg);
    let options = args.link_options(cfg);

    let dispatch = dispatch_target(args.target.as_str(), &classifier, &options, &ctx);
    println!("{}", serde_json::to_string_pretty(&dispatch)?);

    if args.click {
        let recorder = RecordingSink::new();
        let outcome = dispatch.click(&TeeSink {
            log: TracingSink,
            recorder: &recorder,
        });
        println!(
            "click: tracked={} stop_propagation={}",
            outcome.tracked, outcome.stop_propagation
        );
        for event in recorder.events() {
            println!("event: {}", serde_json::to_string(&event)?);
        }
    }

    Ok(())
}
