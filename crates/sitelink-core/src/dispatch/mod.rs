//! Link dispatch: classification + caller options → render strategy.
//!
//! Precedence, first match wins:
//! 1. `is_hash` → [`RenderStrategy::HashAnchor`]
//! 2. `is_external || is_pdf || is_static` → [`RenderStrategy::ExternalOrDownload`]
//! 3. anything else → [`RenderStrategy::LocalizedInternal`]
//!
//! A hash anchor must not go through the client-side router, which would
//! navigate away instead of scrolling to the fragment. Only external targets
//! carry an analytics event; same-origin downloads open in a new tab untracked.

mod props;

pub use props::{
    AnchorProps, Direction, ExternalProps, GlossaryDecoration, InternalProps, WhiteSpace,
};

use serde::Serialize;

use crate::analytics::{AnalyticsEvent, AnalyticsSink, EventDefaults};
use crate::classify::{Classification, Classifier};
use crate::config::SiteConfig;

/// The three behaviorally distinct ways a link is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenderStrategy {
    HashAnchor,
    ExternalOrDownload,
    LocalizedInternal,
}

/// Caller-supplied per-link options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOptions {
    /// Explicit target locale for internal links.
    pub locale: Option<String>,
    /// Suppress the new-tab affordance.
    pub hide_arrow: bool,
    /// Prefix (`true`) vs exact active-state matching for internal links.
    pub is_partially_active: bool,
    /// Replaces the default outbound-click event.
    pub custom_event: Option<AnalyticsEvent>,
    pub dir: Direction,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            locale: None,
            hide_arrow: false,
            is_partially_active: true,
            custom_event: None,
            dir: Direction::Ltr,
        }
    }
}

/// Theme, label and analytics defaults passed in explicitly by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub active_color: String,
    pub external_glyph: String,
    pub glossary_label: String,
    pub event_defaults: EventDefaults,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

impl RenderContext {
    pub fn from_config(cfg: &SiteConfig) -> Self {
        let labels = cfg.labels();
        Self {
            active_color: labels.active_color,
            external_glyph: labels.external_glyph,
            glossary_label: labels.glossary_label,
            event_defaults: cfg.event_defaults(),
        }
    }
}

/// Strategy-tagged render props.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy")]
pub enum LinkProps {
    HashAnchor(AnchorProps),
    ExternalOrDownload(ExternalProps),
    LocalizedInternal(InternalProps),
}

impl LinkProps {
    pub fn strategy(&self) -> RenderStrategy {
        match self {
            LinkProps::HashAnchor(_) => RenderStrategy::HashAnchor,
            LinkProps::ExternalOrDownload(_) => RenderStrategy::ExternalOrDownload,
            LinkProps::LocalizedInternal(_) => RenderStrategy::LocalizedInternal,
        }
    }
}

/// Result of dispatching one link: what to render and what a click fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    pub props: LinkProps,
    /// Event to emit when the link is clicked; `None` means untracked.
    pub on_click: Option<AnalyticsEvent>,
}

/// What the UI adapter did for a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickOutcome {
    pub tracked: bool,
    /// Set for tracked clicks only.
    pub stop_propagation: bool,
}

impl Dispatch {
    pub fn strategy(&self) -> RenderStrategy {
        self.props.strategy()
    }

    /// Handles a user click: emits at most one event to `sink`.
    pub fn click(&self, sink: &dyn AnalyticsSink) -> ClickOutcome {
        match &self.on_click {
            Some(event) => {
                sink.track(event);
                ClickOutcome {
                    tracked: true,
                    stop_propagation: true,
                }
            }
            None => ClickOutcome::default(),
        }
    }
}

/// Selects the render strategy for `target` given its classification.
pub fn dispatch(
    target: &str,
    classification: &Classification,
    options: &LinkOptions,
    ctx: &RenderContext,
) -> Dispatch {
    let dispatch = if classification.is_hash {
        Dispatch {
            props: LinkProps::HashAnchor(AnchorProps {
                href: target.to_string(),
                dir: options.dir,
            }),
            on_click: None,
        }
    } else if classification.opens_in_new_tab() {
        let on_click = classification.is_external.then(|| {
            options
                .custom_event
                .clone()
                .unwrap_or_else(|| AnalyticsEvent::external_click(target, &ctx.event_defaults))
        });
        Dispatch {
            props: LinkProps::ExternalOrDownload(ExternalProps {
                href: target.to_string(),
                new_tab: true,
                after: (!options.hide_arrow).then(|| ctx.external_glyph.clone()),
                dir: options.dir,
            }),
            on_click,
        }
    } else {
        let glossary = classification.is_glossary.then(|| GlossaryDecoration {
            aria_label: ctx.glossary_label.clone(),
        });
        Dispatch {
            props: LinkProps::LocalizedInternal(InternalProps {
                to: target.to_string(),
                locale: options.locale.clone(),
                partially_active: options.is_partially_active,
                active_color: ctx.active_color.clone(),
                white_space: if glossary.is_some() {
                    WhiteSpace::NoWrap
                } else {
                    WhiteSpace::Normal
                },
                glossary,
                dir: options.dir,
            }),
            on_click: None,
        }
    };

    tracing::debug!(
        link = target,
        strategy = ?dispatch.strategy(),
        tracked = dispatch.on_click.is_some(),
        "dispatched link"
    );
    dispatch
}

/// Classifies `target` and dispatches it in one step.
pub fn dispatch_target(
    target: &str,
    classifier: &Classifier,
    options: &LinkOptions,
    ctx: &RenderContext,
) -> Dispatch {
    let classification = classifier.classify(target);
    dispatch(target, &classification, options, ctx)
}
