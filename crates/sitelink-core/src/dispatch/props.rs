//! Render props for each strategy.

use serde::{Deserialize, Serialize};

/// Text direction forwarded onto the rendered link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Whitespace-wrapping mode of an internal link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WhiteSpace {
    #[default]
    Normal,
    /// Keeps a glossary term and its indicator on one line.
    NoWrap,
}

/// Plain same-document anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchorProps {
    pub href: String,
    pub dir: Direction,
}

/// Link opened in a new browsing context (outbound link or download).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalProps {
    pub href: String,
    pub new_tab: bool,
    /// Affordance rendered after the content; `None` when suppressed.
    pub after: Option<String>,
    pub dir: Direction,
}

/// Inline "see definition" indicator appended after a glossary link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossaryDecoration {
    pub aria_label: String,
}

/// Same-site content link; the router prepends the locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InternalProps {
    pub to: String,
    pub locale: Option<String>,
    /// Prefix match (`true`) or exact match for the active state.
    pub partially_active: bool,
    pub active_color: String,
    pub white_space: WhiteSpace,
    pub glossary: Option<GlossaryDecoration>,
    pub dir: Direction,
}
