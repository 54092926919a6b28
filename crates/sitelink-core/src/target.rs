//! Raw link targets as supplied by page components.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An uncanonicalized link target: absolute URL, root-relative path or `#fragment`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkTarget(String);

impl LinkTarget {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Resolves the `to`/`href` prop pair; `to` wins when both are set.
    pub fn from_props(to: Option<&str>, href: Option<&str>) -> Option<Self> {
        to.or(href).map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for LinkTarget {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LinkTarget {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(raw))
    }
}

impl From<&str> for LinkTarget {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for LinkTarget {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_takes_precedence_over_href() {
        let t = LinkTarget::from_props(Some("/a/"), Some("/b/")).unwrap();
        assert_eq!(t.as_str(), "/a/");
        let t = LinkTarget::from_props(None, Some("/b/")).unwrap();
        assert_eq!(t.as_str(), "/b/");
        assert!(LinkTarget::from_props(None, None).is_none());
    }

    #[test]
    fn keeps_raw_string() {
        let t = LinkTarget::new("  /Page-2/#Section ");
        assert_eq!(t.to_string(), "  /Page-2/#Section ");
    }
}
