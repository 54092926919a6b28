//! URL classification.
//!
//! Turns a raw link target into a set of independent boolean facets. The
//! classifier never fails: input that cannot be parsed yields all facets
//! false apart from `is_hash`, which only looks at the first character.

mod path;

pub use path::{path_extension, strip_locale_segment};

use serde::Serialize;
use std::collections::HashSet;
use url::Url;

use crate::config::{ConfigError, SiteConfig, PAGE_EXTENSIONS};

const PDF_EXTENSION: &str = "pdf";

/// Facets of a link target. Not mutually exclusive; the dispatcher applies precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Classification {
    /// Starts with `#`: a fragment of the current document.
    pub is_hash: bool,
    /// Absolute URL whose origin differs from the site's.
    pub is_external: bool,
    /// Same-site path under the glossary section.
    pub is_glossary: bool,
    /// Path extension is a configured static-asset extension.
    pub is_static: bool,
    /// Path extension is `pdf`.
    pub is_pdf: bool,
}

impl Classification {
    /// External targets and downloads open in a new browsing context.
    pub fn opens_in_new_tab(&self) -> bool {
        self.is_external || self.is_pdf || self.is_static
    }
}

/// Classifier prepared from a [`SiteConfig`].
#[derive(Debug, Clone)]
pub struct Classifier {
    site: Url,
    static_extensions: HashSet<String>,
    glossary_prefix: String,
    locales: Vec<String>,
}

impl Classifier {
    pub fn new(cfg: &SiteConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let site = cfg.site_origin_url()?;

        let static_extensions = cfg
            .static_extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty() && !PAGE_EXTENSIONS.contains(&e.as_str()))
            .collect();

        let mut glossary_prefix = cfg.glossary_prefix.clone();
        if !glossary_prefix.ends_with('/') {
            glossary_prefix.push('/');
        }

        Ok(Self {
            site,
            static_extensions,
            glossary_prefix,
            locales: cfg.locales.clone(),
        })
    }

    /// Classifies `target`. Pure: depends only on the string and this classifier.
    pub fn classify(&self, target: &str) -> Classification {
        let is_hash = target.starts_with('#');

        let Some(resolved) = self.resolve(target) else {
            tracing::trace!(link = target, "unparseable link target");
            return Classification {
                is_hash,
                ..Classification::default()
            };
        };

        let is_external = resolved.origin() != self.site.origin();
        let extension = if resolved.cannot_be_a_base() {
            None
        } else {
            path_extension(resolved.path())
        };
        let is_pdf = extension.as_deref() == Some(PDF_EXTENSION);
        let is_static = extension
            .as_deref()
            .is_some_and(|e| self.static_extensions.contains(e));
        let is_glossary = !is_external && self.is_glossary_path(resolved.path());

        let classification = Classification {
            is_hash,
            is_external,
            is_glossary,
            is_static,
            is_pdf,
        };
        tracing::trace!(link = target, ?classification, "classified link target");
        classification
    }

    /// Parses absolute targets as-is; joins relative and protocol-relative
    /// targets onto the site URL.
    fn resolve(&self, target: &str) -> Option<Url> {
        match Url::parse(target) {
            Ok(url) => Some(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => self.site.join(target).ok(),
            Err(_) => None,
        }
    }

    fn is_glossary_path(&self, path: &str) -> bool {
        let matches = |p: &str| {
            p.starts_with(&self.glossary_prefix)
                || p == self.glossary_prefix.trim_end_matches('/')
        };
        matches(path) || strip_locale_segment(path, &self.locales).is_some_and(matches)
    }
}
