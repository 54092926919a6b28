use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::analytics::EventDefaults;

/// Extensions of content pages; never treated as static assets even if listed.
pub const PAGE_EXTENSIONS: &[&str] = &["html", "htm", "md", "mdx"];

/// Human-facing strings and theme values handed to the dispatcher
/// (optional `[labels]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelsConfig {
    /// Accessible label of the inline glossary indicator.
    pub glossary_label: String,
    /// Glyph appended after links that open in a new tab.
    pub external_glyph: String,
    /// Color applied to the active internal link.
    pub active_color: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            glossary_label: "See definition".to_string(),
            external_glyph: "↗".to_string(),
            active_color: "primary".to_string(),
        }
    }
}

/// Site configuration loaded from `~/.config/sitelink/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// The site's own origin; absolute URLs with any other origin are external.
    pub site_url: String,
    /// Extensions (without the dot) of files served directly rather than rendered.
    pub static_extensions: Vec<String>,
    /// Path prefix of the glossary section.
    pub glossary_prefix: String,
    /// Locale codes that may appear as the first path segment.
    pub locales: Vec<String>,
    /// Locale used when the caller does not pass one explicitly.
    pub default_locale: String,
    /// Optional analytics defaults; if missing, built-in defaults are used.
    #[serde(default)]
    pub analytics: Option<EventDefaults>,
    /// Optional labels; if missing, built-in defaults are used.
    #[serde(default)]
    pub labels: Option<LabelsConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: "https://ethereum.org/".to_string(),
            static_extensions: [
                "zip", "tar", "gz", "tgz", "7z", "png", "jpg", "jpeg", "gif", "svg", "webp",
                "mp3", "mp4", "webm", "woff", "woff2",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            glossary_prefix: "/glossary/".to_string(),
            locales: vec!["en".to_string()],
            default_locale: "en".to_string(),
            analytics: None,
            labels: None,
        }
    }
}

/// Invalid values in an otherwise well-formed config file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("site_url {url:?} is not an absolute URL: {reason}")]
    InvalidSiteUrl { url: String, reason: String },
    #[error("site_url {0:?} has no host")]
    SiteUrlWithoutHost(String),
    #[error("glossary_prefix {0:?} must start with '/'")]
    RelativeGlossaryPrefix(String),
    #[error("default_locale must not be empty")]
    EmptyDefaultLocale,
}

impl SiteConfig {
    /// Parses `site_url` into the origin used for external-link checks.
    pub fn site_origin_url(&self) -> Result<url::Url, ConfigError> {
        let parsed = url::Url::parse(&self.site_url).map_err(|e| ConfigError::InvalidSiteUrl {
            url: self.site_url.clone(),
            reason: e.to_string(),
        })?;
        if parsed.host_str().is_none() {
            return Err(ConfigError::SiteUrlWithoutHost(self.site_url.clone()));
        }
        Ok(parsed)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.site_origin_url()?;
        if !self.glossary_prefix.starts_with('/') {
            return Err(ConfigError::RelativeGlossaryPrefix(
                self.glossary_prefix.clone(),
            ));
        }
        if self.default_locale.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultLocale);
        }
        Ok(())
    }

    pub fn event_defaults(&self) -> EventDefaults {
        self.analytics.clone().unwrap_or_default()
    }

    pub fn labels(&self) -> LabelsConfig {
        self.labels.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitelink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SiteConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SiteConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.site_url, "https://ethereum.org/");
        assert_eq!(cfg.glossary_prefix, "/glossary/");
        assert_eq!(cfg.default_locale, "en");
        assert!(cfg.static_extensions.iter().any(|e| e == "zip"));
        assert!(!cfg.static_extensions.iter().any(|e| e == "pdf"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SiteConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SiteConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.site_url, cfg.site_url);
        assert_eq!(parsed.static_extensions, cfg.static_extensions);
        assert_eq!(parsed.glossary_prefix, cfg.glossary_prefix);
        assert_eq!(parsed.locales, cfg.locales);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            site_url = "https://docs.example.org/"
            static_extensions = ["zip", "png"]
            glossary_prefix = "/terms/"
            locales = ["en", "de", "fr"]
            default_locale = "de"
        "#;
        let cfg: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.site_url, "https://docs.example.org/");
        assert_eq!(cfg.static_extensions, vec!["zip", "png"]);
        assert_eq!(cfg.locales.len(), 3);
        assert!(cfg.analytics.is_none());
        assert!(cfg.labels.is_none());
        assert_eq!(cfg.event_defaults(), EventDefaults::default());
        assert_eq!(cfg.labels(), LabelsConfig::default());
    }

    #[test]
    fn config_toml_analytics_and_labels() {
        let toml = r#"
            site_url = "https://ethereum.org/"
            static_extensions = []
            glossary_prefix = "/glossary/"
            locales = ["en"]
            default_locale = "en"

            [analytics]
            category = "Outbound"
            action = "Click"

            [labels]
            glossary_label = "Siehe Definition"
            external_glyph = "->"
            active_color = "blue"
        "#;
        let cfg: SiteConfig = toml::from_str(toml).unwrap();
        let analytics = cfg.event_defaults();
        assert_eq!(analytics.category, "Outbound");
        assert_eq!(analytics.action, "Click");
        let labels = cfg.labels();
        assert_eq!(labels.glossary_label, "Siehe Definition");
        assert_eq!(labels.external_glyph, "->");
    }

    #[test]
    fn validate_rejects_bad_values() {
        let cfg = SiteConfig {
            site_url: "/relative".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidSiteUrl { .. })
        ));

        let cfg = SiteConfig {
            site_url: "mailto:team@example.org".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::SiteUrlWithoutHost(
                "mailto:team@example.org".to_string()
            ))
        );

        let cfg = SiteConfig {
            glossary_prefix: "glossary/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::RelativeGlossaryPrefix("glossary/".to_string()))
        );

        let cfg = SiteConfig {
            default_locale: " ".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyDefaultLocale));
    }

    #[test]
    fn load_from_reads_and_validates_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let toml = toml::to_string_pretty(&SiteConfig::default()).unwrap();
        file.write_all(toml.as_bytes()).unwrap();
        let cfg = load_from(file.path()).unwrap();
        assert_eq!(cfg.site_url, "https://ethereum.org/");

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        bad.write_all(
            br#"
            site_url = "not a url"
            static_extensions = []
            glossary_prefix = "/glossary/"
            locales = []
            default_locale = "en"
        "#,
        )
        .unwrap();
        let err = load_from(bad.path()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid config"));
    }
}
