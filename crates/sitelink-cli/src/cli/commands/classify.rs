//! `sitelink classify <target>` – print classification flags as JSON.

use anyhow::Result;
use sitelink_core::classify::Classifier;
use sitelink_core::config::SiteConfig;
use sitelink_core::target::LinkTarget;

pub fn run_classify(cfg: &SiteConfig, target: &LinkTarget) -> Result<()> {
    let classifier = Classifier::new(cfg)?;
    let flags = classifier.classify(target.as_str());
    println!("{}", serde_json::to_string_pretty(&flags)?);
    Ok(())
}
