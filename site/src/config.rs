//! Page configuration: branding strings and the asset location.
//!
//! Every field has a default, so an empty JSON object `{}` is a valid config.
//!
//! ```rust
//! use matdiscover_site::config::SiteConfig;
//!
//! let config = SiteConfig::from_json(r#"{ "asset_base": "/static" }"#).unwrap();
//! assert_eq!(config.asset("hero-bg.png"), "/static/hero-bg.png");
//! assert_eq!(config.brand, "MatDiscover");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SiteError;

/// Branding and asset settings for a rendered page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Name shown in the header
    pub brand: String,
    /// Document `<title>`
    pub page_title: String,
    /// URL prefix for images (no trailing slash needed)
    pub asset_base: String,
    /// Footer copyright line
    pub copyright: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "MatDiscover".into(),
            page_title: "MatDiscover - Hierarchical ML for Materials Discovery".into(),
            asset_base: "/images".into(),
            copyright: "© 2026 Hierarchical ML for Materials Discovery. All rights reserved."
                .into(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SiteError> {
        let config: SiteConfig =
            serde_json::from_str(text).map_err(|source| SiteError::Parse {
                path: "<inline>".into(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let text = std::fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        let config: SiteConfig =
            serde_json::from_str(&text).map_err(|source| SiteError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        debug!(path = %path.display(), brand = %config.brand, "loaded site config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        if self.brand.trim().is_empty() {
            return Err(SiteError::InvalidConfig("brand must not be empty".into()));
        }
        if self.page_title.trim().is_empty() {
            return Err(SiteError::InvalidConfig(
                "page_title must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// URL of an image under `asset_base`.
    pub fn asset(&self, file: &str) -> String {
        let base = self.asset_base.trim_end_matches('/');
        if base.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", base, file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = SiteConfig::from_json(r#"{ "theme": "dark" }"#).unwrap_err();
        assert!(matches!(err, SiteError::Parse { .. }));
    }

    #[test]
    fn blank_brand_is_invalid() {
        let err = SiteConfig::from_json(r#"{ "brand": "  " }"#).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)));
    }

    #[test]
    fn asset_joins_base_and_file() {
        let mut config = SiteConfig::default();
        assert_eq!(config.asset("hero-bg.png"), "/images/hero-bg.png");

        config.asset_base = "https://cdn.example.org/img/".into();
        assert_eq!(
            config.asset("hero-bg.png"),
            "https://cdn.example.org/img/hero-bg.png"
        );

        config.asset_base = String::new();
        assert_eq!(config.asset("hero-bg.png"), "hero-bg.png");
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "brand": "CrystalScope" }}"#).unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.brand, "CrystalScope");
        assert_eq!(config.asset_base, "/images");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
    }
}
