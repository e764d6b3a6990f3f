//! `[site.info]` configuration.
//!
//! Contains basic site information like title, author, description, etc.
//! These values feed the syndication renderers and the page templates.

use crate::config::ConfigDiagnostics;
use crate::post::{Lang, LocalizedText};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Color theme applied when a visitor has no stored preference.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

/// Site metadata for feed generation and template rendering.
/// For custom fields, use `[site.info.extra]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description, in both site languages.
    pub description: LocalizedText,

    /// Default author name, used when a post author cannot be resolved.
    pub author: String,

    /// Contact email, used for RSS author normalization.
    pub email: String,

    /// Site URL (e.g., "https://example.com").
    pub url: Option<String>,

    /// Language served when a visitor has no stored preference.
    pub default_lang: Lang,

    /// Theme served when a visitor has no stored preference.
    pub default_theme: Theme,

    /// Custom fields for templates.
    #[serde(default)]
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: LocalizedText::default(),
            author: String::new(),
            email: String::new(),
            url: None,
            default_lang: Lang::En,
            default_theme: Theme::Light,
            extra: FxHashMap::default(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - If `feed_enabled`, `url` must be set
    /// - `url` must be a valid URL with scheme (e.g., `https://example.com`)
    pub fn validate(&self, feed_enabled: bool, diag: &mut ConfigDiagnostics) {
        // Feed requires url
        if feed_enabled && self.url.is_none() {
            diag.error_with_hint(
                "site.info.url",
                "site.feed.enable is enabled but site.info.url is not configured",
                "set site.info.url, e.g.: \"https://example.com\"",
            );
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            "site.info.url",
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            "site.info.url",
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        "site.info.url",
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }

    /// Base URL with any trailing slash removed, empty when unset.
    pub fn base_url(&self) -> &str {
        self.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }
}
