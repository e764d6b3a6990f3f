//! Feed (RSS/Atom) generation configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feed output format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0 format (default).
    #[default]
    Rss,
    /// Atom 1.0 format.
    Atom,
}

/// `[site.feed]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Enable feed generation.
    pub enable: bool,
    /// Output path for the feed file, relative to the site root.
    pub path: PathBuf,
    /// Feed format: rss | atom.
    pub format: FeedFormat,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: false,
            path: "rss.xml".into(),
            format: FeedFormat::Rss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(!config.site.feed.enable);
        assert_eq!(config.site.feed.path, PathBuf::from("rss.xml"));
        assert_eq!(config.site.feed.format, FeedFormat::Rss);
    }

    #[test]
    fn test_custom_config() {
        let config =
            test_parse_config("[site.feed]\nenable = true\npath = \"feed.xml\"\nformat = \"atom\"");
        assert!(config.site.feed.enable);
        assert_eq!(config.site.feed.path, PathBuf::from("feed.xml"));
        assert_eq!(config.site.feed.format, FeedFormat::Atom);
    }
}
