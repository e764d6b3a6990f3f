//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "Radianco"
//! author = "Sebastián Franco"
//! url = "https://radianco.com"
//! default_lang = "en"
//!
//! [site.info.description]
//! en = "A blog by friends who started building together."
//! es = "Un blog de amigos que empezaron a construir juntos."
//!
//! [site.feed]
//! enable = true
//! path = "rss.xml"
//! ```

use serde::{Deserialize, Serialize};

use super::{FeedConfig, SiteInfoConfig};

/// Site section configuration containing info and feed settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site metadata (title, author, description, etc.)
    pub info: SiteInfoConfig,

    /// Feed generation settings (RSS/Atom).
    pub feed: FeedConfig,
}
