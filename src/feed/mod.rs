//! Feed generation (RSS, Atom).
//!
//! Assembles syndication items from post records and renders them as a
//! feed document:
//!
//! - **RSS 2.0**: Standard feed format (default)
//! - **Atom 1.0**: Modern feed format
//!
//! The renderers return the document string; writing it to the output
//! tree belongs to the hosting build step.

use crate::config::{FeedFormat, SiteConfig};
use crate::post::Post;
use anyhow::Result;

pub mod atom;
mod common;
pub mod rss;

pub use common::{FeedItem, assemble};

/// Render the feed if enabled in config (RSS or Atom based on format
/// setting). Returns `None` when feed generation is disabled.
pub fn render_feed(config: &SiteConfig, posts: &[Post]) -> Result<Option<String>> {
    if !config.site.feed.enable {
        return Ok(None);
    }
    let xml = match config.site.feed.format {
        FeedFormat::Rss => rss::render_rss(config, posts)?,
        FeedFormat::Atom => atom::render_atom(config, posts)?,
    };
    Ok(Some(xml))
}
