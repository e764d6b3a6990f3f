//! RSS 2.0 feed generation.

use super::common::{FeedItem, assemble};
use crate::{config::SiteConfig, post::Post};
use anyhow::{Result, anyhow};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::sync::LazyLock;

/// Render an RSS 2.0 feed document for the given posts.
pub fn render_rss(config: &SiteConfig, posts: &[Post]) -> Result<String> {
    RssFeed::build(config, posts).into_xml()
}

struct RssFeed {
    config: SiteConfig,
    items: Vec<FeedItem>,
}

impl RssFeed {
    fn build(config: &SiteConfig, posts: &[Post]) -> Self {
        Self {
            config: config.clone(),
            items: assemble(posts),
        }
    }

    fn into_xml(self) -> Result<String> {
        let items: Vec<_> = self
            .items
            .iter()
            .map(|item| item_to_rss(item, &self.config))
            .collect();

        let info = &self.config.site.info;
        let channel = ChannelBuilder::default()
            .title(&info.title)
            .link(info.base_url())
            .description(info.description.get(info.default_lang))
            .language(info.default_lang.code().to_string())
            .generator("radianco-core".to_string())
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
        Ok(channel.to_string())
    }
}

fn item_to_rss(item: &FeedItem, config: &SiteConfig) -> rss::Item {
    // Build full URL from base URL + site-relative link
    let link = format!("{}{}", config.site.info.base_url(), item.link);

    let author = normalize_rss_author(&item.author, config);

    ItemBuilder::default()
        .title(item.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(Some(item.description.clone()))
        .pub_date(item.pub_date.to_rfc2822())
        .author(author)
        .build()
}

/// Normalize author field to RSS format: "email (Name)"
///
/// The author field on a post is a roster id; resolve it against the
/// configured roster first, preferring the author's own email and
/// falling back to the site contact address.
fn normalize_rss_author(author: &str, config: &SiteConfig) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    if let Some(entry) = config.author(author) {
        if !entry.socials.email.is_empty() {
            return Some(format!("{} ({})", entry.socials.email, entry.name));
        }
        if !config.site.info.email.is_empty() {
            return Some(format!("{} ({})", config.site.info.email, entry.name));
        }
        return Some(entry.name.clone());
    }

    // Not a roster id - pass through if already in RSS form
    if RE_VALID_AUTHOR.is_match(author) {
        return Some(author.to_string());
    }

    // Combine site email and the raw author string
    if config.site.info.email.is_empty() {
        return Some(author.to_string());
    }
    Some(format!("{} ({})", config.site.info.email, author))
}
