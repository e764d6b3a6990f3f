//! Atom 1.0 feed generation.

use super::common::{FeedItem, assemble};
use crate::{config::SiteConfig, post::Post};
use anyhow::Result;
use atom_syndication::{
    Entry, EntryBuilder, Feed, FeedBuilder, FixedDateTime, GeneratorBuilder, Link, LinkBuilder,
    Person, PersonBuilder, Text,
};

/// Render an Atom 1.0 feed document for the given posts.
pub fn render_atom(config: &SiteConfig, posts: &[Post]) -> Result<String> {
    AtomFeed::build(config, posts).into_xml()
}

struct AtomFeed {
    config: SiteConfig,
    items: Vec<FeedItem>,
}

impl AtomFeed {
    fn build(config: &SiteConfig, posts: &[Post]) -> Self {
        Self {
            config: config.clone(),
            items: assemble(posts),
        }
    }

    fn into_xml(self) -> Result<String> {
        let info = &self.config.site.info;
        let base_url = info.base_url();

        let entries: Vec<Entry> = self
            .items
            .iter()
            .map(|item| item_to_atom_entry(item, &self.config))
            .collect();

        // Feed updated field is the most recent publish date
        let updated_str = self
            .items
            .iter()
            .map(|item| item.pub_date)
            .max()
            .unwrap_or_default()
            .to_rfc3339();

        let updated: FixedDateTime = updated_str
            .parse()
            .unwrap_or_else(|_| FixedDateTime::default());

        // Build author
        let author: Person = PersonBuilder::default()
            .name(info.author.clone())
            .email(Some(info.email.clone()))
            .build();

        // Build self link
        let self_link: Link = LinkBuilder::default()
            .href(format!(
                "{}/{}",
                base_url,
                self.config.site.feed.path.display()
            ))
            .rel("self".to_string())
            .mime_type(Some("application/atom+xml".to_string()))
            .build();

        // Build alternate link
        let alternate_link: Link = LinkBuilder::default()
            .href(base_url.to_string())
            .rel("alternate".to_string())
            .build();

        let feed: Feed = FeedBuilder::default()
            .title(Text::plain(info.title.clone()))
            .id(base_url)
            .updated(updated)
            .authors(vec![author])
            .links(vec![self_link, alternate_link])
            .subtitle(Some(Text::plain(
                info.description.get(info.default_lang).to_string(),
            )))
            .generator(Some(
                GeneratorBuilder::default()
                    .value("radianco-core")
                    .uri(Some(
                        "https://github.com/radianco/radianco-core".to_string(),
                    ))
                    .build(),
            ))
            .lang(info.default_lang.code().to_string())
            .entries(entries)
            .build();

        Ok(feed.to_string())
    }
}

fn item_to_atom_entry(item: &FeedItem, config: &SiteConfig) -> Entry {
    let updated: FixedDateTime = item
        .pub_date
        .to_rfc3339()
        .parse()
        .unwrap_or_else(|_| FixedDateTime::default());

    // Build full URL from base URL + site-relative link
    let link = format!("{}{}", config.site.info.base_url(), item.link);

    // Build entry link
    let entry_link: Link = LinkBuilder::default()
        .href(&link)
        .rel("alternate".to_string())
        .build();

    // Resolve the author roster id to a person entry
    let person = match config.author(&item.author) {
        Some(entry) => {
            let email = (!entry.socials.email.is_empty()).then(|| entry.socials.email.clone());
            PersonBuilder::default()
                .name(entry.name.clone())
                .email(email)
                .build()
        }
        None => PersonBuilder::default().name(item.author.clone()).build(),
    };

    EntryBuilder::default()
        .title(Text::plain(item.title.clone()))
        .id(&link)
        .updated(updated)
        .links(vec![entry_link])
        .summary(Some(Text::plain(item.description.clone())))
        .authors(vec![person])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Author;
    use crate::post::{Category, Lang, LocalizedText, PostMeta};
    use crate::utils::date::DateTimeUtc;

    // Helper to create a config for testing
    fn make_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.info.title = "Radianco".to_string();
        config.site.info.author = "Radianco".to_string();
        config.site.info.email = "hola@radianco.com".to_string();
        config.site.info.url = Some("https://radianco.com".to_string());
        config.site.info.description = LocalizedText::new("A blog", "Un blog");
        config.authors.push(Author {
            id: "francisco-diago".to_string(),
            name: "Francisco Diago".to_string(),
            ..Default::default()
        });
        config
    }

    fn make_post(id: &str, date: DateTimeUtc) -> Post {
        Post::new(
            id,
            PostMeta {
                title: "Test Post".to_string(),
                description: "A test summary".to_string(),
                author: "francisco-diago".to_string(),
                pub_date: date,
                updated_date: None,
                tags: Vec::new(),
                category: Category::Reads,
                lang: Lang::En,
                draft: false,
                image: None,
                image_alt: None,
            },
        )
    }

    #[test]
    fn test_entry_basic() {
        let config = make_config();
        let entry = item_to_atom_entry(
            &FeedItem {
                title: "Test Post".to_string(),
                pub_date: DateTimeUtc::from_ymd(2024, 1, 15),
                description: "A test summary".to_string(),
                author: "francisco-diago".to_string(),
                link: "/posts/test/".to_string(),
            },
            &config,
        );

        assert_eq!(entry.title().as_str(), "Test Post");
        assert_eq!(entry.id(), "https://radianco.com/posts/test/");
        assert!(entry.updated().to_rfc3339().starts_with("2024-01-15"));
        assert_eq!(entry.authors()[0].name(), "Francisco Diago");
    }

    #[test]
    fn test_entry_unknown_author_uses_raw_name() {
        let config = make_config();
        let entry = item_to_atom_entry(
            &FeedItem {
                title: "T".to_string(),
                pub_date: DateTimeUtc::from_ymd(2024, 1, 15),
                description: "D".to_string(),
                author: "someone-else".to_string(),
                link: "/posts/t/".to_string(),
            },
            &config,
        );
        assert_eq!(entry.authors()[0].name(), "someone-else");
    }

    #[test]
    fn test_feed_updated_is_newest_post() {
        let config = make_config();
        let posts = vec![
            make_post("old", DateTimeUtc::from_ymd(2023, 5, 1)),
            make_post("new", DateTimeUtc::from_ymd(2024, 2, 10)),
        ];

        let xml = render_atom(&config, &posts).unwrap();
        assert!(xml.contains("2024-02-10"));
        assert!(xml.contains("https://radianco.com/posts/new/"));
        assert!(xml.contains("https://radianco.com/posts/old/"));
    }

    #[test]
    fn test_feed_metadata() {
        let config = make_config();
        let xml = render_atom(&config, &[]).unwrap();
        assert!(xml.contains("Radianco"));
        assert!(xml.contains("rss.xml"));
        assert!(xml.contains("A blog"));
    }
}
