//! Feed item assembly from post records.

use serde::Serialize;

use crate::{log, post::Post, utils::date::DateTimeUtc};

/// A post projected for syndication output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub title: String,
    pub pub_date: DateTimeUtc,
    pub description: String,
    /// Author roster id, resolved by the renderers.
    pub author: String,
    /// Site-relative permalink (`/posts/{id}/`).
    pub link: String,
}

impl FeedItem {
    fn from_post(post: &Post) -> Self {
        Self {
            title: post.meta.title.clone(),
            pub_date: post.meta.pub_date,
            description: post.meta.description.clone(),
            author: post.meta.author.clone(),
            link: post.link(),
        }
    }
}

/// Assemble feed items from an unordered post collection.
///
/// Drafts are excluded; the rest are ordered by publish date descending.
/// The sort is stable: posts sharing a publish date keep their input
/// order, so rebuilding from the same records reproduces the same feed.
pub fn assemble(posts: &[Post]) -> Vec<FeedItem> {
    let total = posts.len();

    let mut published: Vec<&Post> = posts.iter().filter(|p| !p.is_draft()).collect();
    published.sort_by(|a, b| b.meta.pub_date.cmp(&a.meta.pub_date));

    // Log excluded posts count (Zola-style strict filtering)
    let excluded = total - published.len();
    if excluded > 0 {
        log!("feed"; "excluded {} draft post{}", excluded, if excluded == 1 { "" } else { "s" });
    }

    published.into_iter().map(FeedItem::from_post).collect()
}
