//! Post records and their metadata.
//!
//! A [`Post`] pairs a URL-safe slug with the metadata the content
//! pipeline extracted from the source document. The core only reads
//! and projects these records; it never mutates or persists them.

mod category;
mod lang;
mod meta;

pub use category::Category;
pub use lang::{Lang, LocalizedText};
pub use meta::PostMeta;

use serde::Serialize;

/// A single content entry.
///
/// Combines the slug (assigned by the pipeline from the source file name)
/// with the post metadata. Serializes with `id` as a top-level field and
/// the metadata flattened.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Unique URL-safe slug.
    pub id: String,
    /// Post metadata (flattened in JSON output).
    #[serde(flatten)]
    pub meta: PostMeta,
}

impl Post {
    pub fn new(id: impl Into<String>, meta: PostMeta) -> Self {
        Self {
            id: id.into(),
            meta,
        }
    }

    /// Check if this post is a draft.
    #[inline]
    pub fn is_draft(&self) -> bool {
        self.meta.draft
    }

    /// Site-relative permalink for this post.
    pub fn link(&self) -> String {
        format!("/posts/{}/", self.id)
    }
}
