//! Post metadata as supplied by the content pipeline.

use serde::{Deserialize, Serialize};

use super::{Category, Lang};
use crate::utils::date::DateTimeUtc;

/// Deserialize tags, treating `null` as empty vec
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Post metadata, deserialized from the structured records the content
/// pipeline produces out of source documents.
///
/// This is the single place where defaults are filled in: `tags` defaults
/// to empty, `lang` to English, `draft` to false. Everything downstream
/// can rely on a fully-populated record. Schema enforcement beyond shape
/// and enum membership (e.g. `updated_date >= pub_date`) stays upstream.
///
/// # Fields
///
/// | Field          | Type                  | Description                     |
/// |----------------|-----------------------|---------------------------------|
/// | `title`        | `String`              | Post title                      |
/// | `description`  | `String`              | Short summary for listings/feeds|
/// | `author`       | `String`              | Author roster id                |
/// | `pub_date`     | `DateTimeUtc`         | Publication date                |
/// | `updated_date` | `Option<DateTimeUtc>` | Last update date                |
/// | `tags`         | `Vec<String>`         | Categorization tags             |
/// | `category`     | `Category`            | Section the post belongs to     |
/// | `lang`         | `Lang`                | Content language (default: en)  |
/// | `draft`        | `bool`                | Draft status (default: false)   |
/// | `image`        | `Option<String>`      | Cover image path                |
/// | `image_alt`    | `Option<String>`      | Cover image alt text            |
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    pub title: String,
    pub description: String,
    /// Author roster id. Resolved against the site config roster at
    /// render time, not validated here.
    pub author: String,
    pub pub_date: DateTimeUtc,
    #[serde(default)]
    pub updated_date: Option<DateTimeUtc>,
    /// Tags for categorizing the post.
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    pub category: Category,
    #[serde(default)]
    pub lang: Lang,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_alt: Option<String>,
}
