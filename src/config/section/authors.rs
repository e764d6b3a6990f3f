//! `[[authors]]` roster configuration.
//!
//! The roster is static configuration: posts reference an author by id
//! and the renderers resolve names, bios, and socials from here.

use crate::config::ConfigDiagnostics;
use crate::post::LocalizedText;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Social links for an author. Empty string means unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorSocials {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub instagram: String,
    pub website: String,
    pub email: String,
}

/// A single author roster entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    /// URL-safe identifier, referenced by post metadata.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Full biography, in both site languages.
    pub bio: LocalizedText,
    /// Short biography for cards and listings.
    pub short_bio: LocalizedText,
    /// Avatar path under the public assets directory.
    pub avatar: String,
    pub socials: AuthorSocials,
}

/// Validate the author roster.
///
/// # Checks
/// - Every entry has a non-empty `id`
/// - Ids are unique across the roster
pub fn validate_roster(authors: &[Author], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();
    for (i, author) in authors.iter().enumerate() {
        if author.id.is_empty() {
            diag.error_with_hint(
                format!("authors[{i}].id"),
                "author entry has no id",
                "set a URL-safe id, e.g.: \"jane-doe\"",
            );
            continue;
        }
        if !seen.insert(author.id.as_str()) {
            diag.error(
                format!("authors[{i}].id"),
                format!("duplicate author id `{}`", author.id),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_roster_parsing() {
        let config = test_parse_config(
            r#"
[[authors]]
id = "sebastian-franco"
name = "Sebastián Franco"
avatar = "/avatars/sebastian-franco.jpg"

[authors.short_bio]
en = "Data Engineer"
es = "Ingeniero de Datos"

[authors.socials]
github = "https://github.com/sebastianfranks"

[[authors]]
id = "francisco-diago"
name = "Francisco Diago"
"#,
        );
        assert_eq!(config.authors.len(), 2);
        let author = &config.authors[0];
        assert_eq!(author.name, "Sebastián Franco");
        assert_eq!(author.short_bio.es, "Ingeniero de Datos");
        assert_eq!(author.socials.github, "https://github.com/sebastianfranks");
        // Unset socials default to empty
        assert!(author.socials.twitter.is_empty());
    }

    #[test]
    fn test_validate_duplicate_ids() {
        let authors = vec![
            Author {
                id: "jane".into(),
                ..Default::default()
            },
            Author {
                id: "jane".into(),
                ..Default::default()
            },
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_roster(&authors, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("duplicate"));
    }

    #[test]
    fn test_validate_empty_id() {
        let authors = vec![Author::default()];
        let mut diag = ConfigDiagnostics::new();
        validate_roster(&authors, &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_validate_ok() {
        let authors = vec![
            Author {
                id: "a".into(),
                ..Default::default()
            },
            Author {
                id: "b".into(),
                ..Default::default()
            },
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_roster(&authors, &mut diag);
        assert!(diag.is_empty());
    }
}
