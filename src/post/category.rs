//! Post category definitions.

use super::Lang;
use serde::{Deserialize, Serialize};

/// Category of a post, determines which section it is listed under.
///
/// Closed set: unknown categories are a deserialization error, so the
/// rest of the crate never sees a category outside this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Technical articles for developers.
    Dev,
    /// Technology without the jargon.
    Nocode,
    /// Essays, ideas, and long-form writing.
    Reads,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 3] = [Self::Dev, Self::Nocode, Self::Reads];

    /// URL-safe identifier for this category.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Nocode => "nocode",
            Self::Reads => "reads",
        }
    }

    /// Detect category from its identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "dev" => Some(Self::Dev),
            "nocode" => Some(Self::Nocode),
            "reads" => Some(Self::Reads),
            _ => None,
        }
    }

    /// Display label for this category.
    pub const fn label(self, lang: Lang) -> &'static str {
        // Labels are identical in both languages for now
        let _ = lang;
        match self {
            Self::Dev => "Dev",
            Self::Nocode => "NoCode",
            Self::Reads => "Reads",
        }
    }

    /// Icon shown next to the category label.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Dev => "⌨",
            Self::Nocode => "✦",
            Self::Reads => "◉",
        }
    }

    /// One-line description for category listings.
    pub const fn description(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Self::Dev, Lang::En) => "Technical articles for developers",
            (Self::Dev, Lang::Es) => "Artículos técnicos para desarrolladores",
            (Self::Nocode, Lang::En) => "Technology without the jargon",
            (Self::Nocode, Lang::Es) => "Tecnología sin jerga técnica",
            (Self::Reads, Lang::En) => "Essays, ideas, and long-form writing",
            (Self::Reads, Lang::Es) => "Ensayos, ideas y escritura en profundidad",
        }
    }
}
