//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module    | TOML Section   | Purpose                             |
//! |-----------|----------------|-------------------------------------|
//! | `info`    | `[site.info]`  | Title, description, url, defaults   |
//! | `feed`    | `[site.feed]`  | Feed output settings                |
//! | `site`    | `[site]`       | Wrapper for the sections above      |
//! | `authors` | `[[authors]]`  | Author roster                       |

mod authors;
mod feed;
mod info;
mod site;

// Re-export section configs
pub use authors::{Author, AuthorSocials, validate_roster};
pub use feed::{FeedConfig, FeedFormat};
pub use info::{SiteInfoConfig, Theme};
pub use site::SiteSectionConfig;
