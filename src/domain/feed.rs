use std::path::{Path, PathBuf};

use crate::app::Result;
use crate::domain::magazine::Format;
use crate::domain::selector::Selector;

/// Parsed representation of one magazine/language/format listing feed.
#[derive(Debug, Clone)]
pub struct Feed {
    pub title: String,
    pub description: String,
    pub language: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub items: Vec<Item>,
    /// Selector recovered from the feed description; the description field
    /// is the only place the publisher encodes the triple authoritatively.
    pub selector: Selector,
}

impl Feed {
    /// Directory name for this feed under the output root: the title with
    /// punctuation stripped. Must be stable across runs so re-runs see the
    /// files they downloaded before.
    pub fn dir_name(&self) -> String {
        strip_punctuation(&self.title)
    }

    /// Full destination path for one of this feed's items.
    pub fn item_path(&self, item: &Item, root: &Path) -> PathBuf {
        root.join(self.dir_name())
            .join(item.issue_dir())
            .join(item.filename())
    }
}

/// One downloadable entry of a feed.
#[derive(Debug, Clone)]
pub struct Item {
    pub title: String,
    pub link: String,
    pub pub_date: String,
}

impl Item {
    /// Last path segment of the link, query string stripped.
    pub fn filename(&self) -> &str {
        let link = self.link.split(['?', '#']).next().unwrap_or(&self.link);
        link.rsplit('/').next().unwrap_or(link)
    }

    /// Format derived from the filename extension.
    pub fn format(&self) -> Result<Format> {
        let ext = self.filename().rsplit('.').next().unwrap_or_default();
        Format::from_extension(ext)
    }

    /// Per-issue directory name: the publish date with time-of-day tokens
    /// and punctuation stripped, e.g.
    /// `"Wed, 01 Aug 2012 14:00:00 GMT"` → `"Wed 01 Aug 2012 GMT"`.
    pub fn issue_dir(&self) -> String {
        strip_time_of_day(&self.pub_date)
    }
}

/// Remove every punctuation character, keeping letters, digits, and
/// whitespace untouched.
pub fn strip_punctuation(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Drop whitespace-separated tokens that contain a `:` (time-of-day),
/// strip punctuation from the rest, and rejoin with single spaces.
pub fn strip_time_of_day(s: &str) -> String {
    s.split_whitespace()
        .filter(|token| !token.contains(':'))
        .map(strip_punctuation)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
