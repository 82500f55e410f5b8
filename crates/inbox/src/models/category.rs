//! Inbox categories and their per-pass totals

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::label::CanonicalName;

/// A sectioned-inbox category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Personal,
    Social,
    Updates,
    Forums,
    Promotions,
}

/// Canonical name for each category
const CATEGORY_TABLE: [(&str, Category); 5] = [
    (CanonicalName::PERSONAL, Category::Personal),
    (CanonicalName::SOCIAL, Category::Social),
    (CanonicalName::UPDATES, Category::Updates),
    (CanonicalName::FORUMS, Category::Forums),
    (CanonicalName::PROMOTIONS, Category::Promotions),
];

impl Category {
    /// Order in which category lines appear in the body
    pub const RENDER_ORDER: [Category; 5] = [
        Category::Personal,
        Category::Updates,
        Category::Social,
        Category::Forums,
        Category::Promotions,
    ];

    /// Look up the category for a canonical label name
    pub fn from_canonical_name(name: &str) -> Option<Self> {
        CATEGORY_TABLE
            .iter()
            .find(|(canonical, _)| *canonical == name)
            .map(|(_, category)| *category)
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            Category::Personal => CanonicalName::PERSONAL,
            Category::Social => CanonicalName::SOCIAL,
            Category::Updates => CanonicalName::UPDATES,
            Category::Forums => CanonicalName::FORUMS,
            Category::Promotions => CanonicalName::PROMOTIONS,
        }
    }

    /// Name used when the provider row carries no display name
    pub fn default_name(self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Social => "Social",
            Category::Updates => "Updates",
            Category::Forums => "Forums",
            Category::Promotions => "Promotions",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

/// Error returned when a category name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the display name (any case) or the canonical name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(category) = Self::from_canonical_name(trimmed) {
            return Ok(category);
        }
        CATEGORY_TABLE
            .iter()
            .map(|(_, category)| *category)
            .find(|category| category.default_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Per-category unread counts for one aggregation pass
///
/// Counts are widened to `u64` so summing several accounts never caps a
/// category below what its rows report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotals {
    counts: [u64; 5],
    names: [String; 5],
}

impl Default for CategoryTotals {
    fn default() -> Self {
        Self {
            counts: [0; 5],
            names: CATEGORY_TABLE.map(|(_, category)| category.default_name().to_string()),
        }
    }
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add unread conversations to a category. A non-empty display name
    /// replaces the default one.
    pub fn add(&mut self, category: Category, display_name: &str, unread: u32) {
        let i = category.index();
        self.counts[i] = self.counts[i].saturating_add(u64::from(unread));
        if !display_name.is_empty() {
            self.names[i] = display_name.to_string();
        }
    }

    /// Drop a category from the totals, returning the count removed
    pub fn remove(&mut self, category: Category) -> u64 {
        std::mem::take(&mut self.counts[category.index()])
    }

    pub fn count(&self, category: Category) -> u64 {
        self.counts[category.index()]
    }

    pub fn name(&self, category: Category) -> &str {
        &self.names[category.index()]
    }

    /// Sum of the remaining category counts
    pub fn total(&self) -> u64 {
        self.counts
            .iter()
            .fold(0u64, |acc, count| acc.saturating_add(*count))
    }

    /// Nonzero categories in render order
    pub fn visible(&self) -> impl Iterator<Item = (Category, &str, u64)> + '_ {
        Category::RENDER_ORDER
            .into_iter()
            .map(|c| (c, self.name(c), self.count(c)))
            .filter(|(_, _, count)| *count > 0)
    }
}
