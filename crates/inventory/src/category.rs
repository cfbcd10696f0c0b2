use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::DomainError;

/// Item category. Decides which ageing rule applies to an item.
///
/// Assigned once when an item is built and never re-derived from the name
/// during updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Fixed quality of 80, never ages.
    Legendary,
    /// Gains quality as it ages, twice as fast once expired.
    AgedAppreciating,
    /// Gains quality as the event approaches, worthless once it has passed.
    EventPass,
    /// Loses quality twice as fast as standard items.
    FastDecaying,
    /// Loses one quality point per day, two once expired.
    Standard,
}

/// Name keywords in precedence order (first match wins).
const KEYWORDS: [(&str, Category); 4] = [
    ("sulfuras", Category::Legendary),
    ("aged brie", Category::AgedAppreciating),
    ("backstage passes", Category::EventPass),
    ("conjured", Category::FastDecaying),
];

/// Classify an item name.
///
/// Case-insensitive substring match against each category keyword, checked in
/// precedence order: Legendary, AgedAppreciating, EventPass, FastDecaying.
/// Anything else is Standard.
pub fn classify(name: &str) -> Category {
    let name = name.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Standard)
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Legendary,
        Category::AgedAppreciating,
        Category::EventPass,
        Category::FastDecaying,
        Category::Standard,
    ];

    /// Stable snake_case tag (matches the serde representation).
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Legendary => "legendary",
            Category::AgedAppreciating => "aged_appreciating",
            Category::EventPass => "event_pass",
            Category::FastDecaying => "fast_decaying",
            Category::Standard => "standard",
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category tag: {s}")))
    }
}
