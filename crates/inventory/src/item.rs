use serde::{Deserialize, Serialize};

use crate::category::{Category, classify};

/// A stocked item.
///
/// `sell_in` and `quality` are plain public fields: callers set up arbitrary
/// starting state and the daily rule mutates them in place. The name and
/// category are fixed once the item is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    /// Days left until the sell-by date. Negative once expired.
    pub sell_in: i32,
    pub quality: i32,
    category: Category,
}

impl Item {
    /// Build an item, classifying it from its name.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = classify(&name);
        Self::with_category(name, sell_in, quality, category)
    }

    /// Build an item with an explicit category, bypassing name classification.
    pub fn with_category(
        name: impl Into<String>,
        sell_in: i32,
        quality: i32,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Wire form of an item. The category is optional on input.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: i32,
    quality: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        match record.category {
            Some(category) => {
                Item::with_category(record.name, record.sell_in, record.quality, category)
            }
            None => Item::new(record.name, record.sell_in, record.quality),
        }
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
            category: Some(item.category),
        }
    }
}
