use crate::item::Item;
use crate::update;

/// An owned stock of items plus the number of days it has been aged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inventory {
    items: Vec<Item>,
    days_elapsed: u64,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            days_elapsed: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Mutable access for callers that need to adjust starting state.
    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn days_elapsed(&self) -> u64 {
        self.days_elapsed
    }

    /// Age every item by one day.
    pub fn advance_one_day(&mut self) {
        update::advance_one_day(&mut self.items);
        self.days_elapsed += 1;
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
