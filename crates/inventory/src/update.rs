//! The daily update rule.
//!
//! Every item goes through the same three steps, in order:
//! 1. quality adjustment for its category, using the current `sell_in`
//! 2. `sell_in` decrement (legendary items never age)
//! 3. post-expiry correction once the decremented `sell_in` is negative

use crate::category::Category;
use crate::item::Item;
use crate::quality::{self, LEGENDARY_QUALITY, MIN_QUALITY};

/// Event passes gain an extra point below this many days.
const EVENT_PASS_FIRST_BAND: i32 = 11;
/// And another extra point below this many days.
const EVENT_PASS_SECOND_BAND: i32 = 6;

/// Advance every item by one simulated day, in place.
///
/// Items are independent of each other; order is preserved and names are
/// never touched. An empty slice is a no-op.
pub fn advance_one_day(items: &mut [Item]) {
    tracing::debug!(items = items.len(), "advancing inventory by one day");
    for item in items.iter_mut() {
        update_item(item);
    }
}

/// Apply one day of ageing to a single item.
pub fn update_item(item: &mut Item) {
    let sell_in_before = item.sell_in;
    let quality_before = item.quality;

    adjust_quality(item);
    age(item);
    if item.is_expired() {
        apply_expiry(item);
    }

    tracing::trace!(
        name = item.name(),
        category = %item.category(),
        sell_in_before,
        quality_before,
        sell_in = item.sell_in,
        quality = item.quality,
        "item updated"
    );
}

fn adjust_quality(item: &mut Item) {
    match item.category() {
        Category::Legendary => item.quality = LEGENDARY_QUALITY,
        Category::AgedAppreciating => quality::increase(&mut item.quality),
        Category::EventPass => {
            quality::increase(&mut item.quality);
            if item.sell_in < EVENT_PASS_FIRST_BAND {
                quality::increase(&mut item.quality);
            }
            if item.sell_in < EVENT_PASS_SECOND_BAND {
                quality::increase(&mut item.quality);
            }
        }
        Category::FastDecaying => quality::decrease(&mut item.quality, 2),
        Category::Standard => quality::decrease(&mut item.quality, 1),
    }
}

fn age(item: &mut Item) {
    if !item.category().is_legendary() {
        item.sell_in = item.sell_in.saturating_sub(1);
    }
}

fn apply_expiry(item: &mut Item) {
    match item.category() {
        Category::Legendary => {}
        Category::AgedAppreciating => quality::increase(&mut item.quality),
        Category::EventPass => item.quality = MIN_QUALITY,
        Category::FastDecaying => quality::decrease(&mut item.quality, 2),
        Category::Standard => quality::decrease(&mut item.quality, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::MAX_QUALITY;
    use proptest::prelude::*;

    const VEST: &str = "+5 Dexterity Vest";
    const BRIE: &str = "Aged Brie";
    const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
    const PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
    const CAKE: &str = "Conjured Mana Cake";

    fn after_one_day(name: &str, sell_in: i32, quality: i32) -> (i32, i32) {
        let mut items = vec![Item::new(name, sell_in, quality)];
        advance_one_day(&mut items);
        (items[0].sell_in, items[0].quality)
    }

    #[test]
    fn empty_slice_is_a_no_op() {
        let mut items: Vec<Item> = Vec::new();
        advance_one_day(&mut items);
        assert!(items.is_empty());
    }

    #[test]
    fn name_is_unchanged() {
        let mut items = vec![Item::new("foo", 0, 0)];
        advance_one_day(&mut items);
        assert_eq!(items[0].name(), "foo");
    }

    #[test]
    fn standard_item_loses_one_per_day() {
        assert_eq!(after_one_day(VEST, 10, 20), (9, 19));
    }

    #[test]
    fn standard_item_loses_two_once_expired() {
        assert_eq!(after_one_day(VEST, 0, 20), (-1, 18));
        assert_eq!(after_one_day(VEST, -5, 20), (-6, 18));
    }

    #[test]
    fn standard_item_never_goes_negative() {
        assert_eq!(after_one_day(VEST, 0, 1), (-1, 0));
        assert_eq!(after_one_day(VEST, 5, 0), (4, 0));
    }

    #[test]
    fn aged_brie_is_capped_at_fifty() {
        assert_eq!(after_one_day(BRIE, 0, 49), (-1, 50));
        assert_eq!(after_one_day(BRIE, 5, 50), (4, 50));
    }

    #[test]
    fn aged_brie_gains_double_once_expired() {
        assert_eq!(after_one_day(BRIE, 2, 0), (1, 1));
        assert_eq!(after_one_day(BRIE, 0, 10), (-1, 12));
    }

    #[test]
    fn sulfuras_never_changes() {
        assert_eq!(after_one_day(SULFURAS, -1, 80), (-1, 80));
        assert_eq!(after_one_day(SULFURAS, 0, 80), (0, 80));
    }

    #[test]
    fn sulfuras_quality_is_forced_to_eighty() {
        assert_eq!(after_one_day(SULFURAS, 3, 10), (3, 80));
    }

    #[test]
    fn backstage_pass_bands() {
        assert_eq!(after_one_day(PASS, 15, 20), (14, 21));
        assert_eq!(after_one_day(PASS, 11, 20), (10, 21));
        assert_eq!(after_one_day(PASS, 10, 20), (9, 22));
        assert_eq!(after_one_day(PASS, 6, 20), (5, 22));
        assert_eq!(after_one_day(PASS, 5, 20), (4, 23));
        assert_eq!(after_one_day(PASS, 1, 20), (0, 23));
    }

    #[test]
    fn backstage_pass_is_capped_mid_computation() {
        assert_eq!(after_one_day(PASS, 5, 49), (4, 50));
        assert_eq!(after_one_day(PASS, 10, 49), (9, 50));
    }

    #[test]
    fn backstage_pass_is_worthless_after_the_concert() {
        assert_eq!(after_one_day(PASS, 0, 20), (-1, 0));
        assert_eq!(after_one_day(PASS, -3, 50), (-4, 0));
    }

    #[test]
    fn conjured_item_decays_twice_as_fast() {
        assert_eq!(after_one_day(CAKE, 3, 6), (2, 4));
        assert_eq!(after_one_day(CAKE, 0, 6), (-1, 2));
        assert_eq!(after_one_day(CAKE, 0, 1), (-1, 0));
    }

    #[test]
    fn conjured_item_switches_to_doubled_rate_when_expiring() {
        let mut items = vec![Item::new(CAKE, 1, 10)];
        advance_one_day(&mut items);
        assert_eq!((items[0].sell_in, items[0].quality), (0, 8));
        advance_one_day(&mut items);
        assert_eq!((items[0].sell_in, items[0].quality), (-1, 4));
    }

    #[test]
    fn out_of_range_initial_quality_is_not_corrected() {
        assert_eq!(after_one_day(VEST, 5, -4), (4, -4));
        assert_eq!(after_one_day(BRIE, 5, 70), (4, 70));
    }

    #[test]
    fn explicit_category_drives_the_rule() {
        let mut items = vec![Item::with_category(
            "Plain Rock",
            5,
            10,
            Category::AgedAppreciating,
        )];
        advance_one_day(&mut items);
        assert_eq!((items[0].sell_in, items[0].quality), (4, 11));
    }

    #[test]
    fn items_are_independent_and_order_is_preserved() {
        let mut together = vec![
            Item::new(VEST, 10, 20),
            Item::new(PASS, 5, 49),
            Item::new(SULFURAS, 0, 80),
        ];
        let mut alone: Vec<Item> = together.clone();
        advance_one_day(&mut together);
        for item in alone.iter_mut() {
            update_item(item);
        }
        assert_eq!(together, alone);
        assert_eq!(together[1].name(), PASS);
    }

    fn category_strategy() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: non-legendary quality stays within bounds for any number of days.
        #[test]
        fn quality_stays_in_bounds(
            category in category_strategy(),
            sell_in in -100i32..100,
            quality in MIN_QUALITY..=MAX_QUALITY,
            days in 1usize..120
        ) {
            prop_assume!(category != Category::Legendary);
            let mut items = vec![Item::with_category("x", sell_in, quality, category)];
            for _ in 0..days {
                advance_one_day(&mut items);
                prop_assert!(items[0].quality >= MIN_QUALITY);
                prop_assert!(items[0].quality <= MAX_QUALITY);
            }
        }

        /// Property: sell_in drops by exactly one per day, except for legendary items.
        #[test]
        fn sell_in_ages_by_one(
            category in category_strategy(),
            sell_in in -1000i32..1000,
            quality in MIN_QUALITY..=MAX_QUALITY
        ) {
            let mut items = vec![Item::with_category("x", sell_in, quality, category)];
            advance_one_day(&mut items);
            let expected = if category.is_legendary() { sell_in } else { sell_in - 1 };
            prop_assert_eq!(items[0].sell_in, expected);
        }

        /// Property: legendary items hold quality 80 and their sell_in forever.
        #[test]
        fn legendary_is_frozen(sell_in in -1000i32..1000, days in 1usize..50) {
            let mut items = vec![Item::new("Sulfuras, Hand of Ragnaros", sell_in, 80)];
            for _ in 0..days {
                advance_one_day(&mut items);
            }
            prop_assert_eq!(items[0].quality, LEGENDARY_QUALITY);
            prop_assert_eq!(items[0].sell_in, sell_in);
        }

        /// Property: standard decay is 1 before expiry and 2 after, floored at 0.
        #[test]
        fn standard_decay_rate(sell_in in -50i32..50, quality in MIN_QUALITY..=MAX_QUALITY) {
            let (_, after) = after_one_day("Elixir of the Mongoose", sell_in, quality);
            let rate = if sell_in - 1 < 0 { 2 } else { 1 };
            prop_assert_eq!(after, (quality - rate).max(0));
        }

        /// Property: fast decay is 2 before expiry and 4 after, floored at 0.
        #[test]
        fn fast_decay_rate(sell_in in -50i32..50, quality in MIN_QUALITY..=MAX_QUALITY) {
            let (_, after) = after_one_day("Conjured Mana Cake", sell_in, quality);
            let rate = if sell_in - 1 < 0 { 4 } else { 2 };
            prop_assert_eq!(after, (quality - rate).max(0));
        }

        /// Property: aged brie gains 1 before expiry and 2 after, capped at 50.
        #[test]
        fn aged_brie_gain_rate(sell_in in -50i32..50, quality in MIN_QUALITY..=MAX_QUALITY) {
            let (_, after) = after_one_day("Aged Brie", sell_in, quality);
            let rate = if sell_in - 1 < 0 { 2 } else { 1 };
            prop_assert_eq!(after, (quality + rate).min(MAX_QUALITY));
        }

        /// Property: event pass gain follows the day bands, zero once the event passed.
        #[test]
        fn event_pass_gain_rate(sell_in in -50i32..50, quality in MIN_QUALITY..=MAX_QUALITY) {
            let (_, after) = after_one_day(
                "Backstage passes to a TAFKAL80ETC concert",
                sell_in,
                quality,
            );
            let expected = if sell_in - 1 < 0 {
                0
            } else if sell_in <= 5 {
                (quality + 3).min(MAX_QUALITY)
            } else if sell_in <= 10 {
                (quality + 2).min(MAX_QUALITY)
            } else {
                (quality + 1).min(MAX_QUALITY)
            };
            prop_assert_eq!(after, expected);
        }
    }
}
