//! Quality bounds and the atomic quality steps used by the daily rule.
//!
//! Each step only ever moves quality towards or within its bounds. A value that
//! is already out of range (as supplied by the caller) is left untouched.

/// Lowest quality the rule will decrease to.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality the rule will increase to.
pub const MAX_QUALITY: i32 = 50;

/// Quality of a legendary item, always.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Raise quality by one point, unless already at or above the cap.
pub(crate) fn increase(quality: &mut i32) {
    if *quality < MAX_QUALITY {
        *quality += 1;
    }
}

/// Lower quality by `amount`, flooring at zero. Does nothing if quality is
/// already at or below zero.
pub(crate) fn decrease(quality: &mut i32, amount: i32) {
    if *quality > MIN_QUALITY {
        *quality = (*quality - amount).max(MIN_QUALITY);
    }
}
