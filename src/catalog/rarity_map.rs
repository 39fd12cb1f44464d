use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw rarity tier of a gift.
///
/// Only tier 1 is distinguished ("rare"); every other value is treated as common when
/// sorting or bucketing. The raw value is still kept for ordering and display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rarity(pub i64);

impl Rarity {
    pub const RARE_TIER: i64 = 1;

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_rare(self) -> bool {
        self.0 == Self::RARE_TIER
    }
}

impl Display for Rarity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Gift name to rarity tier lookup. Gifts missing from the map are tier 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RarityMap(HashMap<String, Rarity>);

impl RarityMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the tier of a gift, replacing any earlier entry.
    pub fn insert(&mut self, gift: impl Into<String>, rarity: Rarity) {
        _ = self.0.insert(gift.into(), rarity);
    }

    #[must_use]
    pub fn rarity(&self, gift: &str) -> Rarity {
        self.0.get(gift).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn rarity_value(&self, gift: &str) -> i64 {
        self.rarity(gift).value()
    }

    #[must_use]
    pub fn is_rare_tier(&self, gift: &str) -> bool {
        self.rarity(gift).is_rare()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for RarityMap {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(gift, value)| (gift.into(), Rarity(value))).collect())
    }
}
