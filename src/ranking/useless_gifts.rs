//! Gifts nobody in the selection has any use for.

use crate::catalog::{RarityMap, Relation, Selection};
use crate::ranking::peak_table::selected_rows;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UselessGifts {
    /// Non tier 1 gifts, highest rarity value first, then by name.
    pub common: Vec<String>,

    /// Tier 1 gifts by name.
    pub rare: Vec<String>,
}

impl UselessGifts {
    #[must_use]
    pub fn len(&self) -> usize {
        self.common.len() + self.rare.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.common.is_empty() && self.rare.is_empty()
    }
}

/// Split the gifts of `universe` that no selected character reacts to by rarity tier.
///
/// Any valid row counts as a use, whatever its effect. Gifts that only ever appeared with
/// an unrecognized effect therefore always end up here.
#[must_use]
pub fn useless_gifts(universe: &BTreeSet<String>, relation: &Relation, selection: &Selection, rarity: &RarityMap) -> UselessGifts {
    let favorites: HashSet<&str> = selected_rows(relation, selection).map(|row| row.gift.as_str()).collect();

    // the universe is already in name order, so both buckets start sorted
    let (rare, mut common): (Vec<_>, Vec<_>) = universe
        .iter()
        .filter(|gift| !favorites.contains(gift.as_str()))
        .cloned()
        .partition(|gift| rarity.is_rare_tier(gift));

    common.sort_by(|a, b| rarity.rarity(b).cmp(&rarity.rarity(a)).then_with(|| a.cmp(b)));

    UselessGifts { common, rare }
}
