//! Reverse lookup from contested gifts to the characters contending for them.

use crate::catalog::{Effect, Rarity, RarityMap, Relation, Selection};
use crate::ranking::peak_table::{PeakTable, selected_rows};
use serde::Serialize;

/// A gift at least two selected characters use at its peak tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedGift {
    pub gift: String,

    /// Contending characters in name order.
    pub characters: Vec<String>,
    pub rarity: Rarity,
    pub competition: usize,
    pub effect: Effect,
}

/// List every shared gift with its contenders.
///
/// Ordered by rarity (highest first), then competition (lowest first), then effect
/// (strongest first), then gift name.
#[must_use]
pub fn shared_gifts(relation: &Relation, selection: &Selection, rarity: &RarityMap) -> Vec<SharedGift> {
    let table = PeakTable::build(selected_rows(relation, selection));

    let mut shared: Vec<_> = table
        .iter()
        .filter(|(_, peak)| !peak.is_unique())
        .map(|(gift, peak)| SharedGift {
            gift: gift.to_string(),
            characters: peak.contenders.iter().map(ToString::to_string).collect(),
            rarity: rarity.rarity(gift),
            competition: peak.competition(),
            effect: peak.effect,
        })
        .collect();

    shared.sort_by(|a, b| {
        b.rarity
            .cmp(&a.rarity)
            .then(a.competition.cmp(&b.competition))
            .then(b.effect.cmp(&a.effect))
            .then_with(|| a.gift.cmp(&b.gift))
    });

    shared
}
