//! Best gifts per character, split into gifts only that character can use best and gifts
//! several selected characters compete for.

use crate::catalog::{RarityMap, Relation, Selection};
use crate::ranking::peak_table::{PeakGift, PeakTable, selected_rows};
use serde::Serialize;

/// Log target for ranking
const LOG_TARGET: &str = "ranking";

/// The gifts assigned to one selected character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CharacterGifts {
    pub character: String,

    /// Gifts for which this character is the only one reaching the peak tier.
    pub unique: Vec<String>,

    /// Gifts for which other selected characters reach the same peak tier.
    pub shared: Vec<String>,
}

/// Assign gifts to each selected character.
///
/// A gift is only assigned to the characters achieving its peak tier across the whole
/// selection, even when that leaves another character without any use for it. Results
/// follow selection order and every selected character gets an entry.
#[must_use]
pub fn optimal_gifts(relation: &Relation, selection: &Selection, rarity: &RarityMap) -> Vec<CharacterGifts> {
    let table = PeakTable::build(selected_rows(relation, selection));
    log::debug!(target: LOG_TARGET, "Assigning {} gift(s) across {} character(s)", table.len(), selection.len());

    selection.iter().map(|character| assign(character, &table, rarity)).collect()
}

fn assign(character: &str, table: &PeakTable<'_>, rarity: &RarityMap) -> CharacterGifts {
    let (mut unique, mut shared): (Vec<_>, Vec<_>) = table
        .iter()
        .filter(|(_, peak)| peak.contenders.contains(character))
        .partition(|(_, peak)| peak.is_unique());

    unique.sort_by(|(gift_a, peak_a), (gift_b, peak_b)| {
        rarity
            .rarity(gift_b)
            .cmp(&rarity.rarity(gift_a))
            .then(peak_b.effect.cmp(&peak_a.effect))
            .then_with(|| gift_a.cmp(gift_b))
    });

    shared.sort_by(|(gift_a, peak_a), (gift_b, peak_b)| {
        rarity
            .rarity(gift_b)
            .cmp(&rarity.rarity(gift_a))
            .then(peak_a.competition().cmp(&peak_b.competition()))
            .then(peak_b.effect.cmp(&peak_a.effect))
            .then_with(|| gift_a.cmp(gift_b))
    });

    CharacterGifts {
        character: character.to_string(),
        unique: names(unique),
        shared: names(shared),
    }
}

fn names(gifts: Vec<(&str, &PeakGift<'_>)>) -> Vec<String> {
    gifts.into_iter().map(|(gift, _)| gift.to_string()).collect()
}
