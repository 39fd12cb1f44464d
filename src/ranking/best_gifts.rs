//! Every usable gift for a selection, most widely liked first.

use crate::catalog::{Effect, Relation, Selection};
use crate::ranking::peak_table::selected_rows;
use serde::Serialize;
use std::collections::HashMap;

/// A selected character's reaction to a gift, along with how many selected characters
/// react to that gift at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GiftUse {
    pub character: String,
    pub gift: String,
    pub effect: Effect,
    pub popularity: usize,
}

/// List all rows of the selected characters.
///
/// Ordered by popularity (highest first), then effect (strongest first), then gift name,
/// then character name.
#[must_use]
pub fn best_gifts(relation: &Relation, selection: &Selection) -> Vec<GiftUse> {
    let rows: Vec<_> = selected_rows(relation, selection).collect();

    let mut popularity: HashMap<&str, usize> = HashMap::new();
    for row in &rows {
        *popularity.entry(row.gift.as_str()).or_insert(0) += 1;
    }

    let mut uses: Vec<_> = rows
        .into_iter()
        .map(|row| GiftUse {
            character: row.character.clone(),
            gift: row.gift.clone(),
            effect: row.effect,
            popularity: popularity.get(row.gift.as_str()).copied().unwrap_or_default(),
        })
        .collect();

    uses.sort_by(|a, b| {
        b.popularity
            .cmp(&a.popularity)
            .then(b.effect.cmp(&a.effect))
            .then_with(|| a.gift.cmp(&b.gift))
            .then_with(|| a.character.cmp(&b.character))
    });

    uses
}
