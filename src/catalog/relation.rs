use crate::catalog::Effect;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Log target for catalog construction
const LOG_TARGET: &str = "catalog";

/// A row of source data before validation. Every field is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGiftRow {
    pub character: String,
    pub gift: String,
    pub effect: String,
}

impl RawGiftRow {
    #[must_use]
    pub fn new(character: impl Into<String>, gift: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            gift: gift.into(),
            effect: effect.into(),
        }
    }
}

/// One validated fact: `character` reacts to `gift` with `effect`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GiftEffectRow {
    pub character: String,
    pub gift: String,
    pub effect: Effect,
}

/// The immutable character/gift/effect relation every query runs against.
#[derive(Debug, Clone, Default)]
pub struct Relation {
    rows: Vec<GiftEffectRow>,
    characters: Vec<String>,
    universe: BTreeSet<String>,
}

impl Relation {
    /// Build the relation from unvalidated rows.
    ///
    /// Character and gift names are gathered from every row, including those whose effect is
    /// not recognized, so that gifts with no valid use still count as part of the universe.
    /// Only rows with both names present and a valid effect are kept for ranking. Repeated
    /// (character, gift) pairs collapse to the strongest effect seen.
    pub fn new(raw_rows: impl IntoIterator<Item = RawGiftRow>) -> Self {
        let mut characters = BTreeSet::new();
        let mut universe = BTreeSet::new();
        let mut best: BTreeMap<(String, String), Effect> = BTreeMap::new();
        let mut total = 0_usize;
        let mut dropped = 0_usize;

        for raw in raw_rows {
            total += 1;
            let character = raw.character.trim();
            let gift = raw.gift.trim();

            if !character.is_empty() {
                _ = characters.insert(character.to_string());
            }

            if !gift.is_empty() {
                _ = universe.insert(gift.to_string());
            }

            let Some(effect) = Effect::from_label(&raw.effect) else {
                dropped += 1;
                log::debug!(target: LOG_TARGET, "Dropping row ({character}, {gift}) with unrecognized effect '{}'", raw.effect.trim());
                continue;
            };

            if character.is_empty() || gift.is_empty() {
                dropped += 1;
                continue;
            }

            let entry = best.entry((character.to_string(), gift.to_string())).or_insert(effect);
            *entry = (*entry).max(effect);
        }

        let rows: Vec<_> = best
            .into_iter()
            .map(|((character, gift), effect)| GiftEffectRow { character, gift, effect })
            .collect();

        log::info!(
            target: LOG_TARGET,
            "Built relation with {} row(s) from {total} source row(s), {dropped} dropped; {} character(s), {} gift(s)",
            rows.len(),
            characters.len(),
            universe.len()
        );

        Self {
            rows,
            characters: characters.into_iter().collect(),
            universe,
        }
    }

    /// Validated rows, ordered by character then gift.
    #[must_use]
    pub fn rows(&self) -> &[GiftEffectRow] {
        &self.rows
    }

    /// Every character named in the source data, sorted.
    #[must_use]
    pub fn characters(&self) -> &[String] {
        &self.characters
    }

    /// Every gift named in the source data, whether or not it has a valid effect.
    #[must_use]
    pub const fn universe(&self) -> &BTreeSet<String> {
        &self.universe
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn has_character(&self, character: &str) -> bool {
        self.characters.binary_search_by(|c| c.as_str().cmp(character)).is_ok()
    }
}
