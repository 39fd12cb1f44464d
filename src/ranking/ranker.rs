//! Entry point tying the catalog to the individual ranking passes.

use crate::catalog::{RarityMap, Relation, Selection};
use crate::ranking::{
    CharacterGifts, GiftUse, SharedGift, UselessGifts, best_gifts, generation_candidates, optimal_gifts, shared_gifts, useless_gifts,
};
use serde::Serialize;

/// Log target for ranking
const LOG_TARGET: &str = "ranking";

/// Everything computed for one selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub selection: Vec<String>,
    pub assignments: Vec<CharacterGifts>,
    pub shared: Vec<SharedGift>,
    pub generation_candidates: Vec<String>,
    pub useless: UselessGifts,
    pub best_gifts: Vec<GiftUse>,
}

/// Runs ranking queries against a fixed relation and rarity map.
///
/// Holds no per-query state, so the same ranker can serve any number of selections.
#[derive(Debug, Clone, Copy)]
pub struct GiftRanker<'a> {
    relation: &'a Relation,
    rarity: &'a RarityMap,
}

impl<'a> GiftRanker<'a> {
    #[must_use]
    pub const fn new(relation: &'a Relation, rarity: &'a RarityMap) -> Self {
        Self { relation, rarity }
    }

    #[must_use]
    pub const fn relation(&self) -> &'a Relation {
        self.relation
    }

    #[must_use]
    pub const fn rarity(&self) -> &'a RarityMap {
        self.rarity
    }

    #[must_use]
    pub fn optimal_gifts(&self, selection: &Selection) -> Vec<CharacterGifts> {
        optimal_gifts(self.relation, selection, self.rarity)
    }

    #[must_use]
    pub fn shared_gifts(&self, selection: &Selection) -> Vec<SharedGift> {
        shared_gifts(self.relation, selection, self.rarity)
    }

    #[must_use]
    pub fn generation_candidates(&self, selection: &Selection) -> Vec<String> {
        generation_candidates(self.relation, selection, self.rarity)
    }

    #[must_use]
    pub fn useless_gifts(&self, selection: &Selection) -> UselessGifts {
        useless_gifts(self.relation.universe(), self.relation, selection, self.rarity)
    }

    #[must_use]
    pub fn best_gifts(&self, selection: &Selection) -> Vec<GiftUse> {
        best_gifts(self.relation, selection)
    }

    /// Run every query for a selection.
    #[must_use]
    pub fn recommend(&self, selection: &Selection) -> Recommendation {
        for character in selection.iter().filter(|c| !self.relation.has_character(c)) {
            log::warn!(target: LOG_TARGET, "Character '{character}' does not appear in the gift data");
        }

        let recommendation = Recommendation {
            selection: selection.iter().map(ToString::to_string).collect(),
            assignments: self.optimal_gifts(selection),
            shared: self.shared_gifts(selection),
            generation_candidates: self.generation_candidates(selection),
            useless: self.useless_gifts(selection),
            best_gifts: self.best_gifts(selection),
        };

        log::info!(
            target: LOG_TARGET,
            "Ranked gifts for {} character(s): {} shared, {} candidate(s), {} useless",
            selection.len(),
            recommendation.shared.len(),
            recommendation.generation_candidates.len(),
            recommendation.useless.len()
        );

        recommendation
    }
}
