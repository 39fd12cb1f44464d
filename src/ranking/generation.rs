//! Common gifts worth generating for a selection.

use crate::catalog::{RarityMap, Relation, Selection};
use crate::ranking::peak_table::{PeakTable, selected_rows};

/// Log target for ranking
const LOG_TARGET: &str = "ranking";

/// Shortlist the common gifts reaching the best effect achievable with common gifts.
///
/// Rare (tier 1) gifts are never candidates. Gifts whose peak is below the best common
/// peak are dropped. The rest are ordered by number of contending characters (most
/// first), then by name.
#[must_use]
pub fn generation_candidates(relation: &Relation, selection: &Selection, rarity: &RarityMap) -> Vec<String> {
    let table = PeakTable::build(selected_rows(relation, selection).filter(|row| !rarity.is_rare_tier(&row.gift)));

    let Some(best) = table.max_effect() else {
        return Vec::new();
    };

    let mut candidates: Vec<_> = table.iter().filter(|(_, peak)| peak.effect == best).collect();
    candidates.sort_by(|(gift_a, peak_a), (gift_b, peak_b)| {
        peak_b
            .competition()
            .cmp(&peak_a.competition())
            .then_with(|| gift_a.cmp(gift_b))
    });

    log::debug!(target: LOG_TARGET, "Found {} generation candidate(s) at effect '{best}'", candidates.len());
    candidates.into_iter().map(|(gift, _)| gift.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::test_support::{rarity, relation};

    #[test]
    fn test_only_best_common_effect_survives() {
        let rel = relation(&[("A", "Bread", "大"), ("B", "Milk", "中"), ("A", "Ring", "特大")]);
        let candidates = generation_candidates(&rel, &Selection::new(["A", "B"]), &rarity(&[("Ring", 1)]));
        assert_eq!(candidates, ["Bread"]);
    }

    #[test]
    fn test_ordered_by_contenders_then_name() {
        let rel = relation(&[
            ("A", "Cake", "大"),
            ("A", "Bread", "大"),
            ("B", "Bread", "大"),
            ("A", "Apple", "大"),
            ("B", "Tea", "中"),
        ]);
        let candidates = generation_candidates(&rel, &Selection::new(["A", "B"]), &rarity(&[]));
        assert_eq!(candidates, ["Bread", "Apple", "Cake"]);
    }

    #[test]
    fn test_rare_rows_do_not_affect_peaks() {
        let rel = relation(&[("A", "Ring", "特大"), ("B", "Ring", "特大"), ("A", "Tea", "中")]);
        let candidates = generation_candidates(&rel, &Selection::new(["A", "B"]), &rarity(&[("Ring", 1)]));
        assert_eq!(candidates, ["Tea"]);
    }

    #[test]
    fn test_non_tier_one_rarity_counts_as_common() {
        let rel = relation(&[("A", "Crown", "特大")]);
        let candidates = generation_candidates(&rel, &Selection::new(["A"]), &rarity(&[("Crown", 2)]));
        assert_eq!(candidates, ["Crown"]);
    }

    #[test]
    fn test_only_peak_contenders_are_counted() {
        let rel = relation(&[("A", "Bread", "大"), ("B", "Bread", "中"), ("C", "Bread", "中"), ("A", "Cake", "大"), ("B", "Cake", "大")]);
        let candidates = generation_candidates(&rel, &Selection::new(["A", "B", "C"]), &rarity(&[]));
        assert_eq!(candidates, ["Cake", "Bread"]);
    }

    #[test]
    fn test_empty_cases() {
        let rel = relation(&[("A", "Ring", "大")]);
        let map = rarity(&[("Ring", 1)]);
        assert!(generation_candidates(&rel, &Selection::new(["A"]), &map).is_empty());
        assert!(generation_candidates(&rel, &Selection::default(), &map).is_empty());
    }
}
