//! Peak tier and competition, the primitives every ranking pass shares.

use crate::catalog::{Effect, GiftEffectRow, Relation, Selection};
use std::collections::{BTreeMap, BTreeSet};

/// The best effect any considered character achieves with a gift, and who achieves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeakGift<'a> {
    pub effect: Effect,
    pub contenders: BTreeSet<&'a str>,
}

impl PeakGift<'_> {
    /// Number of distinct characters reaching the peak tier.
    #[must_use]
    pub fn competition(&self) -> usize {
        self.contenders.len()
    }

    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.competition() == 1
    }
}

/// Per-gift peak tiers over whatever rows it was built from.
///
/// Tables are built fresh for each query since the peak depends on which characters
/// are being considered.
#[derive(Debug, Default)]
pub struct PeakTable<'a> {
    gifts: BTreeMap<&'a str, PeakGift<'a>>,
}

impl<'a> PeakTable<'a> {
    /// Keep, for every gift, only the rows at its maximum effect.
    pub fn build(rows: impl IntoIterator<Item = &'a GiftEffectRow>) -> Self {
        let mut gifts: BTreeMap<&'a str, PeakGift<'a>> = BTreeMap::new();

        for row in rows {
            let peak = gifts.entry(row.gift.as_str()).or_insert_with(|| PeakGift {
                effect: row.effect,
                contenders: BTreeSet::new(),
            });

            if row.effect > peak.effect {
                peak.effect = row.effect;
                peak.contenders.clear();
            }

            if row.effect == peak.effect {
                _ = peak.contenders.insert(row.character.as_str());
            }
        }

        Self { gifts }
    }

    /// Gifts in name order with their peak data.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &PeakGift<'a>)> {
        self.gifts.iter().map(|(gift, peak)| (*gift, peak))
    }

    #[must_use]
    pub fn get(&self, gift: &str) -> Option<&PeakGift<'a>> {
        self.gifts.get(gift)
    }

    /// The strongest peak across all gifts.
    #[must_use]
    pub fn max_effect(&self) -> Option<Effect> {
        self.gifts.values().map(|peak| peak.effect).max()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.gifts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gifts.is_empty()
    }
}

/// Rows belonging to selected characters.
pub fn selected_rows<'a>(relation: &'a Relation, selection: &'a Selection) -> impl Iterator<Item = &'a GiftEffectRow> {
    relation.rows().iter().filter(|row| selection.contains(&row.character))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::test_support::relation;

    #[test]
    fn test_lower_tiers_are_dropped() {
        let rel = relation(&[("A", "X", "大"), ("B", "X", "特大"), ("C", "X", "特大")]);
        let table = PeakTable::build(rel.rows());
        let peak = table.get("X").unwrap();
        assert_eq!(peak.effect, Effect::Huge);
        assert_eq!(peak.contenders.iter().copied().collect::<Vec<_>>(), ["B", "C"]);
        assert_eq!(peak.competition(), 2);
        assert!(!peak.is_unique());
    }

    #[test]
    fn test_peak_resets_when_better_row_arrives_later() {
        let rel = relation(&[("A", "X", "中"), ("B", "X", "中"), ("C", "X", "大")]);
        let table = PeakTable::build(rel.rows());
        let peak = table.get("X").unwrap();
        assert_eq!(peak.effect, Effect::Large);
        assert!(peak.is_unique());
        assert!(peak.contenders.contains("C"));
    }

    #[test]
    fn test_selected_rows_filters_characters() {
        let rel = relation(&[("A", "X", "大"), ("B", "X", "特大")]);
        let selection = Selection::new(["A"]);
        let table = PeakTable::build(selected_rows(&rel, &selection));
        assert_eq!(table.get("X").unwrap().effect, Effect::Large);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_max_effect() {
        let rel = relation(&[("A", "X", "大"), ("A", "Y", "中")]);
        let table = PeakTable::build(rel.rows());
        assert_eq!(table.max_effect(), Some(Effect::Large));
        assert_eq!(PeakTable::build(Vec::new()).max_effect(), None);
        assert!(PeakTable::default().is_empty());
    }
}
