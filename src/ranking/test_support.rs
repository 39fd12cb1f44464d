use crate::catalog::{RarityMap, RawGiftRow, Relation};

pub fn relation(rows: &[(&str, &str, &str)]) -> Relation {
    Relation::new(rows.iter().map(|(c, g, e)| RawGiftRow::new(*c, *g, *e)))
}

pub fn rarity(entries: &[(&str, i64)]) -> RarityMap {
    entries.iter().map(|(gift, value)| (*gift, *value)).collect()
}
