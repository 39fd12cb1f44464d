mod effect;
pub mod loader;
mod rarity_map;
mod relation;
mod selection;

pub use effect::Effect;
pub use rarity_map::{Rarity, RarityMap};
pub use relation::{GiftEffectRow, RawGiftRow, Relation};
pub use selection::Selection;
