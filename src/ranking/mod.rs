mod best_gifts;
mod generation;
mod optimal_gifts;
mod peak_table;
mod ranker;
mod shared_gifts;
mod useless_gifts;

#[cfg(test)]
mod test_support;

pub use best_gifts::{GiftUse, best_gifts};
pub use generation::generation_candidates;
pub use optimal_gifts::{CharacterGifts, optimal_gifts};
pub use peak_table::{PeakGift, PeakTable};
pub use ranker::{GiftRanker, Recommendation};
pub use shared_gifts::{SharedGift, shared_gifts};
pub use useless_gifts::{UselessGifts, useless_gifts};
