//! Plain-text rendering of a recommendation.
//!
//! Gift names are highlighted with the configured rare/common colors. Without color, rare
//! gifts are marked with a trailing `*` instead.

use crate::Result;
use crate::catalog::RarityMap;
use crate::config::{Color, Config};
use crate::ranking::Recommendation;
use owo_colors::OwoColorize;
use std::io::Write;

const NONE: &str = "(none)";

/// Colors applied to gift names.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleStyle {
    pub rare: Color,
    pub common: Color,
    pub colorize: bool,
}

impl ConsoleStyle {
    #[must_use]
    pub const fn from_config(config: &Config, colorize: bool) -> Self {
        Self {
            rare: config.rare_color,
            common: config.common_color,
            colorize,
        }
    }

    fn gift(&self, gift: &str, rarity: &RarityMap) -> String {
        let is_rare = rarity.is_rare_tier(gift);
        if !self.colorize {
            return if is_rare { format!("{gift}*") } else { gift.to_string() };
        }

        let (red, green, blue) = if is_rare { self.rare.components() } else { self.common.components() };
        gift.truecolor(red, green, blue).to_string()
    }

    fn gifts(&self, gifts: &[String], rarity: &RarityMap) -> String {
        if gifts.is_empty() {
            return NONE.to_string();
        }

        gifts.iter().map(|g| self.gift(g, rarity)).collect::<Vec<_>>().join(", ")
    }

    fn heading(&self, title: &str) -> String {
        if self.colorize { title.bold().to_string() } else { title.to_string() }
    }
}

/// Approximate terminal width: wide (non-ASCII) characters take two columns.
fn display_width(text: &str) -> usize {
    text.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(fill))
}

/// Write the recommendation as sections of text.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn generate<W: Write>(recommendation: &Recommendation, rarity: &RarityMap, style: &ConsoleStyle, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", style.heading("Gift assignments"))?;
    if recommendation.assignments.is_empty() {
        writeln!(writer, "  {NONE}")?;
    }

    let name_width = recommendation
        .assignments
        .iter()
        .map(|a| display_width(&a.character))
        .max()
        .unwrap_or(0);

    for assignment in &recommendation.assignments {
        writeln!(
            writer,
            "  {}  unique: {}",
            pad(&assignment.character, name_width),
            style.gifts(&assignment.unique, rarity)
        )?;
        writeln!(writer, "  {}  shared: {}", pad("", name_width), style.gifts(&assignment.shared, rarity))?;
    }

    writeln!(writer)?;
    writeln!(writer, "{}", style.heading("Contested gifts"))?;
    if recommendation.shared.is_empty() {
        writeln!(writer, "  {NONE}")?;
    }

    for shared in &recommendation.shared {
        writeln!(
            writer,
            "  {} ({}, {} contenders): {}",
            style.gift(&shared.gift, rarity),
            shared.effect,
            shared.competition,
            shared.characters.join(", ")
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "{}", style.heading("Generation candidates"))?;
    writeln!(writer, "  {}", style.gifts(&recommendation.generation_candidates, rarity))?;

    writeln!(writer)?;
    writeln!(writer, "{}", style.heading("Useless common gifts"))?;
    writeln!(writer, "  {}", style.gifts(&recommendation.useless.common, rarity))?;

    writeln!(writer)?;
    writeln!(writer, "{}", style.heading("Useless rare gifts"))?;
    writeln!(writer, "  {}", style.gifts(&recommendation.useless.rare, rarity))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RawGiftRow, Relation, Selection};
    use crate::ranking::GiftRanker;

    fn render(colorize: bool) -> String {
        let relation = Relation::new([
            RawGiftRow::new("Alice", "Ring", "大"),
            RawGiftRow::new("Bob", "Ring", "大"),
            RawGiftRow::new("Alice", "Tea", "中"),
            RawGiftRow::new("Carol", "Stone", "中"),
        ]);
        let rarity: RarityMap = [("Ring", 1)].into_iter().collect();
        let recommendation = GiftRanker::new(&relation, &rarity).recommend(&Selection::new(["Alice", "Bob"]));
        let style = ConsoleStyle::from_config(&Config::default(), colorize);

        let mut out = Vec::new();
        generate(&recommendation, &rarity, &style, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_output() {
        let text = render(false);
        assert!(text.contains("Alice  unique: Tea"));
        assert!(text.contains("Bob    unique: (none)"));
        assert!(text.contains("shared: Ring*"));
        assert!(text.contains("Ring* (large, 2 contenders): Alice, Bob"));
        assert!(text.contains("Useless common gifts\n  Stone"));
        assert!(text.contains("Useless rare gifts\n  (none)"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_colored_output_has_escapes() {
        let text = render(true);
        assert!(text.contains('\u{1b}'));
        assert!(!text.contains("Ring*"));
    }

    #[test]
    fn test_display_width_counts_wide_characters() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("ミク"), 4);
        assert_eq!(pad("ミク", 6), "ミク  ");
    }
}
