use super::common::{CommonArgs, load_catalog};
use crate::Result;
use crate::catalog::Selection;
use crate::misc::{ColorMode, OutputFormat};
use crate::ranking::GiftRanker;
use crate::reports::{ConsoleStyle, generate_console, generate_json};
use anyhow::bail;
use clap::Args;
use std::io::Write;

#[derive(Args, Debug, Clone, Default)]
pub struct RecommendArgs {
    /// Characters to find gifts for
    #[arg(value_name = "CHARACTER")]
    pub characters: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// When to color console output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

/// Rank gifts for the selected characters and print the result.
pub fn recommend(args: &RecommendArgs, common: &CommonArgs, output: &mut impl Write) -> Result<()> {
    let selection = Selection::new(&args.characters);
    if selection.is_empty() {
        bail!("no characters selected");
    }

    let config = common.config()?;
    let (relation, rarity) = load_catalog(&config)?;
    let recommendation = GiftRanker::new(&relation, &rarity).recommend(&selection);

    match args.format {
        OutputFormat::Console => {
            let style = ConsoleStyle::from_config(&config, args.color.enabled());
            generate_console(&recommendation, &rarity, &style, output)
        }
        OutputFormat::Json => generate_json(&recommendation, output),
    }
}
