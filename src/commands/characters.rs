use super::common::{CommonArgs, load_catalog};
use crate::Result;
use std::io::Write;

/// Print every character in the gift data, one per line.
pub fn list_characters(common: &CommonArgs, output: &mut impl Write) -> Result<()> {
    let config = common.config()?;
    let (relation, _rarity) = load_catalog(&config)?;

    for character in relation.characters() {
        writeln!(output, "{character}")?;
    }

    Ok(())
}
