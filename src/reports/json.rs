use crate::Result;
use crate::ranking::Recommendation;
use anyhow::Context;
use std::io::Write;

/// Write the recommendation as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn generate<W: Write>(recommendation: &Recommendation, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, recommendation).context("serializing recommendation to JSON")?;
    writeln!(writer)?;
    Ok(())
}
