//! Reads the gift and rarity tables from CSV.

use crate::Result;
use crate::catalog::{Rarity, RarityMap, RawGiftRow, Relation};
use anyhow::{Context, bail};
use camino::Utf8Path;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;

/// Log target for data loading
const LOG_TARGET: &str = "catalog";

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    _ = builder.trim(Trim::All).flexible(true);
    builder
}

/// Position of a required column among the (trimmed) headers.
fn column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .with_context(|| format!("missing required column '{name}'"))
}

/// A cell of a record, empty when the record is shorter than the header.
fn cell(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or_default()
}

/// Parse a rarity cell. Integral floats such as `1.0` count as their integer value.
fn parse_rarity(text: &str) -> Option<i64> {
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }

    let value = text.parse::<f64>().ok()?;
    if !value.is_finite() || value.fract().abs() >= f64::EPSILON || value.abs() >= 9.0e18 {
        return None;
    }

    #[expect(clippy::cast_possible_truncation, reason = "value is integral and within i64 range")]
    let whole = value as i64;
    Some(whole)
}

/// Load the gift effect table (`character,gift,effect`).
///
/// # Errors
///
/// Fails if the file does not exist, lacks a required column or is not readable CSV. A
/// missing gift table means there is nothing to rank, so callers treat it as fatal.
pub fn load_relation(path: &Utf8Path) -> Result<Relation> {
    if !path.exists() {
        bail!("data file not found: '{path}'");
    }

    let file = File::open(path).with_context(|| format!("opening gift data file '{path}'"))?;
    read_relation(file).with_context(|| format!("reading gift data file '{path}'"))
}

/// Load the gift rarity table (`giftname,rarity`).
///
/// A missing file yields an empty map, making every gift common.
///
/// # Errors
///
/// Fails if the file exists but lacks a required column or is not readable CSV.
pub fn load_rarity(path: &Utf8Path) -> Result<RarityMap> {
    if !path.exists() {
        log::info!(target: LOG_TARGET, "No rarity file at '{path}', treating every gift as common");
        return Ok(RarityMap::new());
    }

    let file = File::open(path).with_context(|| format!("opening rarity file '{path}'"))?;
    read_rarity(file).with_context(|| format!("reading rarity file '{path}'"))
}

/// Parse the gift effect table from any reader.
///
/// Cells missing from short records read as empty.
///
/// # Errors
///
/// Fails on malformed CSV or when `character`, `gift` or `effect` is not among the headers.
pub fn read_relation(reader: impl Read) -> Result<Relation> {
    let mut csv = reader_builder().from_reader(reader);
    let headers = csv.headers().context("reading gift table headers")?.clone();
    let character = column(&headers, "character")?;
    let gift = column(&headers, "gift")?;
    let effect = column(&headers, "effect")?;

    let mut rows = Vec::new();
    for (index, record) in csv.records().enumerate() {
        let record = record.with_context(|| format!("parsing gift record #{}", index + 1))?;
        rows.push(RawGiftRow::new(cell(&record, character), cell(&record, gift), cell(&record, effect)));
    }

    Ok(Relation::new(rows))
}

/// Parse the gift rarity table from any reader.
///
/// Rows with a blank gift name or a non-integer rarity are skipped.
///
/// # Errors
///
/// Fails on malformed CSV or when `giftname` or `rarity` is not among the headers.
pub fn read_rarity(reader: impl Read) -> Result<RarityMap> {
    let mut csv = reader_builder().from_reader(reader);
    let headers = csv.headers().context("reading rarity table headers")?.clone();
    let giftname = column(&headers, "giftname")?;
    let rarity = column(&headers, "rarity")?;

    let mut map = RarityMap::new();
    for (index, record) in csv.records().enumerate() {
        let record = record.with_context(|| format!("parsing rarity record #{}", index + 1))?;
        let gift = cell(&record, giftname);
        if gift.is_empty() {
            continue;
        }

        let text = cell(&record, rarity);
        match parse_rarity(text) {
            Some(value) => map.insert(gift, Rarity(value)),
            None => {
                log::warn!(target: LOG_TARGET, "Skipping rarity for '{gift}': '{text}' is not an integer");
            }
        }
    }

    log::debug!(target: LOG_TARGET, "Loaded rarity for {} gift(s)", map.len());
    Ok(map)
}
