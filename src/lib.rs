//! gift-rank crate
//!
//! Ranks which gifts to give a selection of game characters: the best gifts per character,
//! gifts several characters compete for, common gifts worth generating, and gifts useless to
//! everyone selected.

pub type Result<T, E = anyhow::Error> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod catalog;

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod config;

#[doc(hidden)]
pub mod misc;

#[doc(hidden)]
pub mod ranking;

#[doc(hidden)]
pub mod reports;

pub use crate::commands::{Host, run};
