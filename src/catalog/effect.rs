use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How strongly a character reacts to a gift.
///
/// Variants are declared weakest first so the derived ordering is `Medium < Large < Huge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum Effect {
    #[strum(to_string = "medium", serialize = "中")]
    Medium,

    #[strum(to_string = "large", serialize = "大")]
    Large,

    #[strum(to_string = "huge", serialize = "特大")]
    Huge,
}

impl Effect {
    /// Parse an effect label as found in source data, ignoring surrounding whitespace.
    ///
    /// Returns `None` for anything outside the enumeration; such rows carry no usable effect.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        label.trim().parse().ok()
    }
}
