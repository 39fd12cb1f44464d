//! Color mode configuration for reports.

use clap::ValueEnum;
use std::io::{IsTerminal, stdout};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    Always,
    Never,
    #[default]
    Auto,
}

impl ColorMode {
    /// Whether console output should carry ANSI colors.
    ///
    /// `Auto` colors only when stdout is a terminal and `NO_COLOR` is unset.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && stdout().is_terminal(),
        }
    }
}
