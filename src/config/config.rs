use crate::Result;
use crate::config::Color;
use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// Log target for configuration
const LOG_TARGET: &str = "config";

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when none is given explicitly
pub const CONFIG_FILE_NAME: &str = "gift-rank.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// CSV table of `character,gift,effect` rows
    #[serde(default = "default_gifts_file")]
    pub gifts_file: Utf8PathBuf,

    /// CSV table of `giftname,rarity` rows
    #[serde(default = "default_rarity_file")]
    pub rarity_file: Utf8PathBuf,

    /// Highlight for tier 1 gifts
    #[serde(default = "default_rare_color")]
    pub rare_color: Color,

    /// Highlight for every other gift
    #[serde(default = "default_common_color")]
    pub common_color: Color,
}

fn default_gifts_file() -> Utf8PathBuf {
    Utf8PathBuf::from("gifts.csv")
}

fn default_rarity_file() -> Utf8PathBuf {
    Utf8PathBuf::from("rarity.csv")
}

const fn default_rare_color() -> Color {
    Color::rgb(0x8B, 0x5C, 0xF6)
}

const fn default_common_color() -> Color {
    Color::rgb(0xF5, 0x9E, 0x0B)
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `gift-rank.toml` is looked up in `base_dir`. Relative data
    /// file paths are resolved against the directory of the configuration file, or against
    /// `base_dir` when running on defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8Path>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).with_context(|| format!("reading gift-rank configuration file '{path}'"))?;
            (path.to_path_buf(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "No configuration file at '{path}', using defaults");
                    return Ok(Self::default().resolved_against(base_dir));
                }
                Err(e) => return Err(e).with_context(|| format!("reading gift-rank configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).with_context(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::debug!(target: LOG_TARGET, "Loaded configuration from '{final_path}'");
        let config_dir = final_path.parent().unwrap_or(base_dir);
        Ok(config.resolved_against(config_dir))
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).with_context(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    #[must_use]
    pub fn resolved_against(mut self, dir: &Utf8Path) -> Self {
        if self.gifts_file.is_relative() {
            self.gifts_file = dir.join(&self.gifts_file);
        }

        if self.rarity_file.is_relative() {
            self.rarity_file = dir.join(&self.rarity_file);
        }

        self
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a data file path is empty
    fn validate(&self) -> Result<()> {
        if self.gifts_file.as_str().trim().is_empty() {
            bail!("gifts_file must not be empty");
        }

        if self.rarity_file.as_str().trim().is_empty() {
            bail!("rarity_file must not be empty");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
