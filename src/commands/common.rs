use crate::Result;
use crate::catalog::{RarityMap, Relation, loader};
use crate::config::Config;
use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Path to configuration file (default is `gift-rank.toml` in the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Gift effect table, overriding the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub gifts: Option<Utf8PathBuf>,

    /// Gift rarity table, overriding the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub rarity: Option<Utf8PathBuf>,

    /// Log progress details to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Resolve the configuration, applying command-line overrides.
    pub fn config(&self) -> Result<Config> {
        let cwd = std::env::current_dir().context("determining the current directory")?;
        let cwd = Utf8PathBuf::try_from(cwd).context("the current directory is not valid UTF-8")?;

        let mut config = Config::load(&cwd, self.config.as_deref())?;
        if let Some(gifts) = &self.gifts {
            config.gifts_file.clone_from(gifts);
        }

        if let Some(rarity) = &self.rarity {
            config.rarity_file.clone_from(rarity);
        }

        Ok(config)
    }
}

/// Load both data tables named by the configuration.
pub fn load_catalog(config: &Config) -> Result<(Relation, RarityMap)> {
    let relation = loader::load_relation(&config.gifts_file)?;
    let rarity = loader::load_rarity(&config.rarity_file)?;
    Ok((relation, rarity))
}
