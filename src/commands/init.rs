use crate::Result;
use crate::config::{CONFIG_FILE_NAME, Config};
use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use std::io::Write;

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Where to write the configuration file
    #[arg(long, value_name = "PATH", default_value = CONFIG_FILE_NAME)]
    pub output: Utf8PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Write the default configuration file.
pub fn init_config(args: &InitArgs, output: &mut impl Write) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!("'{}' already exists, use --force to overwrite it", args.output);
    }

    Config::save_default(&args.output)?;
    writeln!(output, "Wrote default configuration to '{}'", args.output)?;
    Ok(())
}
