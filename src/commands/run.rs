use super::{CommonArgs, Host, InitArgs, RecommendArgs, init_config, list_characters, recommend};
use crate::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::LevelFilter;
use std::ffi::OsString;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "gift-rank", version, about = "Find the best gifts for a group of characters")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every character in the gift data
    Characters,

    /// Rank gifts for a selection of characters
    Recommend(RecommendArgs),

    /// Write a default configuration file
    Init(InitArgs),
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose {
        _ = builder.filter_level(LevelFilter::Debug);
    }

    // a logger may already be installed when running more than once in a process
    _ = builder.try_init();
}

fn dispatch<H: Host>(host: &mut H, cli: &Cli) -> Result<()> {
    let mut output = host.output();
    let result = match &cli.command {
        Command::Characters => list_characters(&cli.common, &mut output),
        Command::Recommend(args) => recommend(args, &cli.common, &mut output),
        Command::Init(args) => init_config(args, &mut output),
    };

    result?;
    output.flush()?;
    Ok(())
}

/// Parse the command line and run the selected command.
///
/// Errors are reported on the host's error stream followed by `exit(1)`.
pub fn run<H, I, T>(host: &mut H, args: I)
where
    H: Host,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let text = e.render().to_string();
            if e.use_stderr() {
                _ = write!(host.error(), "{text}");
            } else {
                _ = write!(host.output(), "{text}");
            }
            host.exit(e.exit_code());
            return;
        }
    };

    init_logging(cli.common.verbose);

    if let Err(e) = dispatch(host, &cli) {
        _ = writeln!(host.error(), "error: {e:#}");
        host.exit(1);
    }
}
