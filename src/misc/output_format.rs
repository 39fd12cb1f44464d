use clap::ValueEnum;

/// How a recommendation is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}
