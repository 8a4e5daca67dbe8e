use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub fn args_checks() -> Args {
    Args::parse()
}

/// Where detailed per-format statistics come from. The roster file is always
/// authoritative for identity fields regardless of this choice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatsSourceKind {
    /// Scrape the stats site profile page
    Scrape,
    /// Ask the generative model for a schema-constrained completion
    Model,
}

#[derive(Parser, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Delimited player roster file, re-read on every lookup
    #[arg(
        short = 'p',
        long,
        value_name = "FILE",
        default_value = "data/player-data.csv"
    )]
    pub player_data: PathBuf,

    /// Statistics source: scrape or model
    #[arg(
        short = 's',
        long,
        value_name = "SOURCE",
        default_value = "scrape",
        value_parser = clap::value_parser!(StatsSourceKind)
    )]
    pub stats_source: StatsSourceKind,

    /// Address the HTTP server binds to
    #[arg(long, value_name = "ADDR", default_value = "0.0.0.0:8081")]
    pub bind: String,
}
