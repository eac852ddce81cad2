//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::api::{MarketInfo, Round};
use types::OutputFormat;

#[derive(Debug, Parser)]
#[clap(name = "cartola", about = "Cartola FC API client", version)]
pub struct Cartola {
    /// API base URL (or set `CARTOLA_API_BASE_URL` env var).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Output format.
    #[clap(long, short, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout.
    #[clap(long, short, global = true)]
    pub output: Option<PathBuf>,

    /// Log request URLs and row counts to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Athlete scores for a round (`atletas/pontuados/{round}`).
    Scores {
        /// Round number.
        round: Round,
    },

    /// One collection from the transfer market (`atletas/mercado/`).
    Market {
        /// Which collection to show.
        #[clap(value_enum)]
        info: MarketInfo,
    },

    /// Matches of the current round (`partidas/`).
    Matches,
}
