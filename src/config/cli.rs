use crate::utils::error::{Result, TicketError};
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const MOMENT_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

#[derive(Debug, Clone, Parser)]
#[command(name = "concert-tickets")]
#[command(about = "Price concert tickets with bulk discount, service fee and peak pricing")]
pub struct CliConfig {
    /// Path to a TOML file with pricing overrides
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the bands and their ticket prices
    Bands,
    /// Work out the total cost for a number of tickets
    Quote(QuoteArgs),
}

#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    /// Band name as shown by `bands` (case-insensitive)
    #[arg(short, long, default_value = "Select a Band")]
    pub band: String,

    /// Number of tickets; anything other than digits is ignored
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub tickets: String,

    /// Local date and time to price at instead of now, e.g. 2026-10-16T19:30
    #[arg(long)]
    pub at: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the simulated processing delay
    #[arg(long)]
    pub no_delay: bool,
}

impl QuoteArgs {
    pub fn moment(&self) -> Result<Option<NaiveDateTime>> {
        self.at.as_deref().map(parse_moment).transpose()
    }
}

pub fn parse_moment(value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    MOMENT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| TicketError::InvalidMomentError {
            value: value.to_string(),
            reason: format!("expected one of {}", MOMENT_FORMATS.join(", ")),
        })
}
