use clap::Parser;
use nearbywiki_core::Language;

/// Find Wikipedia articles near a coordinate
#[derive(Parser, Debug)]
#[command(name = "nearbywiki")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(allow_negative_numbers = true)]
#[command(about = "Lists Wikipedia articles near a latitude/longitude with their summaries", long_about = None)]
pub struct Args {
    /// Latitude in decimal degrees (e.g., 17.3850)
    #[arg(value_name = "LATITUDE")]
    pub latitude: String,

    /// Longitude in decimal degrees (e.g., 78.4867)
    #[arg(value_name = "LONGITUDE")]
    pub longitude: String,

    /// Article language: en, hi or te
    #[arg(short = 'l', long = "lang", default_value = "en")]
    pub language: Language,

    /// English only: no language fallback and no translation
    #[arg(long = "english-only")]
    pub english_only: bool,

    /// Number of summaries to fetch at once
    #[arg(short = 'j', long = "jobs", default_value_t = 1)]
    pub jobs: usize,

    /// Print the full report as JSON instead of text
    #[arg(long = "json")]
    pub json: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Parses command-line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
