use clap::Parser;

use crate::constants::{DEFAULT_NPI_API_BASE_URL, DEFAULT_OUTPUT_FILE};

#[derive(Debug, Parser)]
#[command(name = "nppes_lookup")]
#[command(about = "Look up provider demographics in the NPPES registry and export them to a spreadsheet")]
pub struct Args {
    /// NPI numbers to look up, in output order.
    pub npis: Vec<String>,

    /// CSV file with an `npi` column; its NPIs are appended after any
    /// positional ones.
    #[arg(long)]
    pub npi_file: Option<std::path::PathBuf>,

    /// Output spreadsheet path.
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_path: std::path::PathBuf,

    /// NPI API base URL.
    #[arg(long, default_value = DEFAULT_NPI_API_BASE_URL)]
    pub api_base_url: String,

    /// NPI API version query parameter.
    #[arg(long, default_value = "2.1")]
    pub api_version: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Fixed pause between consecutive API calls, in milliseconds.
    ///
    /// NPPES reference:
    /// https://npiregistry.cms.hhs.gov/
    /// https://npiregistry.cms.hhs.gov/api-page
    #[arg(long, default_value_t = 300)]
    pub delay_ms: u64,
}
