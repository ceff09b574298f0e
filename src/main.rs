mod args;
mod batch;
mod constants;
mod export;
mod input;
mod lookup;
#[cfg(test)]
mod testutil;

use anyhow::{Context, Result, bail};
use clap::Parser;
use reqwest::Client;
use std::time::Duration;

use args::Args;
use batch::run_batch;
use constants::{NPPES_API_DOC_URL, NPPES_RATE_LIMIT_NOTICE_URL};
use input::read_npi_file;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    println!("NPI API references:");
    println!("  - {}", NPPES_RATE_LIMIT_NOTICE_URL);
    println!("  - {}", NPPES_API_DOC_URL);

    let mut npis = args.npis.clone();
    if let Some(npi_file) = &args.npi_file {
        let from_file = read_npi_file(npi_file)?;
        println!("Read {} NPIs from {}", from_file.len(), npi_file.display());
        npis.extend(from_file);
    }
    if npis.is_empty() {
        bail!("No NPIs to look up. Pass NPI numbers as arguments or use --npi-file.");
    }

    let client = Client::builder()
        .user_agent("nppes-lookup/0.1")
        .timeout(Duration::from_secs(args.request_timeout_secs))
        .build()
        .context("Failed creating HTTP client")?;

    println!(
        "Looking up {} NPIs against {}",
        npis.len(),
        args.api_base_url
    );
    run_batch(
        &client,
        &args.api_base_url,
        &args.api_version,
        Duration::from_millis(args.delay_ms),
        &npis,
        &args.output_path,
    )
    .await?;
    Ok(())
}
