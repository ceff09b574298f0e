use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::{path::Path, time::Duration};
use tokio::time::sleep;

use crate::export::write_workbook;
use crate::lookup::{LookupStatus, ProviderRecord, lookup_npi};

/// Runs the NPI list through the registry one at a time, pausing between
/// calls to pace load on the shared public API. Every NPI yields exactly
/// one record; lookup failures surface as error-status rows, so the only
/// failure that propagates from here is the spreadsheet write itself.
pub async fn run_batch(
    client: &Client,
    api_base_url: &str,
    api_version: &str,
    delay: Duration,
    npis: &[String],
    output_path: &Path,
) -> Result<Vec<ProviderRecord>> {
    let total = npis.len();
    let progress = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [NPI {elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
    ) {
        progress.set_style(style.progress_chars("=> "));
    }

    let mut records = Vec::with_capacity(total);
    let mut found = 0usize;
    let mut not_found = 0usize;
    let mut failed = 0usize;

    for (index, npi) in npis.iter().enumerate() {
        let record = lookup_npi(client, api_base_url, api_version, npi).await;
        match &record.status {
            LookupStatus::Success => found += 1,
            LookupStatus::NotFound => not_found += 1,
            LookupStatus::Error(_) => failed += 1,
        }

        let marker = if record.status.is_success() { "✓" } else { "✗" };
        progress.println(format!("{marker} [{}/{total}] {npi}", index + 1));
        progress.inc(1);
        progress.set_message(format!(
            "ok={found} not_found={not_found} failed={failed}"
        ));
        records.push(record);

        // pace between calls only; the last lookup ends the loop immediately
        if index + 1 < total {
            sleep(delay).await;
        }
    }

    progress.finish_with_message(format!(
        "done: ok={found} not_found={not_found} failed={failed}"
    ));

    write_workbook(&records, output_path)?;
    println!(
        "Saved {} provider records to {}",
        records.len(),
        output_path.display()
    );
    Ok(records)
}
