use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use std::{fs, path::Path};

use crate::lookup::ProviderRecord;

pub const COLUMNS: [&str; 10] = [
    "ProviderNpi",
    "FirstName",
    "LastName",
    "Address",
    "City",
    "State",
    "ZipCode",
    "Phone",
    "ProviderType",
    "Status",
];

/// Writes the collected records as one worksheet, one row per NPI in
/// batch order, all cells as text. The workbook lands under a temp name
/// first and is renamed into place once fully written.
pub fn write_workbook(records: &[ProviderRecord], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating output directory {}", parent.display()))?;
    }

    let file_name = output_path
        .file_name()
        .and_then(|x| x.to_str())
        .unwrap_or("providers.xlsx");
    let tmp_path = output_path.with_file_name(format!("{file_name}.tmp"));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .context("Failed writing spreadsheet header")?;
    }
    for (row, record) in records.iter().enumerate() {
        for (col, value) in record_row(record).iter().enumerate() {
            worksheet
                .write_string(row as u32 + 1, col as u16, value)
                .with_context(|| format!("Failed writing spreadsheet row for {}", record.npi))?;
        }
    }

    workbook
        .save(&tmp_path)
        .with_context(|| format!("Failed writing temp spreadsheet {}", tmp_path.display()))?;
    fs::rename(&tmp_path, output_path).with_context(|| {
        format!(
            "Failed moving temp spreadsheet {} to {}",
            tmp_path.display(),
            output_path.display()
        )
    })?;
    Ok(())
}

fn record_row(record: &ProviderRecord) -> [String; 10] {
    [
        record.npi.clone(),
        record.first_name.clone(),
        record.last_name.clone(),
        record.address.clone(),
        record.city.clone(),
        record.state.clone(),
        record.zip_code.clone(),
        record.phone.clone(),
        record.provider_type.clone(),
        record.status.label(),
    ]
}
