use anyhow::{Context, Result, bail};
use std::path::Path;

/// Reads NPIs from the `npi` column of a CSV file, preserving order and
/// duplicates so the output rows line up with the input list.
pub fn read_npi_file(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed opening NPI file {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed reading header row of {}", path.display()))?;
    let Some(npi_column) = headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case("npi"))
    else {
        bail!("No `npi` column in {}", path.display());
    };

    let mut npis = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed reading NPI row in {}", path.display()))?;
        let Some(value) = record.get(npi_column) else {
            continue;
        };
        let value = value.trim();
        if !value.is_empty() {
            npis.push(value.to_string());
        }
    }
    Ok(npis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_npi_column_preserving_order_and_duplicates() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("npis.csv");
        fs::write(
            &path,
            "name,NPI\nalpha,1111111111\nbeta, 2222222222 \ngamma,\ndelta,1111111111\n",
        )
        .expect("write csv");

        let npis = read_npi_file(&path).expect("read csv");
        assert_eq!(npis, ["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn missing_npi_column_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("npis.csv");
        fs::write(&path, "name,id\nalpha,1\n").expect("write csv");

        assert!(read_npi_file(&path).is_err());
    }
}
