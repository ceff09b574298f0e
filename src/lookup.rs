use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct NpiApiResponse {
    #[serde(default)]
    result_count: u64,
    #[serde(default)]
    results: Vec<NpiResult>,
}

#[derive(Debug, Default, Deserialize)]
struct NpiResult {
    basic: Option<NpiBasic>,
    #[serde(default)]
    addresses: Vec<NpiAddress>,
    #[serde(default)]
    taxonomies: Vec<NpiTaxonomy>,
}

#[derive(Debug, Default, Deserialize)]
struct NpiBasic {
    first_name: Option<String>,
    last_name: Option<String>,
    organization_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct NpiAddress {
    address_purpose: Option<String>,
    address_1: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
    telephone_number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct NpiTaxonomy {
    #[serde(default)]
    primary: bool,
    desc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupStatus {
    Success,
    NotFound,
    Error(String),
}

impl LookupStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, LookupStatus::Success)
    }

    pub fn label(&self) -> String {
        match self {
            LookupStatus::Success => "SUCCESS".to_string(),
            LookupStatus::NotFound => "NOT_FOUND".to_string(),
            LookupStatus::Error(message) => format!("ERROR: {message}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderRecord {
    pub npi: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub provider_type: String,
    pub status: LookupStatus,
}

impl ProviderRecord {
    fn bare(npi: &str, status: LookupStatus) -> Self {
        Self {
            npi: npi.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            phone: String::new(),
            provider_type: String::new(),
            status,
        }
    }
}

/// Looks up one NPI against the registry. Total over its input: every
/// failure mode ends up in the returned record's status, so a batch can
/// continue unconditionally past bad records.
pub async fn lookup_npi(
    client: &Client,
    api_base_url: &str,
    api_version: &str,
    npi: &str,
) -> ProviderRecord {
    match fetch_record(client, api_base_url, api_version, npi).await {
        Ok(record) => record,
        Err(err) => ProviderRecord::bare(npi, LookupStatus::Error(format!("{err:#}"))),
    }
}

async fn fetch_record(
    client: &Client,
    api_base_url: &str,
    api_version: &str,
    npi: &str,
) -> Result<ProviderRecord> {
    let body: NpiApiResponse = client
        .get(api_base_url)
        .query(&[("number", npi), ("version", api_version)])
        .send()
        .await
        .with_context(|| format!("NPI API request failed for {npi}"))?
        .error_for_status()
        .with_context(|| format!("NPI API returned error status for {npi}"))?
        .json()
        .await
        .with_context(|| format!("Invalid NPI API JSON for {npi}"))?;

    record_from_response(npi, &body)
}

fn record_from_response(npi: &str, body: &NpiApiResponse) -> Result<ProviderRecord> {
    if body.result_count == 0 {
        return Ok(ProviderRecord::bare(npi, LookupStatus::NotFound));
    }

    let result = body.results.first().with_context(|| {
        format!(
            "NPI API reported {} results for {npi} but sent none",
            body.result_count
        )
    })?;

    // pick LOCATION address if present, else the first one
    let practice_addr = first_match_or_first(&result.addresses, |a| {
        a.address_purpose
            .as_deref()
            .map(|purpose| purpose.eq_ignore_ascii_case("LOCATION"))
            .unwrap_or(false)
    });

    // primary taxonomy, else the first one
    let provider_type = first_match_or_first(&result.taxonomies, |t| t.primary)
        .map(|t| text(&t.desc))
        .unwrap_or_default();

    let basic = result.basic.as_ref();
    let first_name = basic
        .and_then(|b| b.first_name.as_deref())
        .unwrap_or_default()
        .to_string();
    // last_name is empty for organizations, so fall back to the org name
    let last_name = basic
        .and_then(|b| b.last_name.as_deref())
        .filter(|name| !name.is_empty())
        .or_else(|| basic.and_then(|b| b.organization_name.as_deref()))
        .unwrap_or_default()
        .to_string();

    let (address, city, state, zip_code, phone) = match practice_addr {
        Some(addr) => (
            text(&addr.address_1),
            text(&addr.city),
            text(&addr.state),
            zip5(addr.postal_code.as_deref()),
            text(&addr.telephone_number),
        ),
        None => Default::default(),
    };

    Ok(ProviderRecord {
        npi: npi.to_string(),
        first_name,
        last_name,
        address,
        city,
        state,
        zip_code,
        phone,
        provider_type,
        status: LookupStatus::Success,
    })
}

fn first_match_or_first<T>(items: &[T], matches: impl Fn(&T) -> bool) -> Option<&T> {
    items
        .iter()
        .find(|&item| matches(item))
        .or_else(|| items.first())
}

fn text(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().to_string()
}

/// Raw postal codes may carry the 4-digit extension; only the 5-digit
/// prefix goes into the output.
fn zip5(raw: Option<&str>) -> String {
    raw.map(|code| code.chars().take(5).collect())
        .unwrap_or_default()
}
