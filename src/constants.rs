pub const DEFAULT_NPI_API_BASE_URL: &str = "https://npiregistry.cms.hhs.gov/api/";
pub const DEFAULT_OUTPUT_FILE: &str = "providers.xlsx";

pub const NPPES_RATE_LIMIT_NOTICE_URL: &str = "https://npiregistry.cms.hhs.gov/";
pub const NPPES_API_DOC_URL: &str = "https://npiregistry.cms.hhs.gov/api-page";
