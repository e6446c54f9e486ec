/// Blocking HTTP data source for the USGS DV API.
///
/// One GET per invocation, no retry — the conditions page is
/// fire-once-per-load, and a failed fetch renders the generic error
/// report instead of being retried.

use crate::ingest::usgs::{self, DvDocument};
use crate::model::{FetchError, ParameterKind};

/// Fetches a URL and returns the response body.
///
/// # Errors
/// - `FetchError::Request` — DNS/TLS/connect/read failure.
/// - `FetchError::Http` — non-2xx status.
pub fn fetch_document(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http(status.as_u16()));
    }

    response
        .text()
        .map_err(|e| FetchError::Request(e.to_string()))
}

/// Fetches and parses the current conditions document for one site.
///
/// Requests all three parameters of interest in a single call; missing
/// parameters degrade per metric during extraction rather than failing
/// here.
pub fn fetch_conditions(
    client: &reqwest::blocking::Client,
    site_code: &str,
) -> Result<DvDocument, FetchError> {
    let url = usgs::build_dv_url(site_code, &ParameterKind::ALL);
    let body = fetch_document(client, &url)?;
    usgs::parse_document(&body)
}
