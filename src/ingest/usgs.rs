/// USGS NWIS Daily Values (DV) API client.
///
/// Handles URL construction and JSON response extraction for the USGS
/// Water Services DV endpoint:
///   https://waterservices.usgs.gov/nwis/dv/
///
/// The DV service returns WaterML rendered as JSON. See `fixtures.rs` for
/// annotated examples of the response structure. Every field below the
/// envelope is optional or defaulted on purpose: extraction degrades to
/// `Extraction::Missing` for absent structure instead of failing the
/// whole report, so only a body that is not the envelope at all becomes
/// a `FetchError::Parse`.

use crate::model::{Extraction, FetchError, ParameterKind, Reading, NO_DATA_SENTINEL};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde structures for WaterML JSON deserialization
// ---------------------------------------------------------------------------

/// A parsed DV response document. Opaque outside this module — callers go
/// through `extract_reading` and `extract_site_name`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DvDocument {
    value: ValueWrapper,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ValueWrapper {
    #[serde(rename = "timeSeries")]
    time_series: Vec<TimeSeries>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TimeSeries {
    #[serde(rename = "sourceInfo")]
    source_info: SourceInfo,
    variable: Variable,
    values: Vec<Values>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SourceInfo {
    #[serde(rename = "siteName")]
    site_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Variable {
    #[serde(rename = "variableCode")]
    variable_code: Vec<VariableCode>,
    #[serde(rename = "noDataValue")]
    no_data_value: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VariableCode {
    value: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Values {
    value: Vec<ValueEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ValueEntry {
    value: String, // USGS returns measurements as strings!
    #[serde(rename = "dateTime")]
    date_time: String,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

const DV_BASE_URL: &str = "https://waterservices.usgs.gov/nwis/dv/";

/// Builds a USGS DV API URL for one site and the given parameter kinds.
///
/// With no explicit date range the DV service returns the most recent
/// daily value per parameter, which is exactly what a one-shot
/// conditions page wants. The returned URL always requests JSON format.
pub fn build_dv_url(site: &str, kinds: &[ParameterKind]) -> String {
    let params: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
    format!(
        "{}?format=json&sites={}&parameterCd={}",
        DV_BASE_URL,
        site,
        params.join(",")
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Deserializes a DV response body into a `DvDocument`.
///
/// # Errors
/// `FetchError::Parse` — the body is not a WaterML JSON envelope. This is
/// fatal to the whole report; a well-formed envelope with missing pieces
/// parses fine and degrades per metric during extraction instead.
pub fn parse_document(json: &str) -> Result<DvDocument, FetchError> {
    serde_json::from_str(json)
        .map_err(|e| FetchError::Parse(format!("JSON deserialization failed: {}", e)))
}

/// Extracts the reading for one parameter kind from a parsed document.
///
/// Scans `timeSeries` for the first entry whose parameter code matches,
/// then takes the FIRST observation of its first values block (the DV
/// service puts the newest daily value first). Any missing structure —
/// no matching series, empty arrays, non-numeric or non-finite value —
/// degrades to `Extraction::Missing`. A value equal to the no-data
/// sentinel becomes `Extraction::Maintenance`. Never panics.
pub fn extract_reading(doc: &DvDocument, kind: ParameterKind) -> Extraction {
    let Some(series) = find_series(doc, kind.code()) else {
        return Extraction::Missing;
    };

    let Some(entry) = series.values.first().and_then(|v| v.value.first()) else {
        return Extraction::Missing;
    };

    let value: f64 = match entry.value.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!(
                "   ⚠ Skipping unparseable {} value '{}'",
                kind.label(),
                entry.value
            );
            return Extraction::Missing;
        }
    };

    // "NaN" parses successfully; treat it like any other unusable value.
    if !value.is_finite() {
        return Extraction::Missing;
    }

    // Sentinel check against the payload's declared noDataValue when
    // present, otherwise the standard USGS sentinel.
    let sentinel = series.variable.no_data_value.unwrap_or(NO_DATA_SENTINEL);
    if (value - sentinel).abs() < 0.1 {
        return Extraction::Maintenance;
    }

    Extraction::Reading(Reading {
        kind,
        value,
        datetime: entry.date_time.clone(),
    })
}

/// Derives the display site name from a parsed document.
///
/// Prefers the discharge series' `sourceInfo.siteName` (the original
/// page's convention), falling back to the first series of any kind.
/// Returns `"Unknown Site"` rather than failing when no name is present.
pub fn extract_site_name(doc: &DvDocument) -> String {
    let series = find_series(doc, ParameterKind::Discharge.code())
        .or_else(|| doc.value.time_series.first());

    match series.and_then(|s| s.source_info.site_name.as_deref()) {
        Some(name) => format_site_name(name),
        None => "Unknown Site".to_string(),
    }
}

/// Formats a raw NWIS site name for display: truncate at the first comma
/// (dropping the state suffix), title-case each whitespace token, rejoin
/// with single spaces.
///
/// `"HARPETH RIVER AT BELLEVUE, TN"` → `"Harpeth River At Bellevue"`.
pub fn format_site_name(raw: &str) -> String {
    let before_comma = raw.split(',').next().unwrap_or(raw);
    before_comma
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Newest observation timestamp across all series, as an ISO 8601 string.
/// Used for the report footer and staleness warnings.
pub fn newest_observation(doc: &DvDocument) -> Option<String> {
    doc.value
        .time_series
        .iter()
        .filter_map(|s| s.values.first())
        .filter_map(|v| v.value.first())
        .map(|entry| entry.date_time.clone())
        .max()
}

fn find_series<'a>(doc: &'a DvDocument, code: &str) -> Option<&'a TimeSeries> {
    doc.value.time_series.iter().find(|series| {
        series
            .variable
            .variable_code
            .first()
            .is_some_and(|vc| vc.value == code)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
