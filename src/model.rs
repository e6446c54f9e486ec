/// Core data types for the kayak conditions service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic beyond code/label lookups — no I/O, no external
/// dependencies.

use std::fmt;

// ---------------------------------------------------------------------------
// Parameter kinds
// ---------------------------------------------------------------------------

/// The three USGS parameters this service reports on.
///
/// The code↔kind mapping is fixed and total: every kind has exactly one
/// NWIS parameter code, and URL construction, extraction, and rendering
/// all go through this enum rather than hardcoding code strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Streamflow, in cubic feet per second (code 00060).
    Discharge,
    /// Gage height (stage), in feet (code 00065).
    GageHeight,
    /// Water temperature, in degrees Celsius on the wire (code 00010).
    WaterTemperature,
}

impl ParameterKind {
    /// All parameters of interest, in report order.
    pub const ALL: [ParameterKind; 3] = [
        ParameterKind::Discharge,
        ParameterKind::GageHeight,
        ParameterKind::WaterTemperature,
    ];

    /// The NWIS parameter code for this kind.
    pub fn code(self) -> &'static str {
        match self {
            ParameterKind::Discharge => "00060",
            ParameterKind::GageHeight => "00065",
            ParameterKind::WaterTemperature => "00010",
        }
    }

    /// Human-readable label used in rendered report paragraphs.
    pub fn label(self) -> &'static str {
        match self {
            ParameterKind::Discharge => "Discharge",
            ParameterKind::GageHeight => "Gage height",
            ParameterKind::WaterTemperature => "Water temperature",
        }
    }

    /// HTML-safe display unit. Temperature is labeled Fahrenheit because
    /// readings are converted before display.
    pub fn unit_html(self) -> &'static str {
        match self {
            ParameterKind::Discharge => "ft&sup3;/s",
            ParameterKind::GageHeight => "ft",
            ParameterKind::WaterTemperature => "&deg;F",
        }
    }
}

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// USGS no-data sentinel. A value equal to this is a placeholder written
/// while a gage is offline, never a real measurement.
pub const NO_DATA_SENTINEL: f64 = -999999.0;

/// A single validated measurement extracted from a DV response.
///
/// At most one `Reading` exists per parameter kind per fetch — the first
/// observation of the first matching `timeSeries` entry wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub kind: ParameterKind,
    pub value: f64,
    pub datetime: String, // ISO 8601, e.g. "2024-05-01T00:00:00.000"
}

/// The outcome of extracting one parameter from a response document.
///
/// Absence is a value, not an error: malformed or missing structure
/// degrades to `Missing`, and a present-but-sentinel value becomes
/// `Maintenance`. Neither variant ever reaches the classifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Reading(Reading),
    /// Series absent, values array empty, or raw value unparseable.
    Missing,
    /// A value was present but equal to the no-data sentinel.
    Maintenance,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that abort the whole report (transport-level failures).
///
/// Per-metric problems never become a `FetchError` — they degrade to
/// `Extraction::Missing` / `Extraction::Maintenance` and are rendered
/// as per-metric fallback text instead.
#[derive(Debug, PartialEq)]
pub enum FetchError {
    /// Non-2xx HTTP response from the USGS API.
    Http(u16),
    /// The request itself failed (DNS, TLS, connect, read).
    Request(String),
    /// The response body could not be deserialized as a WaterML envelope.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(code) => write!(f, "HTTP error: {}", code),
            FetchError::Request(msg) => write!(f, "Request failed: {}", msg),
            FetchError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}
