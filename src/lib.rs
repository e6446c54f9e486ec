/// kayakcast_service: river kayak conditions report service.
///
/// Fetches real-time telemetry for one USGS site and answers the only
/// question that matters: is it safe/fun to kayak today?
///
/// # Module structure
///
/// ```text
/// kayakcast_service
/// ├── model      — shared domain types (ParameterKind, Reading, Extraction, FetchError)
/// ├── config     — site configuration loader (site.toml) with built-in default
/// ├── ingest
/// │   ├── usgs   — USGS NWIS DV API: URL construction + WaterML JSON extraction
/// │   └── fixtures (test only) — representative API response payloads
/// ├── advisory
/// │   └── thresholds — ordered advisory tables + per-metric classify functions
/// ├── fetch      — blocking HTTP data source (one GET per page load, no retry)
/// ├── report     — composes readings + advisories into the HTML fragment
/// ├── sink       — display sink abstraction (stdout for CLI, buffer for tests)
/// └── endpoint   — tiny_http page server (fresh fetch per request)
/// ```
///
/// Pipeline: fetch → ingest::usgs (extract) → advisory (classify) →
/// report (render) → sink. Per-metric problems degrade to fallback
/// paragraphs inside the report; only transport-level failure replaces
/// the whole report with the generic error body.

/// Public modules
pub mod advisory;
pub mod config;
pub mod endpoint;
pub mod fetch;
pub mod ingest;
pub mod model;
pub mod report;
pub mod sink;
