/// Data ingestion for the kayak conditions service.
///
/// Submodules:
/// - `usgs` — USGS NWIS Daily Values API: URL construction + WaterML
///   JSON extraction.
/// - `fixtures` (test only) — representative API response payloads.

pub mod usgs;

#[cfg(test)]
pub(crate) mod fixtures;
