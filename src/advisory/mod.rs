/// Qualitative advisories for the kayak conditions report.
///
/// Submodules:
/// - `thresholds` — ordered advisory tables and the per-metric classify
///   functions that map a numeric reading to a message.

pub mod thresholds;

pub use thresholds::{
    celsius_to_fahrenheit, classify_discharge, classify_gage_height, classify_water_temp,
};
