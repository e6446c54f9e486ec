/// Report rendering: composes extracted readings and their advisories
/// into the HTML fragment served to the conditions page.
///
/// Each metric renders independently: a present reading becomes
/// `"<message> (<label> of <value> <unit>)"`, a missing one becomes a
/// per-metric "not available" paragraph, and a sentinel becomes a
/// maintenance paragraph. Only transport-level failure replaces the
/// whole report, via `render_error_report`.

use crate::advisory::{
    celsius_to_fahrenheit, classify_discharge, classify_gage_height, classify_water_temp,
};
use crate::ingest::usgs::{self, DvDocument};
use crate::model::{Extraction, ParameterKind, Reading};
use chrono::NaiveDateTime;

/// Renders the full conditions fragment for a parsed DV document.
///
/// Always returns displayable markup — per-metric problems degrade to
/// fallback paragraphs, never to an error.
pub fn render_report(doc: &DvDocument) -> String {
    let site_name = usgs::extract_site_name(doc);

    let mut out = String::new();
    out.push_str(&format!(
        "<h1 class=\"cover-heading\">{}</h1>\n<br />\n",
        site_name
    ));

    for kind in ParameterKind::ALL {
        out.push_str(&render_metric(usgs::extract_reading(doc, kind), kind));
        out.push('\n');
    }

    if let Some(raw) = usgs::newest_observation(doc) {
        out.push_str(&format!(
            "<p class=\"small\">Latest observation: {}</p>\n",
            format_observation_date(&raw)
        ));
    }

    out
}

/// The single generic body used when the fetch or envelope parse fails.
/// Replaces the entire report rather than rendering per-metric fallbacks.
pub fn render_error_report() -> String {
    "<p class=\"lead\">Couldn't load river conditions right now. Try again in a little while.</p>\n"
        .to_string()
}

/// Newest observation timestamp as a chrono value, for staleness checks.
/// `None` when the document has no observations or the timestamp doesn't
/// parse (DV timestamps have no offset, e.g. "2024-05-01T00:00:00.000").
pub fn latest_observation(doc: &DvDocument) -> Option<NaiveDateTime> {
    let raw = usgs::newest_observation(doc)?;
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

fn render_metric(extraction: Extraction, kind: ParameterKind) -> String {
    match extraction {
        Extraction::Reading(reading) => render_reading(&reading, kind),
        Extraction::Missing => format!(
            "<p class=\"lead\">{} data is not available for this site.</p>",
            kind.label()
        ),
        Extraction::Maintenance => format!(
            "<p class=\"lead\">The {} gage appears to be undergoing maintenance. Check back later.</p>",
            kind.label().to_lowercase()
        ),
    }
}

fn render_reading(reading: &Reading, kind: ParameterKind) -> String {
    let (message, display_value) = match kind {
        ParameterKind::Discharge => (classify_discharge(reading.value), format_value(reading.value)),
        ParameterKind::GageHeight => (
            classify_gage_height(reading.value),
            format_value(reading.value),
        ),
        ParameterKind::WaterTemperature => {
            // The wire value is Celsius; the rounded Fahrenheit value
            // feeds both classification and display.
            let fahrenheit = celsius_to_fahrenheit(reading.value);
            (classify_water_temp(fahrenheit), format!("{:.1}", fahrenheit))
        }
    };

    format!(
        "<p class=\"lead\">{} ({} of {} {})</p>",
        message,
        kind.label(),
        display_value,
        kind.unit_html()
    )
}

/// Whole numbers display without a trailing ".0"; everything else uses
/// the shortest f64 representation ("500", "3", "18.42").
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// "2024-05-01T00:00:00.000" → "May 1, 2024"; unparseable timestamps
/// pass through unchanged.
fn format_observation_date(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
