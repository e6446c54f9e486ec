/// Test fixtures: representative JSON payloads from the USGS DV API.
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise the extractor. They reflect the real WaterML-as-JSON
/// envelope returned by:
///   https://waterservices.usgs.gov/nwis/dv/?format=json&...
///
/// DV response shape:
///   response.value.timeSeries[]
///     .sourceInfo.siteName
///     .variable.variableCode[0].value — parameter code (string)
///     .variable.noDataValue           — sentinel for missing data (-999999)
///     .values[0].value[]
///       .value     — the measurement as a STRING (not a number)
///       .dateTime  — ISO 8601, newest first for DV
///
/// Note: measurement values are always JSON strings in the USGS response,
/// even though they represent numbers. Extraction must handle this.

/// Harpeth River at Bellevue (03433500) with discharge, gage height, and
/// water temperature all present. Discharge 500 cfs / gage 3.00 ft /
/// temperature 21.1 °C is a pleasant spring paddling day.
pub(crate) fn fixture_harpeth_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "HARPETH RIVER AT BELLEVUE, TN",
              "siteCode": [{ "value": "03433500", "network": "NWIS", "agencyCode": "USGS" }]
            },
            "variable": {
              "variableCode": [{ "value": "00060", "network": "NWIS" }],
              "variableName": "Streamflow, ft&#179;/s",
              "unit": { "unitCode": "ft3/s" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "500", "qualifiers": ["P"], "dateTime": "2024-05-01T00:00:00.000" }
              ]
            }]
          },
          {
            "sourceInfo": {
              "siteName": "HARPETH RIVER AT BELLEVUE, TN",
              "siteCode": [{ "value": "03433500", "network": "NWIS", "agencyCode": "USGS" }]
            },
            "variable": {
              "variableCode": [{ "value": "00065", "network": "NWIS" }],
              "variableName": "Gage height, ft",
              "unit": { "unitCode": "ft" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "3.00", "qualifiers": ["P"], "dateTime": "2024-05-01T00:00:00.000" }
              ]
            }]
          },
          {
            "sourceInfo": {
              "siteName": "HARPETH RIVER AT BELLEVUE, TN",
              "siteCode": [{ "value": "03433500", "network": "NWIS", "agencyCode": "USGS" }]
            },
            "variable": {
              "variableCode": [{ "value": "00010", "network": "NWIS" }],
              "variableName": "Temperature, water, &#176;C",
              "unit": { "unitCode": "deg C" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "21.1", "qualifiers": ["P"], "dateTime": "2024-05-01T00:00:00.000" }
              ]
            }]
          }
        ]
      }
    }"#
}

/// Discharge series with two daily values, newest first. Extraction must
/// take the first entry (512), not the older second one.
pub(crate) fn fixture_two_observations_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "HARPETH RIVER AT BELLEVUE, TN",
              "siteCode": [{ "value": "03433500", "network": "NWIS" }]
            },
            "variable": {
              "variableCode": [{ "value": "00060", "network": "NWIS" }],
              "unit": { "unitCode": "ft3/s" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "512.0", "qualifiers": ["P"], "dateTime": "2024-05-02T00:00:00.000" },
                { "value": "498", "qualifiers": ["A"], "dateTime": "2024-05-01T00:00:00.000" }
              ]
            }]
          }
        ]
      }
    }"#
}

/// Structurally valid envelope but the `values` array is absent from the
/// timeSeries entry — defensive against unexpected API changes.
pub(crate) fn fixture_missing_values_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "HARPETH RIVER AT BELLEVUE, TN",
              "siteCode": [{ "value": "03433500", "network": "NWIS" }]
            },
            "variable": {
              "variableCode": [{ "value": "00060", "network": "NWIS" }],
              "unit": { "unitCode": "ft3/s" },
              "noDataValue": -999999.0
            }
          }
        ]
      }
    }"#
}

/// Gage height series present but with an empty inner `value` array, as
/// returned for sites with no observations in the requested window.
pub(crate) fn fixture_empty_value_array_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "HARPETH RIVER AT BELLEVUE, TN",
              "siteCode": [{ "value": "03433500", "network": "NWIS" }]
            },
            "variable": {
              "variableCode": [{ "value": "00065", "network": "NWIS" }],
              "unit": { "unitCode": "ft" },
              "noDataValue": -999999.0
            },
            "values": [{ "value": [] }]
          }
        ]
      }
    }"#
}

/// Temperature series whose value is the literal string "Ice" — USGS does
/// this for frozen gages on some sites.
pub(crate) fn fixture_non_numeric_value_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "HARPETH RIVER AT BELLEVUE, TN",
              "siteCode": [{ "value": "03433500", "network": "NWIS" }]
            },
            "variable": {
              "variableCode": [{ "value": "00010", "network": "NWIS" }],
              "unit": { "unitCode": "deg C" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "Ice", "qualifiers": ["P"], "dateTime": "2024-01-15T00:00:00.000" }
              ]
            }]
          }
        ]
      }
    }"#
}

/// Discharge value of "NaN" — parses as a float but must not classify.
pub(crate) fn fixture_nan_value_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "HARPETH RIVER AT BELLEVUE, TN",
              "siteCode": [{ "value": "03433500", "network": "NWIS" }]
            },
            "variable": {
              "variableCode": [{ "value": "00060", "network": "NWIS" }],
              "unit": { "unitCode": "ft3/s" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "NaN", "qualifiers": ["P"], "dateTime": "2024-05-01T00:00:00.000" }
              ]
            }]
          }
        ]
      }
    }"#
}

/// Valid discharge alongside a temperature series reporting the USGS
/// sentinel `-999999` — a timestamp is present but the gage is offline.
pub(crate) fn fixture_sentinel_temperature_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "HARPETH RIVER AT BELLEVUE, TN",
              "siteCode": [{ "value": "03433500", "network": "NWIS" }]
            },
            "variable": {
              "variableCode": [{ "value": "00060", "network": "NWIS" }],
              "unit": { "unitCode": "ft3/s" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "500", "qualifiers": ["P"], "dateTime": "2024-05-01T00:00:00.000" }
              ]
            }]
          },
          {
            "sourceInfo": {
              "siteName": "HARPETH RIVER AT BELLEVUE, TN",
              "siteCode": [{ "value": "03433500", "network": "NWIS" }]
            },
            "variable": {
              "variableCode": [{ "value": "00010", "network": "NWIS" }],
              "unit": { "unitCode": "deg C" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "-999999", "qualifiers": ["P"], "dateTime": "2024-05-01T00:00:00.000" }
              ]
            }]
          }
        ]
      }
    }"#
}

/// Discharge series whose sourceInfo carries no siteName at all.
pub(crate) fn fixture_no_site_name_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteCode": [{ "value": "03433500", "network": "NWIS" }]
            },
            "variable": {
              "variableCode": [{ "value": "00060", "network": "NWIS" }],
              "unit": { "unitCode": "ft3/s" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "500", "qualifiers": ["P"], "dateTime": "2024-05-01T00:00:00.000" }
              ]
            }]
          }
        ]
      }
    }"#
}
