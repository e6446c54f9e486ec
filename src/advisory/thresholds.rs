/// Advisory threshold tables.
///
/// Each metric maps a continuous reading to a discrete advisory message
/// through a single ordered table of `(upper_bound, message)` pairs.
/// Earlier revisions of this logic used chains of unguarded range
/// conditionals with mixed `<`/`<=` comparisons, which silently dropped
/// values that landed exactly on a boundary. The table form makes the
/// boundary policy a property of one lookup function instead of every
/// branch: upper bounds are INCLUSIVE, so a value exactly equal to a
/// bound belongs to the lower bucket, and the final message covers
/// everything above the last bound.

use crate::model::ParameterKind;

/// An ordered advisory table covering (-inf, +inf) with no gaps.
///
/// `buckets` holds ascending inclusive upper bounds; `overflow` is the
/// message for values above the last bound.
pub struct AdvisoryTable {
    kind: ParameterKind,
    buckets: &'static [(f64, &'static str)],
    overflow: &'static str,
}

impl AdvisoryTable {
    /// Returns the advisory message for `value`.
    ///
    /// Boundary policy: ranges are `(prev, curr]` — `lookup(50.0)` on the
    /// discharge table returns the same bucket as `lookup(49.9)`.
    pub fn lookup(&self, value: f64) -> &'static str {
        debug_assert!(self.is_monotonic(), "{:?} table out of order", self.kind);
        for (upper_bound, message) in self.buckets {
            if value <= *upper_bound {
                return message;
            }
        }
        self.overflow
    }

    /// Bounds must be strictly ascending or lookup order is meaningless.
    fn is_monotonic(&self) -> bool {
        self.buckets
            .windows(2)
            .all(|pair| pair[0].0 < pair[1].0)
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Discharge advisories, in ft³/s. Calibrated for a small paddling river.
static DISCHARGE_TABLE: AdvisoryTable = AdvisoryTable {
    kind: ParameterKind::Discharge,
    buckets: &[
        (50.0, "The river is running super duper slow."),
        (150.0, "The river is running pretty slow today."),
        (300.0, "The river is running a little slow today."),
        (800.0, "The river is running great today."),
        (1100.0, "The river is running fast today."),
        (2000.0, "The river is running very fast today."),
        (4000.0, "The river is running extremely fast today. Be careful."),
    ],
    overflow: "The river is probably running too fast to kayak today.",
};

/// Gage height advisories, in ft.
static GAGE_HEIGHT_TABLE: AdvisoryTable = AdvisoryTable {
    kind: ParameterKind::GageHeight,
    buckets: &[
        (0.5, "It's bone dry and not possible to kayak."),
        (1.5, "You'll probably have to portage a lot."),
        (1.9, "You'll probably have to portage some."),
        (2.3, "The water level is quite a bit lower than average."),
        (2.8, "The water level is a little lower than average."),
        (3.5, "The water level is right around the average."),
        (4.0, "The water level is great, you should be fine."),
        (4.5, "The water level is a little high. Be careful."),
        (5.0, "Water is very high. Might be risky."),
        (6.0, "Probably not a good idea to kayak today."),
    ],
    overflow: "The water is too damn high!",
};

/// Water temperature advisories, in °F (post-conversion).
static WATER_TEMP_TABLE: AdvisoryTable = AdvisoryTable {
    kind: ParameterKind::WaterTemperature,
    buckets: &[
        (32.0, "The water is actually ice."),
        (45.0, "The water is dangerously cold. Stay out."),
        (50.0, "The water is frigid. Full wetsuit territory."),
        (55.0, "The water is very cold. Wetsuit recommended."),
        (60.0, "The water is pretty cold."),
        (65.0, "The water is brisk but manageable."),
        (70.0, "The water is pretty nice, just a touch chilly."),
        (75.0, "The water is really nice."),
        (80.0, "The water is nice and warm."),
        (85.0, "The water is super warm."),
    ],
    overflow: "The water is almost like a hot tub.",
};

// ---------------------------------------------------------------------------
// Classify functions
// ---------------------------------------------------------------------------

/// Advisory for a discharge reading in ft³/s.
pub fn classify_discharge(cfs: f64) -> &'static str {
    DISCHARGE_TABLE.lookup(cfs)
}

/// Advisory for a gage height reading in ft.
pub fn classify_gage_height(ft: f64) -> &'static str {
    GAGE_HEIGHT_TABLE.lookup(ft)
}

/// Advisory for a water temperature reading in °F.
///
/// Callers convert from the wire's Celsius with [`celsius_to_fahrenheit`]
/// first; the rounded Fahrenheit value feeds both this lookup and display.
pub fn classify_water_temp(fahrenheit: f64) -> &'static str {
    WATER_TEMP_TABLE.lookup(fahrenheit)
}

/// Converts °C to °F and rounds half-up to one decimal place.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    let fahrenheit = celsius * 9.0 / 5.0 + 32.0;
    (fahrenheit * 10.0 + 0.5).floor() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
