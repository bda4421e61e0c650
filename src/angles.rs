use tracing::trace;

use crate::types::{DegreesMinutes, Dms, RoundMode, UnitsParts};

pub const MINUTES_PER_DEGREE: f64 = 60.0;
pub const SECONDS_PER_DEGREE: f64 = 3600.0;
pub const DEGREES_PER_SIGN: f64 = 30.0;
pub const FULL_CIRCLE: f64 = 360.0;

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(FULL_CIRCLE)
}

/// Converts a DMS angle to decimal degrees.
///
/// The result is negative when any field is negative; the magnitude is the
/// sum of the field magnitudes, so `{26, -80}` is `-27.333…`, not `24.666…`.
pub fn dms_to_decimal(angle: &Dms) -> f64 {
    let magnitude = (angle.degrees as f64).abs()
        + (angle.minutes as f64).abs() / MINUTES_PER_DEGREE
        + angle.seconds.abs() / SECONDS_PER_DEGREE;
    if angle.is_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// Converts decimal degrees to whole degrees and the nearest whole minute.
///
/// Minutes round half away from zero; 60 rolls over into the next degree.
/// When the degrees truncate to zero the sign moves to the minutes. Degrees
/// beyond the `i32` range saturate.
pub fn decimal_to_dms(decimal: f64) -> DegreesMinutes {
    let mut degrees = decimal.trunc();
    let mut minutes = ((decimal - degrees).abs() * MINUTES_PER_DEGREE).round();

    if minutes >= MINUTES_PER_DEGREE {
        minutes = 0.0;
        degrees += decimal.signum();
        trace!(decimal, degrees, "minute rounding rolled over into the next degree");
    }

    // float to int casts saturate
    let d = degrees as i32;
    let m = minutes as i32;
    let m = if d == 0 && decimal < 0.0 { -m } else { m };
    DegreesMinutes { d, m }
}

impl Dms {
    pub fn to_decimal(&self) -> f64 {
        dms_to_decimal(self)
    }

    /// Keeps fractional seconds. The sign sits on the most significant
    /// nonzero field.
    pub fn from_decimal(decimal: f64) -> Self {
        let magnitude = decimal.abs();
        let degrees = magnitude.trunc();
        let total_minutes = (magnitude - degrees) * MINUTES_PER_DEGREE;
        let minutes = total_minutes.floor();
        let seconds = (total_minutes - minutes) * MINUTES_PER_DEGREE;

        let (mut d, mut m, mut s) = (degrees as i32, minutes as i32, seconds);
        if decimal < 0.0 {
            if d != 0 {
                d = -d;
            } else if m != 0 {
                m = -m;
            } else {
                s = -s;
            }
        }
        Dms::from_parts(d, m, s)
    }
}

/// Splits `value` into whole units of `unit_size` and the remainder.
///
/// `parts` is always measured from the floor boundary and lies in
/// `[0, unit_size)`; `mode` only picks how `units` is numbered.
pub fn parts_to_units(value: f64, unit_size: f64, mode: RoundMode) -> UnitsParts {
    let ratio = value / unit_size;
    let units = match mode {
        RoundMode::Ceil => ratio.ceil(),
        RoundMode::Floor => ratio.floor(),
    };
    UnitsParts {
        units: units as i64,
        parts: value.rem_euclid(unit_size),
    }
}

pub fn opposite_value(value: f64, cycle_length: f64) -> f64 {
    (value + cycle_length / 2.0).rem_euclid(cycle_length)
}
