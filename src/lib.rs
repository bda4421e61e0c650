pub mod angles;
pub mod collections;
pub mod cycle;
pub mod error;
pub mod scalar;
pub mod types;

pub use angles::{
    decimal_to_dms, dms_to_decimal, normalize_angle, opposite_value, parts_to_units,
    DEGREES_PER_SIGN, FULL_CIRCLE, MINUTES_PER_DEGREE, SECONDS_PER_DEGREE,
};

pub use collections::{array_in_array, array_sum, in_range};

pub use cycle::{
    distance_in_cycle, number_in_cycle, number_next, number_prev, DEFAULT_CYCLE_LENGTH,
};

pub use error::{MathError, MathResult};

pub use scalar::{sign, simplify_number};

pub use types::{DegreesMinutes, Dms, KeyedSums, RoundMode, UnitsParts};
