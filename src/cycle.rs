use tracing::debug;

use crate::error::{MathError, MathResult};

pub const DEFAULT_CYCLE_LENGTH: u32 = 12;

/// Inclusive forward distance from `from` to `to`, in `[1, cycle_length]`.
///
/// Both endpoints are counted, so a number is at distance 1 from itself and
/// the sign after is at distance 2.
pub fn distance_in_cycle(from: u32, to: u32, cycle_length: u32) -> MathResult<u32> {
    let n = check_cycle_length(cycle_length)?;
    let delta = i64::from(to) - i64::from(from);
    Ok((delta.rem_euclid(n) + 1) as u32)
}

pub fn number_in_cycle(start: u32, offset: i64, cycle_length: u32) -> MathResult<u32> {
    let n = check_cycle_length(cycle_length)?;
    if !(1..=cycle_length).contains(&start) {
        debug!(start, cycle_length, "rejected number outside cycle");
        return Err(MathError::NumberOutOfCycle {
            number: start,
            cycle_length,
        });
    }
    // raw start + offset can overflow i64
    let index = (i64::from(start) - 1 + offset.rem_euclid(n)).rem_euclid(n);
    Ok(index as u32 + 1)
}

pub fn number_next(start: u32, cycle_length: u32) -> MathResult<u32> {
    number_in_cycle(start, 1, cycle_length)
}

pub fn number_prev(start: u32, cycle_length: u32) -> MathResult<u32> {
    number_in_cycle(start, -1, cycle_length)
}

fn check_cycle_length(cycle_length: u32) -> MathResult<i64> {
    if cycle_length == 0 {
        debug!("rejected empty cycle");
        return Err(MathError::EmptyCycle);
    }
    Ok(i64::from(cycle_length))
}
