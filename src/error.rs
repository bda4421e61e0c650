use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MathError {
    #[error("number {number} is outside the cycle 1..={cycle_length}")]
    NumberOutOfCycle { number: u32, cycle_length: u32 },

    #[error("cycle length must be at least 1")]
    EmptyCycle,
}

pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::NumberOutOfCycle {
            number: 13,
            cycle_length: 12,
        };
        assert_eq!(err.to_string(), "number 13 is outside the cycle 1..=12");
        assert_eq!(
            MathError::EmptyCycle.to_string(),
            "cycle length must be at least 1"
        );
    }
}
