#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An angle in degree-minute-second notation.
///
/// Fields are not normalized: minutes and seconds may exceed 60 or be
/// negative. The angle is negative when any field is negative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dms {
    pub degrees: i32,
    pub minutes: i32,
    pub seconds: f64,
}

impl Dms {
    pub fn new(degrees: i32) -> Self {
        Self {
            degrees,
            minutes: 0,
            seconds: 0.0,
        }
    }

    pub fn from_parts(degrees: i32, minutes: i32, seconds: f64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    pub fn with_minutes(self, minutes: i32) -> Self {
        Self { minutes, ..self }
    }

    pub fn with_seconds(self, seconds: f64) -> Self {
        Self { seconds, ..self }
    }

    pub fn is_negative(&self) -> bool {
        self.degrees < 0 || self.minutes < 0 || self.seconds < 0.0
    }
}

impl Default for Dms {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Whole degrees and minutes, as produced by
/// [`decimal_to_dms`](crate::angles::decimal_to_dms).
///
/// The sign lives on `d`, or on `m` when `d` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DegreesMinutes {
    pub d: i32,
    pub m: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundMode {
    #[default]
    Ceil,
    Floor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitsParts {
    pub units: i64,
    pub parts: f64,
}

/// A numeric collection split into unkeyed sequential values and
/// insertion-ordered keyed values with unique keys.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawKeyedSums"))]
pub struct KeyedSums {
    pub sequential: Vec<f64>,
    keyed: Vec<(String, f64)>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawKeyedSums {
    sequential: Vec<f64>,
    keyed: Vec<(String, f64)>,
}

#[cfg(feature = "serde")]
impl From<RawKeyedSums> for KeyedSums {
    fn from(raw: RawKeyedSums) -> Self {
        let mut sums = KeyedSums {
            sequential: raw.sequential,
            keyed: Vec::with_capacity(raw.keyed.len()),
        };
        for (key, value) in raw.keyed {
            sums.insert(key, value);
        }
        sums
    }
}

impl KeyedSums {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.push(value);
        self
    }

    pub fn with_keyed(mut self, key: impl Into<String>, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    pub fn push(&mut self, value: f64) {
        self.sequential.push(value);
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        let key = key.into();
        match self.keyed.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.keyed.push((key, value)),
        }
    }

    pub fn add(&mut self, key: &str, value: f64) {
        match self.keyed.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 += value,
            None => self.keyed.push((key.to_owned(), value)),
        }
    }

    pub fn keyed(&self) -> &[(String, f64)] {
        &self.keyed
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keyed.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.keyed.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.sequential.len() + self.keyed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequential.is_empty() && self.keyed.is_empty()
    }
}
