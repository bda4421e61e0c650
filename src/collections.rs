use crate::types::KeyedSums;

/// Merges two collections: unkeyed values are concatenated, keyed values
/// are summed on matching keys.
///
/// Keys keep the order of `a`, followed by keys that only `b` has.
pub fn array_sum(a: &KeyedSums, b: &KeyedSums) -> KeyedSums {
    let mut sum = a.clone();
    sum.sequential.extend_from_slice(&b.sequential);
    for (key, value) in b.keyed() {
        sum.add(key, *value);
    }
    sum
}

pub fn array_in_array<T: PartialEq>(needles: &[T], haystack: &[T], require_all: bool) -> bool {
    if require_all {
        needles.iter().all(|n| haystack.contains(n))
    } else {
        needles.iter().any(|n| haystack.contains(n))
    }
}

pub fn in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    min <= value && value <= max
}
