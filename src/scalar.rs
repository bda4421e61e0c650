// NaN counts as zero
pub fn sign(value: f64) -> i32 {
    if value < 0.0 {
        -1
    } else if value > 0.0 {
        1
    } else {
        0
    }
}

/// Sums decimal digits repeatedly until one digit remains.
///
/// Positive numbers reduce to `1..=9`; zero stays zero.
pub fn simplify_number(number: u64) -> u64 {
    let mut n = number;
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}
