use astro_math::{
    decimal_to_dms, distance_in_cycle, number_in_cycle, opposite_value, parts_to_units,
    simplify_number, Dms, MathResult, RoundMode, DEFAULT_CYCLE_LENGTH, DEGREES_PER_SIGN,
    FULL_CIRCLE,
};

fn main() -> MathResult<()> {
    let longitude = Dms::new(212).with_minutes(47).with_seconds(15.0);
    let decimal = longitude.to_decimal();
    let sign = parts_to_units(decimal, DEGREES_PER_SIGN, RoundMode::Ceil);
    let in_sign = decimal_to_dms(sign.parts);

    println!("=== Sexagesimal Conversion Example ===");
    println!(
        "Longitude: {}°{}'{}\" = {:.5}°",
        longitude.degrees, longitude.minutes, longitude.seconds, decimal
    );
    println!("Sign: {} at {}°{:02}'", sign.units, in_sign.d, in_sign.m);
    println!("Opposite point: {:.5}°", opposite_value(decimal, FULL_CIRCLE));
    println!();

    let seventh = number_in_cycle(sign.units as u32, 6, DEFAULT_CYCLE_LENGTH)?;
    println!("--- Cycle ---");
    println!("Seventh from sign {}: {}", sign.units, seventh);
    println!(
        "Distance {} -> {}: {}",
        sign.units,
        seventh,
        distance_in_cycle(sign.units as u32, seventh, DEFAULT_CYCLE_LENGTH)?
    );
    println!();

    println!("--- Simplification ---");
    println!("simplify(19870415) = {}", simplify_number(19_870_415));

    Ok(())
}
