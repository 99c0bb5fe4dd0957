use crate::PseudoRandomNumberGenerator;

/// Returns whether a random event with probability `numerator / denominator` occurs.
pub fn chance(
    prng: &mut dyn PseudoRandomNumberGenerator,
    numerator: u64,
    denominator: u64,
) -> bool {
    prng.next().rem_euclid(denominator) < numerator
}

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random integer in the range `[1, 100]`.
pub fn roll_percent(prng: &mut dyn PseudoRandomNumberGenerator) -> u64 {
    range(prng, 1, 101)
}

/// Returns a random floating point number in the range `[min, max]`.
pub fn uniform(prng: &mut dyn PseudoRandomNumberGenerator, min: f64, max: f64) -> f64 {
    let unit = prng.next().min(u32::MAX as u64) as f64 / u32::MAX as f64;
    min + (max - min) * unit
}
