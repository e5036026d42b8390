//! Summary statistics over accuracy histories

/// Sample standard deviation with the n − 1 denominator
///
/// Accumulates in f64 so that near-constant percentage sequences (the
/// interesting case for plateau detection) do not lose their spread to
/// f32 rounding. Sequences shorter than two values have no spread.
pub fn sample_std(values: &[f32]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| f64::from(v)).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| (f64::from(v) - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    variance.sqrt()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Spread is never negative and always finite for finite input
        #[test]
        fn sample_std_is_non_negative(values in prop::collection::vec(-1000.0f32..1000.0, 0..100)) {
            let std = sample_std(&values);
            prop_assert!(std >= 0.0);
            prop_assert!(std.is_finite());
        }

        /// Shifting every value leaves the spread unchanged
        #[test]
        fn sample_std_is_shift_invariant(
            values in prop::collection::vec(-100.0f32..100.0, 2..60),
            shift in -100.0f32..100.0,
        ) {
            let shifted: Vec<f32> = values.iter().map(|&v| v + shift).collect();
            let diff = (sample_std(&values) - sample_std(&shifted)).abs();
            prop_assert!(diff < 1e-3, "spread moved by {diff} under shift");
        }
    }
}
