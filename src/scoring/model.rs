//! Linear scoring over a sampled RGB triple.

use crate::core::{Bounds, ChannelMap, Coefficients, RandomSource, Rgb};

/// Weighted sum `Σ coefficient[c] * rgb[c]`.
///
/// ```
/// use rgba_puzzle::core::ChannelMap;
/// use rgba_puzzle::scoring::evaluate;
///
/// let value = evaluate(&ChannelMap::new(12.0, 15.0, 8.0), &ChannelMap::splat(0.33));
/// assert!((value - 11.55).abs() < 1e-9);
/// ```
#[must_use]
pub fn evaluate(rgb: &Rgb, coefficients: &Coefficients) -> f64 {
    rgb.iter().map(|(channel, value)| coefficients[channel] * value).sum()
}

/// Draw each channel uniformly from its bound, rounded to one decimal.
pub fn sample_rgb<R>(bounds: &Bounds, rng: &mut R) -> Rgb
where
    R: RandomSource + ?Sized,
{
    ChannelMap::from_fn(|channel| {
        let bound = bounds[channel];
        let value = round_tenth(rng.uniform(bound.min, bound.max));
        // Rounding can step just past a bound that is not on the 0.1 grid
        value.clamp(bound.min, bound.max)
    })
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
