use crate::constants::{HUE_MAX, LIGHTNESS_RANGE, SATURATION_RANGE};
use rand::prelude::*;
use std::fmt;

/// Background colour assigned to a bubble once, at creation.
///
/// `hue` is in degrees `[0, 360)`; `saturation` and `lightness` are whole
/// percentages. `Display` renders a CSS `hsl()` value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: i64,
    pub lightness: i64,
}

impl Hsl {
    /// Draw a pastel colour: any hue, saturation and lightness in `[60, 70]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            hue: rng.gen_range(0.0..HUE_MAX),
            saturation: random_interval(rng, SATURATION_RANGE.0, SATURATION_RANGE.1),
            lightness: random_interval(rng, LIGHTNESS_RANGE.0, LIGHTNESS_RANGE.1),
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Uniform integer in `[min, max]`, both ends included.
#[inline]
pub fn random_interval<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Random bubble colour from the thread-local generator.
pub fn random_color() -> Hsl {
    Hsl::random(&mut thread_rng())
}
