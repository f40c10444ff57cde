use crate::constants::{
    DEFAULT_BUBBLE_COUNT, DEFAULT_GUTTER, DEFAULT_THRESHOLD_STEPS, MAX_BUBBLE_COUNT,
};
use crate::geometry::Positioning;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FaceError {
    #[error("unknown positioning mode `{0}` (expected `origin-shift` or `translate`)")]
    UnknownPositioning(String),
    #[error("invalid bubble count `{0}`")]
    InvalidBubbleCount(String),
    #[error("invalid gutter `{0}`")]
    InvalidGutter(String),
    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),
}

/// Face parameters, fixed once the grid is built.
///
/// - `bubble_count`: total bubbles spread over the rows
/// - `gutter`: margin kept free on every side of the face, in CSS pixels
/// - `positioning`: how bubbles are pulled towards the row centre
/// - `threshold_steps`: observation granularity; `steps + 1` thresholds
#[derive(Clone, Debug, PartialEq)]
pub struct FaceParams {
    pub bubble_count: usize,
    pub gutter: f64,
    pub positioning: Positioning,
    pub threshold_steps: usize,
}

impl Default for FaceParams {
    fn default() -> Self {
        Self {
            bubble_count: DEFAULT_BUBBLE_COUNT,
            gutter: DEFAULT_GUTTER,
            positioning: Positioning::default(),
            threshold_steps: DEFAULT_THRESHOLD_STEPS,
        }
    }
}

/// Keys accepted by [`FaceParams::apply_override`].
pub const OVERRIDE_KEYS: [&str; 3] = ["positioning", "bubble-count", "gutter"];

impl FaceParams {
    /// Apply one textual override. On error the parameters are left untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), FaceError> {
        match key {
            "positioning" => self.positioning = value.parse()?,
            "bubble-count" => {
                self.bubble_count = match value.trim().parse::<usize>() {
                    Ok(n) if (1..=MAX_BUBBLE_COUNT).contains(&n) => n,
                    _ => return Err(FaceError::InvalidBubbleCount(value.to_string())),
                }
            }
            "gutter" => {
                self.gutter = match value.trim().parse::<f64>() {
                    Ok(g) if g.is_finite() && g >= 0.0 => g,
                    _ => return Err(FaceError::InvalidGutter(value.to_string())),
                }
            }
            other => return Err(FaceError::UnknownParameter(other.to_string())),
        }
        Ok(())
    }
}
