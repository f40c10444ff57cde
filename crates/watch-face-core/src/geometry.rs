use crate::constants::{
    ORIGIN_ROW3, ORIGIN_ROW4, SCALE_BIAS, TRANSLATE_ROW3_OUTER, TRANSLATE_ROW4_INNER,
    TRANSLATE_ROW4_OUTER,
};
use crate::params::FaceError;
use std::fmt;
use std::str::FromStr;

/// Clamp `value` into `[min, max]`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Bubble scale for a row's intersection ratio.
///
/// Biased below the raw ratio so bubbles shrink faster than linear on exit
/// and stay at zero for the first fifth of visibility.
#[inline]
pub fn scale_for_ratio(ratio: f64) -> f64 {
    clamp(ratio - SCALE_BIAS * (1.0 - ratio), 0.0, 1.0)
}

/// Horizontal pull towards the row centre for translate mode.
///
/// Returns `None` for the middle bubble of a 3-row, which never moves.
/// Every branch reaches `0%` at ratio 1.
pub fn translate_x(ratio: f64, row_len: usize, index: usize) -> Option<String> {
    let offset = if row_len == 3 {
        match index {
            0 => pull(TRANSLATE_ROW3_OUTER, ratio),
            2 => -pull(TRANSLATE_ROW3_OUTER, ratio),
            _ => return None,
        }
    } else {
        match index {
            0 => pull(TRANSLATE_ROW4_OUTER, ratio),
            1 => pull(TRANSLATE_ROW4_INNER, ratio),
            2 => -pull(TRANSLATE_ROW4_INNER, ratio),
            _ => -pull(TRANSLATE_ROW4_OUTER, ratio),
        }
    };
    // `+ 0.0` folds -0 into 0 so a settled bubble renders as `0%`
    Some(format!("translateX({}%)", offset + 0.0))
}

#[inline]
fn pull(max: f64, ratio: f64) -> f64 {
    max - ratio * max
}

/// Scale pivot for origin-shift mode, as `"<x>% <y>%"`.
///
/// The horizontal part is fixed per slot; the vertical part anchors to the
/// bottom while the row moves up. Unknown slots return `None`.
pub fn transform_origin(row_len: usize, index: usize, moving_up: bool) -> Option<String> {
    let x = match row_len {
        3 => ORIGIN_ROW3.get(index)?,
        4 => ORIGIN_ROW4.get(index)?,
        _ => return None,
    };
    let y = if moving_up { 100 } else { 0 };
    Some(format!("{x}% {y}%"))
}

/// How bubbles are pulled towards the centre of their row while scaling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Positioning {
    /// Move the scale pivot per slot; bubbles only scale.
    #[default]
    OriginShift,
    /// Scale around a centred pivot and translate horizontally.
    Translate,
}

/// Inline style values for one bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BubbleTransform {
    pub transform: String,
    pub origin: Option<String>,
}

impl Positioning {
    pub fn bubble_transform(
        self,
        ratio: f64,
        scale: f64,
        row_len: usize,
        index: usize,
        moving_up: bool,
    ) -> BubbleTransform {
        let scale = format!("scale({scale})");
        match self {
            Positioning::OriginShift => BubbleTransform {
                transform: scale,
                origin: transform_origin(row_len, index, moving_up),
            },
            Positioning::Translate => {
                let transform = match translate_x(ratio, row_len, index) {
                    Some(tx) => format!("{scale} {tx}"),
                    None => scale,
                };
                let origin = if moving_up { "bottom center" } else { "top center" };
                BubbleTransform {
                    transform,
                    origin: Some(origin.to_string()),
                }
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Positioning::OriginShift => "origin-shift",
            Positioning::Translate => "translate",
        }
    }
}

impl fmt::Display for Positioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Positioning {
    type Err = FaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "origin-shift" | "origin" => Ok(Positioning::OriginShift),
            "translate" => Ok(Positioning::Translate),
            other => Err(FaceError::UnknownPositioning(other.to_string())),
        }
    }
}
