// Shared tuning constants for the watch face.

// Grid
pub const DEFAULT_BUBBLE_COUNT: usize = 52;
pub const MAX_BUBBLE_COUNT: usize = 1000;
pub const ROW_SIZES: [usize; 2] = [3, 4]; // alternating, starting with the first

// Face sizing
pub const DEFAULT_GUTTER: f64 = 20.0; // margin on each side of the face
pub const FACE_ASPECT_WIDTH: f64 = 41.0;
pub const FACE_ASPECT_HEIGHT: f64 = 45.0;

// Observation
pub const DEFAULT_THRESHOLD_STEPS: usize = 100; // 0.00, 0.01, .., 1.00

// Scale mapping: scale = ratio - SCALE_BIAS * (1 - ratio)
pub const SCALE_BIAS: f64 = 0.25;

// Bubble colours (HSL)
pub const HUE_MAX: f64 = 360.0; // exclusive
pub const SATURATION_RANGE: (i64, i64) = (60, 70);
pub const LIGHTNESS_RANGE: (i64, i64) = (60, 70);

// Translate mode: maximum horizontal pull per bubble, in percent
pub const TRANSLATE_ROW3_OUTER: f64 = 30.0;
pub const TRANSLATE_ROW4_OUTER: f64 = 35.0;
pub const TRANSLATE_ROW4_INNER: f64 = 25.0;

// Origin-shift mode: horizontal pivot per bubble, in percent
pub const ORIGIN_ROW3: [u8; 3] = [65, 50, 35];
pub const ORIGIN_ROW4: [u8; 4] = [65, 55, 45, 35];
