//! Static structure of the face: how bubbles are grouped into rows, how the
//! face fits the viewport, and which visibility thresholds are observed.

use crate::constants::{FACE_ASPECT_HEIGHT, FACE_ASPECT_WIDTH, ROW_SIZES};

/// One row of the grid.
///
/// `nominal` is the size the alternation asked for (used for the `row--N`
/// class marker); `len` is how many bubbles the row actually holds, which is
/// smaller only for a short final row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowSpec {
    pub index: usize,
    pub nominal: usize,
    pub len: usize,
}

/// Split `total` bubbles into rows of alternately 3 and 4, starting with 3.
/// The final row takes whatever is left.
pub fn partition_rows(total: usize) -> Vec<RowSpec> {
    let mut rows = Vec::new();
    let mut remaining = total;
    let mut sizes = ROW_SIZES.iter().copied().cycle();
    while remaining > 0 {
        let nominal = sizes.next().unwrap_or(ROW_SIZES[0]);
        let len = nominal.min(remaining);
        rows.push(RowSpec {
            index: rows.len(),
            nominal,
            len,
        });
        remaining -= len;
    }
    log::debug!("[layout] {} bubbles -> {} rows", total, rows.len());
    rows
}

/// Width/height for the face container, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceSize {
    pub width: f64,
    pub height: f64,
}

/// Fit the 41:45 face inside the viewport minus `gutter` on each side.
///
/// A narrower-than-face viewport pins the width, otherwise the height is
/// pinned. A zero-height viewport is not guarded: the ratio goes infinite or
/// NaN and the size degenerates.
pub fn fit_face(viewport_width: f64, viewport_height: f64, gutter: f64) -> FaceSize {
    let margin = gutter * 2.0;
    let narrow = viewport_width / viewport_height < FACE_ASPECT_WIDTH / FACE_ASPECT_HEIGHT;
    if narrow {
        let width = viewport_width - margin;
        FaceSize {
            width,
            height: (width / FACE_ASPECT_WIDTH) * FACE_ASPECT_HEIGHT - margin,
        }
    } else {
        let height = viewport_height - margin;
        FaceSize {
            width: (height / FACE_ASPECT_HEIGHT) * FACE_ASPECT_WIDTH - margin,
            height,
        }
    }
}

/// Evenly spaced intersection thresholds `0, 1/steps, .., 1`.
pub fn thresholds(steps: usize) -> Vec<f64> {
    if steps == 0 {
        return vec![0.0];
    }
    (0..=steps).map(|i| i as f64 / steps as f64).collect()
}
