//! Mapping from a row's intersection measurement to per-bubble styles.
//!
//! Kept free of any DOM types: the browser side converts an observer entry
//! into an [`IntersectionSample`] and hands its bubble elements to
//! [`apply_row_patch`] through the [`StyleTarget`] trait.

use crate::geometry::{scale_for_ratio, BubbleTransform, Positioning};
use smallvec::SmallVec;

/// One observer measurement for a single row.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntersectionSample {
    pub ratio: f64,
    pub is_intersecting: bool,
    pub element_top: f64,
    pub root_top: f64,
}

impl IntersectionSample {
    /// The row's top edge is above the root's top edge.
    #[inline]
    pub fn moving_up(&self) -> bool {
        self.element_top < self.root_top
    }
}

/// Style change for every bubble of one row.
#[derive(Clone, Debug, PartialEq)]
pub enum RowPatch {
    /// Drop any transform; the row is out of view.
    Clear,
    /// One entry per bubble, in row order.
    Apply(SmallVec<[BubbleTransform; 4]>),
}

pub fn row_patch(sample: &IntersectionSample, row_len: usize, positioning: Positioning) -> RowPatch {
    if !sample.is_intersecting {
        return RowPatch::Clear;
    }
    let scale = scale_for_ratio(sample.ratio);
    let moving_up = sample.moving_up();
    RowPatch::Apply(
        (0..row_len)
            .map(|i| positioning.bubble_transform(sample.ratio, scale, row_len, i, moving_up))
            .collect(),
    )
}

/// A bubble's inline style, as far as the animation touches it.
pub trait StyleTarget {
    fn transform(&self) -> String;
    fn set_transform(&mut self, value: &str);
    fn set_transform_origin(&mut self, value: &str);
}

/// Write `patch` onto `targets` and return the number of style writes.
///
/// Clearing skips bubbles whose transform is already empty, so repeated
/// clears write nothing. Extra targets or extra patch entries are ignored.
pub fn apply_row_patch<T: StyleTarget>(patch: &RowPatch, targets: &mut [T]) -> usize {
    let mut writes = 0;
    match patch {
        RowPatch::Clear => {
            for target in targets.iter_mut() {
                if !target.transform().is_empty() {
                    target.set_transform("");
                    writes += 1;
                }
            }
        }
        RowPatch::Apply(bubbles) => {
            for (target, bubble) in targets.iter_mut().zip(bubbles.iter()) {
                target.set_transform(&bubble.transform);
                writes += 1;
                if let Some(origin) = &bubble.origin {
                    target.set_transform_origin(origin);
                    writes += 1;
                }
            }
        }
    }
    writes
}
