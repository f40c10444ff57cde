// Host-side tests for mapping intersection samples onto bubble styles.

use watch_face_core::*;

/// Style double that records every write.
#[derive(Default, Debug)]
struct RecordingStyle {
    transform: String,
    origin: String,
    writes: usize,
}

impl StyleTarget for RecordingStyle {
    fn transform(&self) -> String {
        self.transform.clone()
    }
    fn set_transform(&mut self, value: &str) {
        self.transform = value.to_string();
        self.writes += 1;
    }
    fn set_transform_origin(&mut self, value: &str) {
        self.origin = value.to_string();
        self.writes += 1;
    }
}

fn row(len: usize) -> Vec<RecordingStyle> {
    (0..len).map(|_| RecordingStyle::default()).collect()
}

fn visible(ratio: f64, element_top: f64, root_top: f64) -> IntersectionSample {
    IntersectionSample {
        ratio,
        is_intersecting: true,
        element_top,
        root_top,
    }
}

#[test]
fn moving_up_compares_row_top_with_root_top() {
    assert!(visible(0.5, -10.0, 0.0).moving_up());
    assert!(!visible(0.5, 10.0, 0.0).moving_up());
    assert!(!visible(0.5, 0.0, 0.0).moving_up());
}

#[test]
fn hidden_row_produces_clear_regardless_of_ratio() {
    for ratio in [0.0, 0.4, 1.0] {
        let sample = IntersectionSample {
            ratio,
            is_intersecting: false,
            ..Default::default()
        };
        assert_eq!(row_patch(&sample, 4, Positioning::OriginShift), RowPatch::Clear);
        assert_eq!(row_patch(&sample, 3, Positioning::Translate), RowPatch::Clear);
    }
}

#[test]
fn visible_row_gets_one_transform_per_bubble() {
    let patch = row_patch(&visible(0.8, -5.0, 0.0), 3, Positioning::OriginShift);
    let RowPatch::Apply(bubbles) = patch else {
        panic!("expected styles for a visible row");
    };
    assert_eq!(bubbles.len(), 3);
    let origins: Vec<_> = bubbles.iter().map(|b| b.origin.clone().unwrap()).collect();
    assert_eq!(origins, ["65% 100%", "50% 100%", "35% 100%"]);
    for b in &bubbles {
        let s: f64 = b
            .transform
            .trim_start_matches("scale(")
            .trim_end_matches(')')
            .parse()
            .unwrap();
        assert!((s - 0.75).abs() < 1e-9);
    }
}

#[test]
fn fully_visible_row_in_translate_mode_is_settled() {
    let RowPatch::Apply(bubbles) = row_patch(&visible(1.0, 5.0, 0.0), 4, Positioning::Translate)
    else {
        panic!("expected styles for a visible row");
    };
    for b in &bubbles {
        assert_eq!(b.transform, "scale(1) translateX(0%)");
        assert_eq!(b.origin.as_deref(), Some("top center"));
    }
}

#[test]
fn applying_writes_transform_and_origin() {
    let mut bubbles = row(4);
    let patch = row_patch(&visible(0.5, 10.0, 0.0), 4, Positioning::OriginShift);
    let writes = apply_row_patch(&patch, &mut bubbles);
    assert_eq!(writes, 8);
    assert_eq!(bubbles[0].transform, "scale(0.375)");
    assert_eq!(bubbles[3].origin, "35% 0%");
}

#[test]
fn clear_resets_transform_and_is_idempotent() {
    let mut bubbles = row(3);
    let patch = row_patch(&visible(0.9, 0.0, 0.0), 3, Positioning::Translate);
    apply_row_patch(&patch, &mut bubbles);
    assert!(bubbles.iter().all(|b| !b.transform.is_empty()));

    let hidden = IntersectionSample::default();
    let clear = row_patch(&hidden, 3, Positioning::Translate);
    assert_eq!(apply_row_patch(&clear, &mut bubbles), 3);
    assert!(bubbles.iter().all(|b| b.transform.is_empty()));

    let before: Vec<_> = bubbles.iter().map(|b| b.writes).collect();
    assert_eq!(apply_row_patch(&clear, &mut bubbles), 0);
    let after: Vec<_> = bubbles.iter().map(|b| b.writes).collect();
    assert_eq!(before, after);
}

#[test]
fn clearing_an_untouched_row_writes_nothing() {
    let mut bubbles = row(4);
    assert_eq!(apply_row_patch(&RowPatch::Clear, &mut bubbles), 0);
}

#[test]
fn unknown_slots_skip_origin_write() {
    // A five-bubble row has no origin table; only transforms are written
    let mut bubbles = row(5);
    let patch = row_patch(&visible(1.0, 0.0, 0.0), 5, Positioning::OriginShift);
    assert_eq!(apply_row_patch(&patch, &mut bubbles), 5);
    assert!(bubbles.iter().all(|b| b.origin.is_empty()));
}

#[test]
fn patch_and_targets_of_different_length_are_zipped() {
    let mut bubbles = row(2);
    let patch = row_patch(&visible(1.0, 0.0, 0.0), 4, Positioning::OriginShift);
    assert_eq!(apply_row_patch(&patch, &mut bubbles), 4);
}
