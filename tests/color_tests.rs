// Host-side tests for bubble colour generation.

use rand::rngs::StdRng;
use rand::SeedableRng;
use watch_face_core::*;

#[test]
fn random_interval_includes_both_ends() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = [false; 3];
    for _ in 0..500 {
        let v = random_interval(&mut rng, 1, 3);
        assert!((1..=3).contains(&v));
        seen[(v - 1) as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn random_interval_with_equal_bounds_is_constant() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(random_interval(&mut rng, 5, 5), 5);
}

#[test]
fn colours_stay_in_pastel_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut min_hue = f64::MAX;
    let mut max_hue = f64::MIN;
    for _ in 0..2000 {
        let c = Hsl::random(&mut rng);
        assert!((0.0..360.0).contains(&c.hue));
        assert!((60..=70).contains(&c.saturation));
        assert!((60..=70).contains(&c.lightness));
        min_hue = min_hue.min(c.hue);
        max_hue = max_hue.max(c.hue);
    }
    // Spread over the whole wheel
    assert!(min_hue < 10.0);
    assert!(max_hue > 350.0);
}

#[test]
fn thread_rng_colours_are_in_range() {
    for _ in 0..1000 {
        let c = random_color();
        assert!(c.hue >= 0.0 && c.hue < 360.0);
        assert!((60..=70).contains(&c.saturation));
        assert!((60..=70).contains(&c.lightness));
    }
}

#[test]
fn hsl_renders_as_css() {
    let c = Hsl {
        hue: 120.5,
        saturation: 60,
        lightness: 70,
    };
    assert_eq!(c.to_string(), "hsl(120.5, 60%, 70%)");
}
