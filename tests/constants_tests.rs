// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_non_empty() {
    for r in [
        SPAWN_WIDTH_PX,
        SPAWN_SPEED,
        SPAWN_OPACITY,
        ANGLE_DEG,
        PULSE_SPEED,
        RECYCLE_WIDTH_PX,
        RECYCLE_SPEED,
        RECYCLE_OPACITY,
    ] {
        assert!(r.start < r.end, "empty range {:?}", r);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn angles_tilt_left_of_vertical() {
    assert!(ANGLE_DEG.start >= -30.0);
    assert!(ANGLE_DEG.end <= -10.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulse_stays_within_unit_range() {
    // factor ranges over [BASE - DEPTH, BASE + DEPTH]
    assert!(PULSE_BASE - PULSE_DEPTH >= 0.0);
    assert!(PULSE_BASE + PULSE_DEPTH <= 1.0);
    assert!((PULSE_BASE - PULSE_DEPTH - 0.6).abs() < 1e-12);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_presets_do_not_amplify() {
    assert!(RECYCLE_OPACITY.end * INTENSITY_STRONG <= 1.0);
    assert!(SPAWN_OPACITY.end * INTENSITY_STRONG <= 1.0);
    assert!(INTENSITY_SUBTLE > 0.0 && INTENSITY_SUBTLE < INTENSITY_MEDIUM);
    assert!(INTENSITY_MEDIUM < INTENSITY_STRONG);
    assert_eq!(INTENSITY_STRONG, 1.0);
}

#[test]
fn gradient_is_symmetric_and_ordered() {
    let offsets: Vec<f64> = GRADIENT_STOPS.iter().map(|s| s.0).collect();
    assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(offsets.first(), Some(&0.0));
    assert_eq!(offsets.last(), Some(&1.0));
    for (a, b) in GRADIENT_STOPS.iter().zip(GRADIENT_STOPS.iter().rev()) {
        assert!((a.0 - (1.0 - b.0)).abs() < 1e-12);
        assert_eq!(a.1, b.1);
    }
    assert_eq!(GRADIENT_STOPS[0].1, 0.0);
    assert_eq!(GRADIENT_STOPS[5].1, 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spawn_region_is_centered() {
    // offset + oversample / 2 puts the region's center on the surface's
    assert!((SPAWN_OFFSET + SPAWN_OVERSAMPLE / 2.0 - 0.5).abs() < 1e-12);
    assert_eq!(LENGTH_PER_HEIGHT, 2.0);
    assert_eq!(BEAM_COUNT, 25);
    assert_eq!(RECYCLE_COLUMNS, 3);
    assert!(RECYCLE_JITTER <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_are_valid() {
    assert!((0.0..360.0).contains(&DEFAULT_BASE_HUE));
    assert!(DEFAULT_BLUR_PX >= 0.0 && DEFAULT_BLUR_PX <= MAX_BLUR_PX);
    assert!(GRAYSCALE_SATURATION == 0.0);
    assert!(NOMINAL_TICK_MS > 0.0);
}
