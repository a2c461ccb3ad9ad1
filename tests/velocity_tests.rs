// Host-side tests for pointer velocity, heading and stretch.

use cursor_trail::core::constants::{
    MIN_HEADING_SPEED, STRETCH_ALONG_MAX, STRETCH_FULL_SPEED, STRETCH_PERP_MIN, VELOCITY_STALE_MS,
};
use cursor_trail::core::velocity::{Stretch, VelocityEstimator};
use cursor_trail::core::PointerSample;

fn estimator_with(samples: &[(f32, f32, f64)]) -> VelocityEstimator {
    let mut est = VelocityEstimator::new();
    for &(x, y, t) in samples {
        est.observe(PointerSample::new(x, y, t));
    }
    est
}

#[test]
fn horizontal_move_gives_speed_and_zero_heading() {
    let est = estimator_with(&[(0.0, 0.0, 0.0), (100.0, 0.0, 100.0)]);
    assert!((est.speed() - 1000.0).abs() < 1e-2, "speed {}", est.speed());
    assert!(est.heading_deg().abs() < 1e-4);
}

#[test]
fn heading_follows_screen_coordinates() {
    // y grows downward, so down-right is +45 degrees
    let est = estimator_with(&[(0.0, 0.0, 0.0), (50.0, 50.0, 50.0)]);
    assert!((est.heading_deg() - 45.0).abs() < 1e-3);

    let est = estimator_with(&[(0.0, 0.0, 0.0), (-100.0, 0.0, 50.0)]);
    assert!((est.heading_deg().abs() - 180.0).abs() < 1e-3);
}

#[test]
fn first_sample_has_no_velocity() {
    let mut est = VelocityEstimator::new();
    assert!(!est.observe(PointerSample::new(10.0, 10.0, 5.0)));
    assert_eq!(est.speed(), 0.0);
    assert_eq!(est.heading_deg(), 0.0);
}

#[test]
fn identical_timestamps_keep_previous_heading() {
    let mut est = estimator_with(&[(0.0, 0.0, 0.0), (100.0, 0.0, 100.0)]);
    let updated = est.observe(PointerSample::new(100.0, 250.0, 100.0));
    assert!(!updated);
    assert!(est.heading_deg().abs() < 1e-4);
    assert!((est.speed() - 1000.0).abs() < 1e-2);
    assert!(est.velocity().is_finite());

    let motion = est.motion(100.0);
    assert!(motion.speed.is_finite());
    assert!(motion.heading_deg.is_finite());
    assert!(motion.stretch.along.is_finite());
    assert!(motion.stretch.perpendicular.is_finite());
}

#[test]
fn backwards_timestamps_are_ignored() {
    let mut est = estimator_with(&[(0.0, 0.0, 100.0), (100.0, 0.0, 200.0)]);
    assert!(!est.observe(PointerSample::new(0.0, 100.0, 150.0)));
    assert!(est.heading_deg().abs() < 1e-4);
}

#[test]
fn slow_motion_freezes_heading() {
    let mut est = estimator_with(&[(0.0, 0.0, 0.0), (100.0, 0.0, 100.0)]);
    // 1px down over 100ms = 10 px/s, below the heading threshold
    assert!(est.observe(PointerSample::new(100.0, 1.0, 200.0)));
    assert!(est.speed() < MIN_HEADING_SPEED);
    assert!(est.heading_deg().abs() < 1e-4);

    // a fast move downward updates it
    assert!(est.observe(PointerSample::new(100.0, 101.0, 250.0)));
    assert!((est.heading_deg() - 90.0).abs() < 1e-3);
}

#[test]
fn speed_goes_stale_but_heading_stays() {
    let est = estimator_with(&[(0.0, 0.0, 0.0), (0.0, 100.0, 100.0)]);
    let live = est.motion(100.0 + VELOCITY_STALE_MS);
    assert!((live.speed - 1000.0).abs() < 1e-2);

    let stale = est.motion(100.0 + VELOCITY_STALE_MS + 1.0);
    assert_eq!(stale.speed, 0.0);
    assert_eq!(stale.stretch, Stretch::NONE);
    assert!((stale.heading_deg - 90.0).abs() < 1e-3);
}

#[test]
fn stretch_is_monotonic_and_bounded() {
    let mut prev = Stretch::from_speed(0.0);
    assert_eq!(prev, Stretch::NONE);
    for i in 1..=100 {
        let s = Stretch::from_speed(i as f32 * 50.0);
        assert!(s.along >= prev.along);
        assert!(s.perpendicular <= prev.perpendicular);
        assert!(s.along <= STRETCH_ALONG_MAX + 1e-6);
        assert!(s.perpendicular >= STRETCH_PERP_MIN - 1e-6);
        prev = s;
    }
    let full = Stretch::from_speed(STRETCH_FULL_SPEED * 10.0);
    assert!((full.along - STRETCH_ALONG_MAX).abs() < 1e-6);
    assert!((full.perpendicular - STRETCH_PERP_MIN).abs() < 1e-6);
}

#[test]
fn stretch_ignores_non_finite_speed() {
    assert_eq!(Stretch::from_speed(f32::NAN), Stretch::NONE);
    assert_eq!(Stretch::from_speed(f32::INFINITY), Stretch::NONE);
}

#[test]
fn nan_timestamps_are_rejected() {
    let mut est = estimator_with(&[(0.0, 0.0, 0.0), (100.0, 0.0, 100.0)]);
    assert!(!est.observe(PointerSample::new(200.0, 0.0, f64::NAN)));
    assert!((est.speed() - 1000.0).abs() < 1e-2);
    assert!(est.velocity().is_finite());
}
