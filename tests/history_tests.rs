// Host-side tests for the polyline trail history buffer.

use cursor_trail::core::history::TrailHistory;
use cursor_trail::core::PointerSample;
use glam::Vec2;
use proptest::prelude::*;

#[test]
fn push_keeps_newest_first_and_caps_count() {
    let mut h = TrailHistory::new(4, 400.0);
    for i in 0..10 {
        h.push(PointerSample::new(i as f32, 0.0, i as f64));
    }
    assert_eq!(h.len(), 4);
    assert_eq!(h.newest().map(|s| s.position.x), Some(9.0));
    let xs: Vec<f32> = h.iter_newest_first().map(|s| s.position.x).collect();
    assert_eq!(xs, vec![9.0, 8.0, 7.0, 6.0]);
}

#[test]
fn path_runs_oldest_to_newest() {
    let mut h = TrailHistory::new(16, 400.0);
    h.push(PointerSample::new(0.0, 0.0, 0.0));
    h.push(PointerSample::new(10.0, 5.0, 10.0));
    h.push(PointerSample::new(20.0, 10.0, 20.0));
    assert_eq!(
        h.path(),
        vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 5.0), Vec2::new(20.0, 10.0)]
    );
}

#[test]
fn eviction_is_lazy() {
    let mut h = TrailHistory::new(16, 400.0);
    h.push(PointerSample::new(0.0, 0.0, 0.0));
    h.push(PointerSample::new(1.0, 0.0, 1000.0));
    // nothing ages out on insert
    assert_eq!(h.len(), 2);
    h.evict(1000.0);
    assert_eq!(h.len(), 1);
}

#[test]
fn samples_at_the_threshold_are_evicted() {
    let mut h = TrailHistory::new(16, 400.0);
    h.push(PointerSample::new(0.0, 0.0, 0.0));
    h.push(PointerSample::new(1.0, 0.0, 1.0));
    h.evict(400.0);
    assert_eq!(h.len(), 1);
    assert_eq!(h.newest().map(|s| s.timestamp_ms), Some(1.0));
    h.evict(401.0);
    assert!(h.is_empty());
}

#[test]
fn eviction_of_empty_history_is_harmless() {
    let mut h = TrailHistory::new(16, 400.0);
    h.evict(12345.0);
    assert!(h.is_empty());
    assert!(h.path().is_empty());
}

proptest! {
    #[test]
    fn nothing_too_old_survives_eviction(
        ops in prop::collection::vec((any::<bool>(), 0u32..200, 0u32..600), 1..200)
    ) {
        let mut h = TrailHistory::new(32, 400.0);
        let mut now = 0.0_f64;
        for (i, (insert, advance, lateness)) in ops.into_iter().enumerate() {
            now += advance as f64;
            if insert {
                // events may arrive stamped somewhat before the current frame
                h.push(PointerSample::new(i as f32, 0.0, now - lateness as f64));
            } else {
                h.evict(now);
                for s in h.iter_newest_first() {
                    prop_assert!(now - s.timestamp_ms < h.max_age_ms());
                }
            }
            prop_assert!(h.len() <= h.capacity());
        }
    }
}
