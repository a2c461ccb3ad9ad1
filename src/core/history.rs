use crate::core::tracker::PointerSample;
use glam::Vec2;
use std::collections::VecDeque;

/// Recent raw pointer samples for the polyline trail, newest first.
///
/// Bounded by count on insert and by age on `evict`. Eviction is lazy:
/// nothing ages out until the frame loop asks for it.
#[derive(Clone, Debug)]
pub struct TrailHistory {
    samples: VecDeque<PointerSample>,
    capacity: usize,
    max_age_ms: f64,
}

impl TrailHistory {
    pub fn new(capacity: usize, max_age_ms: f64) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            max_age_ms,
        }
    }

    pub fn push(&mut self, sample: PointerSample) {
        self.samples.push_front(sample);
        self.samples.truncate(self.capacity);
    }

    /// Drop every sample that is `max_age_ms` old or older at `now_ms`.
    pub fn evict(&mut self, now_ms: f64) {
        let max_age = self.max_age_ms;
        self.samples.retain(|s| now_ms - s.timestamp_ms < max_age);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn max_age_ms(&self) -> f64 {
        self.max_age_ms
    }

    pub fn newest(&self) -> Option<&PointerSample> {
        self.samples.front()
    }

    pub fn iter_newest_first(&self) -> impl Iterator<Item = &PointerSample> {
        self.samples.iter()
    }

    /// Positions from the oldest retained sample to the newest.
    pub fn path(&self) -> Vec<Vec2> {
        self.samples.iter().rev().map(|s| s.position).collect()
    }
}
