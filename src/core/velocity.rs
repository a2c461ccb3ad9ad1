use crate::core::constants::{
    MIN_HEADING_SPEED, STRETCH_ALONG_MAX, STRETCH_FULL_SPEED, STRETCH_PERP_MIN, VELOCITY_STALE_MS,
};
use crate::core::tracker::PointerSample;
use glam::Vec2;

/// Axis scale pair used to streak the glyph along its direction of travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stretch {
    pub along: f32,
    pub perpendicular: f32,
}

impl Stretch {
    pub const NONE: Stretch = Stretch {
        along: 1.0,
        perpendicular: 1.0,
    };

    /// Clamped linear map from speed (px/s) to stretch. `along` only grows
    /// and `perpendicular` only shrinks with speed, both saturating at
    /// `STRETCH_FULL_SPEED`.
    pub fn from_speed(speed: f32) -> Self {
        if !speed.is_finite() {
            return Self::NONE;
        }
        let t = (speed / STRETCH_FULL_SPEED).clamp(0.0, 1.0);
        Self {
            along: 1.0 + (STRETCH_ALONG_MAX - 1.0) * t,
            perpendicular: 1.0 - (1.0 - STRETCH_PERP_MIN) * t,
        }
    }
}

/// Velocity estimator output for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub speed: f32,
    pub heading_deg: f32,
    pub stretch: Stretch,
}

#[derive(Clone, Debug, Default)]
pub struct VelocityEstimator {
    prev: Option<PointerSample>,
    velocity: Vec2,
    speed: f32,
    heading_deg: f32,
    last_update_ms: Option<f64>,
}

impl VelocityEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a raw sample. Returns `false` when the sample could not produce
    /// a velocity (first sample, repeated or backwards timestamp); the
    /// published speed and heading are then left untouched.
    pub fn observe(&mut self, sample: PointerSample) -> bool {
        let Some(prev) = self.prev.replace(sample) else {
            return false;
        };
        let dt_ms = sample.timestamp_ms - prev.timestamp_ms;
        if dt_ms.is_nan() || dt_ms <= 0.0 {
            return false;
        }
        let velocity = (sample.position - prev.position) / (dt_ms / 1000.0) as f32;
        let speed = velocity.length();
        if !velocity.is_finite() || !speed.is_finite() {
            return false;
        }
        self.velocity = velocity;
        self.speed = speed;
        self.last_update_ms = Some(sample.timestamp_ms);
        if speed > MIN_HEADING_SPEED {
            self.heading_deg = velocity.y.atan2(velocity.x).to_degrees();
        }
        true
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn heading_deg(&self) -> f32 {
        self.heading_deg
    }

    /// Motion as seen at `now_ms`. Speed reads as zero once the pointer has
    /// been quiet for `VELOCITY_STALE_MS`; the heading stays where it was.
    pub fn motion(&self, now_ms: f64) -> Motion {
        let speed = match self.last_update_ms {
            Some(t) if now_ms - t <= VELOCITY_STALE_MS => self.speed,
            _ => 0.0,
        };
        Motion {
            speed,
            heading_deg: self.heading_deg,
            stretch: Stretch::from_speed(speed),
        }
    }
}
