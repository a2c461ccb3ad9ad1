use crate::core::constants::{HOVER_ROTATION_DEG, HOVER_SCALE, HOVER_SPRING};
use crate::core::spring::{step_axis, SpringParams};

/// Eases the glyph between its resting pose (blend 0) and hover pose
/// (blend 1). The spring is underdamped, so the blend briefly overshoots
/// and the glyph pops a little on enter and exit.
#[derive(Clone, Debug)]
pub struct HoverReactor {
    blend: f32,
    velocity: f32,
    params: SpringParams,
}

impl Default for HoverReactor {
    fn default() -> Self {
        Self::new(SpringParams::from_pair(HOVER_SPRING))
    }
}

impl HoverReactor {
    pub fn new(params: SpringParams) -> Self {
        Self {
            blend: 0.0,
            velocity: 0.0,
            params,
        }
    }

    pub fn step(&mut self, hovering: bool, dt_sec: f32) {
        let target = if hovering { 1.0 } else { 0.0 };
        let (offset, velocity) = step_axis(self.params, self.blend - target, self.velocity, dt_sec);
        self.blend = target + offset;
        self.velocity = velocity;
    }

    pub fn blend(&self) -> f32 {
        self.blend
    }

    pub fn scale(&self) -> f32 {
        1.0 + (HOVER_SCALE - 1.0) * self.blend
    }

    pub fn rotation_deg(&self) -> f32 {
        HOVER_ROTATION_DEG * self.blend
    }

    /// Linear blend between a resting and hovering value.
    pub fn mix(&self, rest: f32, hover: f32) -> f32 {
        rest + (hover - rest) * self.blend
    }
}
