use glam::Vec2;

// Below this distance from 1.0 the damping ratio takes the critical branch
const CRITICAL_EPSILON: f32 = 1e-4;

/// Stiffness and damping of a unit-mass spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringParams {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }

    pub const fn from_pair(pair: (f32, f32)) -> Self {
        Self::new(pair.0, pair.1)
    }

    /// Undamped angular frequency in rad/s.
    pub fn natural_frequency(&self) -> f32 {
        self.stiffness.max(0.0).sqrt()
    }

    /// 1.0 is critical, below overshoots, above creeps.
    pub fn damping_ratio(&self) -> f32 {
        let omega = self.natural_frequency();
        if omega > 0.0 {
            self.damping / (2.0 * omega)
        } else {
            f32::INFINITY
        }
    }
}

/// Advance one axis of a damped spring by `dt_sec` toward a fixed target.
///
/// Closed-form solution of `x'' = -k x - c x'` on the displacement, so the
/// result only depends on elapsed time: one 32 ms step lands where two 16 ms
/// steps do. Returns the new `(displacement, velocity)`.
pub fn step_axis(
    params: SpringParams,
    displacement: f32,
    velocity: f32,
    dt_sec: f32,
) -> (f32, f32) {
    if dt_sec <= 0.0 {
        return (displacement, velocity);
    }
    let omega = params.natural_frequency();
    if omega <= 0.0 {
        // no restoring force: pure viscous drift
        return (displacement + velocity * dt_sec, velocity);
    }
    let zeta = params.damping_ratio();
    let x0 = displacement;
    let v0 = velocity;
    let t = dt_sec;

    if (zeta - 1.0).abs() < CRITICAL_EPSILON {
        let decay = (-omega * t).exp();
        let c = v0 + omega * x0;
        let x = decay * (x0 + c * t);
        let v = decay * (v0 - omega * c * t);
        (x, v)
    } else if zeta < 1.0 {
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega * t).exp();
        let (sin, cos) = (omega_d * t).sin_cos();
        let b = (v0 + zeta * omega * x0) / omega_d;
        let x = decay * (x0 * cos + b * sin);
        let v = decay * (v0 * cos - (omega * omega * x0 + zeta * omega * v0) / omega_d * sin);
        (x, v)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        let c1 = (v0 - r2 * x0) / (r1 - r2);
        let c2 = x0 - c1;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
    }
}

/// A 2D spring-filtered copy of the raw pointer position.
#[derive(Clone, Debug)]
pub struct SmoothedChannel {
    pub position: Vec2,
    pub velocity: Vec2,
    pub params: SpringParams,
}

impl SmoothedChannel {
    pub fn new(params: SpringParams, start: Vec2) -> Self {
        Self {
            position: start,
            velocity: Vec2::ZERO,
            params,
        }
    }

    pub fn step(&mut self, target: Vec2, dt_sec: f32) {
        let offset = self.position - target;
        let (x, vx) = step_axis(self.params, offset.x, self.velocity.x, dt_sec);
        let (y, vy) = step_axis(self.params, offset.y, self.velocity.y, dt_sec);
        self.position = target + Vec2::new(x, y);
        self.velocity = Vec2::new(vx, vy);
    }

    pub fn is_settled(&self, target: Vec2, tolerance: f32) -> bool {
        self.position.distance(target) < tolerance && self.velocity.length() < tolerance
    }
}

/// All smoothed channels driven off one raw position signal.
///
/// Channel order is the order of the parameter table handed to `new`;
/// renderers rely on it to pair channels with their visuals.
#[derive(Clone, Debug)]
pub struct MotionSmoother {
    channels: Vec<SmoothedChannel>,
}

impl MotionSmoother {
    pub fn new(params: &[SpringParams], start: Vec2) -> Self {
        Self {
            channels: params
                .iter()
                .map(|p| SmoothedChannel::new(*p, start))
                .collect(),
        }
    }

    pub fn step(&mut self, target: Vec2, dt_sec: f32) {
        for channel in &mut self.channels {
            channel.step(target, dt_sec);
        }
    }

    pub fn channels(&self) -> &[SmoothedChannel] {
        &self.channels
    }

    pub fn position(&self, index: usize) -> Option<Vec2> {
        self.channels.get(index).map(|c| c.position)
    }

    pub fn settled(&self, target: Vec2, tolerance: f32) -> bool {
        self.channels.iter().all(|c| c.is_settled(target, tolerance))
    }
}
