use crate::Tuning;

/// Single-scalar velocity with exponential friction.
///
/// Units are offset units per animation tick. Impulses accumulate into the current velocity;
/// each [`Momentum::advance`] returns the displacement for that tick, then decays the velocity
/// by `friction`. Once `|velocity| <= min_velocity` it is forced to exactly zero, which bounds
/// the number of ticks by a geometric series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Momentum {
    velocity: f64,
    multiplier: f64,
    friction: f64,
    min_velocity: f64,
}

/// Outcome of one momentum tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Advance {
    /// Displacement to apply this tick (the velocity before friction).
    pub delta: f64,
    pub settled: bool,
}

impl Momentum {
    pub fn new(tuning: &Tuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            velocity: 0.0,
            multiplier: tuning.wheel_multiplier,
            friction: tuning.friction,
            min_velocity: tuning.min_velocity,
        }
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_moving(&self) -> bool {
        self.velocity != 0.0
    }

    /// Adds `delta * multiplier` to the velocity and returns the new velocity.
    pub fn impulse(&mut self, delta: f64) -> f64 {
        if delta.is_finite() {
            self.velocity += delta * self.multiplier;
        }
        self.velocity
    }

    pub fn advance(&mut self) -> Advance {
        let delta = self.velocity;
        self.velocity *= self.friction;
        let settled = self.velocity.abs() <= self.min_velocity;
        if settled {
            self.velocity = 0.0;
        }
        Advance { delta, settled }
    }

    pub fn reset(&mut self) {
        self.velocity = 0.0;
    }
}
