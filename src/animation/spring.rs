/// Spring parameters in the tension/friction/mass form used by web animation libraries.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    pub tension: f64,
    pub friction: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Snappy, slightly bouncy response used for hover emphasis.
    pub const HOVER: Self = Self {
        tension: 300.0,
        friction: 10.0,
        mass: 1.0,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::HOVER
    }
}

const STEP_SECS: f64 = 0.001;
const MAX_SUBSTEPS: u32 = 1000;
const REST_EPSILON: f64 = 1e-4;

/// Damped spring driven by measured frame deltas.
///
/// Integration uses semi-implicit Euler over `ceil(dt / 1 ms)` equal substeps. When every delta
/// is a whole number of milliseconds the substeps are exactly 1 ms, and the result depends only on
/// their total. Other deltas are split into slightly shorter substeps, so regrouping them can move
/// the result by rounding. The rest snap is checked once per call. Deltas longer than one second
/// settle the spring immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(value: f64, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            config,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }

    /// Advance by `dt_secs` and return the new value.
    pub fn step(&mut self, dt_secs: f64) -> f64 {
        if !dt_secs.is_finite() || dt_secs <= 0.0 || self.is_at_rest() {
            return self.value;
        }

        let steps = (dt_secs / STEP_SECS).ceil() as u64;
        if steps > u64::from(MAX_SUBSTEPS) {
            self.settle();
            return self.value;
        }

        let h = dt_secs / steps as f64;
        let mass = self.config.mass.max(f64::EPSILON);
        for _ in 0..steps {
            let spring = -self.config.tension * (self.value - self.target);
            let damper = -self.config.friction * self.velocity;
            self.velocity += (spring + damper) / mass * h;
            self.value += self.velocity * h;
        }

        if self.velocity.abs() < REST_EPSILON && (self.value - self.target).abs() < REST_EPSILON {
            self.settle();
        }
        self.value
    }

    fn settle(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
