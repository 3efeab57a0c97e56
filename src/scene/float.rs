use crate::foundation::core::{Transform3D, Vec3};
use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::{Rng64, map_linear};

/// Range of the per-instance phase offset drawn at build time.
const OFFSET_SPAN: f64 = 10_000.0;

fn one() -> f64 {
    1.0
}

fn default_range() -> [f64; 2] {
    [-0.1, 0.1]
}

/// Parameters of the gentle rocking/bobbing wrapper placed around an object.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FloatParams {
    #[serde(default = "one")]
    pub speed: f64,
    #[serde(default = "one")]
    pub rotation_intensity: f64,
    #[serde(default = "one")]
    pub float_intensity: f64,
    #[serde(default = "default_range")]
    pub floating_range: [f64; 2],
}

impl Default for FloatParams {
    fn default() -> Self {
        Self {
            speed: 1.0,
            rotation_intensity: 1.0,
            float_intensity: 1.0,
            floating_range: default_range(),
        }
    }
}

impl FloatParams {
    pub fn new(speed: f64, rotation_intensity: f64, float_intensity: f64) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> MotionResult<()> {
        let all = [
            self.speed,
            self.rotation_intensity,
            self.float_intensity,
            self.floating_range[0],
            self.floating_range[1],
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(MotionError::validation("float parameters must be finite"));
        }
        Ok(())
    }
}

/// A built float wrapper: parameters plus the phase offset sampled once for this instance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FloatCarrier {
    pub params: FloatParams,
    pub offset: f64,
}

impl FloatCarrier {
    pub(crate) fn build(params: FloatParams, rng: &mut Rng64) -> Self {
        Self {
            params,
            offset: rng.next_f64_01() * OFFSET_SPAN,
        }
    }

    /// Parent transform of the wrapped object at `t` seconds.
    pub fn transform(&self, t: f64) -> Transform3D {
        let p = &self.params;
        if p.speed == 0.0 {
            return Transform3D::default();
        }

        let w = (self.offset + t) / 4.0 * p.speed;
        let (s, c) = w.sin_cos();
        let rotation = Vec3::new(c / 8.0, s / 8.0, s / 20.0) * p.rotation_intensity;
        let [lo, hi] = p.floating_range;
        let y = map_linear(s / 10.0, -0.1, 0.1, lo, hi) * p.float_intensity;

        Transform3D {
            rotation,
            position: Vec3::new(0.0, y, 0.0),
            scale: Vec3::ONE,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/float.rs"]
mod tests;
