use std::f64::consts::TAU;

use crate::foundation::core::Vec3;
use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::Rng64;
use crate::scene::color::Color;

/// How particles are scattered around the field origin.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParticleLayout {
    /// Uniform in the cube `[-extent/2, extent/2]^3`.
    Cube { extent: f64 },
    /// Uniform directions on a shell; radii shrink from `radius + depth` towards `radius`.
    Shell { radius: f64, depth: f64 },
}

fn one() -> f64 {
    1.0
}

fn white() -> Color {
    Color::WHITE
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleFieldParams {
    pub count: u32,
    #[serde(default = "one")]
    pub size: f64,
    /// Shimmer speed forwarded to the renderer; does not move particles here.
    #[serde(default = "one")]
    pub speed: f64,
    #[serde(default = "white")]
    pub color: Color,
    #[serde(default = "one")]
    pub opacity: f64,
    pub layout: ParticleLayout,
}

impl ParticleFieldParams {
    pub fn cube(count: u32, extent: f64, size: f64, speed: f64, color: Color) -> Self {
        Self {
            count,
            size,
            speed,
            color,
            opacity: 1.0,
            layout: ParticleLayout::Cube { extent },
        }
    }

    pub(crate) fn validate(&self) -> MotionResult<()> {
        if self.count == 0 {
            return Err(MotionError::validation("particle count must be > 0"));
        }
        let layout_ok = match self.layout {
            ParticleLayout::Cube { extent } => extent.is_finite() && extent >= 0.0,
            ParticleLayout::Shell { radius, depth } => {
                radius.is_finite() && depth.is_finite() && radius >= 0.0 && depth >= 0.0
            }
        };
        if !layout_ok {
            return Err(MotionError::validation(
                "particle layout dimensions must be finite and >= 0",
            ));
        }
        if !(self.size.is_finite() && self.speed.is_finite() && self.opacity.is_finite())
            || !self.color.is_finite()
        {
            return Err(MotionError::validation("particle parameters must be finite"));
        }
        Ok(())
    }
}

/// Particle field with its scatter sampled once at build time.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParticleField {
    pub params: ParticleFieldParams,
    pub positions: Vec<Vec3>,
}

impl ParticleField {
    pub(crate) fn build(params: ParticleFieldParams, rng: &mut Rng64) -> Self {
        let n = params.count as usize;
        let positions = match params.layout {
            ParticleLayout::Cube { extent } => (0..n)
                .map(|_| {
                    let x = (0.5 - rng.next_f64_01()) * extent;
                    let y = (0.5 - rng.next_f64_01()) * extent;
                    let z = (0.5 - rng.next_f64_01()) * extent;
                    Vec3::new(x, y, z)
                })
                .collect(),
            ParticleLayout::Shell { radius, depth } => {
                let step = depth / n as f64;
                let mut r = radius + depth;
                (0..n)
                    .map(|_| {
                        r -= step * rng.next_f64_01();
                        let phi = (1.0 - rng.next_f64_01() * 2.0).acos();
                        let theta = rng.next_f64_01() * TAU;
                        spherical(r, phi, theta)
                    })
                    .collect()
            }
        };
        Self { params, positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

fn spherical(r: f64, phi: f64, theta: f64) -> Vec3 {
    let sin_phi_r = phi.sin() * r;
    Vec3::new(sin_phi_r * theta.sin(), phi.cos() * r, sin_phi_r * theta.cos())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/particles.rs"]
mod tests;
