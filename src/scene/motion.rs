use crate::foundation::core::{Axis, Vec3};
use crate::foundation::error::{MotionError, MotionResult};

/// Which part of the transform a motion term drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Rotation,
    Position,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wave {
    #[default]
    Sin,
    Cos,
}

impl Wave {
    fn eval(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
        }
    }
}

fn one() -> f64 {
    1.0
}

/// One periodic or linear contribution to an object's motion.
///
/// All terms are pure functions of elapsed seconds; none keeps per-frame state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MotionTerm {
    /// `amplitude * wave(frequency * t + phase)` on one axis of a channel.
    Oscillate {
        channel: Channel,
        axis: Axis,
        #[serde(default)]
        wave: Wave,
        amplitude: f64,
        /// Angular frequency in radians per second.
        #[serde(default = "one")]
        frequency: f64,
        #[serde(default)]
        phase: f64,
    },
    /// Steady rotation `rate * t` (radians per second) about one axis.
    Spin { axis: Axis, rate: f64 },
}

impl MotionTerm {
    pub fn sin(channel: Channel, axis: Axis, amplitude: f64, frequency: f64) -> Self {
        Self::Oscillate {
            channel,
            axis,
            wave: Wave::Sin,
            amplitude,
            frequency,
            phase: 0.0,
        }
    }

    pub fn cos(channel: Channel, axis: Axis, amplitude: f64, frequency: f64) -> Self {
        Self::Oscillate {
            channel,
            axis,
            wave: Wave::Cos,
            amplitude,
            frequency,
            phase: 0.0,
        }
    }

    pub fn spin(axis: Axis, rate: f64) -> Self {
        Self::Spin { axis, rate }
    }

    fn validate(&self) -> MotionResult<()> {
        let finite = match *self {
            Self::Oscillate {
                amplitude,
                frequency,
                phase,
                ..
            } => amplitude.is_finite() && frequency.is_finite() && phase.is_finite(),
            Self::Spin { rate, .. } => rate.is_finite(),
        };
        if finite {
            Ok(())
        } else {
            Err(MotionError::validation("motion term parameters must be finite"))
        }
    }
}

/// Rotation and position offset produced by a [`MotionRule`] at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct MotionSample {
    pub rotation: Vec3,
    pub position_offset: Vec3,
}

/// Ordered list of motion terms; contributions on the same axis add up.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MotionRule {
    pub terms: Vec<MotionTerm>,
}

impl MotionRule {
    pub fn new(terms: impl Into<Vec<MotionTerm>>) -> Self {
        Self {
            terms: terms.into(),
        }
    }

    pub fn is_static(&self) -> bool {
        self.terms.is_empty()
    }

    pub(crate) fn validate(&self) -> MotionResult<()> {
        self.terms.iter().try_for_each(MotionTerm::validate)
    }

    pub fn sample(&self, t: f64) -> MotionSample {
        let mut out = MotionSample::default();
        for term in &self.terms {
            match *term {
                MotionTerm::Oscillate {
                    channel,
                    axis,
                    wave,
                    amplitude,
                    frequency,
                    phase,
                } => {
                    let v = amplitude * wave.eval(frequency * t + phase);
                    let target = match channel {
                        Channel::Rotation => &mut out.rotation,
                        Channel::Position => &mut out.position_offset,
                    };
                    *target = target.with(axis, target.get(axis) + v);
                }
                MotionTerm::Spin { axis, rate } => {
                    out.rotation = out.rotation.with(axis, out.rotation.get(axis) + rate * t);
                }
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/motion.rs"]
mod tests;
