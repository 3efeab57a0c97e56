use std::f64::consts::TAU;

use crate::foundation::core::Vec3;
use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::Rng64;
use crate::scene::color::Color;

/// Parameters for a ring of vertical bars ("holographic data visualization").
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RadialBarsParams {
    pub count: u32,
    pub radius: f64,
    pub bar_width: f64,
    pub height_min: f64,
    pub height_span: f64,
    /// Hue range in degrees, `[hue_min, hue_min + hue_span)`.
    pub hue_min: f64,
    pub hue_span: f64,
    pub saturation: f64,
    pub lightness: f64,
    /// Amplitude of the per-bar breathing sinusoid.
    pub jitter: f64,
    pub emissive_intensity: f64,
    pub opacity: f64,
}

impl Default for RadialBarsParams {
    fn default() -> Self {
        Self {
            count: 20,
            radius: 1.5,
            bar_width: 0.1,
            height_min: 0.5,
            height_span: 2.0,
            hue_min: 200.0,
            hue_span: 60.0,
            saturation: 0.7,
            lightness: 0.6,
            jitter: 0.3,
            emissive_intensity: 0.2,
            opacity: 0.8,
        }
    }
}

impl RadialBarsParams {
    pub(crate) fn validate(&self) -> MotionResult<()> {
        if self.count == 0 {
            return Err(MotionError::validation("radial bars count must be > 0"));
        }
        let all = [
            self.radius,
            self.bar_width,
            self.height_min,
            self.height_span,
            self.hue_min,
            self.hue_span,
            self.saturation,
            self.lightness,
            self.jitter,
            self.emissive_intensity,
            self.opacity,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(MotionError::validation("radial bars parameters must be finite"));
        }
        Ok(())
    }
}

/// One bar of the ring, fixed at build time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Bar {
    pub index: u32,
    pub height: f64,
    pub color: Color,
    /// Position relative to the group origin.
    pub position: Vec3,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RadialBars {
    pub params: RadialBarsParams,
    pub bars: Vec<Bar>,
}

impl RadialBars {
    /// Lay out `count` bars on the ring and draw each bar's height and hue once.
    pub(crate) fn build(params: RadialBarsParams, rng: &mut Rng64) -> Self {
        let n = params.count;
        let bars = (0..n)
            .map(|i| {
                let height = rng.next_in(params.height_min, params.height_span);
                let hue = rng.next_in(params.hue_min, params.hue_span);
                let angle = f64::from(i) / f64::from(n) * TAU;
                Bar {
                    index: i,
                    height,
                    color: Color::hsl(hue, params.saturation, params.lightness),
                    position: Vec3::new(
                        angle.cos() * params.radius,
                        0.0,
                        angle.sin() * params.radius,
                    ),
                }
            })
            .collect();
        Self { params, bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Vertical scale of bar `i` at `t` seconds: `height + jitter * sin(t + i)`.
    ///
    /// The phase offset of bar `i` is `i` radians, which keeps neighbours out of step.
    pub fn bar_scale(&self, i: usize, t: f64) -> Option<f64> {
        self.bars
            .get(i)
            .map(|b| b.height + self.params.jitter * (t + f64::from(b.index)).sin())
    }

    /// Write every bar's vertical scale at `t` into `out`, reusing its allocation.
    pub fn fill_bar_scales(&self, t: f64, out: &mut Vec<f64>) {
        out.clear();
        out.extend(
            self.bars
                .iter()
                .map(|b| b.height + self.params.jitter * (t + f64::from(b.index)).sin()),
        );
    }

    pub fn bar_scales(&self, t: f64) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.bars.len());
        self.fill_bar_scales(t, &mut out);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/bars.rs"]
mod tests;
