use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::spring::SpringConfig;
use crate::foundation::error::{MotionError, MotionResult};
use crate::scene::hero::hero_scene_def;
use crate::scene::model::SceneDef;
use crate::stats::{StatCounter, landing_stats};

fn default_scene() -> SceneDef {
    hero_scene_def(0)
}

fn default_boot_delay_ms() -> f64 {
    1000.0
}

/// JSON-facing session configuration.
///
/// Every field is optional; an empty object `{}` yields the hero scene, the landing-page stats, a
/// one second boot delay and instantaneous hover.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Overrides `scene.seed` when set.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_scene")]
    pub scene: SceneDef,
    #[serde(default = "landing_stats")]
    pub stats: Vec<StatCounter>,
    #[serde(default = "default_boot_delay_ms")]
    pub boot_delay_ms: f64,
    /// Ease hover scale changes with a spring instead of switching instantly.
    #[serde(default)]
    pub smooth_hover: bool,
    #[serde(default)]
    pub hover_spring: SpringConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            scene: default_scene(),
            stats: landing_stats(),
            boot_delay_ms: default_boot_delay_ms(),
            smooth_hover: false,
            hover_spring: SpringConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> MotionResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| MotionError::validation(format!("parse session config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> MotionResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MotionError::validation(format!("open session config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Scene table with the seed override applied.
    pub fn scene_def(&self) -> SceneDef {
        let mut def = self.scene.clone();
        if let Some(seed) = self.seed {
            def.seed = seed;
        }
        def
    }

    pub fn to_json_pretty(&self) -> MotionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the parts of the configuration not covered by scene building.
    pub fn validate(&self) -> MotionResult<()> {
        if !self.boot_delay_ms.is_finite() || self.boot_delay_ms < 0.0 {
            return Err(MotionError::validation("boot_delay_ms must be finite and >= 0"));
        }
        let s = &self.hover_spring;
        let finite = [s.tension, s.friction, s.mass].iter().all(|v| v.is_finite());
        if !finite || s.tension <= 0.0 || s.friction < 0.0 || s.mass <= 0.0 {
            return Err(MotionError::validation(
                "hover_spring needs finite tension > 0, friction >= 0 and mass > 0",
            ));
        }
        for stat in &self.stats {
            stat.animator()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
