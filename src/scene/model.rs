use std::collections::BTreeSet;

use crate::foundation::core::Vec3;
use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::Rng64;
use crate::scene::bars::{RadialBars, RadialBarsParams};
use crate::scene::color::Color;
use crate::scene::float::{FloatCarrier, FloatParams};
use crate::scene::motion::MotionRule;
use crate::scene::particles::{ParticleField, ParticleFieldParams};

/// Kind of decorative object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneObjectKind {
    OrganicBlob,
    FlatDisc,
    RadialBars,
    AmbientParticles,
}

impl SceneObjectKind {
    pub(crate) fn tag(self) -> u8 {
        match self {
            Self::OrganicBlob => 0,
            Self::FlatDisc => 1,
            Self::RadialBars => 2,
            Self::AmbientParticles => 3,
        }
    }
}

fn one() -> f64 {
    1.0
}

/// Surface parameters forwarded to the renderer's standard material.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Material {
    pub color: Color,
    #[serde(default)]
    pub metalness: f64,
    #[serde(default = "one")]
    pub roughness: f64,
    #[serde(default)]
    pub emissive: Option<Color>,
    #[serde(default)]
    pub emissive_intensity: f64,
    #[serde(default = "one")]
    pub opacity: f64,
}

impl Material {
    pub fn new(color: Color, metalness: f64, roughness: f64) -> Self {
        Self {
            color,
            metalness,
            roughness,
            emissive: None,
            emissive_intensity: 0.0,
            opacity: 1.0,
        }
    }

    pub fn with_emissive(mut self, emissive: Color, intensity: f64) -> Self {
        self.emissive = Some(emissive);
        self.emissive_intensity = intensity;
        self
    }

    fn validate(&self) -> MotionResult<()> {
        let ok = self.color.is_finite()
            && self.emissive.is_none_or(Color::is_finite)
            && [
                self.metalness,
                self.roughness,
                self.emissive_intensity,
                self.opacity,
            ]
            .iter()
            .all(|v| v.is_finite());
        if ok {
            Ok(())
        } else {
            Err(MotionError::validation("material parameters must be finite"))
        }
    }
}

/// One layer of a flat disc (polygonal prism standing on its face).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiscLayer {
    pub radius: f64,
    pub thickness: f64,
    #[serde(default = "default_sides")]
    pub sides: u32,
    /// Offset along the object's local Z axis.
    #[serde(default)]
    pub z_offset: f64,
    pub material: Material,
    /// False for layers that stay put while the object's motion rule drives the rest.
    #[serde(default = "yes")]
    pub follows_motion: bool,
}

fn yes() -> bool {
    true
}

fn default_sides() -> u32 {
    6
}

/// Kind-specific shape data of a scene object definition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeDef {
    OrganicBlob {
        #[serde(default = "one")]
        radius: f64,
        #[serde(default)]
        detail: u32,
        /// Surface distortion amount and speed, passed through to the renderer.
        #[serde(default)]
        distort: f64,
        #[serde(default)]
        distort_speed: f64,
        material: Material,
        /// Optional sparkle halo that moves with the blob.
        #[serde(default)]
        halo: Option<ParticleFieldParams>,
    },
    FlatDisc {
        layers: Vec<DiscLayer>,
    },
    RadialBars(RadialBarsParams),
    AmbientParticles(ParticleFieldParams),
}

impl ShapeDef {
    pub fn kind(&self) -> SceneObjectKind {
        match self {
            Self::OrganicBlob { .. } => SceneObjectKind::OrganicBlob,
            Self::FlatDisc { .. } => SceneObjectKind::FlatDisc,
            Self::RadialBars(_) => SceneObjectKind::RadialBars,
            Self::AmbientParticles(_) => SceneObjectKind::AmbientParticles,
        }
    }
}

/// Declarative description of one decorative object.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneObjectDef {
    pub id: String,
    #[serde(default)]
    pub position: Vec3,
    pub shape: ShapeDef,
    #[serde(default)]
    pub motion: MotionRule,
    #[serde(default)]
    pub float: Option<FloatParams>,
    /// Scale multiplier applied while the pointer hovers the object (1 = no emphasis).
    #[serde(default = "one")]
    pub hover_scale: f64,
}

/// Ordered scene table plus the seed for creation-time randomness.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneDef {
    #[serde(default)]
    pub seed: u64,
    pub objects: Vec<SceneObjectDef>,
}

/// Built shape with all random parameters sampled.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    OrganicBlob {
        radius: f64,
        detail: u32,
        distort: f64,
        distort_speed: f64,
        material: Material,
        halo: Option<ParticleField>,
    },
    FlatDisc {
        layers: Vec<DiscLayer>,
    },
    RadialBars(RadialBars),
    AmbientParticles(ParticleField),
}

/// A built decorative object.
///
/// Identity, kind and base position are fixed once built; only the per-frame transform derived
/// from them changes.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    id: String,
    kind: SceneObjectKind,
    base_position: Vec3,
    shape: Shape,
    motion: MotionRule,
    float: Option<FloatCarrier>,
    hover_scale: f64,
}

impl SceneObject {
    /// Validate `def` and sample its creation-time randomness from `rng`.
    pub fn build(def: &SceneObjectDef, rng: &mut Rng64) -> MotionResult<Self> {
        validate_object(def)?;

        let float = def.float.map(|p| FloatCarrier::build(p, rng));
        let shape = match &def.shape {
            ShapeDef::OrganicBlob {
                radius,
                detail,
                distort,
                distort_speed,
                material,
                halo,
            } => Shape::OrganicBlob {
                radius: *radius,
                detail: *detail,
                distort: *distort,
                distort_speed: *distort_speed,
                material: *material,
                halo: halo.map(|p| ParticleField::build(p, rng)),
            },
            ShapeDef::FlatDisc { layers } => Shape::FlatDisc {
                layers: layers.clone(),
            },
            ShapeDef::RadialBars(p) => Shape::RadialBars(RadialBars::build(*p, rng)),
            ShapeDef::AmbientParticles(p) => {
                Shape::AmbientParticles(ParticleField::build(*p, rng))
            }
        };

        Ok(Self {
            id: def.id.clone(),
            kind: def.shape.kind(),
            base_position: def.position,
            shape,
            motion: def.motion.clone(),
            float,
            hover_scale: def.hover_scale,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> SceneObjectKind {
        self.kind
    }

    pub fn base_position(&self) -> Vec3 {
        self.base_position
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn motion(&self) -> &MotionRule {
        &self.motion
    }

    pub fn float(&self) -> Option<&FloatCarrier> {
        self.float.as_ref()
    }

    pub fn hover_scale(&self) -> f64 {
        self.hover_scale
    }

    pub fn radial_bars(&self) -> Option<&RadialBars> {
        match &self.shape {
            Shape::RadialBars(b) => Some(b),
            _ => None,
        }
    }

    /// Whether part of the shape ignores the motion rule (the halo or a fixed disc layer).
    ///
    /// Such parts ride only the float carrier and the hover group.
    pub fn has_rest_parts(&self) -> bool {
        match &self.shape {
            Shape::OrganicBlob { halo, .. } => halo.is_some(),
            Shape::FlatDisc { layers } => layers.iter().any(|l| !l.follows_motion),
            Shape::RadialBars(_) | Shape::AmbientParticles(_) => false,
        }
    }

    /// Whether any output of this object changes with time.
    pub fn is_animated(&self) -> bool {
        !self.motion.is_static() || self.float.is_some() || self.radial_bars().is_some()
    }
}

fn validate_object(def: &SceneObjectDef) -> MotionResult<()> {
    let fail = |what: &str| -> MotionResult<()> {
        Err(MotionError::validation(format!(
            "scene object '{}': {what}",
            def.id
        )))
    };

    if def.id.trim().is_empty() {
        return Err(MotionError::validation("scene object id must be non-empty"));
    }
    if !def.position.is_finite() {
        return fail("position must be finite");
    }
    if !def.hover_scale.is_finite() || def.hover_scale <= 0.0 {
        return fail("hover_scale must be finite and > 0");
    }
    def.motion.validate()?;
    if let Some(p) = &def.float {
        p.validate()?;
    }

    match &def.shape {
        ShapeDef::OrganicBlob {
            radius,
            distort,
            distort_speed,
            material,
            halo,
            ..
        } => {
            if !radius.is_finite() || *radius <= 0.0 {
                return fail("blob radius must be finite and > 0");
            }
            if !distort.is_finite() || !distort_speed.is_finite() {
                return fail("blob distortion must be finite");
            }
            material.validate()?;
            if let Some(h) = halo {
                h.validate()?;
            }
        }
        ShapeDef::FlatDisc { layers } => {
            if layers.is_empty() {
                return fail("flat disc needs at least one layer");
            }
            for l in layers {
                if !(l.radius.is_finite() && l.radius > 0.0) || !l.thickness.is_finite() {
                    return fail("disc layer radius must be > 0 and thickness finite");
                }
                if l.sides < 3 || !l.z_offset.is_finite() {
                    return fail("disc layer needs >= 3 sides and a finite z offset");
                }
                l.material.validate()?;
            }
        }
        ShapeDef::RadialBars(p) => p.validate()?,
        ShapeDef::AmbientParticles(p) => p.validate()?,
    }
    Ok(())
}

/// A built, immutable scene: the fixed ordered list of decorative objects.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    seed: u64,
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Build every object of `def`, rejecting duplicate ids.
    ///
    /// Each object draws from its own RNG stream keyed by `(seed, id)`, so editing one object does
    /// not reshuffle the others.
    #[tracing::instrument(skip(def), fields(objects = def.objects.len(), seed = def.seed))]
    pub fn build(def: &SceneDef) -> MotionResult<Self> {
        let mut seen = BTreeSet::new();
        let mut objects = Vec::with_capacity(def.objects.len());
        for o in &def.objects {
            if !seen.insert(o.id.as_str()) {
                return Err(MotionError::validation(format!(
                    "duplicate scene object id '{}'",
                    o.id
                )));
            }
            let mut rng = Rng64::for_stream(def.seed, &o.id);
            objects.push(SceneObject::build(o, &mut rng)?);
        }
        tracing::debug!(count = objects.len(), "scene built");
        Ok(Self {
            seed: def.seed,
            objects,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
