//! The built-in hero scene: star shell, hovering AI core, floating shield, data ring and an
//! ambient sparkle field, in draw order.

use crate::foundation::core::{Axis, Vec3};
use crate::scene::bars::RadialBarsParams;
use crate::scene::color::Color;
use crate::scene::float::FloatParams;
use crate::scene::model::{DiscLayer, Material, SceneDef, SceneObjectDef, ShapeDef};
use crate::scene::motion::{Channel, MotionRule, MotionTerm};
use crate::scene::particles::{ParticleFieldParams, ParticleLayout};

pub const STARFIELD: &str = "starfield";
pub const AI_CORE: &str = "ai-core";
pub const SHIELD: &str = "shield";
pub const DATA_RING: &str = "data-ring";
pub const SPARKLE_FIELD: &str = "sparkle-field";

fn hex(s: &str) -> Color {
    Color::hex(s).unwrap_or(Color::WHITE)
}

/// The hero scene definition with the given seed.
pub fn hero_scene_def(seed: u64) -> SceneDef {
    SceneDef {
        seed,
        objects: vec![starfield(), ai_core(), shield(), data_ring(), sparkle_field()],
    }
}

fn starfield() -> SceneObjectDef {
    SceneObjectDef {
        id: STARFIELD.to_owned(),
        position: Vec3::ZERO,
        shape: ShapeDef::AmbientParticles(ParticleFieldParams {
            count: 1000,
            size: 7.0,
            speed: 1.0,
            color: Color::WHITE,
            opacity: 1.0,
            layout: ParticleLayout::Shell {
                radius: 300.0,
                depth: 60.0,
            },
        }),
        motion: MotionRule::default(),
        float: None,
        hover_scale: 1.0,
    }
}

fn ai_core() -> SceneObjectDef {
    SceneObjectDef {
        id: AI_CORE.to_owned(),
        position: Vec3::ZERO,
        shape: ShapeDef::OrganicBlob {
            radius: 1.0,
            detail: 4,
            distort: 0.4,
            distort_speed: 2.0,
            material: Material::new(hex("#3B82F6"), 0.8, 0.1),
            halo: Some(ParticleFieldParams::cube(50, 3.0, 2.0, 0.4, hex("#60A5FA"))),
        },
        motion: MotionRule::new([
            MotionTerm::sin(Channel::Rotation, Axis::X, 0.1, 0.5),
            // 0.01 rad per frame at 60 fps.
            MotionTerm::spin(Axis::Y, 0.6),
            MotionTerm::sin(Channel::Position, Axis::Y, 0.1, 1.0),
        ]),
        float: Some(FloatParams::new(2.0, 1.0, 2.0)),
        hover_scale: 1.2,
    }
}

fn shield() -> SceneObjectDef {
    SceneObjectDef {
        id: SHIELD.to_owned(),
        position: Vec3::new(4.0, 1.0, -2.0),
        shape: ShapeDef::FlatDisc {
            layers: vec![
                DiscLayer {
                    radius: 0.8,
                    thickness: 0.1,
                    sides: 6,
                    z_offset: 0.0,
                    material: Material::new(hex("#10B981"), 0.9, 0.1)
                        .with_emissive(hex("#065F46"), 0.2),
                    follows_motion: true,
                },
                DiscLayer {
                    radius: 0.6,
                    thickness: 0.05,
                    sides: 6,
                    z_offset: 0.05,
                    material: Material::new(hex("#34D399"), 0.8, 0.2)
                        .with_emissive(hex("#10B981"), 0.3),
                    follows_motion: false,
                },
            ],
        },
        motion: MotionRule::new([
            MotionTerm::sin(Channel::Rotation, Axis::Y, 0.2, 0.3),
            MotionTerm::cos(Channel::Position, Axis::Y, 0.15, 0.5),
        ]),
        float: Some(FloatParams::new(1.5, 0.5, 1.0)),
        hover_scale: 1.0,
    }
}

fn data_ring() -> SceneObjectDef {
    SceneObjectDef {
        id: DATA_RING.to_owned(),
        position: Vec3::new(-4.0, -1.0, -3.0),
        shape: ShapeDef::RadialBars(RadialBarsParams::default()),
        // 0.005 rad per frame at 60 fps.
        motion: MotionRule::new([MotionTerm::spin(Axis::Y, 0.3)]),
        float: None,
        hover_scale: 1.0,
    }
}

fn sparkle_field() -> SceneObjectDef {
    SceneObjectDef {
        id: SPARKLE_FIELD.to_owned(),
        position: Vec3::ZERO,
        shape: ShapeDef::AmbientParticles(ParticleFieldParams::cube(
            100,
            10.0,
            3.0,
            0.2,
            hex("#3B82F6"),
        )),
        motion: MotionRule::default(),
        float: None,
        hover_scale: 1.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/hero.rs"]
mod tests;
