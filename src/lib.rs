//! credio-motion is the deterministic motion core behind the Credio landing page hero.
//!
//! It has two halves:
//!
//! - a counter animator ([`animate`]) that counts a displayed integer up to a target over a fixed
//!   duration, sampled with host timestamps
//! - a declarative decorative scene ([`SceneDef`] built into a [`Scene`]) whose per-object
//!   transforms are pure functions of elapsed time and hover state
//!
//! A [`MotionSession`] ties both to a host frame callback through the [`FrameDriven`] trait.
//!
//! ```
//! use std::time::Duration;
//! use credio_motion::{FrameDriven, MotionSession, SessionConfig};
//!
//! let mut session = MotionSession::new(&SessionConfig::default()).unwrap();
//! session.mount_stats().unwrap();
//! session.on_frame(Duration::ZERO);
//! let frame = session.on_frame(Duration::from_secs(2));
//! assert!(frame.loaded);
//! assert_eq!(frame.counters[0].display, "99.9%");
//! ```
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod scene;
pub(crate) mod session;
pub(crate) mod stats;

pub use crate::foundation::core::{Axis, Transform3D, Vec3};
pub use crate::foundation::error::{MotionError, MotionResult};
pub use crate::foundation::math::Rng64;

pub use crate::animation::counter::{CounterAnimator, CounterState, CounterValues, animate};
pub use crate::animation::spring::{Spring, SpringConfig};

pub use crate::scene::bars::{Bar, RadialBars, RadialBarsParams};
pub use crate::scene::color::Color;
pub use crate::scene::float::{FloatCarrier, FloatParams};
pub use crate::scene::frame::{
    ObjectFrame, compute_frame_transform, compute_object_frame, compute_scene_frame,
    transform_with_emphasis,
};
pub use crate::scene::hero::{AI_CORE, DATA_RING, SHIELD, SPARKLE_FIELD, STARFIELD, hero_scene_def};
pub use crate::scene::hover::HoverStates;
pub use crate::scene::model::{
    DiscLayer, Material, Scene, SceneDef, SceneObject, SceneObjectDef, SceneObjectKind, Shape,
    ShapeDef,
};
pub use crate::scene::motion::{Channel, MotionRule, MotionSample, MotionTerm, Wave};
pub use crate::scene::particles::{ParticleField, ParticleFieldParams, ParticleLayout};

pub use crate::session::boot::BootGate;
pub use crate::session::config::SessionConfig;
pub use crate::session::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use crate::session::motion_session::{
    CounterFrame, CounterId, FrameDriven, FrameOutput, MotionSession, drive,
};

pub use crate::stats::{StatCounter, format_display, landing_stats};
