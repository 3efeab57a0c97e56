use crate::foundation::error::{MotionError, MotionResult};
use crate::scene::model::Scene;

/// Per-object hover flags, indexed like [`Scene::objects`].
///
/// Owned by the host (or a [`crate::MotionSession`]) and passed into the pure frame functions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverStates {
    flags: Vec<bool>,
}

impl HoverStates {
    pub fn for_scene(scene: &Scene) -> Self {
        Self {
            flags: vec![false; scene.len()],
        }
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Set the flag for `index`; returns whether it changed.
    pub fn set(&mut self, index: usize, hovered: bool) -> MotionResult<bool> {
        let slot = self.flags.get_mut(index).ok_or_else(|| {
            MotionError::evaluation(format!("hover index {index} is out of range"))
        })?;
        let changed = *slot != hovered;
        *slot = hovered;
        Ok(changed)
    }

    /// Set the flag for the object named `id` in `scene`.
    pub fn set_by_id(&mut self, scene: &Scene, id: &str, hovered: bool) -> MotionResult<bool> {
        let index = scene
            .index_of(id)
            .ok_or_else(|| MotionError::evaluation(format!("unknown scene object '{id}'")))?;
        self.set(index, hovered)
    }

    pub fn any(&self) -> bool {
        self.flags.iter().any(|&h| h)
    }

    pub fn clear(&mut self) {
        self.flags.fill(false);
    }
}
