use crate::foundation::core::{Transform3D, Vec3};
use crate::scene::hover::HoverStates;
use crate::scene::model::{Scene, SceneObject, SceneObjectKind};

/// Scene-space transform of the motion-driven part of `obj`, `elapsed` seconds in.
///
/// Pure: identical inputs give bit-identical outputs. Hovering scales the whole object group
/// (carrier, bob and spin included) by `hover_scale`, and only for `obj` itself.
pub fn compute_frame_transform(obj: &SceneObject, elapsed: f64, hovered: bool) -> Transform3D {
    transform_with_emphasis(obj, elapsed, emphasis_for(obj, hovered))
}

/// Like [`compute_frame_transform`] with an explicit group scale (e.g. a smoothed hover).
pub fn transform_with_emphasis(obj: &SceneObject, elapsed: f64, emphasis: f64) -> Transform3D {
    let carrier = obj.float().map(|f| f.transform(elapsed));
    in_scene(emphasis, carrier.as_ref(), &local_transform(obj, elapsed))
}

fn emphasis_for(obj: &SceneObject, hovered: bool) -> f64 {
    if hovered { obj.hover_scale() } else { 1.0 }
}

fn local_transform(obj: &SceneObject, elapsed_secs: f64) -> Transform3D {
    let m = obj.motion().sample(elapsed_secs);
    Transform3D {
        rotation: m.rotation,
        position: obj.base_position() + m.position_offset,
        scale: Vec3::ONE,
    }
}

fn rest_transform(obj: &SceneObject) -> Transform3D {
    Transform3D {
        position: obj.base_position(),
        ..Transform3D::default()
    }
}

// group(scale) * carrier * part
fn in_scene(group_scale: f64, carrier: Option<&Transform3D>, part: &Transform3D) -> Transform3D {
    let group = Transform3D {
        scale: Vec3::splat(group_scale),
        ..Transform3D::default()
    };
    match carrier {
        Some(c) => group.compose(&c.compose(part)),
        None => group.compose(part),
    }
}

/// Everything the renderer needs to draw one object for one frame.
///
/// The object is a small hierarchy: a hover group scaled by `group_scale`, the optional float
/// `carrier` inside it, and inside the carrier the motion-driven part (`transform`) next to the
/// parts that ignore the motion rule (`rest`).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ObjectFrame {
    pub id: String,
    pub kind: SceneObjectKind,
    pub hovered: bool,
    /// Uniform scale of the outermost group, 1 unless hovered.
    pub group_scale: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<Transform3D>,
    /// Motion-driven part, relative to the carrier.
    pub transform: Transform3D,
    /// Halo or fixed disc layers, relative to the carrier. Present only when the shape has them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest: Option<Transform3D>,
    /// Per-bar vertical scales for radial bar groups, in bar order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bar_scales: Vec<f64>,
}

impl ObjectFrame {
    /// Scene-space transform of the motion-driven part.
    pub fn world_transform(&self) -> Transform3D {
        in_scene(self.group_scale, self.carrier.as_ref(), &self.transform)
    }

    /// Scene-space transform of the parts that ignore the motion rule.
    pub fn world_rest_transform(&self) -> Option<Transform3D> {
        self.rest.map(|r| in_scene(self.group_scale, self.carrier.as_ref(), &r))
    }
}

pub fn compute_object_frame(obj: &SceneObject, elapsed_secs: f64, hovered: bool) -> ObjectFrame {
    object_frame_with_emphasis(obj, elapsed_secs, hovered, emphasis_for(obj, hovered))
}

/// Frames for every object of `scene`, in scene order.
pub fn compute_scene_frame(
    scene: &Scene,
    elapsed_secs: f64,
    hover: &HoverStates,
) -> Vec<ObjectFrame> {
    scene
        .objects()
        .iter()
        .enumerate()
        .map(|(i, obj)| compute_object_frame(obj, elapsed_secs, hover.is_hovered(i)))
        .collect()
}

pub(crate) fn object_frame_with_emphasis(
    obj: &SceneObject,
    elapsed_secs: f64,
    hovered: bool,
    emphasis: f64,
) -> ObjectFrame {
    ObjectFrame {
        id: obj.id().to_owned(),
        kind: obj.kind(),
        hovered,
        group_scale: emphasis,
        carrier: obj.float().map(|f| f.transform(elapsed_secs)),
        transform: local_transform(obj, elapsed_secs),
        rest: obj.has_rest_parts().then(|| rest_transform(obj)),
        bar_scales: obj
            .radial_bars()
            .map(|b| b.bar_scales(elapsed_secs))
            .unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/frame.rs"]
mod tests;
