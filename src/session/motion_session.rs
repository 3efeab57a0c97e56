use std::time::Duration;

use crate::animation::counter::CounterAnimator;
use crate::animation::spring::Spring;
use crate::foundation::core::{duration_millis, duration_secs};
use crate::foundation::error::{MotionError, MotionResult};
use crate::scene::frame::{ObjectFrame, object_frame_with_emphasis};
use crate::scene::hover::HoverStates;
use crate::scene::model::Scene;
use crate::session::boot::BootGate;
use crate::session::config::SessionConfig;
use crate::stats::{StatCounter, format_display};

/// Anything the host calls once per displayed frame with the measured elapsed time.
pub trait FrameDriven {
    type Output;

    fn on_frame(&mut self, elapsed: Duration) -> Self::Output;
}

/// Feed a synthetic sequence of elapsed times to `driver`, collecting each frame's output.
pub fn drive<D, I>(driver: &mut D, timestamps: I) -> Vec<D::Output>
where
    D: FrameDriven,
    I: IntoIterator<Item = Duration>,
{
    timestamps.into_iter().map(|t| driver.on_frame(t)).collect()
}

/// Handle returned by [`MotionSession::mount_counter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct CounterId(pub u32);

#[derive(Clone, Debug)]
struct MountedCounter {
    id: CounterId,
    label: Option<String>,
    decimals: u8,
    suffix: String,
    animator: CounterAnimator,
    value: u64,
}

/// Display state of one mounted counter for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CounterFrame {
    pub id: CounterId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: u64,
    pub display: String,
    pub finished: bool,
}

/// Everything the host needs to present one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameOutput {
    pub elapsed_secs: f64,
    pub loaded: bool,
    pub objects: Vec<ObjectFrame>,
    pub counters: Vec<CounterFrame>,
    /// False only once nothing in the session can change on a later frame.
    pub wants_next_frame: bool,
}

/// Frame-driven owner of a built scene, its hover flags, the mounted counters and the boot gate.
///
/// All motion is a function of the elapsed time passed to [`FrameDriven::on_frame`]. The only
/// state carried between frames is counter progress and, when hover smoothing is enabled, the
/// per-object hover springs.
#[derive(Clone, Debug)]
pub struct MotionSession {
    scene: Scene,
    hover: HoverStates,
    emphasis: Option<Vec<Spring>>,
    boot: BootGate,
    stats: Vec<StatCounter>,
    counters: Vec<MountedCounter>,
    next_counter_id: u32,
    last_elapsed_secs: Option<f64>,
}

impl MotionSession {
    /// Validate `config` and build its scene.
    #[tracing::instrument(skip_all)]
    pub fn new(config: &SessionConfig) -> MotionResult<Self> {
        config.validate()?;
        let scene = Scene::build(&config.scene_def())?;
        let emphasis = config
            .smooth_hover
            .then(|| vec![Spring::new(1.0, config.hover_spring); scene.len()]);
        Ok(Self {
            hover: HoverStates::for_scene(&scene),
            scene,
            emphasis,
            boot: BootGate::new(config.boot_delay_ms)?,
            stats: config.stats.clone(),
            counters: Vec::new(),
            next_counter_id: 0,
            last_elapsed_secs: None,
        })
    }

    /// Session over an already built scene with default boot delay, no stats and instant hover.
    pub fn from_scene(scene: Scene) -> Self {
        Self {
            hover: HoverStates::for_scene(&scene),
            scene,
            emphasis: None,
            boot: BootGate::default(),
            stats: Vec::new(),
            counters: Vec::new(),
            next_counter_id: 0,
            last_elapsed_secs: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn hover_states(&self) -> &HoverStates {
        &self.hover
    }

    pub fn stats(&self) -> &[StatCounter] {
        &self.stats
    }

    /// Mark the object `id` as hovered. Returns whether the flag changed.
    pub fn pointer_enter(&mut self, id: &str) -> MotionResult<bool> {
        let changed = self.hover.set_by_id(&self.scene, id, true)?;
        if changed {
            tracing::debug!(id, "pointer enter");
        }
        Ok(changed)
    }

    pub fn pointer_leave(&mut self, id: &str) -> MotionResult<bool> {
        let changed = self.hover.set_by_id(&self.scene, id, false)?;
        if changed {
            tracing::debug!(id, "pointer leave");
        }
        Ok(changed)
    }

    /// Mount a plain integer counter. Its start time is pinned by the next frame.
    pub fn mount_counter(&mut self, target: i64, duration_ms: f64) -> MotionResult<CounterId> {
        let animator = CounterAnimator::new(target, duration_ms)?;
        Ok(self.push_counter(None, 0, String::new(), animator))
    }

    /// Mount a counter for a landing-page statistic.
    pub fn mount_stat(&mut self, stat: &StatCounter) -> MotionResult<CounterId> {
        let animator = stat.animator()?;
        Ok(self.push_counter(
            Some(stat.label.clone()),
            stat.decimals,
            stat.suffix.clone(),
            animator,
        ))
    }

    /// Mount every configured statistic, in order.
    pub fn mount_stats(&mut self) -> MotionResult<Vec<CounterId>> {
        let stats = self.stats.clone();
        stats.iter().map(|s| self.mount_stat(s)).collect()
    }

    /// Stop and forget a counter. Returns false if `id` was not mounted.
    pub fn unmount_counter(&mut self, id: CounterId) -> bool {
        let before = self.counters.len();
        self.counters.retain(|c| c.id != id);
        let removed = self.counters.len() != before;
        if removed {
            tracing::debug!(counter = id.0, "counter unmounted");
        }
        removed
    }

    pub fn counter_value(&self, id: CounterId) -> MotionResult<u64> {
        self.counters
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.value)
            .ok_or_else(|| MotionError::evaluation(format!("counter {} is not mounted", id.0)))
    }

    pub fn is_loaded(&self, elapsed: Duration) -> bool {
        self.boot.is_loaded(duration_millis(elapsed))
    }

    fn push_counter(
        &mut self,
        label: Option<String>,
        decimals: u8,
        suffix: String,
        animator: CounterAnimator,
    ) -> CounterId {
        let id = CounterId(self.next_counter_id);
        self.next_counter_id = self.next_counter_id.wrapping_add(1);
        tracing::debug!(counter = id.0, target = animator.target(), "counter mounted");
        self.counters.push(MountedCounter {
            id,
            label,
            decimals,
            suffix,
            animator,
            value: 0,
        });
        id
    }
}

impl FrameDriven for MotionSession {
    type Output = FrameOutput;

    fn on_frame(&mut self, elapsed: Duration) -> FrameOutput {
        let secs = duration_secs(elapsed);
        let ms = duration_millis(elapsed);
        let dt = self
            .last_elapsed_secs
            .map_or(0.0, |prev| (secs - prev).max(0.0));
        self.last_elapsed_secs = Some(secs);

        let mut objects = Vec::with_capacity(self.scene.len());
        for (i, obj) in self.scene.objects().iter().enumerate() {
            let hovered = self.hover.is_hovered(i);
            let target = if hovered { obj.hover_scale() } else { 1.0 };
            let emphasis = match self.emphasis.as_mut().and_then(|s| s.get_mut(i)) {
                Some(spring) => {
                    spring.set_target(target);
                    spring.step(dt)
                }
                None => target,
            };
            objects.push(object_frame_with_emphasis(obj, secs, hovered, emphasis));
        }

        let mut counters = Vec::with_capacity(self.counters.len());
        for c in &mut self.counters {
            if let Some(v) = c.animator.sample(ms) {
                c.value = v;
            }
            counters.push(CounterFrame {
                id: c.id,
                label: c.label.clone(),
                value: c.value,
                display: format_display(c.value, c.decimals, &c.suffix),
                finished: c.animator.is_finished(),
            });
        }

        let loaded = self.boot.is_loaded(ms);
        let wants_next_frame = !loaded
            || self.scene.objects().iter().any(|o| o.is_animated())
            || self.counters.iter().any(|c| c.animator.wants_next_frame())
            || self
                .emphasis
                .as_ref()
                .is_some_and(|s| s.iter().any(|sp| !sp.is_at_rest()));

        tracing::trace!(
            elapsed_ms = ms,
            objects = objects.len(),
            counters = counters.len(),
            loaded,
            "frame"
        );

        FrameOutput {
            elapsed_secs: secs,
            loaded,
            objects,
            counters,
            wants_next_frame,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/motion_session.rs"]
mod tests;
