use crate::foundation::error::{MotionError, MotionResult};

/// Observable state of one counter run.
///
/// `current_value` stays within `[0, target_value]` and never decreases for the lifetime of a run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CounterState {
    /// Last emitted display value.
    pub current_value: u64,
    /// Final display value, fixed at construction.
    pub target_value: u64,
    /// Run length in milliseconds (strictly positive).
    pub duration_ms: f64,
    /// Host timestamp of the first sample, `None` until the counter has been sampled once.
    pub start_timestamp: Option<f64>,
}

/// Drives a displayed integer from `0` to a target over a fixed duration.
///
/// The animator is sampled with host timestamps (milliseconds, any monotonic origin). The first
/// sample pins the start time; every later sample emits `floor(progress * target)` where
/// `progress = clamp((t - start) / duration, 0, 1)`. Once the elapsed time reaches the duration the
/// animator snaps to the target, emits it exactly and stops: further samples return `None`.
///
/// ```
/// let mut c = credio_motion::animate(100, 1000.0).unwrap();
/// let seq: Vec<u64> = [0.0, 250.0, 500.0, 750.0, 1000.0]
///     .into_iter()
///     .filter_map(|t| c.sample(t))
///     .collect();
/// assert_eq!(seq, vec![0, 25, 50, 75, 100]);
/// assert!(c.is_finished());
/// ```
#[derive(Clone, Debug)]
pub struct CounterAnimator {
    state: CounterState,
    finished: bool,
}

/// Start a counter run towards `target` over `duration_ms`.
///
/// Negative targets are rejected rather than clamped.
pub fn animate(target: i64, duration_ms: f64) -> MotionResult<CounterAnimator> {
    CounterAnimator::new(target, duration_ms)
}

impl CounterAnimator {
    /// Construct an idle counter. See [`animate`].
    pub fn new(target: i64, duration_ms: f64) -> MotionResult<Self> {
        let target_value = u64::try_from(target).map_err(|_| {
            MotionError::validation(format!("counter target must be >= 0 (got {target})"))
        })?;
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(MotionError::validation(format!(
                "counter duration must be finite and > 0 ms (got {duration_ms})"
            )));
        }
        Ok(Self {
            state: CounterState {
                current_value: 0,
                target_value,
                duration_ms,
                start_timestamp: None,
            },
            finished: false,
        })
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn current_value(&self) -> u64 {
        self.state.current_value
    }

    pub fn target(&self) -> u64 {
        self.state.target_value
    }

    /// True once the terminal value has been emitted.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the host should schedule another sample for this counter.
    pub fn wants_next_frame(&self) -> bool {
        !self.finished
    }

    /// Progress in `[0, 1]` at `now_ms`, without mutating the counter.
    ///
    /// Returns `0.0` before the first sample.
    pub fn progress_at(&self, now_ms: f64) -> f64 {
        match self.state.start_timestamp {
            Some(start) if now_ms.is_finite() => {
                progress(now_ms - start, self.state.duration_ms)
            }
            _ if self.finished => 1.0,
            _ => 0.0,
        }
    }

    /// Sample the counter at host time `now_ms`.
    ///
    /// Returns the value to display, or `None` once the run has finished. Timestamps earlier than
    /// the start count as zero progress. Non-finite timestamps re-emit the current value.
    pub fn sample(&mut self, now_ms: f64) -> Option<u64> {
        if self.finished {
            return None;
        }
        if !now_ms.is_finite() {
            return Some(self.state.current_value);
        }

        let start = *self.state.start_timestamp.get_or_insert(now_ms);
        let target = self.state.target_value;
        let p = progress(now_ms - start, self.state.duration_ms);

        let value = if p >= 1.0 || target == 0 {
            self.finished = true;
            tracing::debug!(target, "counter reached target");
            target
        } else {
            ((p * target as f64).floor() as u64).min(target)
        };

        // Non-decreasing even when the host hands us out-of-order timestamps.
        let value = value.max(self.state.current_value);
        self.state.current_value = value;
        Some(value)
    }

    /// Turn the counter into a lazy sequence of display values driven by `timestamps`.
    ///
    /// The iterator ends right after the terminal emission or when `timestamps` runs out.
    pub fn values<I>(self, timestamps: I) -> CounterValues<I::IntoIter>
    where
        I: IntoIterator<Item = f64>,
    {
        CounterValues {
            counter: self,
            timestamps: timestamps.into_iter(),
        }
    }
}

fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    // Final snap: anything at or past the duration is exactly 1.
    if elapsed_ms >= duration_ms {
        1.0
    } else {
        (elapsed_ms / duration_ms).clamp(0.0, 1.0)
    }
}

/// Iterator returned by [`CounterAnimator::values`].
#[derive(Clone, Debug)]
pub struct CounterValues<I> {
    counter: CounterAnimator,
    timestamps: I,
}

impl<I> CounterValues<I> {
    pub fn counter(&self) -> &CounterAnimator {
        &self.counter
    }
}

impl<I> Iterator for CounterValues<I>
where
    I: Iterator<Item = f64>,
{
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.counter.is_finished() {
            return None;
        }
        let t = self.timestamps.next()?;
        self.counter.sample(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/counter.rs"]
mod tests;
