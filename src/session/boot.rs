use crate::foundation::error::{MotionError, MotionResult};

/// Splash-screen gate: the page counts as loaded once `delay_ms` of session time has passed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BootGate {
    delay_ms: f64,
}

impl Default for BootGate {
    fn default() -> Self {
        Self { delay_ms: 1000.0 }
    }
}

impl BootGate {
    pub fn new(delay_ms: f64) -> MotionResult<Self> {
        if !delay_ms.is_finite() || delay_ms < 0.0 {
            return Err(MotionError::validation(format!(
                "boot delay must be finite and >= 0 ms (got {delay_ms})"
            )));
        }
        Ok(Self { delay_ms })
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    pub fn is_loaded(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.delay_ms
    }

    pub fn remaining_ms(&self, elapsed_ms: f64) -> f64 {
        (self.delay_ms - elapsed_ms).max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/boot.rs"]
mod tests;
