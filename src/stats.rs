//! Landing-page statistics: counter targets plus how their values are displayed.

use crate::animation::counter::CounterAnimator;
use crate::foundation::error::{MotionError, MotionResult};

const MAX_DECIMALS: u8 = 9;

fn default_duration_ms() -> f64 {
    2000.0
}

/// One animated statistic, e.g. `10,000+ Enterprises Protected`.
///
/// Fractional values count up in units of `10^-decimals`: `99.9` with one decimal animates the
/// integer `999` and is displayed as `99.9`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StatCounter {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub decimals: u8,
    #[serde(default)]
    pub suffix: String,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
}

impl StatCounter {
    pub fn new(label: &str, value: f64, decimals: u8, suffix: &str) -> Self {
        Self {
            label: label.to_owned(),
            value,
            decimals,
            suffix: suffix.to_owned(),
            duration_ms: default_duration_ms(),
        }
    }

    /// Integer counter target in display units.
    pub fn scaled_target(&self) -> MotionResult<i64> {
        if self.decimals > MAX_DECIMALS {
            return Err(MotionError::validation(format!(
                "stat '{}': decimals must be <= {MAX_DECIMALS}",
                self.label
            )));
        }
        let scaled = (self.value * 10f64.powi(i32::from(self.decimals))).round();
        if !scaled.is_finite() || scaled.abs() > i64::MAX as f64 {
            return Err(MotionError::validation(format!(
                "stat '{}': value must be finite and in range",
                self.label
            )));
        }
        Ok(scaled as i64)
    }

    /// Fresh counter run for this statistic. Negative values are rejected by the counter.
    pub fn animator(&self) -> MotionResult<CounterAnimator> {
        CounterAnimator::new(self.scaled_target()?, self.duration_ms)
    }

    pub fn display(&self, scaled_value: u64) -> String {
        format_display(scaled_value, self.decimals, &self.suffix)
    }
}

/// Render a scaled counter value with thousands separators, fixed decimals and a suffix.
pub fn format_display(scaled_value: u64, decimals: u8, suffix: &str) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let unit = 10u64.pow(u32::from(decimals));
    let int = scaled_value / unit;
    let frac = scaled_value % unit;

    let digits = int.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 12 + suffix.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if decimals > 0 {
        out.push('.');
        out.push_str(&format!("{frac:0width$}", width = usize::from(decimals)));
    }
    out.push_str(suffix);
    out
}

/// The four statistics shown under the hero section.
pub fn landing_stats() -> Vec<StatCounter> {
    vec![
        StatCounter::new("Threat Detection Accuracy", 99.9, 1, "%"),
        StatCounter::new("Enterprises Protected", 10_000.0, 0, "+"),
        StatCounter::new("Transactions Monitored", 50.0, 0, "M+"),
        StatCounter::new("Real-time Monitoring", 24.0, 0, "/7"),
    ]
}

#[cfg(test)]
#[path = "../tests/unit/stats.rs"]
mod tests;
