//! Run configuration

use std::time::Duration;

use crate::types::Size;

/// Canvas size used until the host calls `set_bounds`
pub const DEFAULT_SIZE: Size = Size::new(400.0, 400.0);
/// Delay before the first replay step
pub const INITIAL_DELAY: Duration = Duration::from_millis(100);
/// Delay between replay steps
pub const STEP_DELAY: Duration = Duration::from_millis(1000);
/// Maximum number of commands one run may emit
pub const COMMAND_BUDGET: usize = 1_000_000;
/// Maximum number of loop iterations one run may execute
pub const LOOP_BUDGET: usize = 1_000;

/// Knobs for one [`Animator`](crate::Animator)
#[derive(Debug, Clone, PartialEq)]
pub struct AnimConfig {
    pub default_size: Size,
    pub initial_delay: Duration,
    pub step_delay: Duration,
    pub command_budget: usize,
    pub loop_budget: usize,
}

impl Default for AnimConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_SIZE,
            initial_delay: INITIAL_DELAY,
            step_delay: STEP_DELAY,
            command_budget: COMMAND_BUDGET,
            loop_budget: LOOP_BUDGET,
        }
    }
}

impl AnimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_size(mut self, width: f64, height: f64) -> Self {
        self.default_size = Size::new(width, height);
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    pub fn with_command_budget(mut self, budget: usize) -> Self {
        self.command_budget = budget;
        self
    }

    pub fn with_loop_budget(mut self, budget: usize) -> Self {
        self.loop_budget = budget;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AnimConfig::default();
        assert_eq!(cfg.default_size, Size::new(400.0, 400.0));
        assert_eq!(cfg.initial_delay, Duration::from_millis(100));
        assert_eq!(cfg.step_delay, Duration::from_secs(1));
        assert_eq!(cfg.command_budget, 1_000_000);
        assert_eq!(cfg.loop_budget, 1_000);
    }

    #[test]
    fn builder_overrides() {
        let cfg = AnimConfig::new()
            .with_default_size(640.0, 480.0)
            .with_step_delay(Duration::from_millis(16))
            .with_loop_budget(5);
        assert_eq!(cfg.default_size, Size::new(640.0, 480.0));
        assert_eq!(cfg.step_delay, Duration::from_millis(16));
        assert_eq!(cfg.loop_budget, 5);
        assert_eq!(cfg.command_budget, COMMAND_BUDGET);
    }
}
