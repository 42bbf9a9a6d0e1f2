//! The animation driver.
//!
//! A run has two phases. First the user code is evaluated against an
//! [`Emitter`], which only records commands and grows the canvas estimate.
//! Then the recorded log is replayed one entry per timer tick, painting on
//! the scratch surface and composing the display after every step.
//!
//! ```text
//! Idle ──execute──▶ Preparing ──ok / budget──▶ Replaying ──log empty──▶ Finished
//!   ▲                   │                          │
//!   └── program error ──┘                          └──cancel observed──▶ Cancelled
//! ```
//!
//! The driver never blocks. It asks its [`Scheduler`] for a timer and the
//! host calls [`Animator::tick`] when it fires.

use std::fmt;

use crate::config::AnimConfig;
use crate::emitter::Emitter;
use crate::errors::EvalError;
use crate::eval::Evaluator;
use crate::host::Host;
use crate::log::debug;
use crate::render::Surfaces;
use crate::scheduler::{ManualScheduler, Scheduler};
use crate::script::ScriptEvaluator;
use crate::session::RunSession;
use crate::step::{TurtleState, step};
use crate::surface::Surface;
use crate::types::Size;

/// Where the driver is in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing scheduled
    Idle,
    /// User code is being evaluated
    Preparing,
    /// The log is being replayed, one entry per tick
    Replaying,
    /// The log ran dry
    Finished,
    /// The run stopped because `cancel` was called
    Cancelled,
}

impl Phase {
    /// True once a run has ended, one way or the other
    pub fn is_done(self) -> bool {
        matches!(self, Phase::Finished | Phase::Cancelled)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Preparing => "preparing",
            Phase::Replaying => "replaying",
            Phase::Finished => "finished",
            Phase::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Drives one turtle run at a time against a pair of surfaces.
pub struct Animator<S, H, C> {
    config: AnimConfig,
    surfaces: Surfaces<S>,
    host: H,
    scheduler: C,
    session: RunSession,
    turtle: TurtleState,
    phase: Phase,
    steps: usize,
}

impl<S: Surface, H: Host, C: Scheduler> Animator<S, H, C> {
    /// Set up a driver and reset it, so the turtle is drawn at the centre of
    /// a canvas of `config.default_size`.
    pub fn new(scratch: S, display: S, host: H, scheduler: C, config: AnimConfig) -> Self {
        let size = config.default_size;
        let session = RunSession::new(size, config.command_budget, config.loop_budget);
        let mut animator = Self {
            surfaces: Surfaces::new(scratch, display),
            host,
            scheduler,
            session,
            turtle: TurtleState::new(size.center()),
            phase: Phase::Idle,
            steps: 0,
            config,
        };
        animator.reset();
        animator
    }

    /// Change the default canvas size and reset.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.config.default_size = Size::new(width, height);
        self.reset();
    }

    /// Abandon whatever is in flight and go back to a clean canvas of the
    /// default size with the turtle in the middle.
    pub fn reset(&mut self) {
        self.host.unhighlight_last_block();

        if let Some(timer) = self.session.take_pending() {
            self.scheduler.cancel(timer);
        }

        let size = self.config.default_size;
        self.session = RunSession::new(size, self.config.command_budget, self.config.loop_budget);
        self.turtle = TurtleState::new(size.center());
        self.surfaces.resize(size);
        self.surfaces.display(&self.turtle);
        self.steps = 0;
        self.phase = Phase::Idle;
    }

    /// Evaluate `code` with `evaluator`, then start replaying what it emitted.
    ///
    /// Running out of budget still animates everything emitted up to that
    /// point. Any other evaluation error is returned and nothing is scheduled.
    pub fn execute<E: Evaluator + ?Sized>(&mut self, evaluator: &mut E, code: &str) -> miette::Result<()> {
        self.reset();
        self.phase = Phase::Preparing;

        let outcome = evaluator.evaluate(code, &mut Emitter::new(&mut self.session));
        match outcome {
            Ok(()) => {}
            Err(_err @ EvalError::BudgetExceeded { .. }) => {
                debug!(%_err, emitted = self.session.log().len(), "run truncated");
            }
            Err(EvalError::Program(report)) => {
                self.phase = Phase::Idle;
                return Err(report);
            }
        }

        let canvas = self.session.canvas();
        let starting = self.session.bounds().starting();
        debug!(%canvas, x = starting.x, y = starting.y, commands = self.session.log().len(), "dry run done");

        self.surfaces.resize(canvas);
        let default = self.config.default_size;
        self.host
            .scroll_to(starting.x - default.w / 2.0, starting.y - default.h / 2.0);
        self.turtle.position = starting;

        let timer = self.scheduler.schedule(self.config.initial_delay);
        self.session.set_pending(timer);
        self.phase = Phase::Replaying;
        Ok(())
    }

    /// [`execute`](Self::execute) with the built-in script language.
    pub fn execute_script(&mut self, code: &str) -> miette::Result<()> {
        self.execute(&mut ScriptEvaluator::new(), code)
    }

    /// Ask the run to stop. The tick already scheduled still happens and
    /// ends the run instead of stepping.
    pub fn cancel(&mut self) {
        self.session.request_cancel();
    }

    /// Advance the replay by one entry. Call this when the scheduled timer
    /// fires. Outside of `Replaying` this does nothing.
    pub fn tick(&mut self) -> Phase {
        if self.phase != Phase::Replaying {
            return self.phase;
        }
        // Ticked early by the host: drop the timer so it cannot fire later.
        match self.session.take_pending() {
            Some(timer) => self.scheduler.cancel(timer),
            None => {
                crate::log::warn!("tick without a pending timer");
            }
        }

        let cancelled = self.session.is_cancelled();
        let entry = match self.session.log.pop() {
            Some(entry) if !cancelled => entry,
            _ => {
                self.host.unhighlight_last_block();
                self.host.finish_execution();
                self.phase = if cancelled {
                    Phase::Cancelled
                } else {
                    Phase::Finished
                };
                debug!(phase = %self.phase, steps = self.steps, "replay over");
                return self.phase;
            }
        };

        self.host.unhighlight_last_block();
        self.host.highlight_block(entry.statement_id.host_id());
        step(&mut self.turtle, &entry.command, self.surfaces.scratch_mut());
        self.surfaces.display(&self.turtle);
        self.steps += 1;

        let timer = self.scheduler.schedule(self.config.step_delay);
        self.session.set_pending(timer);
        self.phase
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &AnimConfig {
        &self.config
    }

    pub fn turtle(&self) -> &TurtleState {
        &self.turtle
    }

    pub fn surfaces(&self) -> &Surfaces<S> {
        &self.surfaces
    }

    pub fn session(&self) -> &RunSession {
        &self.session
    }

    /// Steps replayed in the current run
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scheduler(&self) -> &C {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut C {
        &mut self.scheduler
    }
}

impl<S: Surface, H: Host> Animator<S, H, ManualScheduler> {
    /// Fire the next due timer and tick. Returns `None` when nothing was
    /// scheduled.
    pub fn advance(&mut self) -> Option<Phase> {
        self.scheduler.fire_next()?;
        Some(self.tick())
    }

    /// Fire timers until none are left, returning the final phase.
    pub fn run_until_idle(&mut self) -> Phase {
        while self.advance().is_some() {}
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::errors::ScriptError;
    use crate::eval::from_fn;
    use crate::host::{HostEvent, RecordingHost};
    use crate::surface::RecordingSurface;
    use glam::dvec2;
    use std::time::Duration;

    type TestAnimator = Animator<RecordingSurface, RecordingHost, ManualScheduler>;

    fn animator() -> TestAnimator {
        Animator::new(
            RecordingSurface::default(),
            RecordingSurface::default(),
            RecordingHost::new(),
            ManualScheduler::new(),
            AnimConfig::default(),
        )
    }

    #[test]
    fn new_resets_to_default_canvas() {
        let a = animator();
        assert_eq!(a.phase(), Phase::Idle);
        assert_eq!(a.surfaces().size(), Size::new(400.0, 400.0));
        assert_eq!(a.turtle().position, dvec2(200.0, 200.0));
        // Just the turtle marker on the display.
        assert_eq!(a.surfaces().display_surface().ops().len(), 2);
        assert_eq!(a.host().events(), [HostEvent::Unhighlight]);
    }

    #[test]
    fn tick_when_idle_is_a_no_op() {
        let mut a = animator();
        assert_eq!(a.tick(), Phase::Idle);
        assert_eq!(a.host().events().len(), 1);
    }

    #[test]
    fn execute_schedules_first_step_after_initial_delay() {
        let mut a = animator();
        a.execute_script("fd 10").unwrap();
        assert_eq!(a.phase(), Phase::Replaying);
        assert_eq!(a.scheduler().pending(), 1);
        assert!(a.session().pending_timer().is_some());
        a.advance();
        assert_eq!(a.scheduler().now(), Duration::from_millis(100));
        a.advance();
        assert_eq!(a.scheduler().now(), Duration::from_millis(1100));
        assert_eq!(a.phase(), Phase::Finished);
    }

    #[test]
    fn program_error_returns_to_idle() {
        let mut a = animator();
        let mut failing = from_fn(|_, t| {
            t.move_forward(10.0, "a")?;
            Err(EvalError::Program(miette::miette!("boom")))
        });
        let err = a.execute(&mut failing, "").unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(a.phase(), Phase::Idle);
        assert!(a.scheduler().is_idle());
        assert_eq!(a.run_until_idle(), Phase::Idle);
    }

    #[test]
    fn script_syntax_error_is_a_diagnostic() {
        let mut a = animator();
        let err = a.execute_script("fd 10 nonsense").unwrap_err();
        assert!(err.downcast_ref::<ScriptError>().is_some());
        assert_eq!(a.phase(), Phase::Idle);
    }

    #[test]
    fn cancel_before_first_tick_stops_without_stepping() {
        let mut a = animator();
        a.execute_script("fd 10 fd 10").unwrap();
        a.cancel();
        assert_eq!(a.run_until_idle(), Phase::Cancelled);
        assert_eq!(a.steps(), 0);
        assert!(a.host().finished());
        assert!(a.host().highlighted().is_empty());
    }

    #[test]
    fn reset_cancels_pending_timer() {
        let mut a = animator();
        a.execute_script("fd 10").unwrap();
        a.reset();
        assert!(a.scheduler().is_idle());
        assert_eq!(a.phase(), Phase::Idle);
        assert!(a.session().log().is_empty());
    }

    #[test]
    fn set_bounds_changes_default_canvas() {
        let mut a = animator();
        a.set_bounds(640.0, 480.0);
        assert_eq!(a.surfaces().size(), Size::new(640.0, 480.0));
        assert_eq!(a.turtle().position, dvec2(320.0, 240.0));
    }

    #[test]
    fn log_is_drained_by_replay() {
        let mut a = animator();
        a.execute_script("pu fd 10 pd").unwrap();
        assert_eq!(a.session().log().len(), 3);
        a.advance();
        assert_eq!(
            a.session().log().peek().map(|e| &e.command),
            Some(&Command::Forward { distance: 10.0 })
        );
        a.run_until_idle();
        assert!(a.session().log().is_empty());
        assert_eq!(a.steps(), 3);
    }
}
