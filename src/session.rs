//! State of the run currently in flight.

use crate::bounds::BoundsEstimator;
use crate::command::CommandLog;
use crate::errors::{BudgetKind, EvalError};
use crate::scheduler::TimerId;
use crate::types::Size;

/// A counter that refuses to go past its limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    kind: BudgetKind,
    limit: usize,
    used: usize,
}

impl Budget {
    pub fn new(kind: BudgetKind, limit: usize) -> Self {
        Self {
            kind,
            limit,
            used: 0,
        }
    }

    /// Use one unit, or fail with the infinite-loop sentinel once `limit`
    /// units have already been used.
    pub fn spend(&mut self) -> Result<(), EvalError> {
        if self.used >= self.limit {
            return Err(EvalError::BudgetExceeded {
                kind: self.kind,
                limit: self.limit,
            });
        }
        self.used += 1;
        Ok(())
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn remaining(&self) -> usize {
        self.limit - self.used
    }
}

/// Everything one run owns: the transcript, the dry-run cursor, execution
/// budgets, the pending replay timer, and the cancellation flag.
///
/// Only one timer may be pending at a time; the driver clears it before
/// scheduling another and cancels it on reset.
#[derive(Debug, Clone)]
pub struct RunSession {
    pub(crate) log: CommandLog,
    pub(crate) bounds: BoundsEstimator,
    pub(crate) commands: Budget,
    pub(crate) loops: Budget,
    pending: Option<TimerId>,
    cancelled: bool,
}

impl RunSession {
    pub fn new(canvas: Size, command_budget: usize, loop_budget: usize) -> Self {
        Self {
            log: CommandLog::new(),
            bounds: BoundsEstimator::new(canvas),
            commands: Budget::new(BudgetKind::Commands, command_budget),
            loops: Budget::new(BudgetKind::LoopIterations, loop_budget),
            pending: None,
            cancelled: false,
        }
    }

    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    pub fn bounds(&self) -> &BoundsEstimator {
        &self.bounds
    }

    /// Canvas size implied by everything emitted so far
    pub fn canvas(&self) -> Size {
        self.bounds.canvas()
    }

    pub fn commands_emitted(&self) -> usize {
        self.commands.used()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub(crate) fn request_cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending
    }

    pub(crate) fn set_pending(&mut self, timer: TimerId) {
        debug_assert!(self.pending.is_none(), "a replay timer is already pending");
        self.pending = Some(timer);
    }

    pub(crate) fn take_pending(&mut self) -> Option<TimerId> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_allows_exactly_its_limit() {
        let mut b = Budget::new(BudgetKind::Commands, 3);
        assert!(b.spend().is_ok());
        assert!(b.spend().is_ok());
        assert!(b.spend().is_ok());
        assert_eq!(b.remaining(), 0);
        let err = b.spend().unwrap_err();
        assert!(matches!(
            err,
            EvalError::BudgetExceeded {
                kind: BudgetKind::Commands,
                limit: 3
            }
        ));
        assert_eq!(b.used(), 3);
    }

    #[test]
    fn zero_budget_rejects_immediately() {
        let mut b = Budget::new(BudgetKind::LoopIterations, 0);
        assert!(b.spend().unwrap_err().is_budget_exceeded());
    }

    #[test]
    fn fresh_session_is_empty() {
        let s = RunSession::new(Size::new(400.0, 400.0), 10, 10);
        assert!(s.log().is_empty());
        assert_eq!(s.canvas(), Size::new(400.0, 400.0));
        assert_eq!(s.pending_timer(), None);
        assert!(!s.is_cancelled());
        assert_eq!(s.commands_emitted(), 0);
    }

    #[test]
    fn pending_timer_is_taken_once() {
        let mut s = RunSession::new(Size::new(1.0, 1.0), 1, 1);
        s.set_pending(TimerId(4));
        assert_eq!(s.take_pending(), Some(TimerId(4)));
        assert_eq!(s.take_pending(), None);
    }
}
