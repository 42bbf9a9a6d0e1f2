//! The turtle API user code calls.
//!
//! Each method records one log entry. Motion and rotation also feed the
//! dry-run bounds estimator with the signed magnitude. Nothing here touches
//! the turtle state or the surfaces.

use crate::command::{Command, LogEntry, StatementId};
use crate::errors::EvalError;
use crate::session::RunSession;

/// Clamp a pen width to be non-negative. NaN is passed through.
pub(crate) fn clamp_width(width: f64) -> f64 {
    if width < 0.0 { 0.0 } else { width }
}

/// Command emitter lent to user code for the duration of one evaluation
pub struct Emitter<'a> {
    session: &'a mut RunSession,
}

impl<'a> Emitter<'a> {
    pub fn new(session: &'a mut RunSession) -> Self {
        Self { session }
    }

    fn record(&mut self, command: Command, id: impl Into<StatementId>) -> Result<(), EvalError> {
        self.session.commands.spend()?;
        self.session.log.push(LogEntry::new(command, id));
        Ok(())
    }

    pub fn move_forward(&mut self, distance: f64, id: impl Into<StatementId>) -> Result<(), EvalError> {
        self.record(Command::Forward { distance }, id)?;
        self.session.bounds.measure_move(distance);
        Ok(())
    }

    pub fn move_backward(&mut self, distance: f64, id: impl Into<StatementId>) -> Result<(), EvalError> {
        self.record(Command::Forward { distance: -distance }, id)?;
        self.session.bounds.measure_move(-distance);
        Ok(())
    }

    pub fn turn_right(&mut self, angle: f64, id: impl Into<StatementId>) -> Result<(), EvalError> {
        self.record(Command::Turn { angle }, id)?;
        self.session.bounds.measure_rotate(angle);
        Ok(())
    }

    pub fn turn_left(&mut self, angle: f64, id: impl Into<StatementId>) -> Result<(), EvalError> {
        self.record(Command::Turn { angle: -angle }, id)?;
        self.session.bounds.measure_rotate(-angle);
        Ok(())
    }

    pub fn pen_up(&mut self, id: impl Into<StatementId>) -> Result<(), EvalError> {
        self.record(Command::PenUp, id)
    }

    pub fn pen_down(&mut self, id: impl Into<StatementId>) -> Result<(), EvalError> {
        self.record(Command::PenDown, id)
    }

    pub fn pen_width(&mut self, width: f64, id: impl Into<StatementId>) -> Result<(), EvalError> {
        self.record(
            Command::PenWidth {
                width: clamp_width(width),
            },
            id,
        )
    }

    pub fn pen_colour(&mut self, colour: impl Into<String>, id: impl Into<StatementId>) -> Result<(), EvalError> {
        self.record(
            Command::PenColour {
                colour: colour.into(),
            },
            id,
        )
    }

    pub fn hide_turtle(&mut self, id: impl Into<StatementId>) -> Result<(), EvalError> {
        self.record(Command::HideTurtle, id)
    }

    pub fn show_turtle(&mut self, id: impl Into<StatementId>) -> Result<(), EvalError> {
        self.record(Command::ShowTurtle, id)
    }

    pub fn draw_print(&mut self, text: impl Into<String>, id: impl Into<StatementId>) -> Result<(), EvalError> {
        self.record(Command::Print { text: text.into() }, id)
    }

    pub fn draw_font(
        &mut self,
        family: impl Into<String>,
        size: f64,
        style: impl Into<String>,
        id: impl Into<StatementId>,
    ) -> Result<(), EvalError> {
        self.record(
            Command::Font {
                family: family.into(),
                size,
                style: style.into(),
            },
            id,
        )
    }

    /// Count one loop iteration against the run's loop trap.
    pub fn loop_iteration(&mut self) -> Result<(), EvalError> {
        self.session.loops.spend()
    }

    /// Number of commands recorded so far in this run
    pub fn emitted(&self) -> usize {
        self.session.log.len()
    }
}
