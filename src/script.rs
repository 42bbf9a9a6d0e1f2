//! The built-in evaluator: a small Logo-like command language.

use crate::ast::{Action, CommandStmt, Statement};
use crate::emitter::Emitter;
use crate::errors::EvalError;
use crate::eval::Evaluator;
use crate::parse::parse;

/// Evaluates turtle scripts, see `turtle.pest` for the syntax
#[derive(Debug, Clone)]
pub struct ScriptEvaluator {
    name: String,
}

impl Default for ScriptEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptEvaluator {
    pub fn new() -> Self {
        Self::named("<script>")
    }

    /// Use `name` for the source in diagnostics
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Evaluator for ScriptEvaluator {
    fn evaluate(&mut self, code: &str, turtle: &mut Emitter<'_>) -> Result<(), EvalError> {
        let script = parse(&self.name, code)?;
        crate::log::debug!(statements = script.statements.len(), "script parsed");
        run(&script.statements, turtle)
    }
}

fn run(statements: &[Statement], turtle: &mut Emitter<'_>) -> Result<(), EvalError> {
    for statement in statements {
        match statement {
            Statement::Command(cmd) => emit(cmd, turtle)?,
            Statement::Repeat(rep) => {
                for _ in 0..rep.iterations() {
                    turtle.loop_iteration()?;
                    run(&rep.body, turtle)?;
                }
            }
        }
    }
    Ok(())
}

fn emit(cmd: &CommandStmt, t: &mut Emitter<'_>) -> Result<(), EvalError> {
    let id = cmd.id.as_str();
    match &cmd.action {
        Action::Forward(d) => t.move_forward(*d, id),
        Action::Back(d) => t.move_backward(*d, id),
        Action::Right(a) => t.turn_right(*a, id),
        Action::Left(a) => t.turn_left(*a, id),
        Action::PenUp => t.pen_up(id),
        Action::PenDown => t.pen_down(id),
        Action::PenWidth(w) => t.pen_width(*w, id),
        Action::PenColour(c) => t.pen_colour(c.as_str(), id),
        Action::HideTurtle => t.hide_turtle(id),
        Action::ShowTurtle => t.show_turtle(id),
        Action::Print(text) => t.draw_print(text.as_str(), id),
        Action::Font {
            family,
            size,
            style,
        } => t.draw_font(family.as_str(), *size, style.as_str(), id),
    }
}
