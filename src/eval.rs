//! The boundary to whatever runs user code.

use crate::emitter::Emitter;
use crate::errors::EvalError;

/// Runs user code, which reports its drawing through the emitter.
///
/// Returning `Err(EvalError::BudgetExceeded { .. })` truncates the run but
/// still animates what was emitted; `Err(EvalError::Program(_))` aborts the
/// run and is handed back to the host.
pub trait Evaluator {
    fn evaluate(&mut self, code: &str, turtle: &mut Emitter<'_>) -> Result<(), EvalError>;
}

impl<T: Evaluator + ?Sized> Evaluator for &mut T {
    fn evaluate(&mut self, code: &str, turtle: &mut Emitter<'_>) -> Result<(), EvalError> {
        (**self).evaluate(code, turtle)
    }
}

impl<T: Evaluator + ?Sized> Evaluator for Box<T> {
    fn evaluate(&mut self, code: &str, turtle: &mut Emitter<'_>) -> Result<(), EvalError> {
        (**self).evaluate(code, turtle)
    }
}

/// An evaluator backed by a closure, see [`from_fn`].
pub struct FnEvaluator<F>(F);

impl<F> Evaluator for FnEvaluator<F>
where
    F: FnMut(&str, &mut Emitter<'_>) -> Result<(), EvalError>,
{
    fn evaluate(&mut self, code: &str, turtle: &mut Emitter<'_>) -> Result<(), EvalError> {
        (self.0)(code, turtle)
    }
}

/// Wrap a closure as an evaluator, for hosts that drive the emitter
/// directly instead of handing over source text.
///
/// ```
/// use turtle_anim::eval::{from_fn, Evaluator};
///
/// let mut square = from_fn(|_code, t| {
///     for side in 0..4 {
///         t.move_forward(50.0, format!("side{}", side))?;
///         t.turn_right(90.0, format!("turn{}", side))?;
///     }
///     Ok(())
/// });
/// # let _ = &mut square as &mut dyn Evaluator;
/// ```
pub fn from_fn<F>(f: F) -> FnEvaluator<F>
where
    F: FnMut(&str, &mut Emitter<'_>) -> Result<(), EvalError>,
{
    FnEvaluator(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::RunSession;
    use crate::types::Size;

    #[test]
    fn closure_evaluator_sees_code_and_emits() {
        let mut session = RunSession::new(Size::new(100.0, 100.0), 10, 10);
        let mut seen = String::new();
        let mut eval = from_fn(|code, t| {
            seen.push_str(code);
            t.pen_up("p")?;
            Ok(())
        });
        eval.evaluate("source text", &mut Emitter::new(&mut session))
            .unwrap();
        drop(eval);
        assert_eq!(seen, "source text");
        assert_eq!(session.log().len(), 1);
    }

    #[test]
    fn boxed_evaluators_delegate() {
        let mut session = RunSession::new(Size::new(100.0, 100.0), 10, 10);
        let mut boxed: Box<dyn Evaluator> = Box::new(from_fn(|_, t| t.show_turtle("s")));
        boxed
            .evaluate("", &mut Emitter::new(&mut session))
            .unwrap();
        assert_eq!(session.log().len(), 1);
    }
}
