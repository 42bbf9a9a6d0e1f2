//! Turtle graphics in two phases.
//!
//! User code is first run against an [`Emitter`] that only records what the
//! turtle would do and works out how big the canvas must be for the whole
//! drawing to fit. The recorded commands are then replayed one per timer
//! tick by an [`Animator`], which paints on an off-screen scratch surface,
//! composes it onto the display with the turtle drawn on top, and tells the
//! [`Host`] which statement is running.
//!
//! ```
//! use turtle_anim::{AnimConfig, Animator, ManualScheduler, Phase, RecordingHost, RecordingSurface};
//!
//! let mut animator = Animator::new(
//!     RecordingSurface::default(),
//!     RecordingSurface::default(),
//!     RecordingHost::new(),
//!     ManualScheduler::new(),
//!     AnimConfig::default(),
//! );
//! animator.execute_script("repeat 4 [ forward 100 right 90 ]")?;
//! assert_eq!(animator.run_until_idle(), Phase::Finished);
//! assert_eq!(animator.steps(), 8);
//! # Ok::<(), miette::Report>(())
//! ```

pub mod ast;
pub mod bounds;
pub mod command;
pub mod config;
pub mod driver;
pub mod emitter;
pub mod errors;
pub mod eval;
pub mod host;
pub mod log;
pub mod parse;
pub mod render;
pub mod scheduler;
pub mod script;
pub mod session;
pub mod step;
pub mod surface;
pub mod types;

use pest_derive::Parser;

pub use command::{Command, CommandKind, CommandLog, LogEntry, StatementId};
pub use config::AnimConfig;
pub use driver::{Animator, Phase};
pub use emitter::Emitter;
pub use errors::{BudgetKind, EvalError, ScriptError};
pub use eval::{Evaluator, from_fn};
pub use host::{Host, HostEvent, RecordingHost};
pub use scheduler::{ManualScheduler, Scheduler, TimerId};
pub use script::ScriptEvaluator;
pub use session::RunSession;
pub use step::TurtleState;
pub use surface::{RecordingSurface, Surface};
pub use types::{CanvasPoint, Heading, Size};

#[derive(Parser)]
#[grammar = "turtle.pest"]
pub struct TurtleParser;

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser;

    #[test]
    fn parse_simple_program() {
        let result = TurtleParser::parse(Rule::program, "forward 100 right 90");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_repeat() {
        let result = TurtleParser::parse(Rule::program, "repeat 3 [ fd 10 @a ]");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn reject_unknown_command() {
        assert!(TurtleParser::parse(Rule::program, "box \"Hello\"").is_err());
    }
}
