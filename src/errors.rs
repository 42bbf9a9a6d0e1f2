//! Error types for turtle runs
//!
//! Evaluation either succeeds, trips the execution budget (the infinite-loop
//! sentinel, which the driver absorbs), or fails with a user-program error
//! that is handed back to the host untouched. Script syntax errors carry
//! source spans so hosts can render them with miette.

use std::fmt;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<script>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Evaluation Errors
// ============================================================================

/// Which execution budget ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetKind {
    /// Number of commands the emitter may register in one run
    Commands,
    /// Number of loop iterations the evaluator may run in one run
    LoopIterations,
}

impl fmt::Display for BudgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetKind::Commands => write!(f, "command"),
            BudgetKind::LoopIterations => write!(f, "loop iteration"),
        }
    }
}

/// Result of evaluating user code against the emitter
#[derive(Error, Debug)]
pub enum EvalError {
    /// The program ran past its execution budget. The driver treats this as
    /// a successful but truncated run.
    #[error("{kind} budget of {limit} exceeded")]
    BudgetExceeded { kind: BudgetKind, limit: usize },

    /// Any other failure in the user program. Propagated to the host as-is.
    #[error("{0}")]
    Program(miette::Report),
}

impl EvalError {
    pub fn is_budget_exceeded(&self) -> bool {
        matches!(self, EvalError::BudgetExceeded { .. })
    }
}

impl From<ScriptError> for EvalError {
    fn from(err: ScriptError) -> Self {
        EvalError::Program(miette::Report::new(err))
    }
}

// ============================================================================
// Script Errors
// ============================================================================

/// Errors raised while reading a turtle command script
#[derive(Error, Diagnostic, Debug)]
pub enum ScriptError {
    #[error("syntax error: {message}")]
    #[diagnostic(code(turtle_anim::script::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("invalid number: {text}")]
    #[diagnostic(code(turtle_anim::script::invalid_number))]
    InvalidNumber {
        text: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a number")]
        span: SourceSpan,
    },

    #[error("malformed {rule}")]
    #[diagnostic(
        code(turtle_anim::script::malformed),
        help("the grammar accepted input the evaluator cannot read; please report it")
    )]
    Malformed {
        rule: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("while reading this")]
        span: SourceSpan,
    },
}
