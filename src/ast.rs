//! Syntax tree for turtle command scripts

/// A parsed script
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// One turtle command: `forward 100 @a`
    Command(CommandStmt),
    /// `repeat N [ ... ]`
    Repeat(RepeatStmt),
}

/// A turtle command together with the id it is highlighted under
#[derive(Debug, Clone, PartialEq)]
pub struct CommandStmt {
    pub action: Action,
    /// Either the explicit `@id`, or `line:column` of the statement
    pub id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Forward(f64),
    Back(f64),
    Right(f64),
    Left(f64),
    PenUp,
    PenDown,
    PenWidth(f64),
    PenColour(String),
    HideTurtle,
    ShowTurtle,
    Print(String),
    Font {
        family: String,
        size: f64,
        style: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepeatStmt {
    /// As written. Truncated toward zero when run; negative or NaN runs the
    /// body zero times.
    pub count: f64,
    pub body: Vec<Statement>,
}

impl RepeatStmt {
    pub fn iterations(&self) -> usize {
        if self.count > 0.0 {
            // Saturating cast
            self.count.trunc() as usize
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeat(count: f64) -> RepeatStmt {
        RepeatStmt {
            count,
            body: Vec::new(),
        }
    }

    #[test]
    fn repeat_count_truncates() {
        assert_eq!(repeat(3.9).iterations(), 3);
        assert_eq!(repeat(0.5).iterations(), 0);
        assert_eq!(repeat(-2.0).iterations(), 0);
        assert_eq!(repeat(f64::NAN).iterations(), 0);
    }
}
