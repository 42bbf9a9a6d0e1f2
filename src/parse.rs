//! Parse pest pairs into script AST nodes

use miette::SourceSpan;
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;

use crate::ast::*;
use crate::errors::{ScriptError, SourceContext};
use crate::{Rule, TurtleParser};

/// Parse a turtle script. `name` is only used in diagnostics.
pub fn parse(name: &str, source: &str) -> Result<Script, ScriptError> {
    let ctx = SourceContext::new(name, source);
    let mut pairs = TurtleParser::parse(Rule::program, source).map_err(|e| {
        let (offset, len) = match e.location {
            InputLocation::Pos(p) => (p, 0),
            InputLocation::Span((start, end)) => (start, end - start),
        };
        ScriptError::Syntax {
            message: e.variant.message().into_owned(),
            src: ctx.named_source(),
            span: (offset, len).into(),
        }
    })?;

    let program = pairs.next().ok_or_else(|| ScriptError::Malformed {
        rule: "program",
        src: ctx.named_source(),
        span: (0, 0).into(),
    })?;

    let reader = Reader { ctx: &ctx };
    let statements = reader.statements(program.into_inner())?;
    Ok(Script { statements })
}

struct Reader<'a> {
    ctx: &'a SourceContext,
}

fn span_of(pair: &Pair<Rule>) -> SourceSpan {
    let span = pair.as_span();
    (span.start(), span.end() - span.start()).into()
}

impl Reader<'_> {
    fn malformed(&self, rule: &'static str, pair: &Pair<Rule>) -> ScriptError {
        ScriptError::Malformed {
            rule,
            src: self.ctx.named_source(),
            span: span_of(pair),
        }
    }

    fn statements<'i>(
        &self,
        pairs: impl Iterator<Item = Pair<'i, Rule>>,
    ) -> Result<Vec<Statement>, ScriptError> {
        let mut statements = Vec::new();
        for pair in pairs {
            match pair.as_rule() {
                Rule::command => statements.push(Statement::Command(self.command(pair)?)),
                Rule::repeat => statements.push(Statement::Repeat(self.repeat(pair)?)),
                Rule::EOI => {}
                _ => return Err(self.malformed("statement", &pair)),
            }
        }
        Ok(statements)
    }

    fn repeat(&self, pair: Pair<Rule>) -> Result<RepeatStmt, ScriptError> {
        let whole = pair.clone();
        let mut inner = pair.into_inner();
        let _keyword = inner.next();
        let count = inner
            .next()
            .ok_or_else(|| self.malformed("repeat", &whole))
            .and_then(|p| self.number(p))?;
        let body = self.statements(inner)?;
        Ok(RepeatStmt { count, body })
    }

    fn command(&self, pair: Pair<Rule>) -> Result<CommandStmt, ScriptError> {
        let whole = pair.clone();
        let (line, column) = pair.as_span().start_pos().line_col();
        let mut inner = pair.into_inner();
        let action_pair = inner
            .next()
            .ok_or_else(|| self.malformed("command", &whole))?;
        let action = self.action(action_pair)?;

        let id = match inner.next() {
            Some(id) if id.as_rule() == Rule::statement_id => id
                .into_inner()
                .next()
                .map(|text| text.as_str().to_string())
                .ok_or_else(|| self.malformed("statement id", &whole))?,
            Some(other) => return Err(self.malformed("command", &other)),
            None => format!("{}:{}", line, column),
        };
        Ok(CommandStmt { action, id })
    }

    fn action(&self, pair: Pair<Rule>) -> Result<Action, ScriptError> {
        let rule = pair.as_rule();
        if matches!(rule, Rule::pen_colour | Rule::print | Rule::font) {
            return self.text_action(pair);
        }
        let whole = pair.clone();
        // Skip the keyword; what remains are the arguments.
        let mut args = pair.into_inner().skip(1);
        let mut number = || {
            args.next()
                .ok_or_else(|| self.malformed("number argument", &whole))
                .and_then(|p| self.number(p))
        };

        let action = match rule {
            Rule::forward => Action::Forward(number()?),
            Rule::back => Action::Back(number()?),
            Rule::right => Action::Right(number()?),
            Rule::left => Action::Left(number()?),
            Rule::pen_width => Action::PenWidth(number()?),
            Rule::pen_up => Action::PenUp,
            Rule::pen_down => Action::PenDown,
            Rule::hide_turtle => Action::HideTurtle,
            Rule::show_turtle => Action::ShowTurtle,
            _ => return Err(self.malformed("command", &whole)),
        };
        Ok(action)
    }

    /// Commands taking string arguments
    fn text_action(&self, pair: Pair<Rule>) -> Result<Action, ScriptError> {
        let rule = pair.as_rule();
        let whole = pair.clone();
        let mut args = pair.into_inner().skip(1);
        let mut next = |what: &'static str| args.next().ok_or_else(|| self.malformed(what, &whole));

        match rule {
            Rule::pen_colour => Ok(Action::PenColour(self.string(next("colour")?)?)),
            Rule::print => Ok(Action::Print(self.string(next("text")?)?)),
            Rule::font => {
                let family = self.string(next("font family")?)?;
                let size = self.number(next("font size")?)?;
                let style = self.string(next("font style")?)?;
                Ok(Action::Font {
                    family,
                    size,
                    style,
                })
            }
            _ => Err(self.malformed("command", &whole)),
        }
    }

    fn number(&self, pair: Pair<Rule>) -> Result<f64, ScriptError> {
        if pair.as_rule() != Rule::number {
            return Err(self.malformed("number", &pair));
        }
        pair.as_str()
            .parse::<f64>()
            .map_err(|_| ScriptError::InvalidNumber {
                text: pair.as_str().to_string(),
                src: self.ctx.named_source(),
                span: span_of(&pair),
            })
    }

    fn string(&self, pair: Pair<Rule>) -> Result<String, ScriptError> {
        if pair.as_rule() != Rule::string {
            return Err(self.malformed("string", &pair));
        }
        Ok(pair
            .into_inner()
            .next()
            .map(|inner| inner.as_str().to_string())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(source: &str) -> Vec<Statement> {
        match parse("<test>", source) {
            Ok(script) => script.statements,
            Err(e) => panic!("failed to parse {:?}: {:?}", source, e),
        }
    }

    fn actions(source: &str) -> Vec<Action> {
        parse_ok(source)
            .into_iter()
            .map(|s| match s {
                Statement::Command(c) => c.action,
                other => panic!("expected command, got {:?}", other),
            })
            .collect()
    }

    #[test]
    fn parses_every_command() {
        let got = actions(
            r##"
            forward 10 back 2.5 right 90 left -45
            penup pendown penwidth 3 pencolour "#ff0000"
            hideturtle showturtle print "hello world"
            font "Courier New" 12 "bold"
            "##,
        );
        assert_eq!(
            got,
            vec![
                Action::Forward(10.0),
                Action::Back(2.5),
                Action::Right(90.0),
                Action::Left(-45.0),
                Action::PenUp,
                Action::PenDown,
                Action::PenWidth(3.0),
                Action::PenColour("#ff0000".into()),
                Action::HideTurtle,
                Action::ShowTurtle,
                Action::Print("hello world".into()),
                Action::Font {
                    family: "Courier New".into(),
                    size: 12.0,
                    style: "bold".into(),
                },
            ]
        );
    }

    #[test]
    fn abbreviations_and_case() {
        let got = actions("FD 1 bk 2 backward 3 RT 4 lt 5 pu pd ht st pencolor \"red\"");
        assert_eq!(
            got,
            vec![
                Action::Forward(1.0),
                Action::Back(2.0),
                Action::Back(3.0),
                Action::Right(4.0),
                Action::Left(5.0),
                Action::PenUp,
                Action::PenDown,
                Action::HideTurtle,
                Action::ShowTurtle,
                Action::PenColour("red".into()),
            ]
        );
    }

    #[test]
    fn explicit_and_positional_ids() {
        let got = parse_ok("forward 1 @block_id_a\n  right 2");
        let ids: Vec<_> = got
            .iter()
            .map(|s| match s {
                Statement::Command(c) => c.id.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(ids, ["block_id_a", "2:3"]);
    }

    #[test]
    fn nested_repeat() {
        let got = parse_ok("repeat 2 [ repeat 3 [ fd 1 ] rt 90 ]");
        assert_eq!(got.len(), 1);
        let Statement::Repeat(outer) = &got[0] else {
            panic!("expected repeat, got {:?}", got[0]);
        };
        assert_eq!(outer.count, 2.0);
        assert_eq!(outer.body.len(), 2);
        assert!(matches!(&outer.body[0], Statement::Repeat(r) if r.count == 3.0 && r.body.len() == 1));
    }

    #[test]
    fn comments_are_ignored() {
        let got = actions("# draw\nforward 5 # go\n# done");
        assert_eq!(got, vec![Action::Forward(5.0)]);
    }

    #[test]
    fn empty_script() {
        assert!(parse_ok("").is_empty());
        assert!(parse_ok("  # nothing\n").is_empty());
    }

    #[test]
    fn keyword_needs_a_boundary() {
        assert!(parse("<test>", "forwardx 10").is_err());
        assert!(parse("<test>", "pux").is_err());
    }

    #[test]
    fn syntax_error_points_at_problem() {
        let source = "forward 10\njump 3";
        match parse("<test>", source).unwrap_err() {
            ScriptError::Syntax { span, .. } => {
                assert!(source[span.offset()..].trim_start().starts_with("jump"))
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn unterminated_repeat_is_an_error() {
        assert!(matches!(
            parse("<test>", "repeat 3 [ fd 1"),
            Err(ScriptError::Syntax { .. })
        ));
    }

    #[test]
    fn missing_argument_is_an_error() {
        assert!(parse("<test>", "forward").is_err());
        assert!(parse("<test>", "pencolour red").is_err());
    }
}
