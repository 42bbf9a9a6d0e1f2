//! Recorded turtle commands and the FIFO log they are replayed from.

use std::collections::VecDeque;
use std::fmt;

/// Prefix Blockly puts in front of block ids; the host only wants the bare id.
const BLOCK_ID_PREFIX: &str = "block_id_";

/// Opaque identifier tying a command back to the statement that emitted it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatementId(String);

impl StatementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id as the host expects it for highlighting (`block_id_` stripped).
    pub fn host_id(&self) -> &str {
        self.0.strip_prefix(BLOCK_ID_PREFIX).unwrap_or(&self.0)
    }
}

impl From<&str> for StatementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StatementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for StatementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One drawing action
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Move along the heading by a signed distance (backward is negative)
    Forward { distance: f64 },
    /// Turn by a signed angle in degrees (left is negative)
    Turn { angle: f64 },
    PenUp,
    PenDown,
    /// Set the pen width (already clamped to be non-negative)
    PenWidth { width: f64 },
    /// Set the pen colour, used for both stroke and fill
    PenColour { colour: String },
    HideTurtle,
    ShowTurtle,
    /// Print text at the turtle, baseline following the heading
    Print { text: String },
    /// Set the text font
    Font {
        family: String,
        size: f64,
        style: String,
    },
}

/// Logo-style mnemonic for each command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    FD,
    RT,
    PU,
    PD,
    PW,
    PC,
    HT,
    ST,
    DP,
    DF,
}

impl CommandKind {
    pub fn mnemonic(self) -> &'static str {
        match self {
            CommandKind::FD => "FD",
            CommandKind::RT => "RT",
            CommandKind::PU => "PU",
            CommandKind::PD => "PD",
            CommandKind::PW => "PW",
            CommandKind::PC => "PC",
            CommandKind::HT => "HT",
            CommandKind::ST => "ST",
            CommandKind::DP => "DP",
            CommandKind::DF => "DF",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Forward { .. } => CommandKind::FD,
            Command::Turn { .. } => CommandKind::RT,
            Command::PenUp => CommandKind::PU,
            Command::PenDown => CommandKind::PD,
            Command::PenWidth { .. } => CommandKind::PW,
            Command::PenColour { .. } => CommandKind::PC,
            Command::HideTurtle => CommandKind::HT,
            Command::ShowTurtle => CommandKind::ST,
            Command::Print { .. } => CommandKind::DP,
            Command::Font { .. } => CommandKind::DF,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        match self {
            Command::Forward { distance } => write!(f, "{} {}", kind, distance),
            Command::Turn { angle } => write!(f, "{} {}", kind, angle),
            Command::PenWidth { width } => write!(f, "{} {}", kind, width),
            Command::PenColour { colour } => write!(f, "{} {:?}", kind, colour),
            Command::Print { text } => write!(f, "{} {:?}", kind, text),
            Command::Font {
                family,
                size,
                style,
            } => write!(f, "{} {:?} {} {:?}", kind, family, size, style),
            Command::PenUp
            | Command::PenDown
            | Command::HideTurtle
            | Command::ShowTurtle => write!(f, "{}", kind),
        }
    }
}

/// A command together with the statement that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub command: Command,
    pub statement_id: StatementId,
}

impl LogEntry {
    pub fn new(command: Command, statement_id: impl Into<StatementId>) -> Self {
        Self {
            command,
            statement_id: statement_id.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @{}", self.command, self.statement_id)
    }
}

/// Transcript of one run, replayed strictly in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    entries: VecDeque<LogEntry>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
    }

    /// Remove and return the oldest entry.
    pub fn pop(&mut self) -> Option<LogEntry> {
        self.entries.pop_front()
    }

    pub fn peek(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_id_strips_block_prefix() {
        assert_eq!(StatementId::new("block_id_42").host_id(), "42");
        assert_eq!(StatementId::new("abc").host_id(), "abc");
        assert_eq!(StatementId::new("xblock_id_1").host_id(), "xblock_id_1");
    }

    #[test]
    fn log_is_fifo() {
        let mut log = CommandLog::new();
        log.push(LogEntry::new(Command::PenUp, "a"));
        log.push(LogEntry::new(Command::Forward { distance: 5.0 }, "b"));
        log.push(LogEntry::new(Command::PenDown, "c"));
        assert_eq!(log.len(), 3);
        assert_eq!(log.peek().map(|e| e.statement_id.as_str()), Some("a"));

        let order: Vec<_> = std::iter::from_fn(|| log.pop())
            .map(|e| e.statement_id.to_string())
            .collect();
        assert_eq!(order, ["a", "b", "c"]);
        assert!(log.is_empty());
        assert_eq!(log.pop(), None);
    }

    #[test]
    fn commands_report_their_mnemonic() {
        let cmds = [
            (Command::Forward { distance: 1.0 }, "FD"),
            (Command::Turn { angle: 1.0 }, "RT"),
            (Command::PenUp, "PU"),
            (Command::PenDown, "PD"),
            (Command::PenWidth { width: 1.0 }, "PW"),
            (Command::PenColour { colour: "red".into() }, "PC"),
            (Command::HideTurtle, "HT"),
            (Command::ShowTurtle, "ST"),
            (Command::Print { text: "hi".into() }, "DP"),
            (
                Command::Font {
                    family: "Arial".into(),
                    size: 12.0,
                    style: "bold".into(),
                },
                "DF",
            ),
        ];
        for (cmd, mnemonic) in cmds {
            assert_eq!(cmd.kind().mnemonic(), mnemonic);
        }
    }

    #[test]
    fn entry_display() {
        let entry = LogEntry::new(Command::Forward { distance: -20.0 }, "block_id_7");
        assert_eq!(entry.to_string(), "FD -20 @block_id_7");
        let entry = LogEntry::new(Command::PenColour { colour: "#ff0000".into() }, "x");
        assert_eq!(entry.to_string(), "PC \"#ff0000\" @x");
    }
}
