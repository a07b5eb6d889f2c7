//! Command line parsing.
//!
//! Converts the accumulated command bytes (without the `:` prompt) into a
//! `ParsedCommand`. Pure classification; no side effects.
//!
//! * Empty input does nothing.
//! * A digit-led command is a line number and must be all digits.
//! * Anything else is a sequence of single-byte ops run in order: `w`
//!   writes, `q` quits. Parsing stops at the first byte that is neither,
//!   recording it as `CommandOp::Unknown`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOp {
    Write,
    Quit,
    Unknown(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Empty,
    /// 1-indexed line number as typed (saturating on overflow).
    GotoLine(usize),
    Ops(Vec<CommandOp>),
    Unknown(String),
}

impl ParsedCommand {
    /// Variant name without the command text, for logging.
    pub fn label(&self) -> &'static str {
        match self {
            ParsedCommand::Empty => "empty",
            ParsedCommand::GotoLine(_) => "goto_line",
            ParsedCommand::Ops(_) => "ops",
            ParsedCommand::Unknown(_) => "unknown",
        }
    }
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &[u8]) -> ParsedCommand {
        let Some(&first) = raw.first() else {
            return ParsedCommand::Empty;
        };
        if first.is_ascii_digit() {
            if !raw.iter().all(u8::is_ascii_digit) {
                return ParsedCommand::Unknown(String::from_utf8_lossy(raw).into_owned());
            }
            let n = raw.iter().fold(0usize, |acc, &d| {
                acc.saturating_mul(10).saturating_add(usize::from(d - b'0'))
            });
            return ParsedCommand::GotoLine(n);
        }
        let mut ops = Vec::with_capacity(raw.len());
        for &b in raw {
            match b {
                b'w' => ops.push(CommandOp::Write),
                b'q' => ops.push(CommandOp::Quit),
                other => {
                    ops.push(CommandOp::Unknown(other));
                    break;
                }
            }
        }
        ParsedCommand::Ops(ops)
    }
}
