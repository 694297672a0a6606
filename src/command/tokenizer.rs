//! Shell-like tokenizer for curl command lines
//!
//! Splits a pasted command into positional words and flag values. Quoting and
//! escaping follow the shell closely enough for commands copied out of docs or
//! browser dev tools, but this is not a shell: there are no pipelines,
//! substitutions, or globs.
//!
//! Two deviations from the shell are deliberate:
//! - `\$` keeps its backslash so later stages can tell a literal dollar from
//!   an environment variable reference.
//! - `$'...'` bodies are copied verbatim without interpreting escapes.

use std::collections::HashMap;
use tracing::{debug, warn};

use super::flags;

/// Value recorded for a flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// A registered boolean flag was present
    Switch,
    /// Every value given for the flag, in order of appearance
    Values(Vec<String>),
}

/// Which construct was left open when the input ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unterminated {
    SingleQuote,
    DoubleQuote,
    AnsiCQuote,
    Escape,
}

/// Diagnostic for a command that ended inside a quote or escape.
///
/// The token being scanned is still returned with whatever was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Malformed {
    pub construct: Unterminated,
    /// Char offset where the token containing the open construct started
    pub offset: usize,
}

/// Tokenizer output: positional words plus the flag map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    pub positionals: Vec<String>,
    pub flags: HashMap<String, FlagValue>,
    pub malformed: Option<Malformed>,
}

impl ParsedCommand {
    /// Whether the flag appeared at all (as a switch or with values)
    pub fn is_set(&self, name: &str) -> bool {
        match self.flags.get(name) {
            Some(FlagValue::Switch) => true,
            Some(FlagValue::Values(values)) => !values.is_empty(),
            None => false,
        }
    }

    /// All values given for a flag; empty for switches and absent flags
    pub fn values(&self, name: &str) -> &[String] {
        match self.flags.get(name) {
            Some(FlagValue::Values(values)) => values,
            _ => &[],
        }
    }

    /// The last value given for a flag
    pub fn last(&self, name: &str) -> Option<&str> {
        self.values(name).last().map(String::as_str)
    }

    /// The first value given for a flag
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values(name).first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.positionals.is_empty() && self.flags.is_empty()
    }
}

/// Tokenize a command using the built-in boolean flag registry
pub fn tokenize(input: &str) -> ParsedCommand {
    tokenize_with(input, flags::is_boolean)
}

/// Tokenize a command, using `is_boolean` to decide which flags take no value
pub fn tokenize_with<F>(input: &str, is_boolean: F) -> ParsedCommand
where
    F: Fn(&str) -> bool,
{
    let parsed = Scanner::new(strip_prompt(input), is_boolean).run();

    debug!(
        positionals = parsed.positionals.len(),
        flags = parsed.flags.len(),
        "Tokenized command"
    );
    if let Some(m) = parsed.malformed {
        warn!(construct = ?m.construct, offset = m.offset, "Command ends inside an unterminated construct");
    }

    parsed
}

/// Remove a leading `$ ` or `# ` shell prompt left over from copy-paste
fn strip_prompt(input: &str) -> &str {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some('$' | '#'), Some(c)) if is_whitespace(c) && trimmed.len() > 2 => trimmed[1..].trim_start(),
        _ => trimmed,
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Where the scanner is inside the current word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InSingleQuote,
    InDoubleQuote,
    InAnsiCQuote,
    /// After a backslash; `quoted` records whether we return into double quotes
    Escaped { quoted: bool },
}

struct Scanner<F> {
    chars: Vec<char>,
    pos: usize,
    is_boolean: F,
    result: ParsedCommand,
}

impl<F> Scanner<F>
where
    F: Fn(&str) -> bool,
{
    fn new(input: &str, is_boolean: F) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            is_boolean,
            result: ParsedCommand::default(),
        }
    }

    fn run(mut self) -> ParsedCommand {
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some('-') => self.flag_set(),
                Some(_) => {
                    let value = self.next_value();
                    self.result.positionals.push(value);
                }
            }
        }
        self.result
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Skip separators. A backslash before whitespace (line continuation or an
    /// escaped space between words) is skipped along with it.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\\' && self.peek_at(1).is_some_and(is_whitespace) {
                self.pos += 2;
            } else if is_whitespace(c) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Parse `-abc` or `--long`; the cursor is on the first dash
    fn flag_set(&mut self) {
        if self.peek_at(1) == Some('-') {
            self.long_flag();
            return;
        }

        self.pos += 1;
        while let Some(c) = self.peek() {
            if is_whitespace(c) {
                break;
            }
            self.pos += 1;
            let name = c.to_string();
            if (self.is_boolean)(&name) {
                self.result.flags.insert(name, FlagValue::Switch);
            } else {
                // The rest of the word (or the next word) is this flag's value
                let value = self.next_value();
                self.push_value(name, value);
                break;
            }
        }
    }

    fn long_flag(&mut self) {
        self.pos += 2;
        let name = self.scan_word(Some('='));
        if name.is_empty() {
            return;
        }
        if (self.is_boolean)(&name) {
            self.result.flags.insert(name, FlagValue::Switch);
        } else {
            let value = self.next_value();
            self.push_value(name, value);
        }
    }

    fn push_value(&mut self, name: String, value: String) {
        let entry = self
            .result
            .flags
            .entry(name)
            .or_insert_with(|| FlagValue::Values(Vec::new()));
        match entry {
            FlagValue::Values(values) => values.push(value),
            FlagValue::Switch => {}
        }
    }

    fn next_value(&mut self) -> String {
        self.skip_whitespace();
        self.scan_word(None)
    }

    /// Scan one word starting at the cursor. Ends at unquoted whitespace, at
    /// `terminator` (which is consumed), or at end of input.
    fn scan_word(&mut self, terminator: Option<char>) -> String {
        let start = self.pos;
        let mut out = String::new();
        let mut state = State::Normal;
        // Set right after an unescaped `$`, to spot `$'` openers
        let mut bare_dollar = false;

        while let Some(c) = self.peek() {
            match state {
                State::Normal => {
                    if is_whitespace(c) {
                        break;
                    }
                    if Some(c) == terminator {
                        self.pos += 1;
                        break;
                    }
                    match c {
                        '\'' if bare_dollar => {
                            out.pop();
                            state = State::InAnsiCQuote;
                        }
                        '\'' => state = State::InSingleQuote,
                        '"' => state = State::InDoubleQuote,
                        '\\' => state = State::Escaped { quoted: false },
                        _ => out.push(c),
                    }
                    bare_dollar = c == '$';
                }
                State::InSingleQuote | State::InAnsiCQuote => {
                    if c == '\'' {
                        state = State::Normal;
                    } else {
                        out.push(c);
                    }
                }
                State::InDoubleQuote => match c {
                    '"' => state = State::Normal,
                    '\\' => state = State::Escaped { quoted: true },
                    _ => out.push(c),
                },
                State::Escaped { quoted } => {
                    match c {
                        // Backslash-newline joins lines
                        '\n' => {}
                        '\r' if self.peek_at(1) == Some('\n') => self.pos += 1,
                        '$' => {
                            out.push('\\');
                            out.push('$');
                        }
                        // Inside double quotes only these lose their backslash
                        '"' | '\\' | '`' => out.push(c),
                        _ if quoted => {
                            out.push('\\');
                            out.push(c);
                        }
                        _ => out.push(c),
                    }
                    state = if quoted { State::InDoubleQuote } else { State::Normal };
                    bare_dollar = false;
                }
            }
            self.pos += 1;
        }

        let open = match state {
            State::Normal => None,
            State::InSingleQuote => Some(Unterminated::SingleQuote),
            State::InDoubleQuote => Some(Unterminated::DoubleQuote),
            State::InAnsiCQuote => Some(Unterminated::AnsiCQuote),
            State::Escaped { .. } => Some(Unterminated::Escape),
        };
        if let Some(construct) = open {
            self.result.malformed.get_or_insert(Malformed { construct, offset: start });
        }

        out
    }
}
