//! String utilities
//!
//! Go literal quoting, environment variable detection, and header name casing.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("valid word regex"));

/// Title-case every word in a header name: `content-type` -> `Content-Type`
pub fn title_case(name: &str) -> String {
    WORD_RE
        .replace_all(name, |caps: &regex::Captures| {
            let word = &caps[0];
            let mut out = String::with_capacity(word.len());
            out.push_str(&word[..1].to_ascii_uppercase());
            out.push_str(&word[1..].to_ascii_lowercase());
            out
        })
        .into_owned()
}

/// Escape backslashes and double quotes for a Go interpreted string
pub fn escape_go(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Wrap `s` in double quotes, escaping it for Go
pub fn quote(s: &str) -> String {
    format!("\"{}\"", escape_go(s))
}

/// How a string refers to environment variables, judged by its first `$`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvReference {
    /// No `$` at all
    None,
    /// The first `$` is preceded by a backslash at this byte offset
    Escaped(usize),
    /// The first `$` starts a variable reference
    Variable,
}

pub fn env_reference(s: &str) -> EnvReference {
    match s.find('$') {
        None => EnvReference::None,
        Some(pos) if pos > 0 && s.as_bytes()[pos - 1] == b'\\' => EnvReference::Escaped(pos - 1),
        Some(_) => EnvReference::Variable,
    }
}

/// Render `s` as a Go string expression.
///
/// An unescaped `$` makes the literal an `os.ExpandEnv(...)` call. An escaped
/// `\$` loses its backslash and stays a plain literal.
pub fn go_expand_env(s: &str) -> String {
    match env_reference(s) {
        EnvReference::None => quote(s),
        EnvReference::Escaped(backslash) => {
            let mut literal = String::with_capacity(s.len());
            literal.push_str(&s[..backslash]);
            literal.push_str(&s[backslash + 1..]);
            quote(&literal)
        }
        EnvReference::Variable => format!("os.ExpandEnv({})", quote(s)),
    }
}
