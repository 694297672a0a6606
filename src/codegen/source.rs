//! Go source accumulator
//!
//! Collects generated statements and records which standard library packages
//! they reference, so standalone output can carry a matching import block.

use std::collections::BTreeSet;

use crate::strings::go_expand_env;

pub(crate) const CHECK_ERR: &str = "if err != nil {\n\t// handle err\n}\n";
pub(crate) const DEFER_CLOSE: &str = "defer resp.Body.Close()\n";

#[derive(Debug, Default)]
pub(crate) struct GoSource {
    code: String,
    imports: BTreeSet<&'static str>,
}

impl GoSource {
    pub fn new() -> Self {
        let mut source = Self::default();
        source.import("net/http");
        source
    }

    pub fn import(&mut self, package: &'static str) {
        self.imports.insert(package);
    }

    pub fn line(&mut self, line: impl AsRef<str>) {
        self.code.push_str(line.as_ref());
        self.code.push('\n');
    }

    pub fn raw(&mut self, text: &str) {
        self.code.push_str(text);
    }

    pub fn blank(&mut self) {
        if !self.code.is_empty() && !self.code.ends_with("\n\n") {
            self.code.push('\n');
        }
    }

    pub fn check_err(&mut self) {
        self.code.push_str(CHECK_ERR);
    }

    /// Go string expression for `s`, expanding environment variables if needed
    pub fn literal(&mut self, s: &str) -> String {
        let expr = go_expand_env(s);
        if expr.starts_with("os.") {
            self.import("os");
        }
        expr
    }

    /// The accumulated fragment
    pub fn finish(self) -> (String, BTreeSet<&'static str>) {
        (self.code, self.imports)
    }
}

/// Wrap a fragment into a compilable `package main` file
pub(crate) fn standalone(fragment: &str, imports: &BTreeSet<&'static str>) -> String {
    let mut out = String::from("package main\n\nimport (\n");
    for package in imports {
        out.push_str(&format!("\t\"{}\"\n", package));
    }
    out.push_str(")\n\nfunc main() {\n");
    out.push_str(&indent(fragment));
    out.push_str("}\n");
    out
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    Code,
    Interpreted,
    Raw,
    Comment,
}

/// Indent every line by one tab, except lines continuing a raw string literal
fn indent(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len() + fragment.len() / 8);
    let mut state = Lexeme::Code;

    for line in fragment.lines() {
        if state != Lexeme::Raw && !line.is_empty() {
            out.push('\t');
        }
        out.push_str(line);
        out.push('\n');

        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            state = match (state, c) {
                (Lexeme::Code, '"') => Lexeme::Interpreted,
                (Lexeme::Code, '`') => Lexeme::Raw,
                (Lexeme::Code, '/') if chars.peek() == Some(&'/') => Lexeme::Comment,
                (Lexeme::Interpreted, '\\') => {
                    chars.next();
                    Lexeme::Interpreted
                }
                (Lexeme::Interpreted, '"') | (Lexeme::Raw, '`') => Lexeme::Code,
                (state, _) => state,
            };
        }
        if matches!(state, Lexeme::Interpreted | Lexeme::Comment) {
            state = Lexeme::Code;
        }
    }
    out
}
