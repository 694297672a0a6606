//! Normalized request model
//!
//! Everything the code generator needs to know about the request a curl
//! command would send, with all flag precedence already resolved.

use indexmap::IndexMap;

use crate::strings::title_case;

/// Password used when `-u` names a user but no password
pub const PASSWORD_PLACEHOLDER: &str = "<PASSWORD>";

/// Header that curl adds to bodies sent without an explicit Content-Type
pub const DEFAULT_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A single header as it will be emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// Ordered header map with case-insensitive names.
///
/// Names are stored title-cased. Setting an existing name replaces its value
/// in place, so emission order follows first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: IndexMap<String, Header>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header; the last value for a name wins
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let header = Header {
            name: title_case(name),
            value: value.into(),
        };
        self.entries.insert(name.to_ascii_lowercase(), header);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|h| h.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Remove a header, keeping the order of the others
    pub fn remove(&mut self, name: &str) -> Option<Header> {
        self.entries.shift_remove(&name.to_ascii_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How a text body is quoted in generated code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyEncoding {
    /// Go raw string (backticks), no escaping
    #[default]
    Templated,
    /// Interpreted string with only quotes escaped (`--data-binary`/`--data-raw`)
    Raw,
}

/// Inline text body, classified by Content-Type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Content-Type mentions json; a struct is generated when the text parses
    Json(String),
    /// URL-encoded `key=value` pairs
    Form(String),
    /// Anything else, emitted as a string literal
    Text(String),
}

impl Payload {
    pub fn content(&self) -> &str {
        match self {
            Payload::Json(s) | Payload::Form(s) | Payload::Text(s) => s,
        }
    }
}

/// Request body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Body {
    #[default]
    None,
    Payload(Payload),
    /// Paths from `@file` data arguments
    Files(Vec<String>),
    /// Inline text plus files; the text always goes first
    Mixed { payload: Payload, files: Vec<String> },
}

impl Body {
    pub fn is_none(&self) -> bool {
        matches!(self, Body::None)
    }

    pub fn payload(&self) -> Option<&Payload> {
        match self {
            Body::Payload(p) | Body::Mixed { payload: p, .. } => Some(p),
            _ => None,
        }
    }

    pub fn files(&self) -> &[String] {
        match self {
            Body::Files(files) | Body::Mixed { files, .. } => files,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub user: String,
    pub pass: String,
}

impl BasicAuth {
    /// Split `user:pass` at the first colon; a bare user gets the placeholder password
    pub fn parse(credentials: &str) -> Self {
        match credentials.split_once(':') {
            Some((user, pass)) => Self {
                user: user.to_string(),
                pass: pass.to_string(),
            },
            None => Self {
                user: credentials.to_string(),
                pass: PASSWORD_PLACEHOLDER.to_string(),
            },
        }
    }
}

/// The request a curl command describes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    /// Uppercased verb, never empty
    pub method: String,
    pub headers: Headers,
    pub body: Body,
    pub encoding: BodyEncoding,
    pub basic_auth: Option<BasicAuth>,
    pub insecure: bool,
}

impl Request {
    /// True when nothing beyond method and URL needs configuring
    pub fn is_simple(&self) -> bool {
        self.headers.is_empty() && self.body.is_none() && self.basic_auth.is_none() && !self.insecure
    }
}
