//! Go code generation
//!
//! Renders a [`Request`] as Go using `net/http`. Requests with nothing but a
//! method and URL use the package-level convenience calls (`http.Get`,
//! `http.Post`, `http.Head`); everything else builds an `http.Request`
//! explicitly.
//!
//! # Example
//!
//! ```
//! use curl_to_go::codegen::{CodeGenerator, RenderOptions};
//! use curl_to_go::command::tokenize;
//! use curl_to_go::request::extract;
//!
//! let request = extract(&tokenize("curl canhazip.com")).unwrap();
//! let code = CodeGenerator::new(RenderOptions { banner: false, ..Default::default() })
//!     .render(&request);
//! assert!(code.starts_with("resp, err := http.Get(\"canhazip.com\")"));
//! ```

mod body;
mod source;

use tracing::{debug, warn};

use crate::request::Request;
use crate::typegen::{JsonToGo, TypeConverter};
use body::BodyWriter;
use source::{GoSource, DEFER_CLOSE};

/// First line of generated output when the banner is enabled
pub const BANNER: &str = "// Generated by curl-to-go";

/// Default name for structs generated from JSON bodies
pub const DEFAULT_TYPE_NAME: &str = "Payload";

/// Go keywords
const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough", "for",
    "func", "go", "goto", "if", "import", "interface", "map", "package", "range", "return", "select",
    "struct", "switch", "type", "var",
];

/// Identifiers the generated code declares or refers to in the same scope as the type
const GENERATED_NAMES: &[&str] = &[
    // locals
    "body", "client", "data", "err", "f", "params", "payload", "payloadBytes", "req", "resp", "tr",
    // packages
    "bytes", "http", "io", "json", "os", "strings", "tls", "url",
    // predeclared types used in struct fields
    "any", "bool", "float64", "int", "int64", "interface", "string",
];

/// Whether `name` can be used for the generated JSON body type.
///
/// Must be a Go identifier that is neither a keyword nor a name the
/// generated code already uses.
pub fn is_valid_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    let identifier = match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    };
    let numbered_file = name
        .strip_prefix('f')
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()));

    identifier
        && name != "_"
        && !numbered_file
        && !GO_KEYWORDS.contains(&name)
        && !GENERATED_NAMES.contains(&name)
}

/// Options controlling the shape of generated code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Name of the struct generated for JSON bodies
    pub type_name: String,
    /// Start the output with [`BANNER`]
    pub banner: bool,
    /// Emit a complete `package main` program instead of a fragment
    pub standalone: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            type_name: DEFAULT_TYPE_NAME.to_string(),
            banner: true,
            standalone: false,
        }
    }
}

/// Renders requests as Go source
pub struct CodeGenerator {
    options: RenderOptions,
    converter: Box<dyn TypeConverter>,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl CodeGenerator {
    /// Generator using the built-in JSON to Go struct converter
    pub fn new(options: RenderOptions) -> Self {
        Self::with_converter(options, Box::new(JsonToGo))
    }

    pub fn with_converter(options: RenderOptions, converter: Box<dyn TypeConverter>) -> Self {
        Self { options, converter }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `request` as Go source. Pure and deterministic.
    pub fn render(&self, request: &Request) -> String {
        let simple = request.is_simple();
        debug!(simple, method = %request.method, "Rendering Go code");

        let source = if simple {
            render_simple(request)
        } else {
            self.render_complex(request)
        };
        let (fragment, imports) = source.finish();

        let mut out = String::new();
        if self.options.banner {
            out.push_str(BANNER);
            out.push_str("\n\n");
        }
        if self.options.standalone {
            out.push_str(&source::standalone(&fragment, &imports));
        } else {
            out.push_str(&fragment);
        }
        out
    }

    fn render_complex(&self, request: &Request) -> GoSource {
        let mut src = GoSource::new();

        let client = if request.insecure {
            src.import("crypto/tls");
            src.line("// WARNING: certificate verification is disabled; use only in dev environments.");
            src.line("tr := &http.Transport{");
            src.line("\tTLSClientConfig: &tls.Config{InsecureSkipVerify: true},");
            src.line("}");
            src.line("client := &http.Client{Transport: tr}");
            src.blank();
            "client"
        } else {
            "http.DefaultClient"
        };

        let type_name = if is_valid_type_name(&self.options.type_name) {
            self.options.type_name.as_str()
        } else {
            warn!(type_name = %self.options.type_name, "Unusable type name; using {}", DEFAULT_TYPE_NAME);
            DEFAULT_TYPE_NAME
        };
        let writer = BodyWriter {
            converter: self.converter.as_ref(),
            type_name,
            encoding: request.encoding,
        };
        let payload = writer
            .write(&mut src, &request.body)
            .unwrap_or_else(|| "nil".to_string());

        let method = src.literal(&request.method);
        let url = src.literal(&request.url);
        src.line(format!("req, err := http.NewRequest({}, {}, {})", method, url, payload));
        src.check_err();

        if let Some(auth) = &request.basic_auth {
            let user = src.literal(&auth.user);
            let pass = src.literal(&auth.pass);
            src.line(format!("req.SetBasicAuth({}, {})", user, pass));
        }

        // net/http ignores a Host entry in req.Header; the override lives on req.Host
        let mut headers = request.headers.clone();
        if let Some(host) = headers.remove("Host") {
            let value = src.literal(&host.value);
            src.line(format!("req.Host = {}", value));
        }

        for header in headers.iter() {
            let name = src.literal(&header.name);
            let value = src.literal(&header.value);
            src.line(format!("req.Header.Set({}, {})", name, value));
        }

        src.blank();
        src.line(format!("resp, err := {}.Do(req)", client));
        src.check_err();
        src.raw(DEFER_CLOSE);
        src
    }
}

fn render_simple(request: &Request) -> GoSource {
    let mut src = GoSource::new();
    let url = src.literal(&request.url);

    match request.method.as_str() {
        "GET" => src.line(format!("resp, err := http.Get({})", url)),
        "POST" => src.line(format!("resp, err := http.Post({}, \"\", nil)", url)),
        "HEAD" => src.line(format!("resp, err := http.Head({})", url)),
        other => {
            let method = src.literal(other);
            src.line(format!("req, err := http.NewRequest({}, {}, nil)", method, url));
            src.check_err();
            src.line("resp, err := http.DefaultClient.Do(req)");
        }
    }
    src.check_err();
    src.raw(DEFER_CLOSE);
    src
}

/// Render with default options
pub fn render(request: &Request) -> String {
    CodeGenerator::default().render(request)
}
