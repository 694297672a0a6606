//! Request body rendering
//!
//! Emits the statements that build an `io.Reader` for the request body and
//! returns the name of the variable to pass to `http.NewRequest`.

use tracing::{debug, warn};

use super::source::GoSource;
use crate::request::{Body, BodyEncoding, Payload};
use crate::typegen::TypeConverter;

const PAYLOAD_VAR: &str = "body";

pub(crate) struct BodyWriter<'a> {
    pub converter: &'a dyn TypeConverter,
    pub type_name: &'a str,
    pub encoding: BodyEncoding,
}

impl BodyWriter<'_> {
    /// Write reader construction for `body`; `None` means a nil body
    pub fn write(&self, src: &mut GoSource, body: &Body) -> Option<String> {
        let mut readers = Vec::new();

        if let Some(payload) = body.payload() {
            self.write_payload(src, payload);
            readers.push(PAYLOAD_VAR.to_string());
        }

        let files = body.files();
        for (i, path) in files.iter().enumerate() {
            let var = if files.len() == 1 {
                "f".to_string()
            } else {
                format!("f{}", i + 1)
            };
            let path = src.literal(path);
            src.import("os");
            src.line(format!("{}, err := os.Open({})", var, path));
            src.check_err();
            src.line(format!("defer {}.Close()", var));
            readers.push(var);
        }

        match readers.len() {
            0 => None,
            1 => readers.pop(),
            _ => {
                src.import("io");
                src.line(format!("payload := io.MultiReader({})", readers.join(", ")));
                Some("payload".to_string())
            }
        }
    }

    fn write_payload(&self, src: &mut GoSource, payload: &Payload) {
        match payload {
            Payload::Json(text) => match self.converter.convert(text, self.type_name) {
                Ok(definition) => self.write_json(src, &definition),
                Err(e) => {
                    warn!(error = %e, "JSON body did not parse; emitting it as a string");
                    self.write_string(src, text);
                }
            },
            Payload::Form(text) => write_form(src, text),
            Payload::Text(text) => self.write_string(src, text),
        }
        src.blank();
    }

    fn write_json(&self, src: &mut GoSource, definition: &str) {
        debug!(type_name = self.type_name, "Generated struct for JSON body");
        src.import("bytes");
        src.import("encoding/json");
        src.line(definition);
        src.blank();
        src.line(format!("data := {}{{", self.type_name));
        src.line("\t// fill struct");
        src.line("}");
        src.line("payloadBytes, err := json.Marshal(data)");
        src.check_err();
        src.line(format!("{} := bytes.NewReader(payloadBytes)", PAYLOAD_VAR));
    }

    fn write_string(&self, src: &mut GoSource, text: &str) {
        src.import("strings");
        src.line(format!(
            "{} := strings.NewReader({})",
            PAYLOAD_VAR,
            body_literal(text, self.encoding)
        ));
    }
}

fn write_form(src: &mut GoSource, text: &str) {
    src.import("net/url");
    src.import("strings");
    src.line("params := url.Values{}");
    for (key, value) in url::form_urlencoded::parse(text.as_bytes()) {
        let key = src.literal(&key);
        let value = src.literal(&value);
        src.line(format!("params.Add({}, {})", key, value));
    }
    src.line(format!("{} := strings.NewReader(params.Encode())", PAYLOAD_VAR));
}

/// Go literal for an inline text body.
///
/// Raw data keeps backslashes so escapes typed in the command reach Go
/// unchanged, unless that would not form a valid Go string. Templated data
/// uses a backtick string unless it contains a backtick or a carriage return,
/// which Go raw strings cannot carry.
pub(crate) fn body_literal(text: &str, encoding: BodyEncoding) -> String {
    match encoding {
        BodyEncoding::Raw => {
            let escaped = text
                .replace('"', "\\\"")
                .replace('\n', "\\n")
                .replace('\r', "\\r");
            if has_valid_escapes(&escaped) {
                format!("\"{}\"", escaped)
            } else {
                debug!("Raw body has escapes Go rejects; escaping backslashes");
                interpreted_literal(text)
            }
        }
        BodyEncoding::Templated if text.contains('`') || text.contains('\r') => interpreted_literal(text),
        BodyEncoding::Templated => format!("`{}`", text),
    }
}

/// Fully escaped double-quoted literal
fn interpreted_literal(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("\"{}\"", escaped)
}

/// Whether `s` is valid between the quotes of a Go interpreted string
fn has_valid_escapes(s: &str) -> bool {
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' | '\n' => return false,
            '\\' => match chars.next() {
                Some('a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '\\' | '"') => {}
                Some('x') => {
                    if !take_digits(&mut chars, 2, 16).is_some_and(|v| v <= 0xFF) {
                        return false;
                    }
                }
                Some('u') => {
                    if !take_digits(&mut chars, 4, 16).is_some_and(is_scalar) {
                        return false;
                    }
                }
                Some('U') => {
                    if !take_digits(&mut chars, 8, 16).is_some_and(is_scalar) {
                        return false;
                    }
                }
                Some(d @ '0'..='7') => {
                    let high = d.to_digit(8).unwrap_or(0);
                    if !take_digits(&mut chars, 2, 8).is_some_and(|low| high * 64 + low <= 0xFF) {
                        return false;
                    }
                }
                _ => return false,
            },
            _ => {}
        }
    }
    true
}

fn take_digits(chars: &mut std::str::Chars<'_>, count: usize, radix: u32) -> Option<u32> {
    (0..count).try_fold(0u32, |acc, _| {
        let digit = chars.next()?.to_digit(radix)?;
        acc.checked_mul(radix)?.checked_add(digit)
    })
}

fn is_scalar(value: u32) -> bool {
    char::from_u32(value).is_some()
}
