//! Resolve tokenized curl flags into a [`Request`]
//!
//! Only a curated set of curl options shapes the output; every other flag is
//! ignored. Data flags are always processed in the order `-d`, `--data`,
//! `--data-binary`, `--data-raw`, whatever their order on the command line.

use tracing::debug;

use super::model::{BasicAuth, Body, BodyEncoding, Headers, Payload, Request, DEFAULT_CONTENT_TYPE};
use crate::command::ParsedCommand;
use crate::errors::{ConvertError, Result};

/// Data flags in processing order, with whether a leading `@` names a file
const DATA_FLAGS: [(&str, bool); 4] = [
    ("d", true),
    ("data", true),
    ("data-binary", true),
    ("data-raw", false),
];

/// Build the request model from a tokenized command
pub fn extract(cmd: &ParsedCommand) -> Result<Request> {
    match cmd.positionals.first() {
        Some(first) if first == "curl" => {}
        other => {
            return Err(ConvertError::NotACurlCommand(
                other.cloned().unwrap_or_default(),
            ))
        }
    }

    let url = cmd
        .first("url")
        .or_else(|| cmd.positionals.get(1).map(String::as_str))
        .unwrap_or_default()
        .to_string();

    let mut headers = parse_headers(cmd.values("H").iter().chain(cmd.values("header")));

    let mut method = String::new();
    let mut encoding = BodyEncoding::Templated;

    if cmd.is_set("I") || cmd.is_set("head") {
        method = "HEAD".to_string();
    }

    if let Some(verb) = cmd.last("request").or_else(|| cmd.last("X")) {
        method = verb.to_uppercase();
    } else if cmd.is_set("data-binary") || cmd.is_set("data-raw") {
        method = "POST".to_string();
        encoding = BodyEncoding::Raw;
    }

    let mut ascii = Vec::new();
    let mut files = Vec::new();
    for (flag, at_is_file) in DATA_FLAGS {
        let values = cmd.values(flag);
        if values.is_empty() {
            continue;
        }
        if method.is_empty() {
            method = "POST".to_string();
        }
        for value in values {
            match value.strip_prefix('@') {
                Some(path) if at_is_file => files.push(path.to_string()),
                _ => ascii.push(value.as_str()),
            }
        }
    }

    let text = ascii.join("&");
    if (!text.is_empty() || !files.is_empty()) && !headers.contains("Content-Type") {
        headers.set("Content-Type", DEFAULT_CONTENT_TYPE);
    }

    let payload = (!text.is_empty()).then(|| classify(text, headers.get("Content-Type")));
    let body = match (payload, files.is_empty()) {
        (None, true) => Body::None,
        (None, false) => Body::Files(files),
        (Some(payload), true) => Body::Payload(payload),
        (Some(payload), false) => Body::Mixed { payload, files },
    };

    let basic_auth = cmd
        .last("user")
        .or_else(|| cmd.last("u"))
        .filter(|credentials| !credentials.is_empty())
        .map(BasicAuth::parse);

    if method.is_empty() {
        method = "GET".to_string();
    }

    let request = Request {
        url,
        method,
        headers,
        body,
        encoding,
        basic_auth,
        insecure: cmd.is_set("k") || cmd.is_set("insecure"),
    };

    debug!(
        method = %request.method,
        url = %request.url,
        headers = request.headers.len(),
        files = request.body.files().len(),
        insecure = request.insecure,
        "Extracted request"
    );

    Ok(request)
}

/// Parse `Name: value` strings; entries without a colon are dropped
fn parse_headers<'a>(raw: impl Iterator<Item = &'a String>) -> Headers {
    let mut headers = Headers::new();
    for line in raw {
        if let Some((name, value)) = line.split_once(':') {
            headers.set(name.trim(), value.trim());
        }
    }
    headers
}

/// Pick the rendering strategy for an inline body
fn classify(text: String, content_type: Option<&str>) -> Payload {
    match content_type {
        Some(ct) if ct.contains("json") => Payload::Json(text),
        Some(DEFAULT_CONTENT_TYPE) if looks_form_encoded(&text) => Payload::Form(text),
        _ => Payload::Text(text),
    }
}

/// Every `&`-separated segment is a `key=value` pair
fn looks_form_encoded(text: &str) -> bool {
    text.split('&')
        .filter(|segment| !segment.is_empty())
        .all(|segment| segment.contains('='))
}
