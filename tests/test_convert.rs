//! Integration tests for the full tokenize -> extract -> render pipeline

use curl_to_go::codegen::RenderOptions;
use curl_to_go::command::tokenize;
use curl_to_go::request::{extract, BasicAuth, Body, BodyEncoding, Payload, PASSWORD_PLACEHOLDER};
use curl_to_go::strings::go_expand_env;
use curl_to_go::typegen::{NotJson, TypeConverter};
use curl_to_go::{convert, ConvertError, Converter};

fn fragment(command: &str) -> String {
    Converter::new(RenderOptions {
        banner: false,
        ..Default::default()
    })
    .convert(command)
    .expect("conversion should succeed")
}

// =============================================================================
// Literal emission
// =============================================================================

#[test]
fn test_strings_without_dollar_are_plain_literals() {
    for s in ["", "plain", r"back\slash", r#"say "hi""#, "tab\tand newline\n", "ünïcödé"] {
        let expected = format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""));
        assert_eq!(go_expand_env(s), expected, "input {:?}", s);
    }
}

#[test]
fn test_escaped_dollar_drops_one_backslash() {
    assert_eq!(go_expand_env(r"\$HOME"), "\"$HOME\"");
    assert_eq!(go_expand_env(r"cost: \$5"), "\"cost: $5\"");
    assert!(!go_expand_env(r"a\$b").contains("ExpandEnv"));
}

#[test]
fn test_unescaped_dollar_expands_at_runtime() {
    assert_eq!(go_expand_env("$HOME/x"), "os.ExpandEnv(\"$HOME/x\")");
}

// =============================================================================
// Extraction scenarios
// =============================================================================

#[test]
fn test_header_dedup_is_case_insensitive() {
    let request = extract(&tokenize(r#"curl -H "content-type: a" -H "Content-Type: b" x"#)).unwrap();
    assert_eq!(request.headers.len(), 1);
    assert_eq!(request.headers.get("Content-Type"), Some("b"));
    assert_eq!(request.headers.iter().next().map(|h| h.name.as_str()), Some("Content-Type"));
}

#[test]
fn test_simple_get_scenario() {
    let parsed = tokenize("curl canhazip.com");
    assert_eq!(parsed.positionals, vec!["curl", "canhazip.com"]);
    assert!(parsed.flags.is_empty());

    let request = extract(&parsed).unwrap();
    assert_eq!(request.method, "GET");
    assert_eq!(request.url, "canhazip.com");
    assert!(request.headers.is_empty());
    assert!(request.body.is_none());
    assert!(request.is_simple());

    assert!(fragment("curl canhazip.com").starts_with("resp, err := http.Get(\"canhazip.com\")\n"));
}

#[test]
fn test_basic_auth_with_text_body_scenario() {
    let command = r#"curl https://api.example.com/surprise -u banana:coconuts -d "sample data""#;
    let request = extract(&tokenize(command)).unwrap();

    assert_eq!(request.method, "POST");
    assert_eq!(
        request.basic_auth,
        Some(BasicAuth {
            user: "banana".into(),
            pass: "coconuts".into()
        })
    );
    assert_eq!(request.body, Body::Payload(Payload::Text("sample data".into())));
    assert_eq!(
        request.headers.get("Content-Type"),
        Some("application/x-www-form-urlencoded")
    );

    let code = fragment(command);
    assert!(code.contains("body := strings.NewReader(`sample data`)\n"));
    assert!(code.contains("req.SetBasicAuth(\"banana\", \"coconuts\")\n"));
    assert!(code.contains("resp, err := http.DefaultClient.Do(req)\n"));
}

#[test]
fn test_file_upload_scenario() {
    let command = r#"curl -u "demo" -X POST -d @file1.txt -d @file2.txt https://example.com/upload"#;
    let request = extract(&tokenize(command)).unwrap();

    assert_eq!(request.method, "POST");
    let auth = request.basic_auth.as_ref().unwrap();
    assert_eq!(auth.user, "demo");
    assert_eq!(auth.pass, PASSWORD_PLACEHOLDER);
    assert_eq!(request.body.files(), ["file1.txt", "file2.txt"]);

    let code = fragment(command);
    let first = code.find("f1, err := os.Open(\"file1.txt\")\n").unwrap();
    let second = code.find("f2, err := os.Open(\"file2.txt\")\n").unwrap();
    assert!(first < second);
    assert!(code.contains("defer f1.Close()\n"));
    assert!(code.contains("defer f2.Close()\n"));
    assert!(code.contains("payload := io.MultiReader(f1, f2)\n"));
}

#[test]
fn test_single_file_is_named_f() {
    let code = fragment("curl -d @only.bin https://example.com");
    assert!(code.contains("f, err := os.Open(\"only.bin\")\n"));
    assert!(code.contains("defer f.Close()\n"));
    assert!(code.contains("http.NewRequest(\"POST\", \"https://example.com\", f)"));
}

#[test]
fn test_text_and_files_combine_text_first() {
    let code = fragment("curl -d @a.txt -d b=1 x");
    assert!(code.contains("payload := io.MultiReader(body, f)\n"));
}

const JSON_COMMAND: &str = r#"curl -X POST -H "Content-Type: application/json" -d '{"type":"A","name":"www"}' "https://api.example.com/records""#;

#[test]
fn test_json_body_uses_type_converter() {
    let code = fragment(JSON_COMMAND);
    assert!(code.contains("type Payload struct {"));
    assert!(code.contains("payloadBytes, err := json.Marshal(data)\n"));
    assert!(code.contains("body := bytes.NewReader(payloadBytes)\n"));
}

struct Rejecting;

impl TypeConverter for Rejecting {
    fn convert(&self, json: &str, _type_name: &str) -> Result<String, NotJson> {
        Err(NotJson(json.to_string()))
    }
}

#[test]
fn test_json_converter_failure_falls_back_to_literal() {
    let converter = Converter::with_type_converter(
        RenderOptions {
            banner: false,
            ..Default::default()
        },
        Box::new(Rejecting),
    );
    let code = converter.convert(JSON_COMMAND).unwrap();
    assert!(!code.contains("json.Marshal"));
    assert!(code.contains(r#"body := strings.NewReader(`{"type":"A","name":"www"}`)"#));
}

#[test]
fn test_invalid_json_falls_back_to_literal() {
    let code = fragment(r#"curl -H 'Content-Type: application/json' -d '{"broken":' x"#);
    assert!(!code.contains("json.Marshal"));
    assert!(code.contains(r#"strings.NewReader(`{"broken":`)"#));
}

#[test]
fn test_form_body_params() {
    let code = fragment("curl -d 'name=Jane+Doe&city=Z%C3%BCrich' https://example.com/form");
    assert!(code.contains("params := url.Values{}\n"));
    assert!(code.contains("params.Add(\"name\", \"Jane Doe\")\n"));
    assert!(code.contains("params.Add(\"city\", \"Zürich\")\n"));
    assert!(code.contains("body := strings.NewReader(params.Encode())\n"));
}

#[test]
fn test_raw_encoding_when_data_binary_without_method() {
    let request = extract(&tokenize(r#"curl --data-binary 'a\b' x"#)).unwrap();
    assert_eq!(request.encoding, BodyEncoding::Raw);
    assert!(fragment(r#"curl --data-binary 'a\b' -H 'Content-Type: text/plain' x"#)
        .contains(r#"strings.NewReader("a\b")"#));
}

#[test]
fn test_not_a_curl_command() {
    let err = convert("wget https://example.com").unwrap_err();
    assert!(matches!(err, ConvertError::NotACurlCommand(ref word) if word == "wget"));
}

#[test]
fn test_malformed_input_still_converts() {
    let code = fragment("curl -H 'Accept: text/plain https://example.com");
    assert!(code.contains("req.Header.Set(\"Accept\", \"text/plain https://example.com\")"));
}

#[test]
fn test_conversion_is_repeatable() {
    let command = "curl -k -u a:b -H 'X-One: 1' -H 'X-Two: 2' -d x=1 -d @f https://example.com";
    assert_eq!(convert(command).unwrap(), convert(command).unwrap());
}

#[test]
fn test_concurrent_conversions() {
    let converter = std::sync::Arc::new(Converter::default());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let converter = converter.clone();
            std::thread::spawn(move || converter.convert(&format!("curl -X PUT https://example.com/{}", i)))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let code = handle.join().unwrap().unwrap();
        assert!(code.contains(&format!("\"https://example.com/{}\"", i)));
    }
}
