//! JSON to Go struct conversion
//!
//! Infers a Go type from a sample JSON document. Objects become inline
//! structs with `json` tags, arrays take the merged type of their elements,
//! and anything that cannot be unified becomes `interface{}`.

use serde_json::{Map, Value};

use super::{NotJson, TypeConverter};

/// Initialisms Go style keeps in all caps
const INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS", "TTL",
    "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF", "XSS",
];

/// Default [`TypeConverter`] emitting Go struct definitions
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonToGo;

impl TypeConverter for JsonToGo {
    fn convert(&self, json: &str, type_name: &str) -> Result<String, NotJson> {
        let value: Value = serde_json::from_str(json).map_err(|e| NotJson(e.to_string()))?;
        let ty = infer(&value);
        Ok(format!("type {} {}", type_name, ty.render(0)))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum GoType {
    String,
    Bool,
    Int,
    Int64,
    Float64,
    Any,
    Slice(Box<GoType>),
    Struct(Vec<Field>),
}

#[derive(Debug, Clone, PartialEq)]
struct Field {
    key: String,
    ty: GoType,
    omitempty: bool,
}

fn infer(value: &Value) -> GoType {
    match value {
        Value::Null => GoType::Any,
        Value::Bool(_) => GoType::Bool,
        Value::String(_) => GoType::String,
        Value::Number(n) => match n.as_i64() {
            Some(i) if i32::try_from(i).is_ok() => GoType::Int,
            Some(_) => GoType::Int64,
            None if n.is_u64() => GoType::Int64,
            None => GoType::Float64,
        },
        Value::Array(items) => {
            let element = items
                .iter()
                .map(infer)
                .reduce(unify)
                .unwrap_or(GoType::Any);
            GoType::Slice(Box::new(element))
        }
        Value::Object(map) => GoType::Struct(fields(map)),
    }
}

fn fields(map: &Map<String, Value>) -> Vec<Field> {
    map.iter()
        .map(|(key, value)| Field {
            key: key.clone(),
            ty: infer(value),
            omitempty: false,
        })
        .collect()
}

/// Widen two inferred types to one that holds both
fn unify(a: GoType, b: GoType) -> GoType {
    use GoType::*;
    match (a, b) {
        (a, b) if a == b => a,
        (Int, Int64) | (Int64, Int) => Int64,
        (Int | Int64 | Float64, Int | Int64 | Float64) => Float64,
        (Slice(a), Slice(b)) => Slice(Box::new(unify(*a, *b))),
        (Struct(a), Struct(b)) => Struct(merge(a, b)),
        _ => Any,
    }
}

/// Merge struct fields; a key missing from either side becomes `omitempty`
fn merge(mut a: Vec<Field>, b: Vec<Field>) -> Vec<Field> {
    let mut seen = vec![false; a.len()];
    for field in b {
        match a.iter().position(|f| f.key == field.key) {
            Some(i) => {
                let existing = std::mem::replace(&mut a[i].ty, GoType::Any);
                a[i].ty = unify(existing, field.ty);
                a[i].omitempty |= field.omitempty;
                seen[i] = true;
            }
            None => a.push(Field {
                omitempty: true,
                ..field
            }),
        }
    }
    for (field, seen) in a.iter_mut().zip(seen) {
        if !seen {
            field.omitempty = true;
        }
    }
    a
}

impl GoType {
    fn render(&self, depth: usize) -> String {
        match self {
            GoType::String => "string".to_string(),
            GoType::Bool => "bool".to_string(),
            GoType::Int => "int".to_string(),
            GoType::Int64 => "int64".to_string(),
            GoType::Float64 => "float64".to_string(),
            GoType::Any => "interface{}".to_string(),
            GoType::Slice(element) => format!("[]{}", element.render(depth)),
            GoType::Struct(fields) => {
                let indent = "\t".repeat(depth + 1);
                let mut names: Vec<String> = Vec::with_capacity(fields.len());
                let mut out = String::from("struct {\n");
                for field in fields {
                    let name = unique_name(go_field_name(&field.key), &names);
                    let tag = if field.omitempty {
                        format!("{},omitempty", field.key)
                    } else {
                        field.key.clone()
                    };
                    out.push_str(&format!(
                        "{}{} {} `json:\"{}\"`\n",
                        indent,
                        name,
                        field.ty.render(depth + 1),
                        tag.replace('\\', "\\\\").replace('"', "\\\"")
                    ));
                    names.push(name);
                }
                out.push_str(&"\t".repeat(depth));
                out.push('}');
                out
            }
        }
    }
}

fn unique_name(name: String, taken: &[String]) -> String {
    if !taken.contains(&name) {
        return name;
    }
    (2..)
        .map(|n| format!("{}{}", name, n))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or(name)
}

/// Exported Go identifier for a JSON key: `user_id` -> `UserID`
fn go_field_name(key: &str) -> String {
    let mut name = String::new();
    for word in split_words(key) {
        let upper = word.to_uppercase();
        if INITIALISMS.contains(&upper.as_str()) {
            name.push_str(&upper);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                name.extend(first.to_uppercase());
                name.push_str(chars.as_str());
            }
        }
    }

    match name.chars().next() {
        None => "Field".to_string(),
        Some(c) if c.is_ascii_digit() => format!("Num{}", name),
        Some(_) => name,
    }
}

/// Split on non-alphanumerics and on lower-to-upper camelCase boundaries
fn split_words(key: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for part in key.split(|c: char| !c.is_alphanumeric()).filter(|p| !p.is_empty()) {
        let mut start = 0;
        let mut prev_lower = false;
        for (i, c) in part.char_indices() {
            if c.is_uppercase() && prev_lower {
                words.push(&part[start..i]);
                start = i;
            }
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
        words.push(&part[start..]);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(json: &str) -> String {
        JsonToGo.convert(json, "Payload").expect("valid JSON")
    }

    #[test]
    fn test_flat_object_keeps_key_order() {
        assert_eq!(
            convert(r#"{"type":"A","name":"www"}"#),
            "type Payload struct {\n\tType string `json:\"type\"`\n\tName string `json:\"name\"`\n}"
        );
    }

    #[test]
    fn test_scalar_types() {
        let go = convert(r#"{"n":1,"big":10000000000,"f":1.5,"b":true,"z":null}"#);
        assert!(go.contains("\tN int `json:\"n\"`"));
        assert!(go.contains("\tBig int64 `json:\"big\"`"));
        assert!(go.contains("\tF float64 `json:\"f\"`"));
        assert!(go.contains("\tB bool `json:\"b\"`"));
        assert!(go.contains("\tZ interface{} `json:\"z\"`"));
    }

    #[test]
    fn test_nested_object_is_inline_struct() {
        let go = convert(r#"{"user":{"id":7}}"#);
        assert_eq!(
            go,
            "type Payload struct {\n\tUser struct {\n\t\tID int `json:\"id\"`\n\t} `json:\"user\"`\n}"
        );
    }

    #[test]
    fn test_arrays() {
        let go = convert(r#"{"tags":["a","b"],"mixed":[1,"x"],"empty":[],"nums":[1,2.5]}"#);
        assert!(go.contains("Tags []string"));
        assert!(go.contains("Mixed []interface{}"));
        assert!(go.contains("Empty []interface{}"));
        assert!(go.contains("Nums []float64"));
    }

    #[test]
    fn test_array_of_objects_merges_fields() {
        let go = convert(r#"[{"id":1,"name":"a"},{"id":2,"extra":true}]"#);
        assert!(go.starts_with("type Payload []struct {\n"));
        assert!(go.contains("\tID int `json:\"id\"`"));
        assert!(go.contains("\tName string `json:\"name,omitempty\"`"));
        assert!(go.contains("\tExtra bool `json:\"extra,omitempty\"`"));
    }

    #[test]
    fn test_top_level_scalar() {
        assert_eq!(convert("42"), "type Payload int");
        assert_eq!(convert(r#""hi""#), "type Payload string");
    }

    #[test]
    fn test_invalid_json() {
        assert!(JsonToGo.convert("{not json", "Payload").is_err());
        assert!(JsonToGo.convert("sample data", "Payload").is_err());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(go_field_name("user_id"), "UserID");
        assert_eq!(go_field_name("firstName"), "FirstName");
        assert_eq!(go_field_name("api-url"), "APIURL");
        assert_eq!(go_field_name("2fa"), "Num2fa");
        assert_eq!(go_field_name("--"), "Field");
        assert_eq!(go_field_name("userId"), "UserID");
    }

    #[test]
    fn test_colliding_names_get_suffix() {
        let go = convert(r#"{"id":1,"ID":2}"#);
        assert!(go.contains("\tID int `json:\"id\"`"));
        assert!(go.contains("\tID2 int `json:\"ID\"`"));
    }
}
