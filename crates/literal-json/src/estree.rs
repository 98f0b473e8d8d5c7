//! Reader for JSON-serialized parser output (Babel and ESTree dialects).
//!
//! Parsers such as Babel, Acorn or Espree can dump their AST as JSON. This
//! module maps such a dump onto [`Node`]. Reading never rejects a node on
//! shape alone: anything that is not a recognizable literal, identifier or
//! object entry becomes [`Node::Unsupported`] / [`Member::Other`] with its
//! `type` tag, and the converter decides what to do with it.
//!
//! Recognized tags:
//!
//! | Babel | ESTree |
//! |---|---|
//! | `NumericLiteral`, `StringLiteral`, `BooleanLiteral`, `NullLiteral` | `Literal` (by JSON type of `value`) |
//! | `ArrayExpression`, `ObjectExpression`, `Identifier` | same |
//! | `ObjectProperty` | `Property` with `kind: "init"` and no `method` |
//!
//! Bigint literals (Babel `BigIntLiteral`, ESTree `Literal` with a `bigint`
//! field) are read too, since they are valid object keys.
//!
//! Source positions, comments and `extra` data are ignored. Every object
//! level of the literal costs three JSON levels in the dump, so parsing runs
//! without serde_json's nesting limit on a dedicated stack.

use crate::ast::{Member, Node, Property};
use crate::convert::{STACK_RED_ZONE_BYTES, STACK_SEGMENT_BYTES};
use crate::error::Result;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Stack reserved for parsing one JSON dump.
const PARSE_STACK_BYTES: usize = 64 * 1024 * 1024;

/// Parse a JSON document holding one expression node.
///
/// Fails only when `json` is not valid JSON.
pub fn from_str(json: &str) -> Result<Node> {
    stacker::grow(PARSE_STACK_BYTES, || -> Result<Node> {
        let mut de = serde_json::Deserializer::from_str(json);
        de.disable_recursion_limit();
        let value = Value::deserialize(&mut de)?;
        de.end()?;
        Ok(from_value(&value))
    })
}

/// Map a JSON value onto a [`Node`].
pub fn from_value(value: &Value) -> Node {
    stacker::maybe_grow(STACK_RED_ZONE_BYTES, STACK_SEGMENT_BYTES, || read_value(value))
}

fn read_value(value: &Value) -> Node {
    let obj = match value {
        Value::Object(obj) => obj,
        other => return Node::unsupported(json_type_name(other)),
    };
    let kind = match obj.get("type").and_then(Value::as_str) {
        Some(kind) => kind,
        None => return Node::unsupported("<untyped>"),
    };

    read_node(kind, obj).unwrap_or_else(|| Node::unsupported(kind))
}

/// `None` when a known tag carries a payload of the wrong shape.
fn read_node(kind: &str, obj: &Map<String, Value>) -> Option<Node> {
    match kind {
        "NumericLiteral" => obj.get("value")?.as_f64().map(Node::number),
        "StringLiteral" => obj.get("value")?.as_str().map(Node::string),
        "BooleanLiteral" => obj.get("value")?.as_bool().map(Node::boolean),
        "NullLiteral" => Some(Node::NullLiteral),
        "BigIntLiteral" => obj.get("value")?.as_str().map(Node::bigint),
        "Literal" => read_estree_literal(obj),
        "Identifier" => obj.get("name")?.as_str().map(Node::identifier),
        "ArrayExpression" => {
            let elements = obj
                .get("elements")?
                .as_array()?
                .iter()
                .map(|element| match element {
                    Value::Null => None,
                    other => Some(from_value(other)),
                })
                .collect();
            Some(Node::ArrayExpression { elements })
        }
        "ObjectExpression" => {
            let properties = obj
                .get("properties")?
                .as_array()?
                .iter()
                .map(read_member)
                .collect();
            Some(Node::ObjectExpression { properties })
        }
        _ => None,
    }
}

/// ESTree folds every primitive into `Literal`; the JSON type of `value`
/// tells them apart. Bigints are told by their `bigint` digit string. Regex
/// literals stay unsupported.
fn read_estree_literal(obj: &Map<String, Value>) -> Option<Node> {
    if obj.contains_key("regex") {
        return None;
    }
    if let Some(bigint) = obj.get("bigint") {
        return bigint.as_str().map(Node::bigint);
    }
    match obj.get("value")? {
        Value::Null => Some(Node::NullLiteral),
        Value::Bool(b) => Some(Node::boolean(*b)),
        Value::Number(n) => n.as_f64().map(Node::number),
        Value::String(s) => Some(Node::string(s.as_str())),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn read_member(value: &Value) -> Member {
    let obj = match value {
        Value::Object(obj) => obj,
        other => {
            return Member::Other {
                kind: json_type_name(other).to_string(),
            }
        }
    };
    let kind = obj
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("<untyped>");

    let plain = match kind {
        "ObjectProperty" => true,
        "Property" => {
            obj.get("kind").and_then(Value::as_str).unwrap_or("init") == "init"
                && !flag(obj, "method")
        }
        _ => false,
    };
    if !plain {
        return Member::Other {
            kind: kind.to_string(),
        };
    }

    match (obj.get("key"), obj.get("value")) {
        (Some(key), Some(value)) => Member::Property(Property {
            key: from_value(key),
            value: from_value(value),
            computed: flag(obj, "computed"),
        }),
        _ => Member::Other {
            kind: kind.to_string(),
        },
    }
}

fn flag(obj: &Map<String, Value>, name: &str) -> bool {
    obj.get(name).and_then(Value::as_bool).unwrap_or(false)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
