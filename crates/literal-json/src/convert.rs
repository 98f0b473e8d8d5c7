//! Literal AST → JSON value conversion.
//!
//! The converter walks a [`Node`] depth-first and builds a
//! `serde_json::Value`. Every step re-checks the node kind, so an unsupported
//! node is rejected the same way at the root and at any depth. The first
//! error aborts the walk; no partial value is ever returned.
//!
//! # Rules
//!
//! - Numbers, booleans and null map to themselves. Integral numbers in the
//!   safe-integer range become JSON integers (`1`, not `1.0`). Non-finite
//!   numbers have no JSON form and are invalid values.
//! - Strings are escaped per [`EscapeMode`](crate::escape::EscapeMode).
//! - Arrays keep element order. Holes are invalid values.
//! - Objects must contain only plain, non-computed `key: value` entries.
//!   Both checks run over all entries before any value is converted. Keys
//!   are identifier names, string values, bigint digit text, or safe-integer
//!   numbers rendered as integer text. Later duplicates overwrite earlier ones.
//! - Nesting depth is limited only by memory: recursion continues on freshly
//!   allocated stack segments once the current one runs low.
//!
//! # Example
//! ```
//! use literal_json::{convert, Member, Node};
//! use serde_json::json;
//!
//! let node = Node::object([
//!     Member::named("x", Node::number(1.0)),
//!     Member::named("y", Node::string("s")),
//! ]);
//! assert_eq!(convert(&node).unwrap(), json!({"x": 1, "y": "s"}));
//! ```

use crate::ast::{Member, Node, Path, Property, Segment};
use crate::error::{ConvertError, Result, SyntaxViolation};
use crate::escape::{escape_string, EscapeMode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Largest integer `n` such that `n` and `n + 1` are both exactly
/// representable as `f64` (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Remaining stack below which a recursive step moves to a fresh segment.
pub(crate) const STACK_RED_ZONE_BYTES: usize = 64 * 1024;

/// Size of each stack segment allocated for deep trees.
pub(crate) const STACK_SEGMENT_BYTES: usize = 1024 * 1024;

/// Conversion settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub escape: EscapeMode,
}

impl ConvertOptions {
    pub fn with_escape(mut self, escape: EscapeMode) -> Self {
        self.escape = escape;
        self
    }
}

/// Stateless converter; one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralConverter {
    options: ConvertOptions,
}

impl LiteralConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Convert `node` into the JSON value it spells.
    pub fn convert(&self, node: &Node) -> Result<Value> {
        let mut path = Path::root();
        self.convert_node(node, &mut path)
    }

    fn convert_node(&self, node: &Node, path: &mut Path) -> Result<Value> {
        stacker::maybe_grow(STACK_RED_ZONE_BYTES, STACK_SEGMENT_BYTES, || {
            self.convert_kind(node, path)
        })
    }

    fn convert_kind(&self, node: &Node, path: &mut Path) -> Result<Value> {
        match node {
            Node::StringLiteral { value } => Ok(Value::String(
                escape_string(value, self.options.escape).into_owned(),
            )),
            Node::NullLiteral => Ok(Value::Null),
            Node::BooleanLiteral { value } => Ok(Value::Bool(*value)),
            Node::NumericLiteral { value } => {
                number_value(*value).ok_or_else(|| invalid_value(path, "NumericLiteral"))
            }
            Node::ArrayExpression { elements } => self.convert_array(elements, path),
            Node::ObjectExpression { properties } => self.convert_object(properties, path),
            Node::Identifier { .. } | Node::BigIntLiteral { .. } | Node::Unsupported { .. } => {
                Err(invalid_value(path, node.kind()))
            }
        }
    }

    fn convert_array(&self, elements: &[Option<Node>], path: &mut Path) -> Result<Value> {
        let mut out = Vec::with_capacity(elements.len());
        for (i, element) in elements.iter().enumerate() {
            path.push(Segment::Index(i));
            let converted = match element {
                Some(node) => self.convert_node(node, path)?,
                None => return Err(invalid_value(path, "ArrayHole")),
            };
            path.pop();
            out.push(converted);
        }
        Ok(Value::Array(out))
    }

    fn convert_object(&self, members: &[Member], path: &mut Path) -> Result<Value> {
        let properties = plain_properties(members, path)?;

        if properties.iter().any(|p| p.computed) {
            return Err(invalid_syntax(path, SyntaxViolation::ComputedKey));
        }

        let mut map = Map::new();
        for property in properties {
            let key = property_key(&property.key, path)?;
            path.push(Segment::Key(key.clone()));
            let value = self.convert_node(&property.value, path)?;
            path.pop();
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }
}

/// Convert `node` with default options.
pub fn convert(node: &Node) -> Result<Value> {
    LiteralConverter::default().convert(node)
}

/// Every entry must be a plain `key: value` property.
fn plain_properties<'a>(members: &'a [Member], path: &Path) -> Result<Vec<&'a Property>> {
    members
        .iter()
        .map(|member| match member {
            Member::Property(property) => Ok(property),
            Member::Other { kind } => Err(invalid_syntax(
                path,
                SyntaxViolation::NonPlainEntry { kind: kind.clone() },
            )),
        })
        .collect()
}

/// Resolve a non-computed key to the string it names.
fn property_key(key: &Node, path: &Path) -> Result<String> {
    match key {
        Node::Identifier { name } => Ok(name.clone()),
        Node::StringLiteral { value } => Ok(value.clone()),
        Node::BigIntLiteral { digits } => Ok(digits.clone()),
        Node::NumericLiteral { value } => match safe_integer(*value) {
            Some(n) => Ok(n.to_string()),
            None => Err(invalid_syntax(
                path,
                SyntaxViolation::UnsafeIntegerKey { key: *value },
            )),
        },
        other => Err(invalid_syntax(
            path,
            SyntaxViolation::UnsupportedKey {
                kind: other.kind().to_string(),
            },
        )),
    }
}

/// `Some` when `value` is an integer within ±(2^53 - 1).
pub fn safe_integer(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        Some(value as i64)
    } else {
        None
    }
}

fn number_value(value: f64) -> Option<Value> {
    match safe_integer(value) {
        Some(n) => Some(Value::Number(Number::from(n))),
        None => Number::from_f64(value).map(Value::Number),
    }
}

fn invalid_value(path: &Path, kind: &str) -> ConvertError {
    ConvertError::InvalidValue {
        path: path.clone(),
        kind: kind.to_string(),
    }
}

fn invalid_syntax(path: &Path, violation: SyntaxViolation) -> ConvertError {
    ConvertError::InvalidSyntax {
        path: path.clone(),
        violation,
    }
}
