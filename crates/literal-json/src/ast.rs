//! Literal expression AST accepted by the converter.
//!
//! The model is closed: the six literal kinds the converter understands get
//! their own variants, identifiers and bigints are kept because they name
//! object keys, and everything else collapses into [`Node::Unsupported`] carrying its kind
//! tag so it can be reported. Nodes own their children; a tree built from
//! these types is always finite and acyclic.

use std::fmt;

/// A node of a JavaScript expression tree, as far as literal conversion cares.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `42`, `0x10`, `1.5e3`
    NumericLiteral { value: f64 },
    /// `"text"` / `'text'`, holding the cooked (unescaped) value.
    StringLiteral { value: String },
    BooleanLiteral { value: bool },
    NullLiteral,
    /// `[a, b, c]`. `None` elements are holes (`[1,,2]`).
    ArrayExpression { elements: Vec<Option<Node>> },
    ObjectExpression { properties: Vec<Member> },
    /// A bare name. Valid as a non-computed property key, never as a value.
    Identifier { name: String },
    /// `10n`. Like identifiers, usable as a key (by its digit text) but not as
    /// a value: JSON has no bigint.
    BigIntLiteral { digits: String },
    /// Any other node kind, identified by its parser tag (`CallExpression`,
    /// `TemplateLiteral`, ...).
    Unsupported { kind: String },
}

impl Node {
    pub fn number(value: f64) -> Self {
        Node::NumericLiteral { value }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::StringLiteral {
            value: value.into(),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Node::BooleanLiteral { value }
    }

    pub fn null() -> Self {
        Node::NullLiteral
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier { name: name.into() }
    }

    pub fn bigint(digits: impl Into<String>) -> Self {
        Node::BigIntLiteral {
            digits: digits.into(),
        }
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        Node::Unsupported { kind: kind.into() }
    }

    /// Array without holes.
    pub fn array(elements: impl IntoIterator<Item = Node>) -> Self {
        Node::ArrayExpression {
            elements: elements.into_iter().map(Some).collect(),
        }
    }

    pub fn object(properties: impl IntoIterator<Item = Member>) -> Self {
        Node::ObjectExpression {
            properties: properties.into_iter().collect(),
        }
    }

    /// The parser tag this node would carry in a Babel AST.
    pub fn kind(&self) -> &str {
        match self {
            Node::NumericLiteral { .. } => "NumericLiteral",
            Node::StringLiteral { .. } => "StringLiteral",
            Node::BooleanLiteral { .. } => "BooleanLiteral",
            Node::NullLiteral => "NullLiteral",
            Node::ArrayExpression { .. } => "ArrayExpression",
            Node::ObjectExpression { .. } => "ObjectExpression",
            Node::Identifier { .. } => "Identifier",
            Node::BigIntLiteral { .. } => "BigIntLiteral",
            Node::Unsupported { kind } => kind.as_str(),
        }
    }
}

/// An entry of an object expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// A plain `key: value` entry.
    Property(Property),
    /// Spread elements, object methods, getters and setters.
    Other { kind: String },
}

impl Member {
    /// Non-computed `name: value` entry.
    pub fn named(name: impl Into<String>, value: Node) -> Self {
        Member::Property(Property {
            key: Node::identifier(name),
            value,
            computed: false,
        })
    }

    /// Non-computed entry keyed by an arbitrary node (string or numeric literal).
    pub fn keyed(key: Node, value: Node) -> Self {
        Member::Property(Property {
            key,
            value,
            computed: false,
        })
    }

    /// `[key]: value`
    pub fn computed(key: Node, value: Node) -> Self {
        Member::Property(Property {
            key,
            value,
            computed: true,
        })
    }

    pub fn spread() -> Self {
        Member::Other {
            kind: "SpreadElement".to_string(),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Member::Property(_) => "ObjectProperty",
            Member::Other { kind } => kind.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: Node,
    pub value: Node,
    pub computed: bool,
}

/// One step from a parent value to a child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Location of a node inside the converted document, rendered JSONPath-style:
/// `$`, `$.items[2].name`, `$["not an ident"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                Segment::Index(i) => write!(f, "[{}]", i)?,
                Segment::Key(key) if is_plain_name(key) => write!(f, ".{}", key)?,
                // Debug formatting quotes and escapes the key.
                Segment::Key(key) => write!(f, "[{:?}]", key)?,
            }
        }
        Ok(())
    }
}

fn is_plain_name(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
