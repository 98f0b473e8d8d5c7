//! # literal-json
//!
//! Turns JavaScript literal expressions, as produced by a parser such as Babel,
//! into JSON values without evaluating any code.
//!
//! Tooling like linters and codemods often needs the value of an object or
//! array literal written in source (`export default { name: "x", tags: [1] }`).
//! This crate accepts exactly the literal subset of the expression grammar:
//! numbers, strings, booleans, `null`, arrays and objects with static keys.
//! Anything else (identifiers, calls, spreads, computed keys, template
//! literals) is rejected instead of guessed at.
//!
//! ## Quick start
//!
//! ```rust
//! use literal_json::convert_json;
//! use serde_json::json;
//!
//! // Babel AST for `{ a: [1, "two", null] }`
//! let ast = r#"{
//!   "type": "ObjectExpression",
//!   "properties": [{
//!     "type": "ObjectProperty", "computed": false,
//!     "key": { "type": "Identifier", "name": "a" },
//!     "value": { "type": "ArrayExpression", "elements": [
//!       { "type": "NumericLiteral", "value": 1 },
//!       { "type": "StringLiteral", "value": "two" },
//!       { "type": "NullLiteral" }
//!     ]}
//!   }]
//! }"#;
//! assert_eq!(convert_json(ast).unwrap(), json!({"a": [1, "two", null]}));
//! ```
//!
//! ## Modules
//!
//! - [`ast`] — closed node model (`Node`, `Member`, `Path`)
//! - [`convert`] — `LiteralConverter`, the node → value walk
//! - [`escape`] — string value escaping (`EscapeMode`)
//! - [`estree`] — Babel/ESTree JSON dump → `Node`
//! - [`error`] — `ConvertError` and friends

pub mod ast;
pub mod convert;
pub mod error;
pub mod escape;
pub mod estree;

pub use ast::{Member, Node, Path, Property, Segment};
pub use convert::{convert, ConvertOptions, LiteralConverter};
pub use error::{ConvertError, ErrorKind, SyntaxViolation};
pub use escape::{escape_string, EscapeMode};

use serde_json::Value;

/// Read a serialized Babel/ESTree node and convert it with default options.
pub fn convert_json(ast_json: &str) -> error::Result<Value> {
    convert(&estree::from_str(ast_json)?)
}

/// Convert an already-parsed Babel/ESTree node with default options.
pub fn convert_estree(ast: &Value) -> error::Result<Value> {
    convert(&estree::from_value(ast))
}
