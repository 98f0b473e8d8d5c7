//! WASM bindings for literal-json.
//!
//! JavaScript tooling already holds a Babel/ESTree AST, so the bindings take
//! the node serialized with `JSON.stringify` and hand back the converted value
//! as a JSON string for `JSON.parse`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p literal-json-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/literal-json-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/literal_json_wasm.wasm
//! ```

use literal_json::{estree, ConvertOptions, EscapeMode, LiteralConverter};
use wasm_bindgen::prelude::*;

/// Convert a serialized AST node into compact JSON with compatible escaping.
///
/// Throws a JS error carrying the conversion error text on failure.
#[wasm_bindgen]
pub fn convert(ast_json: &str) -> std::result::Result<String, JsValue> {
    convert_impl(ast_json, EscapeMode::Compat).map_err(|e| JsValue::from_str(&e))
}

/// Like [`convert`], selecting the escape mode by name (`"compat"` or `"full"`).
#[wasm_bindgen(js_name = convertWithEscape)]
pub fn convert_with_escape(ast_json: &str, escape: &str) -> std::result::Result<String, JsValue> {
    let mode: EscapeMode = escape.parse().map_err(|e: String| JsValue::from_str(&e))?;
    convert_impl(ast_json, mode).map_err(|e| JsValue::from_str(&e))
}

/// Shared path for the exports; errors are rendered to text so they can cross
/// the boundary and be unit tested off-wasm.
pub fn convert_impl(ast_json: &str, escape: EscapeMode) -> std::result::Result<String, String> {
    let node = estree::from_str(ast_json).map_err(|e| e.to_string())?;
    let value = LiteralConverter::new(ConvertOptions::default().with_escape(escape))
        .convert(&node)
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&value).map_err(|e| e.to_string())
}
