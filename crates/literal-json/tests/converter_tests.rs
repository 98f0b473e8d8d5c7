/// Converter contract tests: literal nodes in, JSON values out.
///
/// Nodes are built directly with the `ast` constructors so every case states
/// exactly which tree the converter sees.
use literal_json::{
    convert, ConvertError, ConvertOptions, ErrorKind, EscapeMode, LiteralConverter, Member, Node,
    Segment, SyntaxViolation,
};
use serde_json::{json, Value};

fn kind_of(result: Result<Value, ConvertError>) -> ErrorKind {
    result
        .expect_err("conversion should fail")
        .kind()
        .expect("conversion errors carry a kind")
}

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn convert_integer() {
    assert_eq!(convert(&Node::number(42.0)).unwrap(), json!(42));
}

#[test]
fn convert_integer_is_not_rendered_as_float() {
    let value = convert(&Node::number(1.0)).unwrap();
    assert_eq!(serde_json::to_string(&value).unwrap(), "1");
}

#[test]
fn convert_float() {
    assert_eq!(convert(&Node::number(2.5)).unwrap(), json!(2.5));
}

#[test]
fn convert_large_number_stays_float() {
    // Beyond 2^53 - 1 the value is kept as-is, not range-checked.
    let value = convert(&Node::number(1e21)).unwrap();
    assert_eq!(value.as_f64(), Some(1e21));
}

#[test]
fn convert_non_finite_number_is_invalid_value() {
    assert_eq!(
        kind_of(convert(&Node::number(f64::INFINITY))),
        ErrorKind::InvalidValue
    );
    assert_eq!(
        kind_of(convert(&Node::number(f64::NAN))),
        ErrorKind::InvalidValue
    );
}

#[test]
fn convert_true() {
    assert_eq!(convert(&Node::boolean(true)).unwrap(), json!(true));
}

#[test]
fn convert_false() {
    assert_eq!(convert(&Node::boolean(false)).unwrap(), json!(false));
}

#[test]
fn convert_null() {
    assert_eq!(convert(&Node::null()).unwrap(), Value::Null);
}

#[test]
fn convert_plain_string() {
    assert_eq!(convert(&Node::string("hello")).unwrap(), json!("hello"));
}

#[test]
fn convert_empty_string() {
    assert_eq!(convert(&Node::string("")).unwrap(), json!(""));
}

// ============================================================================
// String escaping
// ============================================================================

#[test]
fn string_with_quotes_escapes_every_quote() {
    let value = convert(&Node::string(r#"say "hi" and "bye""#)).unwrap();
    assert_eq!(value, json!(r#"say \"hi\" and \"bye\""#));
}

#[test]
fn string_with_newline_escapes_it() {
    let value = convert(&Node::string("line1\nline2")).unwrap();
    assert_eq!(value, json!("line1\\nline2"));
}

#[test]
fn quote_escaping_preempts_control_escaping() {
    let value = convert(&Node::string("both\"here\n")).unwrap();
    assert_eq!(value, json!("both\\\"here\n"));
}

#[test]
fn only_first_newline_is_escaped() {
    let value = convert(&Node::string("a\nb\nc")).unwrap();
    assert_eq!(value, json!("a\\nb\nc"));
}

#[test]
fn first_two_tabs_are_escaped() {
    let value = convert(&Node::string("a\tb\tc\td")).unwrap();
    assert_eq!(value, json!("a\\tb\\tc\td"));
}

#[test]
fn each_control_character_escaped_once() {
    let value = convert(&Node::string("\u{8}\u{c}\r\n\u{8}\u{c}\r\n")).unwrap();
    assert_eq!(value, json!("\\b\\f\\r\\n\u{8}\u{c}\r\n"));
}

#[test]
fn backslash_is_left_alone_in_compat_mode() {
    let value = convert(&Node::string(r"C:\temp")).unwrap();
    assert_eq!(value, json!(r"C:\temp"));
}

#[test]
fn full_escape_mode_escapes_everything() {
    let converter = LiteralConverter::new(ConvertOptions::default().with_escape(EscapeMode::Full));
    let value = converter
        .convert(&Node::string("both\"here\n\n\\"))
        .unwrap();
    assert_eq!(value, json!(r#"both\"here\n\n\\"#));
}

#[test]
fn object_keys_are_not_escaped() {
    let node = Node::object([Member::keyed(Node::string("a\"b\n"), Node::null())]);
    let value = convert(&node).unwrap();
    assert!(value.get("a\"b\n").is_some(), "raw key expected: {}", value);
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn convert_mixed_array() {
    let node = Node::array([Node::number(1.0), Node::string("a"), Node::null()]);
    assert_eq!(convert(&node).unwrap(), json!([1, "a", null]));
}

#[test]
fn convert_empty_array() {
    assert_eq!(convert(&Node::array(Vec::new())).unwrap(), json!([]));
}

#[test]
fn convert_nested_arrays() {
    let node = Node::array([
        Node::array([Node::number(1.0), Node::number(2.0)]),
        Node::array([Node::boolean(true)]),
    ]);
    assert_eq!(convert(&node).unwrap(), json!([[1, 2], [true]]));
}

#[test]
fn array_hole_is_invalid_value() {
    let node = Node::ArrayExpression {
        elements: vec![Some(Node::number(1.0)), None, Some(Node::number(2.0))],
    };
    let err = convert(&node).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::InvalidValue));
    assert_eq!(err.path().unwrap().to_string(), "$[1]");
}

#[test]
fn unsupported_element_fails_whole_array() {
    let node = Node::array([Node::number(1.0), Node::unsupported("CallExpression")]);
    assert_eq!(kind_of(convert(&node)), ErrorKind::InvalidValue);
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn convert_simple_object() {
    let node = Node::object([
        Member::named("x", Node::number(1.0)),
        Member::named("y", Node::string("s")),
    ]);
    assert_eq!(convert(&node).unwrap(), json!({"x": 1, "y": "s"}));
}

#[test]
fn convert_empty_object() {
    assert_eq!(convert(&Node::object(Vec::new())).unwrap(), json!({}));
}

#[test]
fn string_literal_key() {
    let node = Node::object([Member::keyed(Node::string("my-key"), Node::boolean(true))]);
    assert_eq!(convert(&node).unwrap(), json!({"my-key": true}));
}

#[test]
fn numeric_key_becomes_integer_text() {
    let node = Node::object([
        Member::keyed(Node::number(1.0), Node::string("one")),
        Member::keyed(Node::number(16.0), Node::string("hex")),
    ]);
    assert_eq!(convert(&node).unwrap(), json!({"1": "one", "16": "hex"}));
}

#[test]
fn max_safe_integer_key_is_accepted() {
    let node = Node::object([Member::keyed(
        Node::number(9_007_199_254_740_991.0),
        Node::null(),
    )]);
    assert_eq!(
        convert(&node).unwrap(),
        json!({"9007199254740991": null})
    );
}

#[test]
fn unsafe_integer_key_is_invalid_syntax() {
    let node = Node::object([Member::keyed(Node::number(1e21), Node::null())]);
    let err = convert(&node).unwrap_err();
    match err {
        ConvertError::InvalidSyntax { violation, .. } => {
            assert_eq!(violation, SyntaxViolation::UnsafeIntegerKey { key: 1e21 });
        }
        other => panic!("expected InvalidSyntax, got {:?}", other),
    }
}

#[test]
fn fractional_key_is_invalid_syntax() {
    let node = Node::object([Member::keyed(Node::number(1.5), Node::null())]);
    assert_eq!(kind_of(convert(&node)), ErrorKind::InvalidSyntax);
}

#[test]
fn key_just_past_safe_range_is_invalid_syntax() {
    let node = Node::object([Member::keyed(
        Node::number(9_007_199_254_740_992.0),
        Node::null(),
    )]);
    assert_eq!(kind_of(convert(&node)), ErrorKind::InvalidSyntax);
}

#[test]
fn duplicate_keys_last_wins() {
    let node = Node::object([
        Member::named("a", Node::number(1.0)),
        Member::named("a", Node::number(2.0)),
    ]);
    assert_eq!(convert(&node).unwrap(), json!({"a": 2}));
}

#[test]
fn identifier_and_string_keys_collide() {
    let node = Node::object([
        Member::named("a", Node::number(1.0)),
        Member::keyed(Node::string("a"), Node::number(2.0)),
    ]);
    assert_eq!(convert(&node).unwrap(), json!({"a": 2}));
}

#[test]
fn object_preserves_source_key_order() {
    let node = Node::object([
        Member::named("zeta", Node::null()),
        Member::named("alpha", Node::null()),
        Member::named("mid", Node::null()),
    ]);
    let text = serde_json::to_string(&convert(&node).unwrap()).unwrap();
    assert_eq!(text, r#"{"zeta":null,"alpha":null,"mid":null}"#);
}

#[test]
fn spread_entry_is_invalid_syntax() {
    let node = Node::object([Member::named("a", Node::number(1.0)), Member::spread()]);
    assert_eq!(kind_of(convert(&node)), ErrorKind::InvalidSyntax);
}

#[test]
fn object_method_is_invalid_syntax() {
    let node = Node::object([Member::Other {
        kind: "ObjectMethod".to_string(),
    }]);
    let err = convert(&node).unwrap_err();
    assert!(err.to_string().contains("ObjectMethod"), "{}", err);
}

#[test]
fn computed_key_is_invalid_syntax() {
    let node = Node::object([Member::computed(Node::string("a"), Node::number(1.0))]);
    let err = convert(&node).unwrap_err();
    match err {
        ConvertError::InvalidSyntax { violation, .. } => {
            assert_eq!(violation, SyntaxViolation::ComputedKey);
        }
        other => panic!("expected InvalidSyntax, got {:?}", other),
    }
}

#[test]
fn entry_checks_run_before_values_are_converted() {
    // The invalid value comes first, but the spread later in the same object
    // is reported.
    let node = Node::object([
        Member::named("a", Node::identifier("someVariable")),
        Member::spread(),
    ]);
    assert_eq!(kind_of(convert(&node)), ErrorKind::InvalidSyntax);
}

#[test]
fn unsupported_key_kind_is_invalid_syntax() {
    let node = Node::object([Member::keyed(Node::unsupported("TemplateLiteral"), Node::null())]);
    let err = convert(&node).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::InvalidSyntax));
    assert!(err.to_string().contains("TemplateLiteral"), "{}", err);
}

#[test]
fn bigint_key_uses_its_digit_text() {
    let node = Node::object([
        Member::keyed(Node::bigint("1"), Node::number(2.0)),
        Member::keyed(Node::bigint("12345678901234567890"), Node::null()),
    ]);
    assert_eq!(
        convert(&node).unwrap(),
        json!({"1": 2, "12345678901234567890": null})
    );
}

#[test]
fn bigint_value_is_invalid_value() {
    let node = Node::object([Member::named("n", Node::bigint("10"))]);
    let err = convert(&node).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::InvalidValue));
    assert_eq!(err.path().unwrap().to_string(), "$.n");
}

#[test]
fn shorthand_property_value_is_invalid_value() {
    // `{ a }` parses to a property whose value is the identifier `a`.
    let node = Node::object([Member::named("a", Node::identifier("a"))]);
    assert_eq!(kind_of(convert(&node)), ErrorKind::InvalidValue);
}

// ============================================================================
// Unsupported nodes at any depth
// ============================================================================

#[test]
fn root_identifier_is_invalid_value() {
    assert_eq!(
        kind_of(convert(&Node::identifier("undefined"))),
        ErrorKind::InvalidValue
    );
}

#[test]
fn root_call_expression_is_invalid_value() {
    let err = convert(&Node::unsupported("CallExpression")).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::InvalidValue));
    assert!(err.path().unwrap().is_root());
    assert!(err.to_string().starts_with("Invalid value is included"));
}

#[test]
fn deeply_nested_unsupported_node_reports_path() {
    let node = Node::object([Member::named(
        "items",
        Node::array([
            Node::number(0.0),
            Node::object([
                Member::named("ok", Node::boolean(true)),
                Member::keyed(
                    Node::string("bad key"),
                    Node::unsupported("TemplateLiteral"),
                ),
            ]),
        ]),
    )]);
    let err = convert(&node).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::InvalidValue));
    let path = err.path().unwrap();
    assert_eq!(path.to_string(), r#"$.items[1]["bad key"]"#);
    assert_eq!(
        path.segments(),
        &[
            Segment::Key("items".to_string()),
            Segment::Index(1),
            Segment::Key("bad key".to_string()),
        ]
    );
}

#[test]
fn nested_computed_key_reports_object_path() {
    let node = Node::array([Node::object([Member::computed(
        Node::identifier("k"),
        Node::null(),
    )])]);
    let err = convert(&node).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::InvalidSyntax));
    assert_eq!(err.path().unwrap().to_string(), "$[0]");
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn deeply_nested_arrays_convert() {
    let depth = 1_000;
    let mut node = Node::number(7.0);
    for _ in 0..depth {
        node = Node::array([node]);
    }
    let mut value = convert(&node).unwrap();
    for _ in 0..depth {
        value = value[0].take();
    }
    assert_eq!(value, json!(7));
}

#[test]
fn conversion_is_idempotent() {
    let node = Node::object([
        Member::named("list", Node::array([Node::string("a\tb"), Node::null()])),
        Member::keyed(Node::number(3.0), Node::boolean(false)),
    ]);
    let first = convert(&node).unwrap();
    let second = convert(&node).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, json!({"list": ["a\\tb", null], "3": false}));
}

#[test]
fn converter_is_shareable_across_threads() {
    let converter = LiteralConverter::default();
    let node = Node::array([Node::number(1.0), Node::string("x")]);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(converter.convert(&node).unwrap(), json!([1, "x"]));
            });
        }
    });
}

#[test]
fn error_kind_messages() {
    assert_eq!(ErrorKind::InvalidValue.message(), "Invalid value is included.");
    assert_eq!(ErrorKind::InvalidSyntax.message(), "Invalid syntax is included.");
}
