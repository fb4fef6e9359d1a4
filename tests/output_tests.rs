// JSON encoding: deterministic key order, escaping, compact and pretty
// forms.

use n1ql_json::*;

#[test]
fn test_scalars_compact() {
    assert_eq!(to_json(&Value::Null), "null");
    assert_eq!(to_json(&Value::from(true)), "true");
    assert_eq!(to_json(&Value::from(42i64)), "42");
    assert_eq!(to_json(&Value::from(1.5)), "1.5");
    assert_eq!(to_json(&Value::from("hi")), "\"hi\"");
}

#[test]
fn test_whole_double_prints_without_fraction() {
    assert_eq!(to_json(&Value::from(2.0)), "2");
}

#[test]
fn test_empty_containers() {
    assert_eq!(to_json(&Value::Array(array())), "[]");
    assert_eq!(to_json(&Value::Dict(MutableDict::new())), "{}");
}

#[test]
fn test_dict_keys_are_sorted() {
    let dict = dict_with("WHERE", Value::Null);
    set_any(&dict, "FROM", Some(Value::from("db")));
    set_any(&dict, "WHAT", Some(Value::from(1i64)));

    assert_eq!(
        to_json(&Value::Dict(dict)),
        r#"{"FROM":"db","WHAT":1,"WHERE":null}"#
    );
}

#[test]
fn test_string_escaping() {
    assert_eq!(to_json(&Value::from("a\"b\\c\nd")), r#""a\"b\\c\nd""#);
    assert_eq!(to_json(&Value::from("\u{1}")), "\"\\u0001\"");
}

#[test]
fn test_passthrough_value_reencodes() {
    let v = Value::from(serde_json::json!({"b": 1, "a": [true, null]}));
    assert_eq!(to_json(&v), r#"{"a":[true,null],"b":1}"#);
}

#[test]
fn test_pretty_operation_node() {
    let node = op("=", [Value::from(".name"), Value::from("Bob")]);

    assert_eq!(
        to_json_pretty(&Value::Array(node)),
        "[\n  \"=\",\n  \".name\",\n  \"Bob\"\n]"
    );
}

#[test]
fn test_pretty_dict() {
    let dict = dict_with("WHAT", array_with(".name"));

    assert_eq!(
        to_json_pretty(&Value::Dict(dict)),
        "{\n  \"WHAT\": [\n    \".name\"\n  ]\n}"
    );
}
