// End-to-end: build whole query trees the way grammar actions would,
// resolve correlated variables, and encode the wire form.

use n1ql_json::*;

// SELECT name FROM db WHERE ANY x IN addresses SATISFIES x.city = 'Paris' END
#[test]
fn test_any_satisfies_query() {
    let path = format!("{}{}", quote_property("x"), quote_property("city"));
    let body = op("=", [array_with(path).into(), unquote("Paris", '\'').into()]);
    substitute_variable("x", &body);

    let cond = op(
        "ANY",
        [
            "x".into(),
            array_with(quote_property("addresses")).into(),
            body.into(),
        ],
    );

    let query = dict_with("WHAT", array_with(array_with(quote_property("name"))));
    set_any(&query, "WHERE", Some(cond.into()));
    set_any(&query, "LIMIT", None);

    assert_eq!(
        to_json(&Value::Dict(query)),
        r#"{"WHAT":[[".name"]],"WHERE":["ANY","x",[".addresses"],["=",["?x.city"],"Paris"]]}"#
    );
}

// SELECT name, age FROM db WHERE age > 21 ORDER BY age DESC LIMIT 10
#[test]
fn test_select_with_ordering_and_limit() {
    let what = array();
    append_any(&what, Some(array_with(quote_property("name")).into()));
    append_any(&what, Some(array_with(quote_property("age")).into()));

    let condition = binary_op(
        array_with(quote_property("age")).into(),
        ">".into(),
        21i64.into(),
    );

    let order = array_with(op("DESC", [array_with(quote_property("age")).into()]));

    let query = dict_with("WHAT", what);
    set_any(&query, "WHERE", Some(condition.into()));
    set_any(&query, "ORDER_BY", Some(order.into()));
    set_any(&query, "LIMIT", Some(10i64.into()));
    set_any(&query, "OFFSET", None);

    assert_eq!(
        to_json(&Value::Dict(query)),
        r#"{"LIMIT":10,"ORDER_BY":[["DESC",[".age"]]],"WHAT":[[".name"],[".age"]],"WHERE":[">",[".age"],21]}"#
    );
}

#[test]
fn test_identifier_handling_helpers() {
    // the driver rejects bare keywords and path-quotes everything else
    assert!(is_reserved_word("Where"));
    assert!(!is_reserved_word("city"));
    assert_eq!(quote_property(trim("  geo.lat ")), ".geo\\.lat");
}

// ORDER BY terms accumulate after the dict already holds the array
#[test]
fn test_deferred_clause_accumulation() {
    let order_by = array();
    let query = dict_with("ORDER_BY", order_by.clone());

    append_any(&order_by, Some(array_with(quote_property("age")).into()));
    append_any(&order_by, Some(array_with(quote_property("name")).into()));

    assert_eq!(
        to_json(&Value::Dict(query)),
        r#"{"ORDER_BY":[[".age"],[".name"]]}"#
    );
}
