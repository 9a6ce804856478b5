//! End-to-end tests of the compiled wire shape.

use scout_query::{
    compile, compile_value, Builder, Condition, Kind, Op, Operand, QueryError, Scalar,
};
use serde_json::json;

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn single_range_condition() {
    let builder = Builder::new().and("age", Op::Gte, 18);
    assert_eq!(
        serde_json::to_string(&compile(&builder).unwrap()).unwrap(),
        r#"{"filter":[{"range":{"age":{"gte":18}}}]}"#
    );
}

#[test]
fn or_pair_merges_into_one_group() {
    let builder = Builder::new().and_eq("status", "a").or_eq("status", "b");
    assert_eq!(
        serde_json::to_string(&compile(&builder).unwrap()).unwrap(),
        r#"{"filter":[{"should":[{"term":{"status":"a"}},{"term":{"status":"b"}}]}]}"#
    );
}

#[test]
fn like_translates_percent() {
    let builder = Builder::new().and_like("name", "abc%");
    assert_eq!(
        compile_value(&builder).unwrap(),
        json!({ "filter": [{ "wildcard": { "name": "abc*" } }] })
    );
}

#[test]
fn is_null_forces_negation() {
    let builder = Builder::new().and_null("f");
    assert_eq!(
        serde_json::to_string(&compile(&builder).unwrap()).unwrap(),
        r#"{"must_not":[{"exists":{"field":"f"}}]}"#
    );
}

// ============================================================================
// Empty input
// ============================================================================

#[test]
fn empty_builder_compiles_to_empty_object() {
    let node = compile(&Builder::new()).unwrap();
    assert!(node.is_empty());
    assert_eq!(serde_json::to_string(&node).unwrap(), "{}");
}

// ============================================================================
// Simple stream
// ============================================================================

#[test]
fn simple_stream_emits_term_and_terms() {
    let builder = Builder::new()
        .where_eq("tenant", 7)
        .where_in("tag", ["a", "b"]);

    assert_eq!(
        compile_value(&builder).unwrap(),
        json!({
            "filter": [
                {"terms": {"tag": ["a", "b"]}},
                {"term": {"tenant": 7}}
            ]
        })
    );
}

#[test]
fn simple_stream_precedes_advanced_conditions() {
    let builder = Builder::new().and_exists("title").where_eq("lang", "en");
    assert_eq!(
        compile_value(&builder).unwrap(),
        json!({
            "filter": [
                {"term": {"lang": "en"}},
                {"exists": {"field": "title"}}
            ]
        })
    );
}

// ============================================================================
// Clause rules
// ============================================================================

#[test]
fn every_kind_emits_its_clause() {
    let builder = Builder::new()
        .and_eq("a", 1)
        .and("b", Op::Gt, 2)
        .and("c", Op::Lt, 3)
        .and("d", Op::Lte, 4)
        .and_between("e", 5, 10)
        .and_in("f", [1, 2])
        .and_exists("g")
        .and_starts_with("h", "pre")
        .and_ends_with("i", "suf")
        .and_contains("j", "mid");

    assert_eq!(
        compile_value(&builder).unwrap(),
        json!({
            "filter": [
                {"term": {"a": 1}},
                {"range": {"b": {"gt": 2}}},
                {"range": {"c": {"lt": 3}}},
                {"range": {"d": {"lte": 4}}},
                {"range": {"e": {"gte": 5, "lte": 10}}},
                {"terms": {"f": [1, 2]}},
                {"exists": {"field": "g"}},
                {"match_phrase_prefix": {"h": "pre"}},
                {"wildcard": {"i": "*suf"}},
                {"wildcard": {"j": "*mid*"}}
            ]
        })
    );
}

#[test]
fn not_equals_inverts_negation() {
    let plain = Builder::new().and_ne("status", "closed");
    assert_eq!(
        compile_value(&plain).unwrap(),
        json!({ "must_not": [{ "term": { "status": "closed" } }] })
    );

    let negated = Builder::new().and_not("status", Op::Ne, "closed");
    assert_eq!(
        compile_value(&negated).unwrap(),
        json!({ "filter": [{ "term": { "status": "closed" } }] })
    );
}

#[test]
fn negated_null_requires_presence() {
    let builder = Builder::new().and_not_null("email");
    assert_eq!(
        compile_value(&builder).unwrap(),
        json!({ "filter": [{ "exists": { "field": "email" } }] })
    );
}

#[test]
fn negated_kinds_go_to_must_not() {
    let builder = Builder::new()
        .and_not_in("f", ["x"])
        .and_not_between("g", 1, 2)
        .and_not_contains("h", "spam")
        .and_not_exists("i");

    assert_eq!(
        compile_value(&builder).unwrap(),
        json!({
            "must_not": [
                {"terms": {"f": ["x"]}},
                {"range": {"g": {"gte": 1, "lte": 2}}},
                {"wildcard": {"h": "*spam*"}},
                {"exists": {"field": "i"}}
            ]
        })
    );
}

// ============================================================================
// OR grouping
// ============================================================================

#[test]
fn or_run_groups_with_preceding_condition() {
    // a AND (b OR c) AND d
    let builder = Builder::new()
        .and_eq("a", 1)
        .and_eq("b", 2)
        .or_eq("c", 3)
        .and_eq("d", 4);

    assert_eq!(
        compile_value(&builder).unwrap(),
        json!({
            "filter": [
                {"term": {"a": 1}},
                {"should": [{"term": {"b": 2}}, {"term": {"c": 3}}]},
                {"term": {"d": 4}}
            ]
        })
    );
}

#[test]
fn negated_or_member_is_wrapped() {
    let builder = Builder::new()
        .and_eq("status", "open")
        .or_not_contains("title", "draft");

    assert_eq!(
        compile_value(&builder).unwrap(),
        json!({
            "filter": [{
                "should": [
                    {"term": {"status": "open"}},
                    {"must_not": [{"wildcard": {"title": "*draft*"}}]}
                ]
            }]
        })
    );
}

#[test]
fn negated_set_alternative_is_wrapped() {
    let builder = Builder::new()
        .and_eq("owner", "me")
        .or_not_in("tag", ["spam", "junk"]);

    assert_eq!(
        compile_value(&builder).unwrap(),
        json!({
            "filter": [{
                "should": [
                    {"term": {"owner": "me"}},
                    {"must_not": [{"terms": {"tag": ["spam", "junk"]}}]}
                ]
            }]
        })
    );
}

#[test]
fn not_equals_alternative_is_wrapped() {
    let builder = Builder::new().and_eq("a", 1).or_ne("b", 2);

    assert_eq!(
        compile_value(&builder).unwrap(),
        json!({
            "filter": [{
                "should": [
                    {"term": {"a": 1}},
                    {"must_not": [{"term": {"b": 2}}]}
                ]
            }]
        })
    );

    // a negated not-equals is a plain alternative
    let builder = Builder::new().and_eq("a", 1).or_not("b", Op::Ne, 2);
    assert_eq!(
        compile_value(&builder).unwrap(),
        json!({ "filter": [{ "should": [{"term": {"a": 1}}, {"term": {"b": 2}}] }] })
    );
}

#[test]
fn leading_or_condition_is_grouped() {
    let builder = Builder::new()
        .push(Condition::basic("a", Op::Eq, 1).or())
        .and_eq("b", 2);

    assert_eq!(
        compile_value(&builder).unwrap(),
        json!({
            "filter": [
                {"should": [{"term": {"a": 1}}]},
                {"term": {"b": 2}}
            ]
        })
    );
}

#[test]
fn two_separate_or_runs() {
    let builder = Builder::new()
        .and_eq("a", 1)
        .or_eq("a", 2)
        .and_eq("b", 1)
        .or_null("b");

    assert_eq!(
        compile_value(&builder).unwrap(),
        json!({
            "filter": [
                {"should": [{"term": {"a": 1}}, {"term": {"a": 2}}]},
                {"should": [
                    {"term": {"b": 1}},
                    {"must_not": [{"exists": {"field": "b"}}]}
                ]}
            ]
        })
    );
}

// ============================================================================
// Nested sub-queries
// ============================================================================

#[test]
fn nested_builder_compiles_recursively() {
    let inner = Builder::new().and_eq("color", "red").or_eq("color", "blue");
    let builder = Builder::new().and("price", Op::Gte, 10).and_nested(inner);

    assert_eq!(
        compile_value(&builder).unwrap(),
        json!({
            "filter": [
                {"range": {"price": {"gte": 10}}},
                {"filter": [{"should": [
                    {"term": {"color": "red"}},
                    {"term": {"color": "blue"}}
                ]}]}
            ]
        })
    );
}

#[test]
fn negated_nested_in_or_group() {
    let inner = Builder::new().and_eq("x", 1);
    let builder = Builder::new()
        .and_eq("y", 2)
        .push(Condition::nested(inner).or().negate());

    assert_eq!(
        compile_value(&builder).unwrap(),
        json!({
            "filter": [{
                "should": [
                    {"term": {"y": 2}},
                    {"must_not": [{"filter": [{"term": {"x": 1}}]}]}
                ]
            }]
        })
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn scalar_given_to_set_operator() {
    let builder = Builder::new().push(Condition::new(
        "tag",
        Kind::In,
        Operand::Scalar(Scalar::from("a")),
    ));

    let err = compile(&builder).unwrap_err();
    assert!(matches!(err, QueryError::MalformedCondition { ref field, .. } if field == "tag"));
    assert!(err.to_string().starts_with("malformed condition on 'tag'"));
}

#[test]
fn prefix_rejects_bool_like_other_affixes() {
    for builder in [
        Builder::new().and_starts_with("f", true),
        Builder::new().and_ends_with("f", true),
        Builder::new().and_contains("f", true),
    ] {
        assert!(matches!(
            compile(&builder),
            Err(QueryError::MalformedCondition { ref field, .. }) if field == "f"
        ));
    }
}

#[test]
fn nested_without_sub_query() {
    let builder = Builder::new().push(Condition::new("", Kind::Nested, Operand::None));
    assert!(matches!(
        compile(&builder),
        Err(QueryError::MalformedCondition { .. })
    ));
}

#[test]
fn unknown_operator_token() {
    let err = Builder::new().and_op("age", "===", 1).unwrap_err();
    assert_eq!(
        err,
        QueryError::UnsupportedOperator {
            op: "===".to_string()
        }
    );
}
