use onesql::{
    expr::{Expr, Type},
    schema::Schema,
    stmt::Value,
    Command, Compiler,
};

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn compile(predicate: Expr) -> Command {
    Compiler::new(Schema::default())
        .compile_condition(&predicate)
        .unwrap()
}

fn text(predicate: Expr) -> String {
    compile(predicate).text
}

fn r() -> Expr {
    Expr::data_record()
}

fn field(name: &str) -> Expr {
    Expr::get_i32(r(), name)
}

// ---------------------------------------------------------------------------
// Relations
// ---------------------------------------------------------------------------

#[test]
fn relations() {
    let cases = [
        (Expr::eq(field("A"), 1), "A = &p1"),
        (Expr::ne(field("A"), 1), "A <> &p1"),
        (Expr::gt(field("A"), 1), "A > &p1"),
        (Expr::ge(field("A"), 1), "A >= &p1"),
        (Expr::lt(field("A"), 1), "A < &p1"),
        (Expr::le(field("A"), 1), "A <= &p1"),
        (Expr::eq(1, field("A")), "&p1 = A"),
    ];

    for (predicate, expected) in cases {
        let command = compile(predicate);
        assert_eq!(command.text, expected);
        assert_eq!(command.params.len(), 1);
    }
}

#[test]
fn every_constant_gets_its_own_parameter() {
    let command = compile(Expr::or(
        Expr::eq(field("A"), 1),
        Expr::eq(field("B"), 1),
    ));

    assert_eq!(command.text, "(A = &p1) OR (B = &p2)");
    assert_eq!(command.param("p1"), Some(&Value::I32(1)));
    assert_eq!(command.param("p2"), Some(&Value::I32(1)));
}

#[test]
fn field_to_field() {
    let command = compile(Expr::lt(field("A"), field("B")));

    assert_eq!(command.text, "A < B");
    assert!(command.params.is_empty());
}

#[test]
fn nested_logic() {
    let predicate = Expr::and(
        Expr::or(Expr::eq(field("A"), 1), Expr::eq(field("B"), 2)),
        Expr::eq(field("C"), 3),
    );

    assert_eq!(
        text(predicate),
        "((A = &p1) OR (B = &p2)) AND (C = &p3)"
    );
}

#[test]
fn computed_constants_are_folded() {
    let command = compile(Expr::gt(
        Expr::get_decimal(r(), "Price"),
        Expr::mul(Decimal::new(15, 1), 2),
    ));

    assert_eq!(command.text, "Price > &p1");
    assert_eq!(command.param("p1"), Some(&Value::Decimal(Decimal::new(3, 0))));
}

#[test]
fn date_parameter() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let command = compile(Expr::ge(Expr::get_date_time(r(), "Date"), date));

    assert_eq!(command.text, "Date >= &p1");
    assert_eq!(command.param("p1"), Some(&Value::from(date)));
}

#[test]
fn arithmetic_operand() {
    let command = compile(Expr::gt(
        Expr::mul(Expr::get_decimal(r(), "Price"), Decimal::new(12, 1)),
        100,
    ));

    assert_eq!(command.text, "((Price) * (&p1)) > &p2");
    assert_eq!(command.params.len(), 2);
}

// ---------------------------------------------------------------------------
// Null tests
// ---------------------------------------------------------------------------

#[test]
fn null_tests() {
    assert_eq!(text(Expr::eq(field("A"), Expr::null())), "A IS NULL");
    assert_eq!(text(Expr::eq(Expr::null(), field("A"))), "A IS NULL");
    assert_eq!(text(Expr::ne(field("A"), Expr::null())), "A IS NOT NULL");
}

#[test]
fn null_tests_add_no_parameters() {
    let command = compile(Expr::ne(Expr::get_string(r(), "Name"), Expr::null()));
    assert!(command.params.is_empty());
}

#[test]
fn null_ordering_is_rejected() {
    let err = Compiler::new(Schema::default())
        .compile_condition(&Expr::gt(field("A"), Expr::null()))
        .unwrap_err();

    assert!(err.is_unsupported_expression());
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

#[test]
fn value_lists_are_inline() {
    let values = || Expr::constant(vec!["a", "b"]);
    let code = || Expr::get_string(r(), "Code");

    let command = compile(Expr::contains(values(), code()));
    assert_eq!(command.text, r#"Code IN ("a", "b")"#);
    assert!(command.params.is_empty());

    assert_eq!(text(Expr::in_list(code(), values())), r#"Code IN ("a", "b")"#);
    assert_eq!(
        text(Expr::in_hierarchy(code(), values())),
        r#"Code IN HIERARCHY ("a", "b")"#
    );
    assert_eq!(text(Expr::not_in(field("A"), Expr::constant(vec![1, 2]))), "A NOT IN (1, 2)");
}

#[test]
fn array_initializer_list() {
    let values = Expr::new_array(Type::I32, [Expr::constant(1), Expr::add(1, 2)]);
    assert_eq!(text(Expr::in_list(field("A"), values)), "A IN (1, 3)");
}

#[test]
fn non_constant_list_is_rejected() {
    let values = Expr::new_array(Type::I32, [Expr::constant(1), field("B")]);

    let err = Compiler::new(Schema::default())
        .compile_condition(&Expr::in_list(field("A"), values))
        .unwrap_err();

    assert!(err.is_unsupported_expression());
}

#[test]
fn empty_list_is_rejected() {
    let compiler = Compiler::new(Schema::default());
    let empty = || Expr::new_array(Type::I32, []);

    let predicates = [
        Expr::contains(empty(), field("A")),
        Expr::in_list(field("A"), empty()),
        Expr::in_hierarchy(field("A"), empty()),
        Expr::not_in(field("A"), empty()),
    ];

    for predicate in predicates {
        let err = compiler.compile_condition(&predicate).unwrap_err();
        assert!(err.is_unsupported_expression(), "{err}");
    }
}

#[test]
fn like() {
    let name = || Expr::get_string(r(), "Name");

    let command = compile(Expr::like(name(), "Ab%"));
    assert_eq!(command.text, r#"Name LIKE "Ab%""#);
    assert!(command.params.is_empty());

    assert_eq!(text(Expr::not_like(name(), "a_")), r#"Name NOT LIKE "a_""#);
    assert_eq!(
        text(Expr::like_escape(name(), "100!%", '!')),
        r#"Name LIKE "100!%" ESCAPE "!""#
    );
}

#[test]
fn like_pattern_must_be_constant() {
    let predicate = Expr::like(Expr::get_string(r(), "Name"), Expr::get_string(r(), "Mask"));
    let err = Compiler::new(Schema::default())
        .compile_condition(&predicate)
        .unwrap_err();

    assert!(err.is_unsupported_expression());
}

#[test]
fn between() {
    let command = compile(Expr::between(field("Qty"), 1, 10));
    assert_eq!(command.text, "Qty BETWEEN 1 AND 10");
    assert!(command.params.is_empty());

    assert_eq!(
        text(Expr::not_between(field("Qty"), 1, 10)),
        "Qty NOT BETWEEN 1 AND 10"
    );
}

// ---------------------------------------------------------------------------
// Boolean values
// ---------------------------------------------------------------------------

#[test]
fn bool_field_tests_for_true() {
    let command = compile(Expr::get_bool(r(), "Active"));

    assert_eq!(command.text, "Active = &p1");
    assert_eq!(command.param("p1"), Some(&Value::Bool(true)));
}

#[test]
fn negated_bool_field() {
    assert_eq!(
        text(Expr::not(Expr::get_bool(r(), "Active"))),
        "NOT (Active = &p1)"
    );
}

#[test]
fn negated_predicate() {
    assert_eq!(
        text(Expr::not(Expr::eq(field("A"), 1))),
        "NOT (A = &p1)"
    );
}

#[test]
fn bool_field_in_logic() {
    assert_eq!(
        text(Expr::and(Expr::get_bool(r(), "Active"), Expr::gt(field("Qty"), 0))),
        "(Active = &p1) AND (Qty > &p2)"
    );
}

#[test]
fn constant_condition_is_rejected() {
    for predicate in [Expr::constant(true), Expr::lt(1, 2)] {
        let err = Compiler::new(Schema::default())
            .compile_condition(&predicate)
            .unwrap_err();
        assert!(err.is_unsupported_expression());
    }
}

#[test]
fn non_boolean_is_rejected() {
    let err = Compiler::new(Schema::default())
        .compile_condition(&Expr::get_string(r(), "Name"))
        .unwrap_err();

    assert!(err.is_unsupported_expression());
}

#[test]
fn parameter_counter_restarts_per_compilation() {
    let compiler = Compiler::new(Schema::default());

    let first = compiler.compile_condition(&Expr::eq(field("A"), 1)).unwrap();
    let second = compiler.compile_condition(&Expr::eq(field("B"), 2)).unwrap();

    assert_eq!(first.text, "A = &p1");
    assert_eq!(second.text, "B = &p1");
}
