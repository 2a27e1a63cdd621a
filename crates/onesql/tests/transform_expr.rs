use onesql::{
    expr::{DatePart, Expr, Method, Type},
    schema::Schema,
    stmt::PeriodKind,
    transform::{self, ParseContext},
    Result,
};
use onesql_text::Serializer;

use pretty_assertions::assert_eq;

fn try_render(expr: Expr) -> Result<String> {
    let mut cx = ParseContext::new();
    let stmt = transform::expr::transform(&expr, &Schema::default(), &mut cx)?;

    // Value expressions render constants inline
    assert!(cx.parameters().is_empty());

    Ok(Serializer::new().serialize_expr(&stmt))
}

fn render(expr: Expr) -> String {
    try_render(expr).unwrap()
}

fn r() -> Expr {
    Expr::data_record()
}

fn untyped(name: &str) -> Expr {
    Expr::get_value(r(), name)
}

// ---------------------------------------------------------------------------
// Fields and operators
// ---------------------------------------------------------------------------

#[test]
fn field() {
    assert_eq!(render(Expr::get_string(r(), "Наименование")), "Наименование");
}

#[test]
fn arithmetic() {
    assert_eq!(
        render(Expr::add(Expr::get_i32(r(), "A"), Expr::get_i32(r(), "B"))),
        "(A) + (B)"
    );
    assert_eq!(
        render(Expr::sub(Expr::get_i32(r(), "A"), Expr::mul(2, 3))),
        "(A) - (6)"
    );
    assert_eq!(
        render(Expr::div(Expr::mul(Expr::get_f64(r(), "A"), 2), 4)),
        "((A) * (2)) / (4)"
    );
}

#[test]
fn negate() {
    assert_eq!(render(Expr::negate(Expr::get_i32(r(), "Qty"))), "-Qty");
    assert_eq!(
        render(Expr::negate(Expr::add(
            Expr::get_i32(r(), "A"),
            Expr::get_i32(r(), "B")
        ))),
        "-((A) + (B))"
    );
}

#[test]
fn string_constants_are_quoted() {
    assert_eq!(
        render(Expr::coalesce(Expr::get_string(r(), "Name"), r#"say "hi""#)),
        r#"ISNULL(Name, "say ""hi""")"#
    );
}

#[test]
fn coalesce() {
    assert_eq!(
        render(Expr::coalesce(Expr::get_string(r(), "Name"), "")),
        r#"ISNULL(Name, "")"#
    );
}

#[test]
fn conditional_chain_is_one_case() {
    let qty = || Expr::get_i32(r(), "Qty");
    let expr = Expr::conditional(
        Expr::gt(qty(), 10),
        "many",
        Expr::conditional(Expr::gt(qty(), 0), "few", "none"),
    );

    assert_eq!(
        render(expr),
        r#"CASE WHEN Qty > 10 THEN "many" WHEN Qty > 0 THEN "few" ELSE "none" END"#
    );
}

#[test]
fn conditional_with_constant_test_is_folded() {
    let expr = Expr::conditional(Expr::lt(1, 2), Expr::get_string(r(), "A"), "b");
    assert_eq!(render(expr), "A");
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

#[test]
fn sized_conversions() {
    assert_eq!(render(Expr::to_number(untyped("X"), 10)), "CAST(X AS NUMBER(10))");
    assert_eq!(
        render(Expr::to_decimal(untyped("X"), 15, 2)),
        "CAST(X AS NUMBER(15, 2))"
    );
    assert_eq!(render(Expr::to_string(untyped("X"), 50)), "CAST(X AS STRING(50))");
}

#[test]
fn size_must_be_constant() {
    let err = try_render(Expr::to_string(untyped("X"), Expr::get_i32(r(), "Len"))).unwrap_err();
    assert!(err.is_unsupported_expression());
}

#[test]
fn conversions_of_untyped_values() {
    let cases = [
        (Type::Bool, "CAST(X AS BOOLEAN)"),
        (Type::String, "CAST(X AS STRING)"),
        (Type::DateTime, "CAST(X AS DATE)"),
        (Type::I32, "CAST(X AS NUMBER)"),
        (Type::Decimal, "CAST(X AS NUMBER)"),
    ];

    for (ty, expected) in cases {
        assert_eq!(render(Expr::convert(untyped("X"), ty)), expected);
    }
}

#[test]
fn transparent_conversions() {
    assert_eq!(render(Expr::convert(Expr::get_i32(r(), "X"), Type::I64)), "X");
    assert_eq!(render(Expr::convert(Expr::get_i32(r(), "X"), Type::Object)), "X");
    assert_eq!(render(Expr::convert(Expr::get_string(r(), "X"), Type::String)), "X");
}

#[test]
fn unsupported_conversions() {
    let cases = [
        Expr::convert(untyped("X"), Type::Char),
        Expr::convert(Expr::get_string(r(), "X"), Type::I32),
        Expr::convert(Expr::get_i32(r(), "X"), Type::Bool),
    ];

    for expr in cases {
        let err = try_render(expr).unwrap_err();
        assert!(err.is_type_cast_not_supported(), "{err}");
    }
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

#[test]
fn substring() {
    assert_eq!(
        render(Expr::substring(Expr::get_string(r(), "Name"), 1, 3)),
        "SUBSTRING(Name, 1, 3)"
    );
}

#[test]
fn date_parts() {
    let date = || Expr::get_date_time(r(), "Date");

    assert_eq!(render(Expr::date_part_of(date(), DatePart::Year)), "YEAR(Date)");
    assert_eq!(render(Expr::date_part(date(), DatePart::Month)), "MONTH(Date)");
    assert_eq!(render(Expr::date_part(date(), DatePart::WeekDay)), "WEEKDAY(Date)");
    assert_eq!(
        render(Expr::date_part_of(date(), DatePart::DayOfYear)),
        "DAYOFYEAR(Date)"
    );
}

#[test]
fn period_boundaries() {
    let date = || Expr::get_date_time(r(), "Date");

    assert_eq!(
        render(Expr::begin_of_period(date(), PeriodKind::Month)),
        "BEGINOFPERIOD(Date, MONTH)"
    );
    assert_eq!(
        render(Expr::end_of_period(date(), PeriodKind::TenDays)),
        "ENDOFPERIOD(Date, TENDAYS)"
    );
}

// ---------------------------------------------------------------------------
// Rejected expressions
// ---------------------------------------------------------------------------

#[test]
fn records_are_not_values() {
    let err = try_render(r()).unwrap_err();
    assert!(err.is_invalid_record_usage());

    let err = try_render(Expr::new_anonymous([("a", Expr::get_i32(r(), "A"))])).unwrap_err();
    assert!(err.is_invalid_record_usage());
}

#[test]
fn conditions_are_not_values() {
    let cases = [
        Expr::eq(Expr::get_i32(r(), "A"), 1),
        Expr::not(Expr::get_bool(r(), "A")),
        Expr::like(Expr::get_string(r(), "A"), "x%"),
    ];

    for expr in cases {
        let err = try_render(expr).unwrap_err();
        assert!(err.is_unsupported_expression(), "{err}");
    }
}

#[test]
fn field_name_must_be_constant() {
    let expr = Expr::call(
        Method::GetValue(None),
        vec![r(), Expr::get_string(r(), "Name")],
    );

    let err = try_render(expr).unwrap_err();
    assert!(err.is_unsupported_expression());
}

#[test]
fn members_of_scalars_are_rejected() {
    let expr = Expr::get_string(Expr::get_string(r(), "Name"), "Inner");

    let err = try_render(expr).unwrap_err();
    assert!(err.is_unsupported_expression());
}
