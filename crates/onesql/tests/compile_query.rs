use onesql::{
    expr::Expr,
    query::{AggregateFunc, Query},
    reader::{ColumnReader, DefaultConverter, ValueKind},
    schema::Schema,
    stmt::{Value, ValueRecord},
    Compiler, ItemReader, Param,
};
use pretty_assertions::assert_eq;

const SOURCE: &str = "Справочник.ТестовыйСправочник";

fn compiler() -> Compiler {
    Compiler::new(Schema::default())
}

fn text(query: &Query) -> String {
    compiler().compile(query).unwrap().command.text
}

fn r() -> Expr {
    Expr::data_record()
}

// ---------------------------------------------------------------------------
// End-to-end
// ---------------------------------------------------------------------------

#[test]
fn filter_by_string_field() {
    let query = Query::from_table(SOURCE).filter(Expr::eq(
        Expr::get_string(r(), "СтроковоеПоле"),
        "Тестирование",
    ));

    let compiled = compiler().compile(&query).unwrap();

    assert_eq!(
        compiled.command.text,
        format!("SELECT * FROM {SOURCE} WHERE СтроковоеПоле = &p1")
    );
    assert_eq!(
        compiled.command.params,
        vec![Param {
            name: "p1".to_string(),
            value: Value::from("Тестирование"),
        }]
    );
    assert_eq!(compiled.reader, Some(ItemReader::Raw));
}

#[test]
fn sort_by_two_keys() {
    let query = Query::from_table(SOURCE)
        .order_by(Expr::get_i32(r(), "ЦелочисленноеПоле"))
        .then_by_desc(Expr::get_date_time(r(), "ДатаПоле"));

    let compiled = compiler().compile(&query).unwrap();

    assert_eq!(
        compiled.command.text,
        format!("SELECT * FROM {SOURCE} ORDER BY ЦелочисленноеПоле, ДатаПоле DESC")
    );
    assert!(compiled.command.params.is_empty());
}

#[test]
fn count_with_filter() {
    let query = Query::from_table(SOURCE)
        .filter(Expr::gt(Expr::get_i32(r(), "Qty"), 0))
        .count();

    let compiled = compiler().compile(&query).unwrap();

    assert_eq!(
        compiled.command.text,
        format!("SELECT COUNT(*) FROM {SOURCE} WHERE Qty > &p1")
    );
    assert!(compiled.is_scalar());
}

#[test]
fn count_distinct_projection() {
    let query = Query::from_table(SOURCE)
        .select(Expr::get_string(r(), "Name"))
        .distinct()
        .count();

    assert_eq!(
        text(&query),
        format!("SELECT COUNT(DISTINCT Name) FROM {SOURCE}")
    );
}

#[test]
fn projection_to_anonymous_record() {
    let query = Query::from_table(SOURCE).select(Expr::new_anonymous([
        ("String", Expr::get_string(r(), "f1")),
        ("Int", Expr::get_i32(r(), "f2")),
    ]));

    let compiled = compiler().compile(&query).unwrap();
    assert_eq!(compiled.command.text, format!("SELECT f1, f2 FROM {SOURCE}"));

    let reader = compiled.reader.unwrap();
    let item = reader
        .read(&[Value::from("Test"), Value::from(34)], &DefaultConverter)
        .unwrap();

    let expected: ValueRecord = [("String", Value::from("Test")), ("Int", Value::from(34))]
        .into_iter()
        .collect();
    assert_eq!(item, Value::Record(expected));
}

#[test]
fn scalar_projection_reader() {
    let query = Query::from_table(SOURCE).select(Expr::get_i64(r(), "Code"));
    let compiled = compiler().compile(&query).unwrap();

    assert_eq!(compiled.command.text, format!("SELECT Code FROM {SOURCE}"));
    assert_eq!(
        compiled.reader,
        Some(ItemReader::Scalar(ColumnReader {
            name: None,
            position: 0,
            kind: Some(ValueKind::I64),
        }))
    );

    let item = compiled
        .reader
        .unwrap()
        .read(&[Value::from(7)], &DefaultConverter)
        .unwrap();
    assert_eq!(item, Value::I64(7));
}

#[test]
fn untyped_members_pass_through() {
    let query = Query::from_table(SOURCE).select(Expr::new_anonymous([
        ("Any", Expr::get_value(r(), "Whatever")),
    ]));

    let reader = compiler().compile(&query).unwrap().reader.unwrap();
    assert_eq!(reader.columns()[0].kind, None);

    let item = reader.read(&[Value::from('x')], &DefaultConverter).unwrap();
    let expected: ValueRecord = [("Any", Value::Char('x'))].into_iter().collect();
    assert_eq!(item, Value::Record(expected));
}

#[test]
fn compiling_twice_is_identical() {
    let query = Query::from_table(SOURCE)
        .filter(Expr::and(
            Expr::eq(Expr::get_string(r(), "A"), "x"),
            Expr::ge(Expr::get_i32(r(), "B"), 3),
        ))
        .order_by(Expr::get_string(r(), "A"))
        .take(10);

    let compiler = compiler();
    let first = compiler.compile(&query).unwrap();
    let second = compiler.compile(&query).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.command.text,
        format!("SELECT TOP 10 * FROM {SOURCE} WHERE (A = &p1) AND (B >= &p2) ORDER BY A")
    );
}

#[test]
fn parameter_prefix() {
    let compiler = Compiler::builder()
        .parameter_prefix("arg")
        .build(Schema::default());

    let query = Query::from_table(SOURCE).filter(Expr::eq(Expr::get_i32(r(), "A"), 1));
    let compiled = compiler.compile(&query).unwrap();

    assert_eq!(
        compiled.command.text,
        format!("SELECT * FROM {SOURCE} WHERE A = &arg1")
    );
    assert_eq!(compiled.command.param("arg1"), Some(&Value::I32(1)));
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

#[test]
fn filters_are_and_combined_in_order() {
    let query = Query::from_table(SOURCE)
        .filter(Expr::eq(Expr::get_i32(r(), "A"), 1))
        .filter(Expr::eq(Expr::get_i32(r(), "B"), 2));

    let compiled = compiler().compile(&query).unwrap();

    assert_eq!(
        compiled.command.text,
        format!("SELECT * FROM {SOURCE} WHERE (A = &p1) AND (B = &p2)")
    );
    assert_eq!(compiled.command.param("p1"), Some(&Value::I32(1)));
    assert_eq!(compiled.command.param("p2"), Some(&Value::I32(2)));
}

#[test]
fn filter_always_true_is_dropped() {
    let query = Query::from_table(SOURCE).filter(true);
    assert_eq!(text(&query), format!("SELECT * FROM {SOURCE}"));

    let query = Query::from_table(SOURCE).filter(Expr::and(
        Expr::constant(true),
        Expr::eq(Expr::get_i32(r(), "A"), 1),
    ));
    assert_eq!(text(&query), format!("SELECT * FROM {SOURCE} WHERE A = &p1"));
}

#[test]
fn filter_always_false_is_rejected() {
    let query = Query::from_table(SOURCE).filter(Expr::lt(2, 1));
    let err = compiler().compile(&query).unwrap_err();
    assert!(err.is_unsupported_expression());
}

#[test]
fn later_order_by_replaces_sort() {
    let query = Query::from_table(SOURCE)
        .order_by(Expr::get_i32(r(), "A"))
        .order_by_desc(Expr::get_i32(r(), "B"));

    assert_eq!(
        text(&query),
        format!("SELECT * FROM {SOURCE} ORDER BY B DESC")
    );
}

#[test]
fn distinct_and_smallest_take() {
    let query = Query::from_table(SOURCE)
        .select(Expr::get_string(r(), "Name"))
        .distinct()
        .take(10)
        .take(5)
        .take(8);

    assert_eq!(
        text(&query),
        format!("SELECT DISTINCT TOP 5 Name FROM {SOURCE}")
    );
}

#[test]
fn sort_then_project() {
    let query = Query::from_table(SOURCE)
        .filter(Expr::ne(Expr::get_string(r(), "Name"), Expr::null()))
        .order_by(Expr::get_string(r(), "Name"))
        .select(Expr::new_anonymous([
            ("Name", Expr::get_string(r(), "Name")),
            ("Total", Expr::mul(Expr::get_decimal(r(), "Price"), 2)),
        ]))
        .take(3);

    assert_eq!(
        text(&query),
        format!(
            "SELECT TOP 3 Name, (Price) * (2) FROM {SOURCE} WHERE Name IS NOT NULL ORDER BY Name"
        )
    );
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

#[test]
fn count_where_joins_the_filter() {
    let query = Query::from_table(SOURCE)
        .filter(Expr::eq(Expr::get_i32(r(), "A"), 1))
        .count_where(Expr::eq(Expr::get_i32(r(), "B"), 2));

    assert_eq!(
        text(&query),
        format!("SELECT COUNT(*) FROM {SOURCE} WHERE (A = &p1) AND (B = &p2)")
    );
}

#[test]
fn aggregates_with_selector() {
    let cases = [
        (Query::from_table(SOURCE).sum(Expr::get_decimal(r(), "Price")), "SUM(Price)"),
        (Query::from_table(SOURCE).avg(Expr::get_decimal(r(), "Price")), "AVG(Price)"),
        (Query::from_table(SOURCE).min(Expr::get_decimal(r(), "Price")), "MIN(Price)"),
        (Query::from_table(SOURCE).max(Expr::get_decimal(r(), "Price")), "MAX(Price)"),
    ];

    for (query, column) in cases {
        assert_eq!(text(&query), format!("SELECT {column} FROM {SOURCE}"));
    }
}

#[test]
fn aggregate_drops_ordering() {
    let query = Query::from_table(SOURCE)
        .filter(Expr::eq(Expr::get_string(r(), "Name"), "x"))
        .order_by(Expr::get_string(r(), "Name"))
        .max(Expr::get_i32(r(), "Qty"));

    assert_eq!(
        text(&query),
        format!("SELECT MAX(Qty) FROM {SOURCE} WHERE Name = &p1")
    );
}

#[test]
fn aggregate_over_single_column_projection() {
    let query = Query::from_table(SOURCE)
        .select(Expr::get_i32(r(), "Qty"))
        .aggregate(AggregateFunc::Avg, None);
    assert_eq!(text(&query), format!("SELECT AVG(Qty) FROM {SOURCE}"));

    let query = Query::from_table(SOURCE)
        .select(Expr::new_anonymous([("Qty", Expr::get_i32(r(), "Qty"))]))
        .aggregate(AggregateFunc::Sum, None);
    assert_eq!(text(&query), format!("SELECT SUM(Qty) FROM {SOURCE}"));
}

#[test]
fn aggregate_over_wide_projection_is_rejected() {
    let query = Query::from_table(SOURCE)
        .select(Expr::new_anonymous([
            ("A", Expr::get_i32(r(), "A")),
            ("B", Expr::get_i32(r(), "B")),
        ]))
        .aggregate(AggregateFunc::Sum, None);

    let err = compiler().compile(&query).unwrap_err();
    assert!(err.is_unsupported_expression());
}

#[test]
fn aggregate_without_operand_is_rejected() {
    let query = Query::from_table(SOURCE).aggregate(AggregateFunc::Sum, None);
    let err = compiler().compile(&query).unwrap_err();
    assert!(err.is_unsupported_expression());
}

// ---------------------------------------------------------------------------
// Rejected sequences
// ---------------------------------------------------------------------------

#[test]
fn invalid_sequences() {
    let a = || Expr::get_i32(r(), "A");
    let p = || Expr::eq(Expr::get_i32(r(), "A"), 1);

    let cases = [
        Query::from_table(SOURCE).select(a()).filter(p()),
        Query::from_table(SOURCE).then_by(a()),
        Query::from_table(SOURCE).filter(p()).then_by(a()),
        Query::from_table(SOURCE).select(a()).order_by(a()),
        Query::from_table(SOURCE).take(1).order_by(a()),
        Query::from_table(SOURCE).take(1).filter(p()),
        Query::from_table(SOURCE).select(a()).select(a()),
        Query::from_table(SOURCE).distinct().distinct(),
        Query::from_table(SOURCE).take(1).distinct(),
        Query::from_table(SOURCE).take(1).count(),
        Query::from_table(SOURCE).count().take(1),
        Query::from_table(SOURCE).count().count(),
        Query::from_table(SOURCE).distinct().sum(a()),
        Query::from_table(SOURCE).distinct().count(),
        Query::from_table(SOURCE).select(a()).sum(a()),
        Query::from_table(SOURCE).select(a()).count_where(p()),
    ];

    for query in cases {
        let err = compiler().compile(&query).unwrap_err();
        assert!(err.is_unsupported_expression(), "{query:?}: {err}");
    }
}
