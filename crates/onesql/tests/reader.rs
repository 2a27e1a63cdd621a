use onesql::{
    expr::Type,
    reader::{ColumnReader, DefaultConverter, ValueConverter, ValueKind},
    stmt::{Value, ValueRecord},
    ItemReader, Result,
};

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn convert(value: impl Into<Value>, kind: ValueKind) -> Value {
    DefaultConverter.convert(value.into(), kind).unwrap()
}

fn convert_err(value: impl Into<Value>, kind: ValueKind) -> onesql::Error {
    DefaultConverter.convert(value.into(), kind).unwrap_err()
}

// ---------------------------------------------------------------------------
// DefaultConverter
// ---------------------------------------------------------------------------

#[test]
fn null_converts_to_null() {
    let kinds = [
        ValueKind::String,
        ValueKind::I16,
        ValueKind::I32,
        ValueKind::I64,
        ValueKind::U8,
        ValueKind::F32,
        ValueKind::F64,
        ValueKind::Decimal,
        ValueKind::Bool,
        ValueKind::DateTime,
        ValueKind::Char,
    ];

    for kind in kinds {
        assert_eq!(convert(Value::Null, kind), Value::Null);
    }
}

#[test]
fn integers() {
    assert_eq!(convert(5i64, ValueKind::I32), Value::I32(5));
    assert_eq!(convert(5, ValueKind::U8), Value::U8(5));
    assert_eq!(convert(Decimal::new(30, 1), ValueKind::I32), Value::I32(3));
    assert_eq!(convert(4.0f64, ValueKind::I64), Value::I64(4));
    assert_eq!(convert(" 17 ", ValueKind::I16), Value::I16(17));
}

#[test]
fn integers_out_of_range() {
    assert!(convert_err(70_000, ValueKind::I16).is_type_conversion());
    assert!(convert_err(-1, ValueKind::U8).is_type_conversion());
    assert!(convert_err(Decimal::new(35, 1), ValueKind::I32).is_type_conversion());
    assert!(convert_err(true, ValueKind::I32).is_type_conversion());
}

#[test]
fn floats_out_of_range() {
    assert!(convert_err(1e30f64, ValueKind::I64).is_type_conversion());
    assert!(convert_err(-1e30f32, ValueKind::I32).is_type_conversion());
    assert!(convert_err(40_000.0f64, ValueKind::I16).is_type_conversion());
    assert!(convert_err(1e300f64, ValueKind::F32).is_type_conversion());
    assert!(convert_err("1e300", ValueKind::F32).is_type_conversion());

    assert_eq!(convert(-2.0f32, ValueKind::I64), Value::I64(-2));
    assert_eq!(convert(1.5f64, ValueKind::F32), Value::F32(1.5));
    assert_eq!(convert(f64::INFINITY, ValueKind::F32), Value::F32(f32::INFINITY));
}

#[test]
fn decimals_and_floats() {
    assert_eq!(convert("1.25", ValueKind::Decimal), Value::Decimal(Decimal::new(125, 2)));
    assert_eq!(convert(5i64, ValueKind::Decimal), Value::Decimal(Decimal::new(5, 0)));
    assert_eq!(convert(Decimal::new(15, 1), ValueKind::F64), Value::F64(1.5));
    assert_eq!(convert(2, ValueKind::F32), Value::F32(2.0));
    assert_eq!(convert("0.5", ValueKind::F64), Value::F64(0.5));
}

#[test]
fn strings() {
    assert_eq!(convert(42, ValueKind::String), Value::from("42"));
    assert_eq!(convert('ж', ValueKind::String), Value::from("ж"));
    assert_eq!(convert("as is", ValueKind::String), Value::from("as is"));
    assert_eq!(convert(1.5f64, ValueKind::String), Value::from("1.5"));
    assert_eq!(convert(-0.25f32, ValueKind::String), Value::from("-0.25"));
    assert_eq!(convert(true, ValueKind::String), Value::from("true"));
    assert_eq!(convert(false, ValueKind::String), Value::from("false"));

    let date = NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(14, 5, 0)
        .unwrap();
    assert_eq!(convert(date, ValueKind::String), Value::from("2024-03-09T14:05:00"));

    assert!(convert_err(Value::List(vec![]), ValueKind::String).is_type_conversion());
}

#[test]
fn bools() {
    assert_eq!(convert("TRUE", ValueKind::Bool), Value::Bool(true));
    assert_eq!(convert("false", ValueKind::Bool), Value::Bool(false));
    assert_eq!(convert(0, ValueKind::Bool), Value::Bool(false));
    assert_eq!(convert(2u8, ValueKind::Bool), Value::Bool(true));
    assert!(convert_err("yes", ValueKind::Bool).is_type_conversion());
}

#[test]
fn chars() {
    assert_eq!(convert("x", ValueKind::Char), Value::Char('x'));
    assert!(convert_err("xy", ValueKind::Char).is_type_conversion());
    assert!(convert_err("", ValueKind::Char).is_type_conversion());
}

#[test]
fn dates() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    assert_eq!(convert("2024-03-01", ValueKind::DateTime), Value::from(date));
    assert_eq!(
        convert("2024-03-01T10:20:30", ValueKind::DateTime),
        Value::DateTime(date.and_hms_opt(10, 20, 30).unwrap())
    );
    assert!(DefaultConverter
        .convert(Value::from("March"), ValueKind::DateTime)
        .is_err());
}

#[test]
fn value_kinds() {
    assert_eq!(ValueKind::from_ty(&Type::Decimal), Some(ValueKind::Decimal));
    assert_eq!(ValueKind::from_ty(&Type::DateTime), Some(ValueKind::DateTime));
    assert_eq!(ValueKind::from_ty(&Type::Object), None);
    assert_eq!(ValueKind::from_ty(&Type::Anonymous), None);
    assert_eq!(ValueKind::I16.ty(), Type::I16);
}

// ---------------------------------------------------------------------------
// ItemReader
// ---------------------------------------------------------------------------

#[test]
fn raw_rows() {
    let row = [Value::from(1), Value::from("a")];

    let item = ItemReader::Raw.read(&row, &DefaultConverter).unwrap();
    assert_eq!(item, Value::List(row.to_vec()));
}

#[test]
fn record_reads_by_position() {
    let reader = ItemReader::Record(vec![
        ColumnReader {
            name: Some("second".to_string()),
            position: 1,
            kind: Some(ValueKind::I64),
        },
        ColumnReader {
            name: Some("first".to_string()),
            position: 0,
            kind: None,
        },
    ]);

    let item = reader
        .read(&[Value::from("a"), Value::from(2)], &DefaultConverter)
        .unwrap();

    let expected: ValueRecord = [("second", Value::I64(2)), ("first", Value::from("a"))]
        .into_iter()
        .collect();
    assert_eq!(item, Value::Record(expected));
}

#[test]
fn missing_column() {
    let reader = ItemReader::Scalar(ColumnReader {
        name: None,
        position: 3,
        kind: None,
    });

    let err = reader.read(&[Value::from(1)], &DefaultConverter).unwrap_err();
    assert!(err.is_argument_index_out_of_range());
}

#[test]
fn conversion_failure_is_reported() {
    let reader = ItemReader::Scalar(ColumnReader {
        name: None,
        position: 0,
        kind: Some(ValueKind::I32),
    });

    let err = reader.read(&[Value::from("abc")], &DefaultConverter).unwrap_err();
    assert!(!err.is_argument_index_out_of_range());
}

struct Upper;

impl ValueConverter for Upper {
    fn convert(&self, value: Value, kind: ValueKind) -> Result<Value> {
        match value {
            Value::String(s) => Ok(Value::String(s.to_uppercase())),
            value => DefaultConverter.convert(value, kind),
        }
    }
}

#[test]
fn custom_converter() {
    let reader = ItemReader::Scalar(ColumnReader {
        name: None,
        position: 0,
        kind: Some(ValueKind::String),
    });

    assert_eq!(
        reader.read(&[Value::from("abc")], &Upper).unwrap(),
        Value::from("ABC")
    );
}
