use super::ValueKind;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use onesql_core::{stmt::Value, Error, Result};
use rust_decimal::{prelude::ToPrimitive, Decimal};

/// Text form of dates, both parsed and produced.
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Converts raw column values to the kind an output member expects.
pub trait ValueConverter: Send + Sync {
    fn convert(&self, value: Value, kind: ValueKind) -> Result<Value>;
}

/// Numeric, string, boolean, date and character conversions.
///
/// Null converts to null for every kind. Numeric conversions are range
/// checked; fractional values only convert to float and decimal kinds.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultConverter;

impl ValueConverter for DefaultConverter {
    fn convert(&self, value: Value, kind: ValueKind) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        match kind {
            ValueKind::String => to_string(value),
            ValueKind::Bool => to_bool(value),
            ValueKind::Char => to_char(value),
            ValueKind::DateTime => to_date_time(value),
            ValueKind::Decimal => to_decimal(value).map(Value::Decimal),
            ValueKind::F32 => to_f32(value).map(Value::F32),
            ValueKind::F64 => to_f64(value, kind).map(Value::F64),
            ValueKind::I16 => to_integer(value, kind),
            ValueKind::I32 => to_integer(value, kind),
            ValueKind::I64 => to_integer(value, kind),
            ValueKind::U8 => to_integer(value, kind),
        }
    }
}

fn to_string(value: Value) -> Result<Value> {
    Ok(match value {
        Value::String(_) => value,
        Value::Char(v) => Value::String(v.to_string()),
        Value::I16(v) => Value::String(v.to_string()),
        Value::I32(v) => Value::String(v.to_string()),
        Value::I64(v) => Value::String(v.to_string()),
        Value::U8(v) => Value::String(v.to_string()),
        Value::F32(v) => Value::String(v.to_string()),
        Value::F64(v) => Value::String(v.to_string()),
        Value::Decimal(v) => Value::String(v.to_string()),
        Value::Bool(v) => Value::String(v.to_string()),
        Value::DateTime(v) => Value::String(v.format(DATE_TIME_FORMAT).to_string()),
        _ => return Err(Error::type_conversion(value, "String")),
    })
}

fn to_bool(value: Value) -> Result<Value> {
    match value {
        Value::Bool(_) => Ok(value),
        Value::String(ref v) if v.eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
        Value::String(ref v) if v.eq_ignore_ascii_case("false") => Ok(Value::Bool(false)),
        _ => match value.as_i64() {
            Some(v) => Ok(Value::Bool(v != 0)),
            None => Err(Error::type_conversion(value, "Bool")),
        },
    }
}

fn to_char(value: Value) -> Result<Value> {
    match value {
        Value::Char(_) => Ok(value),
        Value::String(ref v) => {
            let mut chars = v.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::Char(c)),
                _ => Err(Error::type_conversion(value, "Char")),
            }
        }
        _ => Err(Error::type_conversion(value, "Char")),
    }
}

fn to_date_time(value: Value) -> Result<Value> {
    match value {
        Value::DateTime(_) => Ok(value),
        Value::String(v) => {
            let parsed = match NaiveDateTime::parse_from_str(&v, DATE_TIME_FORMAT) {
                Ok(parsed) => parsed,
                Err(_) => NaiveDate::parse_from_str(&v, "%Y-%m-%d")?.and_time(NaiveTime::default()),
            };
            Ok(Value::DateTime(parsed))
        }
        _ => Err(Error::type_conversion(value, "DateTime")),
    }
}

fn to_decimal(value: Value) -> Result<Decimal> {
    match value {
        Value::Decimal(v) => Ok(v),
        Value::F32(v) => {
            Decimal::try_from(v).map_err(|_| Error::type_conversion(value, "Decimal"))
        }
        Value::F64(v) => {
            Decimal::try_from(v).map_err(|_| Error::type_conversion(value, "Decimal"))
        }
        Value::String(ref v) => Ok(v.parse::<Decimal>()?),
        _ => match value.as_i64() {
            Some(v) => Ok(Decimal::from(v)),
            None => Err(Error::type_conversion(value, "Decimal")),
        },
    }
}

fn to_f64(value: Value, kind: ValueKind) -> Result<f64> {
    match value {
        Value::F32(v) => Ok(v.into()),
        Value::F64(v) => Ok(v),
        Value::Decimal(v) => v
            .to_f64()
            .ok_or_else(|| Error::type_conversion(value, kind.name())),
        Value::String(ref v) => Ok(v.parse::<f64>()?),
        _ => match value.as_i64() {
            Some(v) => Ok(v as f64),
            None => Err(Error::type_conversion(value, kind.name())),
        },
    }
}

/// Narrows to `f32`. A finite value too large for `f32` is an error.
fn to_f32(value: Value) -> Result<f32> {
    let wide = to_f64(value.clone(), ValueKind::F32)?;
    let narrow = wide as f32;

    if wide.is_finite() && !narrow.is_finite() {
        return Err(Error::type_conversion(value, ValueKind::F32.name()));
    }

    Ok(narrow)
}

fn to_integer(value: Value, kind: ValueKind) -> Result<Value> {
    let wide = match &value {
        Value::Decimal(v) if v.fract().is_zero() => v.to_i64(),
        Value::F32(v) if v.fract() == 0.0 => v.to_i64(),
        Value::F64(v) if v.fract() == 0.0 => v.to_i64(),
        Value::String(v) => Some(v.trim().parse::<i64>()?),
        _ => value.as_i64(),
    };

    let converted = wide.and_then(|v| match kind {
        ValueKind::I16 => i16::try_from(v).ok().map(Value::I16),
        ValueKind::I32 => i32::try_from(v).ok().map(Value::I32),
        ValueKind::I64 => Some(Value::I64(v)),
        ValueKind::U8 => u8::try_from(v).ok().map(Value::U8),
        _ => None,
    });

    converted.ok_or_else(|| Error::type_conversion(value, kind.name()))
}
