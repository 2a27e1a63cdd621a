use super::{Expr, PeriodKind, Value};
use crate::{Error, Result};

use chrono::{Datelike, Timelike};

/// A constant embedded in the query text.
///
/// Holds both the native value and its rendering in the query language. The
/// rendering is computed once, when the literal is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    value: Value,
    text: String,
}

impl Literal {
    /// Builds a literal from a value.
    ///
    /// Lists, records and non-finite floats have no literal form.
    pub fn new(value: impl Into<Value>) -> Result<Self> {
        let value = value.into();
        let text = render(&value)?;
        Ok(Self { value, text })
    }

    pub fn null() -> Self {
        Self {
            value: Value::Null,
            text: "NULL".to_string(),
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            text: quote(&value),
            value: Value::String(value),
        }
    }

    pub fn char(value: char) -> Self {
        Self {
            text: quote(value.encode_utf8(&mut [0; 4])),
            value: Value::Char(value),
        }
    }

    pub fn bool(value: bool) -> Self {
        Self {
            text: if value { "TRUE" } else { "FALSE" }.to_string(),
            value: Value::Bool(value),
        }
    }

    /// A bare keyword naming a period, used as the second argument of the
    /// period boundary functions.
    pub fn period(kind: PeriodKind) -> Self {
        Self {
            value: Value::String(kind.keyword().to_string()),
            text: kind.keyword().to_string(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

fn render(value: &Value) -> Result<String> {
    Ok(match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::String(v) => quote(v),
        Value::Char(v) => quote(v.encode_utf8(&mut [0; 4])),
        Value::I16(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::U8(v) => v.to_string(),
        Value::Decimal(v) => v.normalize().to_string(),
        Value::F32(v) if v.is_finite() => v.to_string(),
        Value::F64(v) if v.is_finite() => v.to_string(),
        Value::DateTime(v) => format!(
            "DATETIME({}, {}, {}, {}, {}, {})",
            v.year(),
            v.month(),
            v.day(),
            v.hour(),
            v.minute(),
            v.second()
        ),
        Value::F32(_) | Value::F64(_) | Value::List(_) | Value::Record(_) => {
            return Err(Error::invalid_statement(format!(
                "{} value has no literal form; value={value:?}",
                value.variant_name()
            )))
        }
    })
}

/// Double-quotes a string, doubling any quote inside it.
fn quote(s: &str) -> String {
    let mut ret = String::with_capacity(s.len() + 2);
    ret.push('"');
    for c in s.chars() {
        if c == '"' {
            ret.push('"');
        }
        ret.push(c);
    }
    ret.push('"');
    ret
}

impl Expr {
    /// Literal expression from a value; see [`Literal::new`].
    pub fn literal(value: impl Into<Value>) -> Result<Self> {
        Ok(Self::Literal(Literal::new(value)?))
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}
