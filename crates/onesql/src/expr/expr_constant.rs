use super::{Expr, Type};

use chrono::{NaiveDate, NaiveDateTime};
use onesql_core::stmt::Value;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprConstant {
    pub value: Value,
    pub ty: Type,
}

impl ExprConstant {
    /// Infers the static type from the value. Null and unknown values are
    /// `Object`.
    pub fn new(value: Value) -> Self {
        let ty = ty_of(&value);
        Self { value, ty }
    }
}

fn ty_of(value: &Value) -> Type {
    match value {
        Value::Bool(_) => Type::Bool,
        Value::Char(_) => Type::Char,
        Value::DateTime(_) => Type::DateTime,
        Value::Decimal(_) => Type::Decimal,
        Value::F32(_) => Type::F32,
        Value::F64(_) => Type::F64,
        Value::I16(_) => Type::I16,
        Value::I32(_) => Type::I32,
        Value::I64(_) => Type::I64,
        Value::List(items) => Type::list(items.first().map(ty_of).unwrap_or(Type::Object)),
        Value::Null => Type::Object,
        Value::Record(_) => Type::Anonymous,
        Value::String(_) => Type::String,
        Value::U8(_) => Type::U8,
    }
}

impl Expr {
    pub fn constant(value: impl Into<Value>) -> Self {
        ExprConstant::new(value.into()).into()
    }

    pub fn typed_constant(value: impl Into<Value>, ty: Type) -> Self {
        ExprConstant {
            value: value.into(),
            ty,
        }
        .into()
    }

    pub fn null() -> Self {
        Self::constant(Value::Null)
    }

    pub fn is_null_constant(&self) -> bool {
        matches!(self, Self::Constant(ExprConstant { value: Value::Null, .. }))
    }
}

impl From<ExprConstant> for Expr {
    fn from(value: ExprConstant) -> Self {
        Self::Constant(value)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::constant(value)
    }
}

macro_rules! impl_from_constant {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Self::constant(value)
                }
            }
        )*
    };
}

impl_from_constant!(
    bool,
    char,
    i16,
    i32,
    i64,
    u8,
    f32,
    f64,
    Decimal,
    NaiveDate,
    NaiveDateTime,
    String,
    &str,
    &String,
);
