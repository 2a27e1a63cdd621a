use super::{Expr, Type};
use crate::reader::ValueKind;
use crate::schema::RecordId;

use onesql_core::stmt::{Func, PeriodKind};

/// A method or domain function call. Arguments are positional; for record
/// accessors the first argument is the record.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCall {
    pub method: Method,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `record.get_*(name)`. `None` is the untyped `get_value`.
    GetValue(Option<ValueKind>),

    /// `to_number(x, length)`
    ToNumber,

    /// `to_decimal(x, length, precision)`
    ToDecimal,

    /// `to_string(x, length)`
    ToString,

    /// `to_record::<R>(x)`
    ToRecord(RecordId),

    /// `substring(source, start, length)`
    Substring,

    /// Date part as a function, `year(x)`, `month(x)`, ...
    DatePart(DatePart),

    BeginOfPeriod(PeriodKind),
    EndOfPeriod(PeriodKind),

    /// `in_list(x, values)`
    In,

    /// `in_hierarchy(x, values)`
    InHierarchy,

    /// `not_in(x, values)`
    NotIn,

    /// `values.contains(x)`
    Contains,

    /// `like(x, pattern[, escape])`
    Like,
    NotLike,

    /// `between(x, start, end)`
    Between,
    NotBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePart {
    Year,
    Quarter,
    Month,
    DayOfYear,
    Day,
    Week,
    WeekDay,
    Hour,
    Minute,
    Second,
}

impl Method {
    /// Returns `true` for methods producing a condition rather than a value.
    pub fn is_predicate(self) -> bool {
        matches!(
            self,
            Self::In
                | Self::InHierarchy
                | Self::NotIn
                | Self::Contains
                | Self::Like
                | Self::NotLike
                | Self::Between
                | Self::NotBetween
        )
    }
}

impl DatePart {
    pub fn func(self) -> Func {
        match self {
            Self::Year => Func::Year,
            Self::Quarter => Func::Quarter,
            Self::Month => Func::Month,
            Self::DayOfYear => Func::DayOfYear,
            Self::Day => Func::Day,
            Self::Week => Func::Week,
            Self::WeekDay => Func::WeekDay,
            Self::Hour => Func::Hour,
            Self::Minute => Func::Minute,
            Self::Second => Func::Second,
        }
    }
}

impl ExprCall {
    pub fn ty(&self) -> Type {
        match self.method {
            Method::GetValue(Some(kind)) => kind.ty(),
            Method::GetValue(None) => Type::Object,
            Method::ToNumber | Method::ToDecimal => Type::Decimal,
            Method::ToString | Method::Substring => Type::String,
            Method::ToRecord(id) => Type::Record(id),
            Method::DatePart(_) => Type::I32,
            Method::BeginOfPeriod(_) | Method::EndOfPeriod(_) => Type::DateTime,
            method => {
                debug_assert!(method.is_predicate());
                Type::Bool
            }
        }
    }
}

macro_rules! accessors {
    ( $( $(#[$attr:meta])* $name:ident => $kind:expr; )* ) => {
        impl Expr {
            $(
                $(#[$attr])*
                pub fn $name(record: impl Into<Self>, name: &str) -> Self {
                    Self::get_value_as(record, name, $kind)
                }
            )*
        }
    };
}

accessors! {
    /// Untyped read of a named field; converted values pass through as-is.
    get_value => None;
    get_string => Some(ValueKind::String);
    get_bool => Some(ValueKind::Bool);
    get_char => Some(ValueKind::Char);
    get_i16 => Some(ValueKind::I16);
    get_i32 => Some(ValueKind::I32);
    get_i64 => Some(ValueKind::I64);
    get_u8 => Some(ValueKind::U8);
    get_f32 => Some(ValueKind::F32);
    get_f64 => Some(ValueKind::F64);
    get_decimal => Some(ValueKind::Decimal);
    get_date_time => Some(ValueKind::DateTime);
}

impl Expr {
    pub fn call(method: Method, args: Vec<Expr>) -> Self {
        ExprCall { method, args }.into()
    }

    fn get_value_as(record: impl Into<Self>, name: &str, kind: Option<ValueKind>) -> Self {
        Self::call(
            Method::GetValue(kind),
            vec![record.into(), Self::constant(name)],
        )
    }

    pub fn to_number(expr: impl Into<Self>, length: impl Into<Self>) -> Self {
        Self::call(Method::ToNumber, vec![expr.into(), length.into()])
    }

    pub fn to_decimal(
        expr: impl Into<Self>,
        length: impl Into<Self>,
        precision: impl Into<Self>,
    ) -> Self {
        Self::call(
            Method::ToDecimal,
            vec![expr.into(), length.into(), precision.into()],
        )
    }

    pub fn to_string(expr: impl Into<Self>, length: impl Into<Self>) -> Self {
        Self::call(Method::ToString, vec![expr.into(), length.into()])
    }

    pub fn to_record(expr: impl Into<Self>, record: RecordId) -> Self {
        Self::call(Method::ToRecord(record), vec![expr.into()])
    }

    pub fn substring(
        source: impl Into<Self>,
        start: impl Into<Self>,
        length: impl Into<Self>,
    ) -> Self {
        Self::call(
            Method::Substring,
            vec![source.into(), start.into(), length.into()],
        )
    }

    pub fn date_part_of(date: impl Into<Self>, part: DatePart) -> Self {
        Self::call(Method::DatePart(part), vec![date.into()])
    }

    pub fn begin_of_period(date: impl Into<Self>, kind: PeriodKind) -> Self {
        Self::call(Method::BeginOfPeriod(kind), vec![date.into()])
    }

    pub fn end_of_period(date: impl Into<Self>, kind: PeriodKind) -> Self {
        Self::call(Method::EndOfPeriod(kind), vec![date.into()])
    }

    pub fn in_list(expr: impl Into<Self>, values: impl Into<Self>) -> Self {
        Self::call(Method::In, vec![expr.into(), values.into()])
    }

    pub fn in_hierarchy(expr: impl Into<Self>, values: impl Into<Self>) -> Self {
        Self::call(Method::InHierarchy, vec![expr.into(), values.into()])
    }

    pub fn not_in(expr: impl Into<Self>, values: impl Into<Self>) -> Self {
        Self::call(Method::NotIn, vec![expr.into(), values.into()])
    }

    /// `values.contains(expr)`
    pub fn contains(values: impl Into<Self>, expr: impl Into<Self>) -> Self {
        Self::call(Method::Contains, vec![values.into(), expr.into()])
    }

    pub fn like(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        Self::call(Method::Like, vec![expr.into(), pattern.into()])
    }

    pub fn like_escape(expr: impl Into<Self>, pattern: impl Into<Self>, escape: char) -> Self {
        Self::call(
            Method::Like,
            vec![expr.into(), pattern.into(), Self::constant(escape)],
        )
    }

    pub fn not_like(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        Self::call(Method::NotLike, vec![expr.into(), pattern.into()])
    }

    pub fn between(expr: impl Into<Self>, start: impl Into<Self>, end: impl Into<Self>) -> Self {
        Self::call(Method::Between, vec![expr.into(), start.into(), end.into()])
    }

    pub fn not_between(
        expr: impl Into<Self>,
        start: impl Into<Self>,
        end: impl Into<Self>,
    ) -> Self {
        Self::call(
            Method::NotBetween,
            vec![expr.into(), start.into(), end.into()],
        )
    }
}

impl From<ExprCall> for Expr {
    fn from(value: ExprCall) -> Self {
        Self::Call(value)
    }
}
