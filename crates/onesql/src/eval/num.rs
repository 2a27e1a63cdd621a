use crate::expr::BinaryOp;

use onesql_core::{bail, stmt::Value, Result};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use std::cmp::Ordering;

/// A numeric constant widened for arithmetic. Mixed operands promote to
/// decimal, then to float, then to integer, in that order of preference.
#[derive(Debug, Clone, Copy)]
pub(super) enum Num {
    Int(i64),
    Float(f64),
    Decimal(Decimal),
}

impl Num {
    pub(super) fn from_value(value: &Value) -> Option<Self> {
        Some(match *value {
            Value::Decimal(v) => Self::Decimal(v),
            Value::F32(v) => Self::Float(v.into()),
            Value::F64(v) => Self::Float(v),
            _ => Self::Int(value.as_i64()?),
        })
    }

    pub(super) fn into_value(self) -> Value {
        match self {
            Self::Int(v) => Value::I64(v),
            Self::Float(v) => Value::F64(v),
            Self::Decimal(v) => Value::Decimal(v),
        }
    }

    pub(super) fn apply(self, op: BinaryOp, rhs: Self) -> Result<Self> {
        Ok(match self.promote(rhs) {
            (Self::Int(a), Self::Int(b)) => {
                let value = match op {
                    BinaryOp::Add => a.checked_add(b),
                    BinaryOp::Sub => a.checked_sub(b),
                    BinaryOp::Mul => a.checked_mul(b),
                    BinaryOp::Div if b == 0 => bail!("division by zero in constant expression"),
                    BinaryOp::Div => a.checked_div(b),
                    _ => bail!("operator {op:?} does not apply to numbers"),
                };

                match value {
                    Some(value) => Self::Int(value),
                    None => bail!("integer overflow in constant expression; {a} {op:?} {b}"),
                }
            }
            (Self::Decimal(a), Self::Decimal(b)) => {
                let value = match op {
                    BinaryOp::Add => a.checked_add(b),
                    BinaryOp::Sub => a.checked_sub(b),
                    BinaryOp::Mul => a.checked_mul(b),
                    BinaryOp::Div => a.checked_div(b),
                    _ => bail!("operator {op:?} does not apply to numbers"),
                };

                match value {
                    Some(value) => Self::Decimal(value),
                    None => bail!("decimal overflow or division by zero; {a} {op:?} {b}"),
                }
            }
            (a, b) => {
                let (a, b) = (a.to_f64(), b.to_f64());
                Self::Float(match op {
                    BinaryOp::Add => a + b,
                    BinaryOp::Sub => a - b,
                    BinaryOp::Mul => a * b,
                    BinaryOp::Div => a / b,
                    _ => bail!("operator {op:?} does not apply to numbers"),
                })
            }
        })
    }

    pub(super) fn negate(self) -> Result<Self> {
        Ok(match self {
            Self::Int(v) => match v.checked_neg() {
                Some(v) => Self::Int(v),
                None => bail!("integer overflow negating {v}"),
            },
            Self::Float(v) => Self::Float(-v),
            Self::Decimal(v) => Self::Decimal(-v),
        })
    }

    /// Brings both operands to the same variant.
    fn promote(self, other: Self) -> (Self, Self) {
        match (self, other) {
            (Self::Int(a), Self::Decimal(b)) => (Self::Decimal(a.into()), Self::Decimal(b)),
            (Self::Decimal(a), Self::Int(b)) => (Self::Decimal(a), Self::Decimal(b.into())),
            (Self::Float(a), Self::Decimal(b)) => match Decimal::try_from(a) {
                Ok(a) => (Self::Decimal(a), Self::Decimal(b)),
                Err(_) => (Self::Float(a), Self::Float(other.to_f64())),
            },
            (Self::Decimal(a), Self::Float(b)) => match Decimal::try_from(b) {
                Ok(b) => (Self::Decimal(a), Self::Decimal(b)),
                Err(_) => (Self::Float(self.to_f64()), Self::Float(b)),
            },
            pair => pair,
        }
    }

    fn to_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
            Self::Decimal(v) => v.to_f64().unwrap_or(f64::NAN),
        }
    }
}

impl PartialEq for Num {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Num {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.promote(*other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (Self::Decimal(a), Self::Decimal(b)) => Some(a.cmp(&b)),
            (a, b) => a.to_f64().partial_cmp(&b.to_f64()),
        }
    }
}
