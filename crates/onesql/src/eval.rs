//! Constant folding.
//!
//! Sub-expressions that do not depend on the query's input are evaluated
//! before translation, so the translators see literal values wherever the
//! caller computed something: `in_list(x, [a, b])` sees a constant list and
//! `price * (1 + rate)` sees a single constant operand.

mod num;
use num::Num;

use crate::expr::{
    BinaryOp, Expr, ExprBinary, ExprCall, ExprConditional, ExprConstant, ExprConvert, ExprMember,
    ExprNew, ExprNewArray, ExprTypeIs, ExprUnary, Type, UnaryOp,
};
use crate::reader::{DefaultConverter, ValueConverter, ValueKind};

use onesql_core::{stmt::Value, Result};
use std::cmp::Ordering;

impl Expr {
    /// Folds every input-independent sub-expression into a constant.
    pub fn fold(self) -> Result<Expr> {
        fold(self)
    }
}

pub(crate) fn fold(expr: Expr) -> Result<Expr> {
    Ok(match expr {
        Expr::Binary(expr) => fold_binary(expr)?,
        Expr::Call(ExprCall { method, args }) => Expr::call(
            method,
            args.into_iter().map(fold).collect::<Result<_>>()?,
        ),
        Expr::Conditional(expr) => fold_conditional(expr)?,
        Expr::Convert(expr) => fold_convert(expr)?,
        Expr::Member(ExprMember { base, member, ty }) => ExprMember {
            base: Box::new(fold(*base)?),
            member,
            ty,
        }
        .into(),
        Expr::New(ExprNew { ty, members }) => ExprNew {
            ty,
            members: members
                .into_iter()
                .map(|(name, expr)| Ok((name, fold(expr)?)))
                .collect::<Result<_>>()?,
        }
        .into(),
        Expr::NewArray(expr) => fold_new_array(expr)?,
        Expr::TypeIs(ExprTypeIs { expr, record }) => Expr::type_is(fold(*expr)?, record),
        Expr::Unary(expr) => fold_unary(expr)?,
        expr @ (Expr::Constant(_) | Expr::Input(_)) => expr,
    })
}

fn fold_binary(expr: ExprBinary) -> Result<Expr> {
    let ty = expr.ty();
    let ExprBinary { lhs, op, rhs } = expr;
    let lhs = fold(*lhs)?;
    let rhs = fold(*rhs)?;

    if op.is_logical() {
        return Ok(fold_logical(lhs, op, rhs));
    }

    if op == BinaryOp::Coalesce {
        return Ok(match lhs {
            Expr::Constant(ExprConstant {
                value: Value::Null, ..
            }) => rhs,
            lhs @ Expr::Constant(_) => lhs,
            lhs => Expr::coalesce(lhs, rhs),
        });
    }

    let (Expr::Constant(l), Expr::Constant(r)) = (&lhs, &rhs) else {
        return Ok(Expr::binary(lhs, op, rhs));
    };

    if op.is_comparison() {
        return Ok(Expr::constant(compare(&l.value, op, &r.value)));
    }

    if l.value.is_null() || r.value.is_null() {
        return Ok(Expr::typed_constant(Value::Null, ty));
    }

    let (Some(a), Some(b)) = (Num::from_value(&l.value), Num::from_value(&r.value)) else {
        return Ok(Expr::binary(lhs, op, rhs));
    };

    let value = a.apply(op, b)?.into_value();
    Ok(Expr::typed_constant(convert(value, &ty)?, ty))
}

/// `AND` / `OR` with a constant operand reduce to the other operand or to a
/// constant.
fn fold_logical(lhs: Expr, op: BinaryOp, rhs: Expr) -> Expr {
    let absorbing = op == BinaryOp::OrElse;

    match (as_bool(&lhs), as_bool(&rhs)) {
        (Some(b), _) | (_, Some(b)) if b == absorbing => Expr::constant(absorbing),
        (Some(_), _) => rhs,
        (_, Some(_)) => lhs,
        (None, None) => Expr::binary(lhs, op, rhs),
    }
}

fn fold_conditional(expr: ExprConditional) -> Result<Expr> {
    let test = fold(*expr.test)?;
    let then = fold(*expr.then)?;
    let otherwise = fold(*expr.otherwise)?;

    Ok(match as_bool(&test) {
        Some(true) => then,
        Some(false) => otherwise,
        None => Expr::conditional(test, then, otherwise),
    })
}

fn fold_convert(expr: ExprConvert) -> Result<Expr> {
    let ExprConvert { expr, ty } = expr;

    match fold(*expr)? {
        Expr::Constant(constant) if ty.is_object() || ValueKind::from_ty(&ty).is_some() => {
            let value = convert(constant.value, &ty)?;
            Ok(Expr::typed_constant(value, ty))
        }
        expr => Ok(Expr::convert(expr, ty)),
    }
}

fn fold_new_array(expr: ExprNewArray) -> Result<Expr> {
    let ExprNewArray { item_ty, items } = expr;
    let items = items.into_iter().map(fold).collect::<Result<Vec<_>>>()?;

    if !items.iter().all(Expr::is_constant) {
        return Ok(Expr::new_array(item_ty, items));
    }

    let values = items
        .into_iter()
        .filter_map(|item| match item {
            Expr::Constant(constant) => Some(constant.value),
            _ => None,
        })
        .collect();

    Ok(Expr::typed_constant(Value::List(values), Type::list(item_ty)))
}

fn fold_unary(expr: ExprUnary) -> Result<Expr> {
    let ty = expr.ty();
    let ExprUnary { op, expr } = expr;
    let expr = fold(*expr)?;

    let Expr::Constant(constant) = &expr else {
        return Ok(match op {
            UnaryOp::Not => Expr::not(expr),
            UnaryOp::Negate => Expr::negate(expr),
        });
    };

    Ok(match op {
        UnaryOp::Not => match constant.value.as_bool() {
            Some(b) => Expr::constant(!b),
            None => Expr::not(expr),
        },
        UnaryOp::Negate => match Num::from_value(&constant.value) {
            Some(num) => {
                let value = num.negate()?.into_value();
                Expr::typed_constant(convert(value, &ty)?, ty)
            }
            None => Expr::negate(expr),
        },
    })
}

fn as_bool(expr: &Expr) -> Option<bool> {
    expr.as_constant()?.value.as_bool()
}

/// Converts a folded value to the static type of the node it replaces.
fn convert(value: Value, ty: &Type) -> Result<Value> {
    match ValueKind::from_ty(ty) {
        Some(kind) => DefaultConverter.convert(value, kind),
        None => Ok(value),
    }
}

fn compare(lhs: &Value, op: BinaryOp, rhs: &Value) -> bool {
    let ordering = match (Num::from_value(lhs), Num::from_value(rhs)) {
        (Some(a), Some(b)) => a.partial_cmp(&b),
        _ => match (lhs, rhs) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Null, _) | (_, Value::Null) => None,
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Char(a), Value::Char(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
            _ => (lhs == rhs).then_some(Ordering::Equal),
        },
    };

    match op {
        BinaryOp::Eq => ordering == Some(Ordering::Equal),
        BinaryOp::Ne => ordering != Some(Ordering::Equal),
        BinaryOp::Gt => ordering == Some(Ordering::Greater),
        BinaryOp::Ge => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        BinaryOp::Lt => ordering == Some(Ordering::Less),
        BinaryOp::Le => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        _ => unreachable!("not a comparison; op={op:?}"),
    }
}
