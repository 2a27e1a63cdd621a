//! Filter conditions.
//!
//! Constants compared against fields become parameters. The value lists of
//! `IN` tests, the bounds of `BETWEEN` and `LIKE` patterns stay inline.

use super::{unsupported, Constants, ParseContext, Transform};
use crate::expr::{BinaryOp, Expr, ExprBinary, ExprCall, ExprUnary, Method, UnaryOp};
use crate::schema::MappingProvider;

use onesql_core::{
    stmt::{self, Condition, Literal, LogicOp, RelationOp, Value},
    Result,
};

/// Translates a boolean expression into a condition, registering its
/// constants with `cx`.
pub fn transform(
    expr: &Expr,
    mapping: &dyn MappingProvider,
    cx: &mut ParseContext,
) -> Result<Condition> {
    let expr = expr.clone().fold()?;
    Transform::new(mapping, cx, Constants::Params).condition(&expr)
}

impl Transform<'_> {
    pub(super) fn condition(&mut self, expr: &Expr) -> Result<Condition> {
        match expr {
            Expr::Binary(e) if e.op.is_comparison() => self.cond_comparison(e, expr),
            Expr::Binary(e) if e.op.is_logical() => {
                let op = match e.op {
                    BinaryOp::AndAlso => LogicOp::And,
                    _ => LogicOp::Or,
                };
                let lhs = self.condition(&e.lhs)?;
                let rhs = self.condition(&e.rhs)?;
                Ok(Condition::logic(lhs, op, rhs))
            }
            Expr::Unary(ExprUnary {
                op: UnaryOp::Not,
                expr,
            }) => Ok(Condition::not(self.condition(expr)?)),
            Expr::Call(e) if e.method.is_predicate() => self.cond_predicate(e, expr),
            Expr::TypeIs(e) => {
                let operand = self.expr(&e.expr)?;
                Ok(Condition::refs(operand, self.table_name(e.record)?))
            }
            Expr::Constant(constant) if constant.value.as_bool().is_some() => {
                Err(unsupported("constant used as a condition", expr))
            }
            // A boolean value, e.g. a flag field, tests for `TRUE`
            _ if expr.ty().is_bool() => {
                let lhs = self.expr(expr)?;
                let rhs = self.constant(&Value::Bool(true))?;
                Ok(Condition::eq(lhs, rhs))
            }
            _ => Err(unsupported("expression is not a condition", expr)),
        }
    }

    fn cond_comparison(&mut self, e: &ExprBinary, expr: &Expr) -> Result<Condition> {
        let op = match e.op {
            BinaryOp::Eq => RelationOp::Eq,
            BinaryOp::Ne => RelationOp::Ne,
            BinaryOp::Gt => RelationOp::Gt,
            BinaryOp::Ge => RelationOp::Ge,
            BinaryOp::Lt => RelationOp::Lt,
            BinaryOp::Le => RelationOp::Le,
            _ => return Err(unsupported("not a comparison", expr)),
        };

        let operand = match (e.lhs.is_null_constant(), e.rhs.is_null_constant()) {
            (false, false) => {
                let lhs = self.expr(&e.lhs)?;
                let rhs = self.expr(&e.rhs)?;
                return Ok(Condition::relation(lhs, op, rhs));
            }
            (false, true) => &e.lhs,
            (true, false) => &e.rhs,
            (true, true) => return Err(unsupported("comparison of two nulls", expr)),
        };

        let operand = self.expr(operand)?;

        match op {
            RelationOp::Eq => Ok(Condition::is_null(operand)),
            RelationOp::Ne => Ok(Condition::is_not_null(operand)),
            _ => Err(unsupported("null can only be tested for equality", expr)),
        }
    }

    fn cond_predicate(&mut self, e: &ExprCall, expr: &Expr) -> Result<Condition> {
        match (e.method, &e.args[..]) {
            (Method::In, [operand, values]) => {
                let operand = self.expr(operand)?;
                Ok(Condition::in_list(operand, self.value_list(values)?))
            }
            (Method::InHierarchy, [operand, values]) => {
                let operand = self.expr(operand)?;
                Ok(Condition::in_hierarchy(operand, self.value_list(values)?))
            }
            (Method::NotIn, [operand, values]) => {
                let operand = self.expr(operand)?;
                Ok(Condition::not_in_list(operand, self.value_list(values)?))
            }
            (Method::Contains, [values, operand]) => {
                let operand = self.expr(operand)?;
                Ok(Condition::in_list(operand, self.value_list(values)?))
            }
            (Method::Like | Method::NotLike, [operand, pattern, escape @ ..]) => {
                let operand = self.expr(operand)?;

                let Some(pattern) = pattern.as_constant().and_then(|c| c.value.as_str()) else {
                    return Err(unsupported("LIKE pattern must be a constant string", expr));
                };

                let escape = match escape {
                    [] => None,
                    [escape] => match escape.as_constant().map(|c| &c.value) {
                        Some(Value::Char(escape)) => Some(*escape),
                        _ => {
                            return Err(unsupported(
                                "LIKE escape must be a constant character",
                                expr,
                            ))
                        }
                    },
                    _ => return Err(unsupported("wrong number of arguments", expr)),
                };

                Ok(stmt::CondLike {
                    expr: operand,
                    pattern: pattern.to_string(),
                    escape,
                    is_like: e.method == Method::Like,
                }
                .into())
            }
            (Method::Between | Method::NotBetween, [operand, start, end]) => {
                let operand = self.expr(operand)?;
                let (start, end) = self.with_literals(|t| Ok((t.expr(start)?, t.expr(end)?)))?;

                Ok(match e.method {
                    Method::Between => Condition::between(operand, start, end),
                    _ => Condition::not_between(operand, start, end),
                })
            }
            _ => Err(unsupported("wrong number of arguments", expr)),
        }
    }

    /// Inline values of an `IN` test.
    fn value_list(&mut self, expr: &Expr) -> Result<Vec<stmt::Expr>> {
        let Some(Value::List(values)) = expr.as_constant().map(|c| &c.value) else {
            return Err(unsupported("IN values must be a constant list", expr));
        };

        if values.is_empty() {
            return Err(unsupported("IN value list is empty", expr));
        }

        values
            .iter()
            .map(|value| Ok(Literal::new(value.clone())?.into()))
            .collect()
    }
}
