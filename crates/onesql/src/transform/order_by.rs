//! Sort keys.

use super::{Constants, ParseContext, Transform};
use crate::expr::Expr;
use crate::schema::MappingProvider;

use onesql_core::{
    stmt::{Direction, OrderByExpr},
    Result,
};

pub fn transform(
    key: &Expr,
    direction: Direction,
    mapping: &dyn MappingProvider,
    cx: &mut ParseContext,
) -> Result<OrderByExpr> {
    let key = key.clone().fold()?;
    Transform::new(mapping, cx, Constants::Literals).order_by_expr(&key, direction)
}

impl Transform<'_> {
    pub(super) fn order_by_expr(&mut self, key: &Expr, direction: Direction) -> Result<OrderByExpr> {
        Ok(OrderByExpr {
            expr: self.expr(key)?,
            direction,
        })
    }
}
