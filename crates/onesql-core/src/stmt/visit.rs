#![allow(unused_variables)]

use super::{
    CaseBranch, CondBetween, CondInList, CondIsNull, CondLike, CondLogic, CondNot, CondRefs,
    CondRelation, Condition, Expr, ExprAggregate, ExprBinaryOp, ExprCase, ExprCast,
    ExprColumnGroup, ExprCount, ExprField, ExprFunc, ExprNegate, ExprParam, Filter, Ident,
    Literal, OrderBy, OrderByExpr, Query, Select,
};

/// Read-only traversal of a statement.
///
/// Children are visited in the order they appear in the rendered text.
pub trait Visit {
    fn visit_condition(&mut self, i: &Condition) {
        visit_condition(self, i);
    }

    fn visit_cond_between(&mut self, i: &CondBetween) {
        visit_cond_between(self, i);
    }

    fn visit_cond_in_list(&mut self, i: &CondInList) {
        visit_cond_in_list(self, i);
    }

    fn visit_cond_is_null(&mut self, i: &CondIsNull) {
        visit_cond_is_null(self, i);
    }

    fn visit_cond_like(&mut self, i: &CondLike) {
        visit_cond_like(self, i);
    }

    fn visit_cond_logic(&mut self, i: &CondLogic) {
        visit_cond_logic(self, i);
    }

    fn visit_cond_not(&mut self, i: &CondNot) {
        visit_cond_not(self, i);
    }

    fn visit_cond_refs(&mut self, i: &CondRefs) {
        visit_cond_refs(self, i);
    }

    fn visit_cond_relation(&mut self, i: &CondRelation) {
        visit_cond_relation(self, i);
    }

    fn visit_expr(&mut self, i: &Expr) {
        visit_expr(self, i);
    }

    fn visit_expr_aggregate(&mut self, i: &ExprAggregate) {
        visit_expr_aggregate(self, i);
    }

    fn visit_expr_binary_op(&mut self, i: &ExprBinaryOp) {
        visit_expr_binary_op(self, i);
    }

    fn visit_expr_case(&mut self, i: &ExprCase) {
        visit_expr_case(self, i);
    }

    fn visit_expr_cast(&mut self, i: &ExprCast) {
        visit_expr_cast(self, i);
    }

    fn visit_expr_column_group(&mut self, i: &ExprColumnGroup) {
        visit_expr_column_group(self, i);
    }

    fn visit_expr_count(&mut self, i: &ExprCount) {
        visit_expr_count(self, i);
    }

    fn visit_expr_field(&mut self, i: &ExprField) {
        visit_expr_field(self, i);
    }

    fn visit_expr_func(&mut self, i: &ExprFunc) {
        visit_expr_func(self, i);
    }

    fn visit_expr_negate(&mut self, i: &ExprNegate) {
        visit_expr_negate(self, i);
    }

    fn visit_expr_param(&mut self, i: &ExprParam) {}

    fn visit_literal(&mut self, i: &Literal) {}

    fn visit_filter(&mut self, i: &Filter) {
        self.visit_condition(&i.condition);
    }

    fn visit_order_by(&mut self, i: &OrderBy) {
        visit_order_by(self, i);
    }

    fn visit_order_by_expr(&mut self, i: &OrderByExpr) {
        self.visit_expr(&i.expr);
    }

    fn visit_query(&mut self, i: &Query) {
        visit_query(self, i);
    }

    fn visit_select(&mut self, i: &Select) {
        visit_select(self, i);
    }
}

pub fn visit_condition<V>(v: &mut V, node: &Condition)
where
    V: Visit + ?Sized,
{
    match node {
        Condition::Between(cond) => v.visit_cond_between(cond),
        Condition::InList(cond) => v.visit_cond_in_list(cond),
        Condition::IsNull(cond) => v.visit_cond_is_null(cond),
        Condition::Like(cond) => v.visit_cond_like(cond),
        Condition::Logic(cond) => v.visit_cond_logic(cond),
        Condition::Not(cond) => v.visit_cond_not(cond),
        Condition::Refs(cond) => v.visit_cond_refs(cond),
        Condition::Relation(cond) => v.visit_cond_relation(cond),
    }
}

pub fn visit_cond_between<V>(v: &mut V, node: &CondBetween)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
    v.visit_expr(&node.start);
    v.visit_expr(&node.end);
}

pub fn visit_cond_in_list<V>(v: &mut V, node: &CondInList)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
    for value in &node.values {
        v.visit_expr(value);
    }
}

pub fn visit_cond_is_null<V>(v: &mut V, node: &CondIsNull)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_cond_like<V>(v: &mut V, node: &CondLike)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_cond_logic<V>(v: &mut V, node: &CondLogic)
where
    V: Visit + ?Sized,
{
    v.visit_condition(&node.lhs);
    v.visit_condition(&node.rhs);
}

pub fn visit_cond_not<V>(v: &mut V, node: &CondNot)
where
    V: Visit + ?Sized,
{
    v.visit_condition(&node.cond);
}

pub fn visit_cond_refs<V>(v: &mut V, node: &CondRefs)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_cond_relation<V>(v: &mut V, node: &CondRelation)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_expr<V>(v: &mut V, node: &Expr)
where
    V: Visit + ?Sized,
{
    match node {
        Expr::Aggregate(expr) => v.visit_expr_aggregate(expr),
        Expr::AllColumns | Expr::DefaultTable => {}
        Expr::BinaryOp(expr) => v.visit_expr_binary_op(expr),
        Expr::Case(expr) => v.visit_expr_case(expr),
        Expr::Cast(expr) => v.visit_expr_cast(expr),
        Expr::ColumnGroup(expr) => v.visit_expr_column_group(expr),
        Expr::Count(expr) => v.visit_expr_count(expr),
        Expr::Field(expr) => v.visit_expr_field(expr),
        Expr::Func(expr) => v.visit_expr_func(expr),
        Expr::Literal(expr) => v.visit_literal(expr),
        Expr::Negate(expr) => v.visit_expr_negate(expr),
        Expr::Param(expr) => v.visit_expr_param(expr),
    }
}

pub fn visit_expr_aggregate<V>(v: &mut V, node: &ExprAggregate)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_binary_op<V>(v: &mut V, node: &ExprBinaryOp)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_expr_case<V>(v: &mut V, node: &ExprCase)
where
    V: Visit + ?Sized,
{
    for CaseBranch { when, then } in &node.branches {
        v.visit_condition(when);
        v.visit_expr(then);
    }
    v.visit_expr(&node.default);
}

pub fn visit_expr_cast<V>(v: &mut V, node: &ExprCast)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_column_group<V>(v: &mut V, node: &ExprColumnGroup)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.table);
}

pub fn visit_expr_count<V>(v: &mut V, node: &ExprCount)
where
    V: Visit + ?Sized,
{
    if let Some(arg) = &node.arg {
        v.visit_expr(arg);
    }
}

pub fn visit_expr_field<V>(v: &mut V, node: &ExprField)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.table);
}

pub fn visit_expr_func<V>(v: &mut V, node: &ExprFunc)
where
    V: Visit + ?Sized,
{
    for arg in &node.args {
        v.visit_expr(arg);
    }
}

pub fn visit_expr_negate<V>(v: &mut V, node: &ExprNegate)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_order_by<V>(v: &mut V, node: &OrderBy)
where
    V: Visit + ?Sized,
{
    for expr in node.exprs() {
        v.visit_order_by_expr(expr);
    }
}

pub fn visit_query<V>(v: &mut V, node: &Query)
where
    V: Visit + ?Sized,
{
    v.visit_select(&node.select);
    if let Some(filter) = &node.filter {
        v.visit_filter(filter);
    }
    if let Some(order_by) = &node.order_by {
        v.visit_order_by(order_by);
    }
}

pub fn visit_select<V>(v: &mut V, node: &Select)
where
    V: Visit + ?Sized,
{
    for column in node.columns() {
        v.visit_expr(column);
    }
}

/// Collects parameter references, once per reference, in text order.
#[derive(Default)]
pub(super) struct ParamRefs(pub(super) Vec<Ident>);

impl Visit for ParamRefs {
    fn visit_expr_param(&mut self, i: &ExprParam) {
        self.0.push(i.name.clone());
    }
}
