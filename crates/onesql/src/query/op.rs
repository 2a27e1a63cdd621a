use crate::expr::Expr;

use onesql_core::stmt::Direction;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOp {
    /// Keep the records matching a predicate
    Filter(Expr),

    /// Sort by a key, replacing any previous sort
    OrderBy(Expr, Direction),

    /// Add a secondary sort key
    ThenBy(Expr, Direction),

    /// Project each record
    Select(Expr),

    /// Drop duplicate rows
    Distinct,

    /// Keep at most `n` rows
    Take(u64),

    /// Reduce the rows to one value. Must be the last operation.
    Aggregate(Aggregate),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub func: AggregateFunc,

    /// For `Count`, an optional predicate. For the others, an optional
    /// selector; without one the projection supplies the operand.
    pub arg: Option<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFunc {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}
