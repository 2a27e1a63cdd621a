use super::Expr;

/// `SUM`, `AVG`, `MIN` or `MAX` over one operand.
///
/// `COUNT` has its own node, [`ExprCount`](super::ExprCount), because it
/// accepts `*` and `DISTINCT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExprAggregate {
    pub func: AggregateFunc,
    pub expr: Box<Expr>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AggregateFunc {
    Sum,
    Avg,
    Min,
    Max,
}

impl AggregateFunc {
    pub fn name(self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
        }
    }
}

impl Expr {
    pub fn aggregate(func: AggregateFunc, expr: impl Into<Self>) -> Self {
        ExprAggregate {
            func,
            expr: Box::new(expr.into()),
        }
        .into()
    }

    pub fn sum(expr: impl Into<Self>) -> Self {
        Self::aggregate(AggregateFunc::Sum, expr)
    }

    pub fn avg(expr: impl Into<Self>) -> Self {
        Self::aggregate(AggregateFunc::Avg, expr)
    }

    pub fn min(expr: impl Into<Self>) -> Self {
        Self::aggregate(AggregateFunc::Min, expr)
    }

    pub fn max(expr: impl Into<Self>) -> Self {
        Self::aggregate(AggregateFunc::Max, expr)
    }
}

impl From<ExprAggregate> for Expr {
    fn from(value: ExprAggregate) -> Self {
        Self::Aggregate(value)
    }
}
