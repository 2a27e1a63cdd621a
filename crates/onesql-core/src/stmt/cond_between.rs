use super::{Condition, Expr};

/// `expr [NOT] BETWEEN start AND end`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CondBetween {
    pub expr: Expr,
    pub start: Expr,
    pub end: Expr,
    pub is_between: bool,
}

impl Condition {
    pub fn between(expr: impl Into<Expr>, start: impl Into<Expr>, end: impl Into<Expr>) -> Self {
        CondBetween {
            expr: expr.into(),
            start: start.into(),
            end: end.into(),
            is_between: true,
        }
        .into()
    }

    pub fn not_between(
        expr: impl Into<Expr>,
        start: impl Into<Expr>,
        end: impl Into<Expr>,
    ) -> Self {
        CondBetween {
            expr: expr.into(),
            start: start.into(),
            end: end.into(),
            is_between: false,
        }
        .into()
    }
}

impl From<CondBetween> for Condition {
    fn from(value: CondBetween) -> Self {
        Self::Between(value)
    }
}
