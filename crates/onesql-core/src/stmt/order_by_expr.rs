use super::{Direction, Expr};

/// One sort key of an ORDER BY clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: Direction,
}

impl OrderByExpr {
    pub fn new(expr: impl Into<Expr>, direction: Direction) -> Self {
        Self {
            expr: expr.into(),
            direction,
        }
    }

    pub fn asc(expr: impl Into<Expr>) -> Self {
        Self::new(expr, Direction::Asc)
    }

    pub fn desc(expr: impl Into<Expr>) -> Self {
        Self::new(expr, Direction::Desc)
    }
}
