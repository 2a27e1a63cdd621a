use super::Expr;

/// Unary minus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExprNegate {
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn negate(expr: impl Into<Self>) -> Self {
        ExprNegate {
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprNegate> for Expr {
    fn from(value: ExprNegate) -> Self {
        Self::Negate(value)
    }
}
