use super::Expr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExprCount {
    /// When `None`, it means `COUNT(*)`. Otherwise, count the rows for which
    /// the expression is not `NULL`.
    pub arg: Option<Box<Expr>>,

    /// Count distinct values of `arg` only. Always `false` for `COUNT(*)`.
    pub distinct: bool,
}

impl Expr {
    pub fn count_star() -> Self {
        ExprCount {
            arg: None,
            distinct: false,
        }
        .into()
    }

    pub fn count(expr: impl Into<Self>) -> Self {
        ExprCount {
            arg: Some(Box::new(expr.into())),
            distinct: false,
        }
        .into()
    }

    pub fn count_distinct(expr: impl Into<Self>) -> Self {
        ExprCount {
            arg: Some(Box::new(expr.into())),
            distinct: true,
        }
        .into()
    }
}

impl From<ExprCount> for Expr {
    fn from(value: ExprCount) -> Self {
        Self::Count(value)
    }
}
