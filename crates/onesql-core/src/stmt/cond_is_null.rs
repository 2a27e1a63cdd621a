use super::{Condition, Expr};

/// Tests whether an expression is (or is not) null. This is different from a
/// relation because of how the database treats null comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CondIsNull {
    pub expr: Expr,

    /// `true` for `IS NULL`, `false` for `IS NOT NULL`.
    pub is_null: bool,
}

impl Condition {
    pub fn is_null(expr: impl Into<Expr>) -> Self {
        CondIsNull {
            expr: expr.into(),
            is_null: true,
        }
        .into()
    }

    pub fn is_not_null(expr: impl Into<Expr>) -> Self {
        CondIsNull {
            expr: expr.into(),
            is_null: false,
        }
        .into()
    }
}

impl From<CondIsNull> for Condition {
    fn from(value: CondIsNull) -> Self {
        Self::IsNull(value)
    }
}
