use super::{Condition, Expr};

/// `expr [NOT] LIKE "pattern" [ESCAPE "c"]`
///
/// The pattern stays literal text; it is never turned into a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CondLike {
    pub expr: Expr,
    pub pattern: String,
    pub escape: Option<char>,
    pub is_like: bool,
}

impl Condition {
    pub fn like(expr: impl Into<Expr>, pattern: impl Into<String>) -> Self {
        CondLike {
            expr: expr.into(),
            pattern: pattern.into(),
            escape: None,
            is_like: true,
        }
        .into()
    }

    pub fn not_like(expr: impl Into<Expr>, pattern: impl Into<String>) -> Self {
        CondLike {
            expr: expr.into(),
            pattern: pattern.into(),
            escape: None,
            is_like: false,
        }
        .into()
    }
}

impl From<CondLike> for Condition {
    fn from(value: CondLike) -> Self {
        Self::Like(value)
    }
}
