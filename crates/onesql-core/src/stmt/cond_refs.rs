use super::{Condition, Expr};

/// `expr REFS Table`: the reference points at a row of the given table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CondRefs {
    pub expr: Expr,
    pub table: String,
}

impl Condition {
    pub fn refs(expr: impl Into<Expr>, table: impl Into<String>) -> Self {
        CondRefs {
            expr: expr.into(),
            table: table.into(),
        }
        .into()
    }
}

impl From<CondRefs> for Condition {
    fn from(value: CondRefs) -> Self {
        Self::Refs(value)
    }
}
