use super::{Condition, Expr, RelationOp};

/// A comparison between two value expressions.
///
/// # Examples
///
/// ```text
/// Code = &p1
/// Amount >= 100
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CondRelation {
    pub lhs: Expr,
    pub op: RelationOp,
    pub rhs: Expr,
}

impl Condition {
    pub fn relation(lhs: impl Into<Expr>, op: RelationOp, rhs: impl Into<Expr>) -> Self {
        CondRelation {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
        }
        .into()
    }

    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::relation(lhs, RelationOp::Eq, rhs)
    }

    pub fn ne(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::relation(lhs, RelationOp::Ne, rhs)
    }

    pub fn gt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::relation(lhs, RelationOp::Gt, rhs)
    }

    pub fn ge(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::relation(lhs, RelationOp::Ge, rhs)
    }

    pub fn lt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::relation(lhs, RelationOp::Lt, rhs)
    }

    pub fn le(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::relation(lhs, RelationOp::Le, rhs)
    }
}

impl From<CondRelation> for Condition {
    fn from(value: CondRelation) -> Self {
        Self::Relation(value)
    }
}
