use super::{Condition, Expr};

/// `expr [NOT] IN [HIERARCHY] (v1, v2, ...)`
///
/// Values are literals or parameter references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CondInList {
    pub expr: Expr,
    pub values: Vec<Expr>,
    pub is_in: bool,

    /// Also match descendants in a hierarchical catalog.
    pub is_hierarchy: bool,
}

impl Condition {
    pub fn in_list(expr: impl Into<Expr>, values: Vec<Expr>) -> Self {
        CondInList {
            expr: expr.into(),
            values,
            is_in: true,
            is_hierarchy: false,
        }
        .into()
    }

    pub fn not_in_list(expr: impl Into<Expr>, values: Vec<Expr>) -> Self {
        CondInList {
            expr: expr.into(),
            values,
            is_in: false,
            is_hierarchy: false,
        }
        .into()
    }

    pub fn in_hierarchy(expr: impl Into<Expr>, values: Vec<Expr>) -> Self {
        CondInList {
            expr: expr.into(),
            values,
            is_in: true,
            is_hierarchy: true,
        }
        .into()
    }
}

impl From<CondInList> for Condition {
    fn from(value: CondInList) -> Self {
        Self::InList(value)
    }
}
