use super::{Expr, Type};

/// `CAST(expr AS type)`.
///
/// Casting to a [`Type::Table`] narrows a composite-typed field to one
/// table, after which the table's fields can be read through it:
///
/// ```text
/// CAST(Extra AS Catalog.Counterparties).Name
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExprCast {
    pub expr: Box<Expr>,
    pub ty: Type,
}

impl Expr {
    pub fn cast(expr: impl Into<Self>, ty: impl Into<Type>) -> Self {
        Self::Cast(ExprCast {
            expr: Box::new(expr.into()),
            ty: ty.into(),
        })
    }
}

impl From<ExprCast> for Expr {
    fn from(value: ExprCast) -> Self {
        Self::Cast(value)
    }
}
