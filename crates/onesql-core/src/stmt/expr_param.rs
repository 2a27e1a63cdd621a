use super::{Expr, Ident};

/// Reference to a named query parameter, rendered as `&name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExprParam {
    pub name: Ident,
}

impl Expr {
    pub fn param(name: impl Into<Ident>) -> Self {
        ExprParam { name: name.into() }.into()
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Self::Param(_))
    }
}

impl From<ExprParam> for Expr {
    fn from(value: ExprParam) -> Self {
        Self::Param(value)
    }
}
