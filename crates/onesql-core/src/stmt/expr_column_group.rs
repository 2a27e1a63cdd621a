use super::{Expr, Ident};

/// Several fields of one table, rendered as a parenthesized list. Used for
/// composite keys, e.g. `(Period, Account) IN (...)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExprColumnGroup {
    pub table: Box<Expr>,
    pub fields: Vec<Ident>,
}

impl Expr {
    pub fn column_group<I>(table: impl Into<Self>, fields: impl IntoIterator<Item = I>) -> Self
    where
        I: Into<Ident>,
    {
        ExprColumnGroup {
            table: Box::new(table.into()),
            fields: fields.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl From<ExprColumnGroup> for Expr {
    fn from(value: ExprColumnGroup) -> Self {
        Self::ColumnGroup(value)
    }
}
