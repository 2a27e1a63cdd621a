use super::{Expr, Ident};

/// A field of a table expression.
///
/// The table is usually [`Expr::DefaultTable`], in which case the field name
/// renders without a prefix. A cast to a table type, or another reference
/// field, can also act as the table to navigate one reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExprField {
    pub table: Box<Expr>,
    pub name: Ident,
}

impl Expr {
    /// A field of the default table.
    pub fn field(name: impl Into<Ident>) -> Self {
        Self::field_of(Self::DefaultTable, name)
    }

    pub fn field_of(table: impl Into<Self>, name: impl Into<Ident>) -> Self {
        ExprField {
            table: Box::new(table.into()),
            name: name.into(),
        }
        .into()
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }

    pub fn as_field(&self) -> Option<&ExprField> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}
