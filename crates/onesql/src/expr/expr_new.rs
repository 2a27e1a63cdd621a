use super::{Expr, Type};
use crate::schema::RecordId;

/// Record construction. The members are the output columns of a projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNew {
    pub ty: Type,
    pub members: Vec<(String, Expr)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprNewArray {
    pub item_ty: Type,
    pub items: Vec<Expr>,
}

impl Expr {
    /// An anonymous record, `{ name = expr, ... }`.
    pub fn new_anonymous<I, N>(members: I) -> Self
    where
        I: IntoIterator<Item = (N, Expr)>,
        N: Into<String>,
    {
        Self::new_record(Type::Anonymous, members)
    }

    /// A declared record type initialized member by member.
    pub fn new_declared<I, N>(record: RecordId, members: I) -> Self
    where
        I: IntoIterator<Item = (N, Expr)>,
        N: Into<String>,
    {
        Self::new_record(Type::Record(record), members)
    }

    fn new_record<I, N>(ty: Type, members: I) -> Self
    where
        I: IntoIterator<Item = (N, Expr)>,
        N: Into<String>,
    {
        ExprNew {
            ty,
            members: members
                .into_iter()
                .map(|(name, expr)| (name.into(), expr))
                .collect(),
        }
        .into()
    }

    pub fn new_array(item_ty: Type, items: impl IntoIterator<Item = Expr>) -> Self {
        ExprNewArray {
            item_ty,
            items: items.into_iter().collect(),
        }
        .into()
    }
}

impl From<ExprNew> for Expr {
    fn from(value: ExprNew) -> Self {
        Self::New(value)
    }
}

impl From<ExprNewArray> for Expr {
    fn from(value: ExprNewArray) -> Self {
        Self::NewArray(value)
    }
}
