use super::{Expr, Type};
use crate::schema::RecordId;

/// The input parameter of a filter, projection or sort-key expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInput {
    pub ty: Type,
}

impl Expr {
    pub fn input(ty: impl Into<Type>) -> Self {
        ExprInput { ty: ty.into() }.into()
    }

    /// Input of a query over untyped records, read with `get_*` accessors.
    pub fn data_record() -> Self {
        Self::input(Type::DataRecord)
    }

    /// Input of a query over a mapped record type.
    pub fn record(id: RecordId) -> Self {
        Self::input(Type::Record(id))
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

impl From<ExprInput> for Expr {
    fn from(value: ExprInput) -> Self {
        Self::Input(value)
    }
}
