use super::Expr;
use crate::schema::RecordId;

/// `expr is R`, a test on the record type a reference points to.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprTypeIs {
    pub expr: Box<Expr>,
    pub record: RecordId,
}

impl Expr {
    pub fn type_is(expr: impl Into<Self>, record: RecordId) -> Self {
        ExprTypeIs {
            expr: Box::new(expr.into()),
            record,
        }
        .into()
    }
}

impl From<ExprTypeIs> for Expr {
    fn from(value: ExprTypeIs) -> Self {
        Self::TypeIs(value)
    }
}
