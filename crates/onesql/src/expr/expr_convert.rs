use super::{Expr, Type};

/// Conversion of a value to another type.
///
/// Widening conversions between scalar types and conversions to `Object`
/// do not change the value and compile to nothing. Conversions of an
/// `Object` value to a scalar or record type compile to `CAST`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprConvert {
    pub expr: Box<Expr>,
    pub ty: Type,
}

impl Expr {
    pub fn convert(expr: impl Into<Self>, ty: impl Into<Type>) -> Self {
        ExprConvert {
            expr: Box::new(expr.into()),
            ty: ty.into(),
        }
        .into()
    }
}

impl From<ExprConvert> for Expr {
    fn from(value: ExprConvert) -> Self {
        Self::Convert(value)
    }
}
