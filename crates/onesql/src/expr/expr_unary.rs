use super::{Expr, Type};

#[derive(Debug, Clone, PartialEq)]
pub struct ExprUnary {
    pub op: UnaryOp,
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    Negate,
}

impl ExprUnary {
    pub fn ty(&self) -> Type {
        match self.op {
            UnaryOp::Not => Type::Bool,
            UnaryOp::Negate => self.expr.ty(),
        }
    }
}

impl Expr {
    pub fn not(expr: impl Into<Self>) -> Self {
        ExprUnary {
            op: UnaryOp::Not,
            expr: Box::new(expr.into()),
        }
        .into()
    }

    pub fn negate(expr: impl Into<Self>) -> Self {
        ExprUnary {
            op: UnaryOp::Negate,
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprUnary> for Expr {
    fn from(value: ExprUnary) -> Self {
        Self::Unary(value)
    }
}
