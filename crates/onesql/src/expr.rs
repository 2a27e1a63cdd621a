//! Host expression trees.
//!
//! A query is described with typed expression trees: the predicate of a
//! filter, the projection of a select, the key of a sort. Trees are built
//! from the query's input parameter ([`Expr::input`]), member accesses,
//! operators, conversions, constants and the fixed set of domain functions.
//! Only this vocabulary is understood by the compiler.

mod expr_binary;
pub use expr_binary::{BinaryOp, ExprBinary};

mod expr_call;
pub use expr_call::{DatePart, ExprCall, Method};

mod expr_conditional;
pub use expr_conditional::ExprConditional;

mod expr_constant;
pub use expr_constant::ExprConstant;

mod expr_convert;
pub use expr_convert::ExprConvert;

mod expr_input;
pub use expr_input::ExprInput;

mod expr_member;
pub use expr_member::{ExprMember, MemberRef};

mod expr_new;
pub use expr_new::{ExprNew, ExprNewArray};

mod expr_type_is;
pub use expr_type_is::ExprTypeIs;

mod expr_unary;
pub use expr_unary::{ExprUnary, UnaryOp};

mod ty;
pub use ty::Type;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Binary operator, including comparisons and null-coalescing
    Binary(ExprBinary),

    /// Record accessor or domain function call
    Call(ExprCall),

    /// `test ? then : otherwise`
    Conditional(ExprConditional),

    /// A constant, either written inline or captured from the caller
    Constant(ExprConstant),

    /// Type conversion
    Convert(ExprConvert),

    /// The query's input parameter: the record being filtered, projected or
    /// sorted
    Input(ExprInput),

    /// Member of a record, or a part of a date
    Member(ExprMember),

    /// Construction of a declared or anonymous record
    New(ExprNew),

    /// Array initializer
    NewArray(ExprNewArray),

    /// `expr is Record`
    TypeIs(ExprTypeIs),

    /// `!expr`, `-expr`
    Unary(ExprUnary),
}

impl Expr {
    /// Static type of the expression.
    pub fn ty(&self) -> Type {
        match self {
            Self::Binary(expr) => expr.ty(),
            Self::Call(expr) => expr.ty(),
            Self::Conditional(expr) => expr.then.ty(),
            Self::Constant(expr) => expr.ty.clone(),
            Self::Convert(expr) => expr.ty.clone(),
            Self::Input(expr) => expr.ty.clone(),
            Self::Member(expr) => expr.ty.clone(),
            Self::New(expr) => expr.ty.clone(),
            Self::NewArray(expr) => Type::list(expr.item_ty.clone()),
            Self::TypeIs(_) => Type::Bool,
            Self::Unary(expr) => expr.ty(),
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    pub fn as_constant(&self) -> Option<&ExprConstant> {
        match self {
            Self::Constant(expr) => Some(expr),
            _ => None,
        }
    }
}
