use super::{Error, ErrorKind};
use std::fmt;

/// An expression node or operator outside the recognized vocabulary, or a
/// query description whose operations come in an order that cannot be
/// compiled.
///
/// The offending sub-expression is kept in its debug form so the failure can
/// be diagnosed without the original tree.
#[derive(Debug)]
pub(super) struct UnsupportedExpression {
    message: Box<str>,
    expr: Box<str>,
}

impl fmt::Display for UnsupportedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported expression: {}; expr={}", self.message, self.expr)
    }
}

impl Error {
    /// Creates an unsupported expression error.
    ///
    /// `expr` is the debug rendering of the offending sub-expression.
    pub fn unsupported_expression(message: impl Into<String>, expr: impl Into<String>) -> Error {
        ErrorKind::UnsupportedExpression(UnsupportedExpression {
            message: message.into().into_boxed_str(),
            expr: expr.into().into_boxed_str(),
        })
        .into()
    }

    /// Returns `true` if this error is an unsupported expression error.
    pub fn is_unsupported_expression(&self) -> bool {
        matches!(self.kind(), ErrorKind::UnsupportedExpression(_))
    }
}
