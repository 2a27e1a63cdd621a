use super::{Error, ErrorKind};
use std::fmt;

/// A statement fragment was built in violation of its invariants: an empty
/// column list, an empty ORDER BY, a CASE without branches, or a value with
/// no literal form.
#[derive(Debug)]
pub(super) struct InvalidStatement {
    reason: Box<str>,
}

impl fmt::Display for InvalidStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid statement: {}", self.reason)
    }
}

impl Error {
    pub fn invalid_statement(reason: impl Into<String>) -> Error {
        let reason = reason.into().into_boxed_str();
        ErrorKind::InvalidStatement(InvalidStatement { reason }).into()
    }

    pub fn is_invalid_statement(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidStatement(_))
    }
}
