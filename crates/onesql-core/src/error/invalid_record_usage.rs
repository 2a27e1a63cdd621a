use super::{Error, ErrorKind};
use std::fmt;

/// A whole record or tuple value was used where only one of its fields can
/// be.
///
/// This occurs when:
/// - A projection outputs the input record itself
/// - A projection member is a nested construction or a record-typed value
/// - A whole record is used as an operand of an operator or function
#[derive(Debug)]
pub(super) struct InvalidRecordUsage {
    usage: Box<str>,
}

impl fmt::Display for InvalidRecordUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid record usage: {}; use one of the record's fields instead",
            self.usage
        )
    }
}

impl Error {
    /// Creates an invalid record usage error. `usage` says where the record
    /// value appeared.
    pub fn invalid_record_usage(usage: impl Into<String>) -> Error {
        let usage = usage.into().into_boxed_str();
        ErrorKind::InvalidRecordUsage(InvalidRecordUsage { usage }).into()
    }

    /// Returns `true` if this error is an invalid record usage error.
    pub fn is_invalid_record_usage(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidRecordUsage(_))
    }
}
