use super::{Error, ErrorKind};
use std::fmt;

/// A conversion targets a host type with no query type descriptor, or
/// converts between two strongly-typed values that the query language
/// cannot cast between.
#[derive(Debug)]
pub(super) struct TypeCastNotSupported {
    target: Box<str>,
}

impl fmt::Display for TypeCastNotSupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type cast not supported: no query type corresponds to `{}`",
            self.target
        )
    }
}

impl Error {
    /// `target` is the display name of the host type.
    pub fn type_cast_not_supported(target: impl Into<String>) -> Error {
        let target = target.into().into_boxed_str();
        ErrorKind::TypeCastNotSupported(TypeCastNotSupported { target }).into()
    }

    pub fn is_type_cast_not_supported(&self) -> bool {
        matches!(self.kind(), ErrorKind::TypeCastNotSupported(_))
    }
}
