mod adhoc;
mod argument_index_out_of_range;
mod invalid_record_usage;
mod invalid_statement;
mod type_cast_not_supported;
mod type_conversion;
mod unknown_field_mapping;
mod unsupported_expression;

use adhoc::AdhocError;
use argument_index_out_of_range::ArgumentIndexOutOfRange;
use invalid_record_usage::InvalidRecordUsage;
use invalid_statement::InvalidStatement;
use type_cast_not_supported::TypeCastNotSupported;
use type_conversion::TypeConversionError;
use unknown_field_mapping::UnknownFieldMapping;
use unsupported_expression::UnsupportedExpression;

use std::{fmt, sync::Arc};

/// Returns early with an ad-hoc error built from format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while compiling an expression into a query.
///
/// Compilation is deterministic, so none of these errors are transient.
/// Retrying the same compilation reproduces the same error.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,

    /// The error this one was raised on top of
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Anyhow(anyhow::Error),
    ArgumentIndexOutOfRange(ArgumentIndexOutOfRange),

    /// An outer error wrapping the cause, see [`Error::context`]
    Context(Error),

    InvalidRecordUsage(InvalidRecordUsage),
    InvalidStatement(InvalidStatement),
    TypeCastNotSupported(TypeCastNotSupported),
    TypeConversion(TypeConversionError),
    UnknownFieldMapping(UnknownFieldMapping),
    UnsupportedExpression(UnsupportedExpression),
}

impl Error {
    /// Raises `outer` on top of this error.
    ///
    /// The result displays as `outer: self`, and answers the `is_*`
    /// predicates for `outer`.
    pub fn context(self, outer: Error) -> Error {
        Error {
            inner: Arc::new(ErrorInner {
                kind: ErrorKind::Context(outer),
                cause: Some(self),
            }),
        }
    }

    fn kind(&self) -> &ErrorKind {
        match &self.inner.kind {
            ErrorKind::Context(outer) => outer.kind(),
            kind => kind,
        }
    }

    /// This error followed by its causes, outermost first.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        std::iter::successors(Some(self), |err| err.inner.cause.as_ref())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.chain().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            fmt::Display::fmt(&err.inner.kind, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adhoc(err) => fmt::Display::fmt(err, f),
            Self::Anyhow(err) => fmt::Display::fmt(err, f),
            Self::ArgumentIndexOutOfRange(err) => fmt::Display::fmt(err, f),
            Self::Context(outer) => fmt::Display::fmt(outer, f),
            Self::InvalidRecordUsage(err) => fmt::Display::fmt(err, f),
            Self::InvalidStatement(err) => fmt::Display::fmt(err, f),
            Self::TypeCastNotSupported(err) => fmt::Display::fmt(err, f),
            Self::TypeConversion(err) => fmt::Display::fmt(err, f),
            Self::UnknownFieldMapping(err) => fmt::Display::fmt(err, f),
            Self::UnsupportedExpression(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        ErrorKind::Anyhow(err).into()
    }
}

macro_rules! from_std_error {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl From<$ty> for Error {
                fn from(err: $ty) -> Error {
                    anyhow::Error::from(err).into()
                }
            }
        )*
    };
}

from_std_error!(
    std::num::ParseIntError,
    std::num::ParseFloatError,
    rust_decimal::Error,
    chrono::ParseError,
);
