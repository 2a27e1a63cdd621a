use super::{Error, ErrorKind};
use crate::stmt::Value;

use std::fmt;

/// A value could not be converted to the requested kind, either by a value
/// converter reading a row or while folding a constant.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    value: Value,
    to: &'static str,
}

impl fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot convert {} to {}", self.value.variant_name(), self.to)
    }
}

impl Error {
    pub fn type_conversion(value: Value, to: &'static str) -> Error {
        ErrorKind::TypeConversion(TypeConversionError { value, to }).into()
    }

    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), ErrorKind::TypeConversion(_))
    }
}
