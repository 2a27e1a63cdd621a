use super::{Error, ErrorKind};
use std::fmt;

/// An item reader was asked for a position the raw row does not have.
///
/// Correctly compiled readers never trigger this. It means the row handed to
/// the reader does not come from the query the reader was built for.
#[derive(Debug)]
pub(super) struct ArgumentIndexOutOfRange {
    index: usize,
    len: usize,
}

impl fmt::Display for ArgumentIndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { index, len } = self;
        write!(f, "argument index out of range: index {index}, row has {len} values")
    }
}

impl Error {
    pub fn argument_index_out_of_range(index: usize, len: usize) -> Error {
        ErrorKind::ArgumentIndexOutOfRange(ArgumentIndexOutOfRange { index, len }).into()
    }

    pub fn is_argument_index_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::ArgumentIndexOutOfRange(_))
    }
}
