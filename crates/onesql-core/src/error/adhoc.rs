use super::{Error, ErrorKind};
use std::fmt;

/// A free-form message, raised through `bail!` / `err!`.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl fmt::Display for AdhocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an ad-hoc error from format arguments.
    ///
    /// Prefer the `bail!` and `err!` macros.
    pub fn from_args(args: fmt::Arguments<'_>) -> Error {
        let message: Box<str> = match args.as_str() {
            Some(s) => s.into(),
            None => args.to_string().into(),
        };
        ErrorKind::Adhoc(AdhocError { message }).into()
    }
}
