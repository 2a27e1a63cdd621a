mod error;
pub use error::Error;

pub mod stmt;

/// A Result type alias that uses onesql's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
