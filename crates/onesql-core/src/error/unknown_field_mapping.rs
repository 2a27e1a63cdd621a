use super::{Error, ErrorKind};
use std::fmt;

/// A member of a typed record has no field in the mapping provider.
#[derive(Debug)]
pub(super) struct UnknownFieldMapping {
    record: Box<str>,
    member: Box<str>,
}

impl fmt::Display for UnknownFieldMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { record, member } = self;
        write!(
            f,
            "unknown field mapping: member `{member}` of `{record}` is not mapped to a field"
        )
    }
}

impl Error {
    pub fn unknown_field_mapping(record: impl Into<String>, member: impl Into<String>) -> Error {
        ErrorKind::UnknownFieldMapping(UnknownFieldMapping {
            record: record.into().into_boxed_str(),
            member: member.into().into_boxed_str(),
        })
        .into()
    }

    pub fn is_unknown_field_mapping(&self) -> bool {
        matches!(self.kind(), ErrorKind::UnknownFieldMapping(_))
    }
}
