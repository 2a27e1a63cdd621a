use super::RecordId;
use crate::expr::Type;

use std::fmt;

#[derive(Debug, Clone)]
pub struct Member {
    /// Uniquely identifies the member within the schema
    pub id: MemberId,

    /// Member name, as written by the caller
    pub name: String,

    /// Static type of the member
    pub ty: Type,

    /// Name of the table field the member is stored in. `None` for members
    /// that are not persisted.
    pub field_name: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct MemberId {
    pub record: RecordId,
    pub index: usize,
}

impl fmt::Debug for MemberId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "MemberId({}/{})", self.record.0, self.index)
    }
}
