use super::{Member, MemberId};

use std::fmt;

#[derive(Debug, Clone)]
pub struct Record {
    /// Uniquely identifies the record within the schema
    pub id: RecordId,

    /// Name of the record type, used in diagnostics
    pub name: String,

    /// Table the record type reads from, e.g. `Catalog.Goods`
    pub table_name: String,

    /// Members, in declaration order
    pub members: Vec<Member>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(pub usize);

impl Record {
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        if id.record != self.id {
            return None;
        }

        self.members.get(id.index)
    }

    pub fn member_by_name(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.name == name)
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "RecordId({})", self.0)
    }
}
