//! Record mappings: which table a record type reads from, and which field
//! each of its members is stored in.

mod builder;
pub use builder::{Builder, RecordBuilder};

mod member;
pub use member::{Member, MemberId};

mod record;
pub use record::{Record, RecordId};

use crate::expr::Type;

/// Source of record-to-table mappings.
///
/// The compiler only reads mappings; implementations are shared between
/// compilations running on different threads.
pub trait MappingProvider: Send + Sync {
    /// Returns the mapping of a record type, if it is mapped.
    fn record(&self, id: RecordId) -> Option<&Record>;

    /// Returns `true` if `ty` is a mapped record type.
    fn is_record_type(&self, ty: &Type) -> bool {
        ty.as_record().is_some_and(|id| self.record(id).is_some())
    }

    /// Table name of a mapped record type.
    fn table_name(&self, id: RecordId) -> Option<&str> {
        self.record(id).map(|record| record.table_name.as_str())
    }
}

/// An in-memory set of record mappings.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    records: Vec<Record>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn records(&self) -> impl ExactSizeIterator<Item = &Record> {
        self.records.iter()
    }

    /// Finds a record by its name.
    pub fn record_by_name(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Finds a member of a record by name.
    ///
    /// # Panics
    ///
    /// Panics if `record` is not part of this schema.
    #[track_caller]
    pub fn member(&self, record: RecordId, name: &str) -> Option<&Member> {
        self.records[record.0].member_by_name(name)
    }
}

impl MappingProvider for Schema {
    fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.get(id.0)
    }
}
