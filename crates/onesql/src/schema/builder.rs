use super::{Member, MemberId, Record, RecordId, Schema};
use crate::expr::Type;

/// Registers record mappings.
///
/// ```
/// use onesql::{expr::Type, schema::Schema};
///
/// let mut builder = Schema::builder();
/// let goods = builder
///     .record("Goods", "Catalog.Goods")
///     .field("code", Type::String, "Code")
///     .field("price", Type::Decimal, "Price")
///     .id();
///
/// let schema = builder.build();
/// assert_eq!(schema.member(goods, "price").unwrap().field_name.as_deref(), Some("Price"));
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    records: Vec<Record>,
}

/// Adds members to a record being registered.
pub struct RecordBuilder<'a> {
    record: &'a mut Record,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a record type mapped to `table_name`.
    pub fn record(
        &mut self,
        name: impl Into<String>,
        table_name: impl Into<String>,
    ) -> RecordBuilder<'_> {
        let id = RecordId(self.records.len());

        self.records.push(Record {
            id,
            name: name.into(),
            table_name: table_name.into(),
            members: vec![],
        });

        RecordBuilder {
            record: &mut self.records[id.0],
        }
    }

    pub fn build(self) -> Schema {
        Schema {
            records: self.records,
        }
    }
}

impl RecordBuilder<'_> {
    pub fn id(&self) -> RecordId {
        self.record.id
    }

    /// Adds a member stored in the table field `field_name`.
    pub fn field(
        &mut self,
        name: impl Into<String>,
        ty: impl Into<Type>,
        field_name: impl Into<String>,
    ) -> &mut Self {
        self.push(name.into(), ty.into(), Some(field_name.into()))
    }

    /// Adds a member that has no table field.
    pub fn unmapped(&mut self, name: impl Into<String>, ty: impl Into<Type>) -> &mut Self {
        self.push(name.into(), ty.into(), None)
    }

    fn push(&mut self, name: String, ty: Type, field_name: Option<String>) -> &mut Self {
        let id = MemberId {
            record: self.record.id,
            index: self.record.members.len(),
        };

        self.record.members.push(Member {
            id,
            name,
            ty,
            field_name,
        });
        self
    }
}
