//! Turns raw result rows back into the caller's requested shape.

mod converter;
pub use converter::{DefaultConverter, ValueConverter};

mod value_kind;
pub use value_kind::ValueKind;

use onesql_core::{
    stmt::{Value, ValueRecord},
    Error, Result,
};

/// Reconstructs one item from a raw row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemReader {
    /// The query has no projection; the row is returned as-is, as a list
    Raw,

    /// The projection is a single scalar expression
    Scalar(ColumnReader),

    /// The projection builds a record, one column per member
    Record(Vec<ColumnReader>),
}

/// Reads one value of the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReader {
    /// Output member name. `None` for scalar projections.
    pub name: Option<String>,

    /// Position of the value in the raw row
    pub position: usize,

    /// Conversion applied to the raw value. `None` passes the value through.
    pub kind: Option<ValueKind>,
}

impl ItemReader {
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw)
    }

    pub fn columns(&self) -> &[ColumnReader] {
        match self {
            Self::Raw => &[],
            Self::Scalar(column) => std::slice::from_ref(column),
            Self::Record(columns) => columns,
        }
    }

    /// Reads one item from `row`.
    pub fn read(&self, row: &[Value], converter: &dyn ValueConverter) -> Result<Value> {
        match self {
            Self::Raw => Ok(Value::List(row.to_vec())),
            Self::Scalar(column) => column.read(row, converter),
            Self::Record(columns) => {
                let mut record = ValueRecord::with_capacity(columns.len());

                for column in columns {
                    let value = column.read(row, converter)?;
                    record.insert(column.name.as_deref().unwrap_or_default(), value);
                }

                Ok(Value::Record(record))
            }
        }
    }
}

impl ColumnReader {
    fn read(&self, row: &[Value], converter: &dyn ValueConverter) -> Result<Value> {
        let Some(value) = row.get(self.position) else {
            return Err(Error::argument_index_out_of_range(self.position, row.len()));
        };

        match self.kind {
            Some(kind) => converter.convert(value.clone(), kind),
            None => Ok(value.clone()),
        }
    }
}
