use crate::schema::RecordId;

/// Static type of a host expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    Char,
    String,
    I16,
    I32,
    I64,
    U8,
    F32,
    F64,
    Decimal,
    DateTime,

    /// A value of unknown type, e.g. the result of an untyped accessor.
    /// Reads of such values are passed through without conversion.
    Object,

    /// An untyped record whose fields are read by name
    DataRecord,

    /// A mapped record type
    Record(RecordId),

    /// An anonymous record or tuple, built in a projection
    Anonymous,

    /// A list of values of the given type
    List(Box<Type>),
}

impl Type {
    pub fn list(item: impl Into<Type>) -> Self {
        Self::List(Box::new(item.into()))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::I16 | Self::I32 | Self::I64 | Self::U8 | Self::F32 | Self::F64 | Self::Decimal
        )
    }

    /// Whole-record types: these can be navigated but never used as a value.
    pub fn is_record(&self) -> bool {
        matches!(self, Self::DataRecord | Self::Record(_) | Self::Anonymous)
    }

    /// Scalar types have a counterpart in the query language's type system.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Char
                | Self::String
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::U8
                | Self::F32
                | Self::F64
                | Self::Decimal
                | Self::DateTime
        )
    }

    pub fn as_record(&self) -> Option<RecordId> {
        match *self {
            Self::Record(id) => Some(id),
            _ => None,
        }
    }
}

impl From<RecordId> for Type {
    fn from(value: RecordId) -> Self {
        Self::Record(value)
    }
}
