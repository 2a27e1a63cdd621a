use crate::expr::Type;

/// Target kind of a value conversion, chosen from the static type of an
/// output member or the accessor used to read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    I16,
    I32,
    I64,
    U8,
    F32,
    F64,
    Decimal,
    Bool,
    DateTime,
    Char,
}

impl ValueKind {
    /// Kind of values of type `ty`. `None` for `Object` and non-scalar types.
    pub fn from_ty(ty: &Type) -> Option<Self> {
        Some(match ty {
            Type::String => Self::String,
            Type::I16 => Self::I16,
            Type::I32 => Self::I32,
            Type::I64 => Self::I64,
            Type::U8 => Self::U8,
            Type::F32 => Self::F32,
            Type::F64 => Self::F64,
            Type::Decimal => Self::Decimal,
            Type::Bool => Self::Bool,
            Type::DateTime => Self::DateTime,
            Type::Char => Self::Char,
            Type::Object
            | Type::DataRecord
            | Type::Record(_)
            | Type::Anonymous
            | Type::List(_) => return None,
        })
    }

    pub fn ty(self) -> Type {
        match self {
            Self::String => Type::String,
            Self::I16 => Type::I16,
            Self::I32 => Type::I32,
            Self::I64 => Type::I64,
            Self::U8 => Type::U8,
            Self::F32 => Type::F32,
            Self::F64 => Type::F64,
            Self::Decimal => Type::Decimal,
            Self::Bool => Type::Bool,
            Self::DateTime => Type::DateTime,
            Self::Char => Type::Char,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::I16 => "I16",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::U8 => "U8",
            Self::F32 => "F32",
            Self::F64 => "F64",
            Self::Decimal => "Decimal",
            Self::Bool => "Bool",
            Self::DateTime => "DateTime",
            Self::Char => "Char",
        }
    }
}
