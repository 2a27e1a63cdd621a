/// Target type of a `CAST`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Boolean,

    Date,

    /// `NUMBER`, `NUMBER(length)` or `NUMBER(length, precision)`
    Number(Option<NumberSize>),

    /// `STRING` or `STRING(length)`
    String(Option<u32>),

    /// A reference to a row of the named table, e.g. `Catalog.Contractors`
    Table(String),
}

/// Size of a `NUMBER`. A precision is only expressible together with a
/// length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NumberSize {
    pub length: u32,
    pub precision: Option<u32>,
}

impl Type {
    pub fn number() -> Self {
        Self::Number(None)
    }

    pub fn integer(length: u32) -> Self {
        Self::Number(Some(NumberSize {
            length,
            precision: None,
        }))
    }

    pub fn decimal(length: u32, precision: u32) -> Self {
        Self::Number(Some(NumberSize {
            length,
            precision: Some(precision),
        }))
    }

    pub fn string() -> Self {
        Self::String(None)
    }

    pub fn string_sized(length: u32) -> Self {
        Self::String(Some(length))
    }

    pub fn table(name: impl Into<String>) -> Self {
        Self::Table(name.into())
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }
}
